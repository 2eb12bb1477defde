//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub(crate) mod lookup;
pub mod order;
pub mod review;

#[cfg(test)]
pub(crate) mod test_support;

pub use order::{
    AddItemToOrderCommand, AddItemToOrderHandler, CancelOrderCommand, CancelOrderHandler,
    CreateOrderCommand, CreateOrderHandler, GetOrderHandler, GetOrderQuery,
    ListCustomerOrdersHandler, ListCustomerOrdersQuery, ListOrdersHandler,
    RemoveItemFromOrderCommand, RemoveItemFromOrderHandler, SetOrderStatusCommand,
    SetOrderStatusHandler, UpdateOrderCommand, UpdateOrderHandler,
};
pub use review::{
    DeleteReviewCommand, DeleteReviewHandler, GetReviewForOrderHandler, GetReviewForOrderQuery,
    GetReviewHandler, GetReviewQuery, ListCustomerReviewsHandler, ListCustomerReviewsQuery,
    SubmitReviewCommand, SubmitReviewHandler, UpdateReviewCommand, UpdateReviewHandler,
};
