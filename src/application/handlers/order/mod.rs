//! Order command and query handlers.

mod cancel_order;
mod change_items;
mod create_order;
mod queries;
mod set_order_status;
mod update_order;

pub use cancel_order::{CancelOrderCommand, CancelOrderHandler};
pub use change_items::{
    AddItemToOrderCommand, AddItemToOrderHandler, RemoveItemFromOrderCommand,
    RemoveItemFromOrderHandler,
};
pub use create_order::{CreateOrderCommand, CreateOrderHandler};
pub use queries::{
    GetOrderHandler, GetOrderQuery, ListCustomerOrdersHandler, ListCustomerOrdersQuery,
    ListOrdersHandler,
};
pub use set_order_status::{SetOrderStatusCommand, SetOrderStatusHandler};
pub use update_order::{UpdateOrderCommand, UpdateOrderHandler};
