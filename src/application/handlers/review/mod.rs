//! Review command and query handlers.

mod queries;
mod submit_review;
mod update_review;

pub use queries::{
    GetReviewForOrderHandler, GetReviewForOrderQuery, GetReviewHandler, GetReviewQuery,
    ListCustomerReviewsHandler, ListCustomerReviewsQuery,
};
pub use submit_review::{SubmitReviewCommand, SubmitReviewHandler};
pub use update_review::{
    DeleteReviewCommand, DeleteReviewHandler, UpdateReviewCommand, UpdateReviewHandler,
};
