//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are kept apart from query handlers (read); the
//! services bundle them behind one method per operation.

mod error;
pub mod handlers;
pub mod services;

pub use error::ServiceError;
pub use services::{OrderService, ReviewService};
