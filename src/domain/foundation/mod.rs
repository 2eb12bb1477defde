//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects, error types and the base traits
//! used by every entity module.

mod errors;
mod ids;
mod rating;
mod repository;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{Email, OrderId, OrderItemId, ReviewId};
pub use rating::Rating;
pub use repository::Repository;
pub use state_machine::StateMachine;
