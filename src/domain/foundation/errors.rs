//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Business-rule failures raised by the order and review services.
///
/// The display text is the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required input was not supplied.
    #[error("Please enter a valid {field}.")]
    MissingField { field: &'static str },

    /// A referenced entity does not exist.
    #[error("Please enter a valid {entity}.")]
    NotFound { entity: &'static str },

    /// An order item referenced by an add or remove does not exist.
    #[error("Please enter a valid item to {action} the order.")]
    ItemNotFound { action: &'static str },

    /// An order id was supplied but resolves to nothing.
    #[error("Please enter a valid order by providing a valid order ID.")]
    UnknownOrderId,

    /// The key of a new entity is already taken.
    #[error("{entity} already exists.")]
    Duplicate { entity: &'static str },

    /// A listing that must be non-empty came back empty.
    #[error("There's no {entity} in the system.")]
    NoneInSystem { entity: &'static str },

    /// The order belongs to a different customer.
    #[error("Order does not belong to this customer.")]
    OrderNotOwnedByCustomer,

    /// Only fulfilled orders accept reviews.
    #[error("Only fulfilled orders can be reviewed.")]
    OrderNotFulfilled,

    /// A guarded status change was refused.
    #[error("Cannot change order status from {from} to {to}.")]
    InvalidTransition { from: String, to: String },

    /// A value object could not be constructed.
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn missing_field(field: &'static str) -> Self {
        ValidationError::MissingField { field }
    }

    pub fn not_found(entity: &'static str) -> Self {
        ValidationError::NotFound { entity }
    }

    pub fn item_not_found(action: &'static str) -> Self {
        ValidationError::ItemNotFound { action }
    }

    pub fn duplicate(entity: &'static str) -> Self {
        ValidationError::Duplicate { entity }
    }

    pub fn none_in_system(entity: &'static str) -> Self {
        ValidationError::NoneInSystem { entity }
    }

    pub fn invalid_transition(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        ValidationError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes reported by repository adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Not found errors
    OrderNotFound,
    OrderItemNotFound,
    ReviewNotFound,

    // Unique constraint errors
    OrderAlreadyExists,
    OrderItemAlreadyExists,
    CustomerAlreadyExists,
    ReviewAlreadyExists,

    // Infrastructure errors
    DatabaseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::OrderNotFound => "ORDER_NOT_FOUND",
            ErrorCode::OrderItemNotFound => "ORDER_ITEM_NOT_FOUND",
            ErrorCode::ReviewNotFound => "REVIEW_NOT_FOUND",
            ErrorCode::OrderAlreadyExists => "ORDER_ALREADY_EXISTS",
            ErrorCode::OrderItemAlreadyExists => "ORDER_ITEM_ALREADY_EXISTS",
            ErrorCode::CustomerAlreadyExists => "CUSTOMER_ALREADY_EXISTS",
            ErrorCode::ReviewAlreadyExists => "REVIEW_ALREADY_EXISTS",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Storage-side error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if this error reports a unique-key conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::OrderAlreadyExists
                | ErrorCode::OrderItemAlreadyExists
                | ErrorCode::CustomerAlreadyExists
                | ErrorCode::ReviewAlreadyExists
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
