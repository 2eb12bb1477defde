//! Error returned by every order and review handler.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ValidationError};

/// Failure of a service operation.
///
/// Business-rule failures are `Validation`. Anything the storage port
/// reports is passed through unchanged as `Storage`, apart from unique-key
/// conflicts that the handlers translate into their duplicate validation
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl ServiceError {
    /// Returns the validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ServiceError::Validation(err) => Some(err),
            ServiceError::Storage(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.as_validation().is_some()
    }
}
