//! Customer lookup port.
//!
//! Customers are registered outside this subsystem, so the port is
//! read-only: orders and reviews only need to resolve an email.

use crate::domain::customer::Customer;
use crate::domain::foundation::{DomainError, Email};
use async_trait::async_trait;

/// Read port resolving customers by email.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by email.
    ///
    /// Returns `None` if no customer is registered under that address.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, DomainError>;

    /// Check whether a customer is registered under the email.
    async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CustomerRepository) {}
    }
}
