//! Review repository port.
//!
//! # Design
//!
//! - **One review per pair**: `save` must reject a second review for the same
//!   (customer, order) pair with `ErrorCode::ReviewAlreadyExists`, and a taken
//!   review id the same way. The check and the insert are one atomic step.
//! - **No business rules**: ownership and fulfilment checks live in the
//!   review handlers.

use crate::domain::foundation::{DomainError, Email, OrderId, Repository, ReviewId};
use crate::domain::review::Review;
use async_trait::async_trait;

/// Repository port for Review persistence.
#[async_trait]
pub trait ReviewRepository: Repository<Review, ReviewId> {
    /// All reviews written by the customer, in ascending id order.
    async fn find_by_customer(&self, customer: &Email) -> Result<Vec<Review>, DomainError>;

    /// Whether the customer already reviewed the order.
    async fn exists_by_customer_and_order(
        &self,
        customer: &Email,
        order_id: OrderId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .find_by_customer_and_order(customer, order_id)
            .await?
            .is_some())
    }

    /// The customer's review of the order, if any.
    async fn find_by_customer_and_order(
        &self,
        customer: &Email,
        order_id: OrderId,
    ) -> Result<Option<Review>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ReviewRepository) {}
    }
}
