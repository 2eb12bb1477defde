//! Order repository port.
//!
//! # Design
//!
//! - **Caller-supplied ids**: `save` must reject an id already in use with
//!   `ErrorCode::OrderAlreadyExists`, atomically with the insert
//! - **Natural-key query**: orders are listed per owning customer

use crate::domain::foundation::{DomainError, Email, OrderId, Repository};
use crate::domain::order::Order;
use async_trait::async_trait;

/// Repository port for Order aggregate persistence.
#[async_trait]
pub trait OrderRepository: Repository<Order, OrderId> {
    /// Every stored order, in ascending id order.
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Orders owned by the customer, in ascending id order.
    ///
    /// Returns an empty list if the customer has none.
    async fn find_by_customer(&self, customer: &Email) -> Result<Vec<Order>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OrderRepository) {}
    }
}
