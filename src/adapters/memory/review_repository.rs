//! In-memory review store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Email, ErrorCode, OrderId, Repository, ReviewId};
use crate::domain::review::Review;
use crate::ports::ReviewRepository;

/// In-memory review store.
///
/// `save` enforces both unique keys (review id and the customer/order pair)
/// under the same write lock as the insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<BTreeMap<ReviewId, Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.reviews.read().await.len()
    }
}

fn not_found(id: ReviewId) -> DomainError {
    DomainError::new(ErrorCode::ReviewNotFound, format!("Review {} not found", id))
}

fn same_pair(review: &Review, customer: &Email, order_id: OrderId) -> bool {
    review.customer() == customer && review.order_id() == order_id
}

#[async_trait]
impl Repository<Review, ReviewId> for InMemoryReviewRepository {
    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, DomainError> {
        Ok(self.reviews.read().await.get(&id).cloned())
    }

    async fn save(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.reviews.write().await;
        if reviews.contains_key(&review.id()) {
            return Err(DomainError::new(
                ErrorCode::ReviewAlreadyExists,
                format!("Review {} already exists", review.id()),
            )
            .with_detail("key", "id"));
        }
        if reviews
            .values()
            .any(|r| same_pair(r, review.customer(), review.order_id()))
        {
            return Err(DomainError::new(
                ErrorCode::ReviewAlreadyExists,
                format!(
                    "{} already reviewed order {}",
                    review.customer(),
                    review.order_id()
                ),
            )
            .with_detail("key", "customer_order"));
        }
        reviews.insert(review.id(), review.clone());
        Ok(())
    }

    async fn update(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.reviews.write().await;
        match reviews.get_mut(&review.id()) {
            Some(stored) => {
                *stored = review.clone();
                Ok(())
            }
            None => Err(not_found(review.id())),
        }
    }

    async fn delete(&self, id: ReviewId) -> Result<(), DomainError> {
        match self.reviews.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_customer(&self, customer: &Email) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .filter(|r| r.customer() == customer)
            .cloned()
            .collect())
    }

    async fn find_by_customer_and_order(
        &self,
        customer: &Email,
        order_id: OrderId,
    ) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .find(|r| same_pair(r, customer, order_id))
            .cloned())
    }
}
