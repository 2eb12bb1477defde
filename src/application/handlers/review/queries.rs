//! Query handlers for reading reviews.

use std::sync::Arc;
use tracing::debug;

use super::update_review::require_review;
use crate::application::handlers::lookup::{require_customer, require_order};
use crate::application::ServiceError;
use crate::domain::foundation::{OrderId, ReviewId, ValidationError};
use crate::domain::review::Review;
use crate::ports::{CustomerRepository, OrderRepository, ReviewRepository};

/// Query for a single review.
#[derive(Debug, Clone, Copy)]
pub struct GetReviewQuery {
    pub review_id: ReviewId,
}

pub struct GetReviewHandler {
    reviews: Arc<dyn ReviewRepository>,
}

impl GetReviewHandler {
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }

    pub async fn handle(&self, query: GetReviewQuery) -> Result<Review, ServiceError> {
        require_review(self.reviews.as_ref(), query.review_id).await
    }
}

/// Query for every review a customer wrote.
#[derive(Debug, Clone)]
pub struct ListCustomerReviewsQuery {
    pub customer_email: String,
}

/// Handler listing a customer's reviews. An empty list is not an error.
pub struct ListCustomerReviewsHandler {
    reviews: Arc<dyn ReviewRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl ListCustomerReviewsHandler {
    pub fn new(reviews: Arc<dyn ReviewRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self { reviews, customers }
    }

    pub async fn handle(
        &self,
        query: ListCustomerReviewsQuery,
    ) -> Result<Vec<Review>, ServiceError> {
        let customer = require_customer(self.customers.as_ref(), &query.customer_email).await?;
        let reviews = self.reviews.find_by_customer(customer.email()).await?;
        debug!(customer = %customer.email(), count = reviews.len(), "Listed customer reviews");
        Ok(reviews)
    }
}

/// Query for the review a customer left on one order.
#[derive(Debug, Clone)]
pub struct GetReviewForOrderQuery {
    pub customer_email: String,
    pub order_id: OrderId,
}

pub struct GetReviewForOrderHandler {
    reviews: Arc<dyn ReviewRepository>,
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl GetReviewForOrderHandler {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            reviews,
            orders,
            customers,
        }
    }

    /// Customer and order must both exist before the review is looked up.
    pub async fn handle(&self, query: GetReviewForOrderQuery) -> Result<Review, ServiceError> {
        let customer = require_customer(self.customers.as_ref(), &query.customer_email).await?;
        let order = require_order(self.orders.as_ref(), query.order_id).await?;

        self.reviews
            .find_by_customer_and_order(customer.email(), order.id())
            .await?
            .ok_or_else(|| ValidationError::not_found("review").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, Stores, ANA, BEN};
    use crate::domain::foundation::{Rating, Repository};
    use crate::domain::order::OrderStatus;

    async fn stores_with_reviews() -> Stores {
        let stores = Stores::seeded().await;
        stores.place(1, ANA, OrderStatus::Fulfilled).await;
        stores.place(2, ANA, OrderStatus::Fulfilled).await;
        stores.place(3, ANA, OrderStatus::Fulfilled).await;
        for (id, order, rating) in [(10, 1, Rating::Good), (11, 2, Rating::Poor)] {
            let review =
                Review::new(ReviewId::new(id), email(ANA), OrderId::new(order), rating, "Noted")
                    .unwrap();
            stores.reviews.save(&review).await.unwrap();
        }
        stores
    }

    #[tokio::test]
    async fn get_by_id_finds_review_or_reports_it_missing() {
        let stores = stores_with_reviews().await;
        let handler = GetReviewHandler::new(stores.reviews());

        let review = handler
            .handle(GetReviewQuery {
                review_id: ReviewId::new(11),
            })
            .await
            .unwrap();
        assert_eq!(review.rating(), Rating::Poor);

        let err = handler
            .handle(GetReviewQuery {
                review_id: ReviewId::new(12),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid review.");
    }

    #[tokio::test]
    async fn customer_reviews_may_be_empty() {
        let stores = stores_with_reviews().await;
        let handler = ListCustomerReviewsHandler::new(stores.reviews(), stores.customers());

        let ana = handler
            .handle(ListCustomerReviewsQuery {
                customer_email: ANA.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ana.len(), 2);

        let ben = handler
            .handle(ListCustomerReviewsQuery {
                customer_email: BEN.to_string(),
            })
            .await
            .unwrap();
        assert!(ben.is_empty());

        let err = handler
            .handle(ListCustomerReviewsQuery {
                customer_email: "ghost@example.com".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid customer.");
    }

    #[tokio::test]
    async fn review_for_order_checks_customer_then_order_then_review() {
        let stores = stores_with_reviews().await;
        let handler =
            GetReviewForOrderHandler::new(stores.reviews(), stores.orders(), stores.customers());
        let query = |customer: &str, order: i64| GetReviewForOrderQuery {
            customer_email: customer.to_string(),
            order_id: OrderId::new(order),
        };

        let review = handler.handle(query(ANA, 1)).await.unwrap();
        assert_eq!(review.id(), ReviewId::new(10));

        let err = handler.handle(query("ghost@example.com", 99)).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid customer.");

        let err = handler.handle(query(ANA, 99)).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid order.");

        let err = handler.handle(query(ANA, 3)).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid review.");
    }
}
