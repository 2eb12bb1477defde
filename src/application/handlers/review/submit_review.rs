//! SubmitReviewHandler - Command handler for reviewing a completed order.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::handlers::lookup::{require_customer, require_order};
use crate::application::ServiceError;
use crate::config::OrderRules;
use crate::domain::foundation::{DomainError, OrderId, Rating, ReviewId, ValidationError};
use crate::domain::order::OrderStatus;
use crate::domain::review::Review;
use crate::ports::{CustomerRepository, OrderRepository, ReviewRepository};

/// Command to submit a review.
#[derive(Debug, Clone)]
pub struct SubmitReviewCommand {
    pub review_id: ReviewId,
    pub rating: Option<Rating>,
    pub description: String,
    pub customer_email: String,
    pub order_id: OrderId,
}

/// Handler for submitting reviews.
///
/// Checks run in this order: rating, description, customer, order,
/// ownership, fulfilment, one review per order, then review id.
pub struct SubmitReviewHandler {
    reviews: Arc<dyn ReviewRepository>,
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    rules: OrderRules,
}

impl SubmitReviewHandler {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        rules: OrderRules,
    ) -> Self {
        Self {
            reviews,
            orders,
            customers,
            rules,
        }
    }

    pub async fn handle(&self, cmd: SubmitReviewCommand) -> Result<Review, ServiceError> {
        let rating = cmd.rating.ok_or(ValidationError::missing_field("rating"))?;
        Review::validate_description(&cmd.description)?;

        let customer = require_customer(self.customers.as_ref(), &cmd.customer_email).await?;
        let order = require_order(self.orders.as_ref(), cmd.order_id).await?;

        if order.customer() != customer.email() {
            return Err(ValidationError::OrderNotOwnedByCustomer.into());
        }
        if self.rules.reviews_require_fulfilled_order && order.status() != OrderStatus::Fulfilled
        {
            return Err(ValidationError::OrderNotFulfilled.into());
        }
        if self
            .reviews
            .exists_by_customer_and_order(customer.email(), order.id())
            .await?
        {
            return Err(ValidationError::duplicate("Review for this order").into());
        }
        if self.reviews.exists(cmd.review_id).await? {
            return Err(ValidationError::duplicate("Review with ID").into());
        }

        let review = Review::new(
            cmd.review_id,
            customer.email().clone(),
            order.id(),
            rating,
            cmd.description,
        )?;

        self.reviews
            .save(&review)
            .await
            .map_err(|e| conflict_to_duplicate(e, cmd.review_id))?;

        info!(
            review_id = %review.id(),
            order_id = %review.order_id(),
            customer = %review.customer(),
            rating = review.rating().stars(),
            "Review submitted"
        );
        Ok(review)
    }
}

/// Translates a lost insert race into the matching duplicate error.
fn conflict_to_duplicate(err: DomainError, review_id: ReviewId) -> ServiceError {
    if !err.is_conflict() {
        return err.into();
    }
    warn!(review_id = %review_id, "Review taken by a concurrent submit");
    let entity = match err.details.get("key").map(String::as_str) {
        Some("id") => "Review with ID",
        _ => "Review for this order",
    };
    ValidationError::duplicate(entity).into()
}
