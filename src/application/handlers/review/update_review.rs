//! Handlers that revise or withdraw an existing review.

use std::sync::Arc;
use tracing::info;

use crate::application::ServiceError;
use crate::domain::foundation::{Rating, ReviewId, ValidationError};
use crate::domain::review::Review;
use crate::ports::ReviewRepository;

/// Command to replace a review's rating and text.
#[derive(Debug, Clone)]
pub struct UpdateReviewCommand {
    pub review_id: ReviewId,
    pub rating: Option<Rating>,
    pub description: String,
}

/// Handler for updating reviews. The review is looked up before the fields
/// are checked.
pub struct UpdateReviewHandler {
    reviews: Arc<dyn ReviewRepository>,
}

impl UpdateReviewHandler {
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }

    pub async fn handle(&self, cmd: UpdateReviewCommand) -> Result<Review, ServiceError> {
        let mut review = require_review(self.reviews.as_ref(), cmd.review_id).await?;
        let rating = cmd.rating.ok_or(ValidationError::missing_field("rating"))?;

        review.revise(rating, cmd.description)?;
        self.reviews.update(&review).await?;

        info!(review_id = %review.id(), rating = rating.stars(), "Review updated");
        Ok(review)
    }
}

/// Command to delete a review.
#[derive(Debug, Clone, Copy)]
pub struct DeleteReviewCommand {
    pub review_id: ReviewId,
}

pub struct DeleteReviewHandler {
    reviews: Arc<dyn ReviewRepository>,
}

impl DeleteReviewHandler {
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }

    pub async fn handle(&self, cmd: DeleteReviewCommand) -> Result<bool, ServiceError> {
        let review = require_review(self.reviews.as_ref(), cmd.review_id).await?;
        self.reviews.delete(review.id()).await?;

        info!(review_id = %review.id(), order_id = %review.order_id(), "Review deleted");
        Ok(true)
    }
}

pub(super) async fn require_review(
    reviews: &dyn ReviewRepository,
    review_id: ReviewId,
) -> Result<Review, ServiceError> {
    reviews
        .find_by_id(review_id)
        .await?
        .ok_or_else(|| ServiceError::from(ValidationError::not_found("review")))
}
