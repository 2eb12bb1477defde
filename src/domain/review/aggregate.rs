//! Review entity.
//!
//! A review belongs to exactly one (customer, order) pair. Uniqueness of the
//! pair is enforced by the review store's insert, not by this type.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Email, OrderId, Rating, ReviewId, ValidationError};

/// Maximum length for review text.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Customer feedback on a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    customer: Email,
    order_id: OrderId,
    rating: Rating,
    description: String,
}

impl Review {
    /// Creates a review.
    ///
    /// # Errors
    ///
    /// - `MissingField` if the description is blank
    /// - `InvalidFormat` if the description is too long
    pub fn new(
        id: ReviewId,
        customer: Email,
        order_id: OrderId,
        rating: Rating,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        Self::validate_description(&description)?;
        Ok(Self {
            id,
            customer,
            order_id,
            rating,
            description,
        })
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn customer(&self) -> &Email {
        &self.customer
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces rating and text.
    pub fn revise(
        &mut self,
        rating: Rating,
        description: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let description = description.into();
        Self::validate_description(&description)?;
        self.rating = rating;
        self.description = description;
        Ok(())
    }

    /// Checks review text without building a review.
    pub fn validate_description(description: &str) -> Result<(), ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::missing_field("description"));
        }
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::invalid_format(
                "description",
                format!("must be at most {} characters", MAX_DESCRIPTION_LENGTH),
            ));
        }
        Ok(())
    }
}
