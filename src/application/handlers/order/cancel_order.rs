//! CancelOrderHandler - Command handler for cancelling (deleting) an order.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::lookup::require_order;
use crate::application::ServiceError;
use crate::domain::foundation::OrderId;
use crate::ports::{OrderRepository, ReviewRepository};

/// Command to cancel an order.
#[derive(Debug, Clone, Copy)]
pub struct CancelOrderCommand {
    pub order_id: OrderId,
}

/// Handler for cancelling orders.
///
/// The order is torn down in memory first. Its review, if any, goes with it,
/// and the order record itself is deleted last.
pub struct CancelOrderHandler {
    orders: Arc<dyn OrderRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl CancelOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { orders, reviews }
    }

    /// Returns true once the order is gone.
    pub async fn handle(&self, cmd: CancelOrderCommand) -> Result<bool, ServiceError> {
        let mut order = require_order(self.orders.as_ref(), cmd.order_id).await?;

        let released = order.release();
        let review = self
            .reviews
            .find_by_customer_and_order(order.customer(), order.id())
            .await?;
        if let Some(review) = &review {
            self.reviews.delete(review.id()).await?;
        }
        self.orders.delete(order.id()).await?;

        info!(
            order_id = %cmd.order_id,
            released_items = released.len(),
            review_removed = review.is_some(),
            "Order cancelled"
        );
        Ok(true)
    }
}
