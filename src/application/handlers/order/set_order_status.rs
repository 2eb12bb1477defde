//! SetOrderStatusHandler - Command handler for moving an order to a new status.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::lookup::require_order;
use crate::application::ServiceError;
use crate::config::OrderRules;
use crate::domain::foundation::{OrderId, StateMachine, ValidationError};
use crate::domain::order::{Order, OrderStatus};
use crate::ports::OrderRepository;

/// Command to set an order's status.
#[derive(Debug, Clone, Copy)]
pub struct SetOrderStatusCommand {
    pub order_id: OrderId,
    pub status: Option<OrderStatus>,
}

/// Handler for status changes.
pub struct SetOrderStatusHandler {
    orders: Arc<dyn OrderRepository>,
    rules: OrderRules,
}

impl SetOrderStatusHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, rules: OrderRules) -> Self {
        Self { orders, rules }
    }

    /// # Errors
    ///
    /// - `NotFound` for an unknown order, checked before the status
    /// - `MissingField` if no status was supplied
    /// - `InvalidTransition` when transitions are enforced and the table
    ///   does not allow the move
    pub async fn handle(&self, cmd: SetOrderStatusCommand) -> Result<Order, ServiceError> {
        let mut order = require_order(self.orders.as_ref(), cmd.order_id).await?;
        let target = cmd
            .status
            .ok_or(ValidationError::missing_field("order status"))?;

        let previous = order.status();
        guard_status_change(&self.rules, previous, target)?;

        order.set_status(target);
        self.orders.update(&order).await?;

        info!(
            order_id = %order.id(),
            from = %previous,
            to = %target,
            "Order status changed"
        );
        Ok(order)
    }
}

/// Checks a status change against the transition table when the rules ask
/// for it. Keeping the current status is always allowed.
pub(super) fn guard_status_change(
    rules: &OrderRules,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<(), ValidationError> {
    if rules.enforce_status_transitions && from != to {
        from.transition_to(to)?;
    }
    Ok(())
}
