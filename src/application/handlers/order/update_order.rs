//! UpdateOrderHandler - Command handler for replacing an order's details.

use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::info;

use super::set_order_status::guard_status_change;
use crate::application::handlers::lookup::require_order;
use crate::application::ServiceError;
use crate::config::OrderRules;
use crate::domain::foundation::{OrderId, ValidationError};
use crate::domain::order::{Order, OrderStatus, OrderType};
use crate::ports::OrderRepository;

/// Command to update an order's type, status, date and time.
#[derive(Debug, Clone)]
pub struct UpdateOrderCommand {
    pub order_id: OrderId,
    pub order_type: Option<OrderType>,
    pub status: Option<OrderStatus>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

/// Handler for updating orders.
///
/// The order is looked up first, then the four fields are checked. A new
/// status goes through the same transition guard as a plain status change.
pub struct UpdateOrderHandler {
    orders: Arc<dyn OrderRepository>,
    rules: OrderRules,
}

impl UpdateOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, rules: OrderRules) -> Self {
        Self { orders, rules }
    }

    pub async fn handle(&self, cmd: UpdateOrderCommand) -> Result<Order, ServiceError> {
        let mut order = require_order(self.orders.as_ref(), cmd.order_id).await?;

        let order_type = cmd
            .order_type
            .ok_or(ValidationError::missing_field("order type"))?;
        let status = cmd
            .status
            .ok_or(ValidationError::missing_field("order status"))?;
        let date = cmd.date.ok_or(ValidationError::missing_field("date"))?;
        let time = cmd.time.ok_or(ValidationError::missing_field("time"))?;
        guard_status_change(&self.rules, order.status(), status)?;

        order.reschedule(order_type, status, date, time);
        self.orders.update(&order).await?;

        info!(order_id = %order.id(), status = %order.status(), "Order updated");
        Ok(order)
    }
}
