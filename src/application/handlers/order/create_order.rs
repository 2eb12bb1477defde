//! CreateOrderHandler - Command handler for placing a new order.

use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::handlers::lookup::require_customer;
use crate::application::ServiceError;
use crate::domain::foundation::{OrderId, ValidationError};
use crate::domain::order::{Order, OrderStatus, OrderType};
use crate::ports::{CustomerRepository, OrderRepository};

/// Command to create an order.
///
/// `None` fields are inputs the caller could not supply or parse.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub order_type: Option<OrderType>,
    pub status: Option<OrderStatus>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub customer_email: String,
    pub order_id: OrderId,
}

/// Handler for creating orders.
///
/// Checks run in a fixed order: type, status, date, time, customer, then
/// duplicate id. Nothing is persisted unless every check passes.
pub struct CreateOrderHandler {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl CreateOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self { orders, customers }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<Order, ServiceError> {
        let order_type = cmd
            .order_type
            .ok_or(ValidationError::missing_field("order type"))?;
        let status = cmd
            .status
            .ok_or(ValidationError::missing_field("order status"))?;
        let date = cmd.date.ok_or(ValidationError::missing_field("date"))?;
        let time = cmd.time.ok_or(ValidationError::missing_field("time"))?;

        let customer = require_customer(self.customers.as_ref(), &cmd.customer_email).await?;

        if self.orders.exists(cmd.order_id).await? {
            return Err(ValidationError::duplicate("Order with ID").into());
        }

        let order = Order::new(
            cmd.order_id,
            order_type,
            status,
            date,
            time,
            customer.email().clone(),
        );

        // The store's insert is the final arbiter for concurrent creates.
        self.orders.save(&order).await.map_err(|e| {
            if e.is_conflict() {
                warn!(order_id = %cmd.order_id, "Order id taken by a concurrent create");
                ServiceError::from(ValidationError::duplicate("Order with ID"))
            } else {
                ServiceError::from(e)
            }
        })?;

        info!(
            order_id = %order.id(),
            customer = %order.customer(),
            order_type = %order.order_type(),
            status = %order.status(),
            "Order created"
        );
        Ok(order)
    }
}
