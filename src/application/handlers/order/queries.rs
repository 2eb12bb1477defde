//! Query handlers for reading orders.
//!
//! Empty results are treated differently on purpose: listing every order
//! fails when the store is empty, while listing one customer's orders
//! returns an empty list.

use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::lookup::require_customer;
use crate::application::ServiceError;
use crate::domain::foundation::{OrderId, ValidationError};
use crate::domain::order::Order;
use crate::ports::{CustomerRepository, OrderRepository};

/// Handler listing every stored order.
pub struct ListOrdersHandler {
    orders: Arc<dyn OrderRepository>,
}

impl ListOrdersHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// # Errors
    ///
    /// - `NoneInSystem` if there are no orders at all
    pub async fn handle(&self) -> Result<Vec<Order>, ServiceError> {
        let orders = self.orders.find_all().await?;
        if orders.is_empty() {
            return Err(ValidationError::none_in_system("orders").into());
        }
        debug!(count = orders.len(), "Listed all orders");
        Ok(orders)
    }
}

/// Query for one customer's orders.
#[derive(Debug, Clone)]
pub struct ListCustomerOrdersQuery {
    pub customer_email: String,
}

/// Handler listing the orders of a customer.
pub struct ListCustomerOrdersHandler {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl ListCustomerOrdersHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self { orders, customers }
    }

    pub async fn handle(&self, query: ListCustomerOrdersQuery) -> Result<Vec<Order>, ServiceError> {
        let customer = require_customer(self.customers.as_ref(), &query.customer_email).await?;
        let orders = self.orders.find_by_customer(customer.email()).await?;
        debug!(customer = %customer.email(), count = orders.len(), "Listed customer orders");
        Ok(orders)
    }
}

/// Query for a single order. `None` models an id the caller did not supply.
#[derive(Debug, Clone, Copy)]
pub struct GetOrderQuery {
    pub order_id: Option<OrderId>,
}

/// Handler fetching one order by id.
pub struct GetOrderHandler {
    orders: Arc<dyn OrderRepository>,
}

impl GetOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self, query: GetOrderQuery) -> Result<Order, ServiceError> {
        let order_id = query
            .order_id
            .ok_or(ValidationError::missing_field("order ID"))?;
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ValidationError::UnknownOrderId.into())
    }
}
