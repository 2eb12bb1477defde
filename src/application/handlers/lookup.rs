//! Existence checks shared by order and review handlers.

use crate::application::ServiceError;
use crate::domain::customer::Customer;
use crate::domain::foundation::{Email, OrderId, ValidationError};
use crate::domain::order::Order;
use crate::ports::{CustomerRepository, OrderRepository};

/// Parses a caller-supplied email. A malformed address is reported the same
/// way as an unknown one.
pub(crate) fn customer_email(raw: &str) -> Result<Email, ValidationError> {
    Email::new(raw).map_err(|_| ValidationError::not_found("customer"))
}

pub(crate) async fn require_customer(
    customers: &dyn CustomerRepository,
    raw_email: &str,
) -> Result<Customer, ServiceError> {
    let email = customer_email(raw_email)?;
    customers
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ServiceError::from(ValidationError::not_found("customer")))
}

pub(crate) async fn require_order(
    orders: &dyn OrderRepository,
    order_id: OrderId,
) -> Result<Order, ServiceError> {
    orders
        .find_by_id(order_id)
        .await?
        .ok_or_else(|| ServiceError::from(ValidationError::not_found("order")))
}
