//! How an order reaches the customer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfilment channel of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Driven to the customer's address.
    Delivery,
    /// Collected in store.
    PickUp,
}

impl OrderType {
    /// Parses the storefront's wording for an order type.
    ///
    /// Accepts "Delivery" and the three spellings of pick-up the forms send
    /// ("PickUp", "Pick Up", "Pick up"). Anything else yields `None`.
    pub fn from_label(text: &str) -> Option<Self> {
        match text {
            "Delivery" => Some(OrderType::Delivery),
            "PickUp" | "Pick Up" | "Pick up" => Some(OrderType::PickUp),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Delivery => "Delivery",
            OrderType::PickUp => "PickUp",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
