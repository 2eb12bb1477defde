//! Order line item.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderItemId, ValidationError};

/// A product and quantity that orders can link to.
///
/// Items exist on their own; an order holds only their ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    product: String,
    quantity: u32,
}

impl OrderItem {
    /// Creates a line item.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the product name is blank or quantity is zero
    pub fn new(
        id: OrderItemId,
        product: impl Into<String>,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        let product = product.into();
        if product.trim().is_empty() {
            return Err(ValidationError::invalid_format("product", "cannot be empty"));
        }
        if quantity == 0 {
            return Err(ValidationError::invalid_format(
                "quantity",
                "must be at least 1",
            ));
        }
        Ok(Self {
            id,
            product,
            quantity,
        })
    }

    pub fn id(&self) -> OrderItemId {
        self.id
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_item() {
        let item = OrderItem::new(OrderItemId::new(3), "Apples", 6).unwrap();
        assert_eq!(item.id(), OrderItemId::new(3));
        assert_eq!(item.product(), "Apples");
        assert_eq!(item.quantity(), 6);
    }

    #[test]
    fn new_rejects_blank_product_and_zero_quantity() {
        assert!(OrderItem::new(OrderItemId::new(1), "  ", 1).is_err());
        assert!(OrderItem::new(OrderItemId::new(1), "Milk", 0).is_err());
    }
}
