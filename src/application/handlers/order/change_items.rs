//! Handlers that link and unlink line items on an order.
//!
//! Membership is a set: adding a linked item or removing an unlinked one
//! succeeds with `false` and writes nothing.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::lookup::require_order;
use crate::application::ServiceError;
use crate::domain::foundation::{OrderId, OrderItemId, ValidationError};
use crate::ports::{OrderItemRepository, OrderRepository};

/// Command to link an item to an order.
#[derive(Debug, Clone, Copy)]
pub struct AddItemToOrderCommand {
    pub order_id: OrderId,
    pub item_id: OrderItemId,
}

/// Command to unlink an item from an order.
#[derive(Debug, Clone, Copy)]
pub struct RemoveItemFromOrderCommand {
    pub order_id: OrderId,
    pub item_id: OrderItemId,
}

/// Handler for adding items. The item is checked before the order.
pub struct AddItemToOrderHandler {
    orders: Arc<dyn OrderRepository>,
    items: Arc<dyn OrderItemRepository>,
}

impl AddItemToOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, items: Arc<dyn OrderItemRepository>) -> Self {
        Self { orders, items }
    }

    /// Returns true if the item was newly linked.
    pub async fn handle(&self, cmd: AddItemToOrderCommand) -> Result<bool, ServiceError> {
        if !self.items.exists(cmd.item_id).await? {
            return Err(ValidationError::item_not_found("add to").into());
        }
        let mut order = require_order(self.orders.as_ref(), cmd.order_id).await?;

        let added = order.add_item(cmd.item_id);
        if added {
            self.orders.update(&order).await?;
            info!(order_id = %cmd.order_id, item_id = %cmd.item_id, "Item added to order");
        }
        Ok(added)
    }
}

/// Handler for removing items. The item is checked before the order.
pub struct RemoveItemFromOrderHandler {
    orders: Arc<dyn OrderRepository>,
    items: Arc<dyn OrderItemRepository>,
}

impl RemoveItemFromOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, items: Arc<dyn OrderItemRepository>) -> Self {
        Self { orders, items }
    }

    /// Returns true if the item was linked and is now removed.
    pub async fn handle(&self, cmd: RemoveItemFromOrderCommand) -> Result<bool, ServiceError> {
        if !self.items.exists(cmd.item_id).await? {
            return Err(ValidationError::item_not_found("remove from").into());
        }
        let mut order = require_order(self.orders.as_ref(), cmd.order_id).await?;

        let removed = order.remove_item(cmd.item_id);
        if removed {
            self.orders.update(&order).await?;
            info!(order_id = %cmd.order_id, item_id = %cmd.item_id, "Item removed from order");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{Stores, ANA};
    use crate::domain::order::OrderStatus;

    fn add(order: i64, item: i64) -> AddItemToOrderCommand {
        AddItemToOrderCommand {
            order_id: OrderId::new(order),
            item_id: OrderItemId::new(item),
        }
    }

    fn remove(order: i64, item: i64) -> RemoveItemFromOrderCommand {
        RemoveItemFromOrderCommand {
            order_id: OrderId::new(order),
            item_id: OrderItemId::new(item),
        }
    }

    async fn setup() -> (AddItemToOrderHandler, RemoveItemFromOrderHandler, Stores) {
        let stores = Stores::seeded().await;
        stores.place(1, ANA, OrderStatus::Confirmed).await;
        let adder = AddItemToOrderHandler::new(stores.orders(), stores.items());
        let remover = RemoveItemFromOrderHandler::new(stores.orders(), stores.items());
        (adder, remover, stores)
    }

    #[tokio::test]
    async fn add_twice_returns_true_then_false() {
        let (adder, _, stores) = setup().await;

        assert!(adder.handle(add(1, 2)).await.unwrap());
        assert!(!adder.handle(add(1, 2)).await.unwrap());

        let order = stores.stored_order(1).await.unwrap();
        assert_eq!(order.item_ids(), &[OrderItemId::new(2)]);
    }

    #[tokio::test]
    async fn remove_of_never_added_item_is_false() {
        let (_, remover, _) = setup().await;
        assert!(!remover.handle(remove(1, 3)).await.unwrap());
    }

    #[tokio::test]
    async fn remove_after_add_unlinks_item() {
        let (adder, remover, stores) = setup().await;
        adder.handle(add(1, 1)).await.unwrap();

        assert!(remover.handle(remove(1, 1)).await.unwrap());

        let order = stores.stored_order(1).await.unwrap();
        assert!(!order.contains_item(OrderItemId::new(1)));
    }

    #[tokio::test]
    async fn unknown_item_is_checked_before_unknown_order() {
        let (adder, remover, _) = setup().await;

        let err = adder.handle(add(999, 42)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid item to add to the order."
        );

        let err = remover.handle(remove(999, 42)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid item to remove from the order."
        );
    }

    #[tokio::test]
    async fn unknown_order_with_known_item() {
        let (adder, remover, _) = setup().await;

        let err = adder.handle(add(999, 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid order.");

        let err = remover.handle(remove(999, 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid order.");
    }
}
