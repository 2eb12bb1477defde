//! Order aggregate entity.
//!
//! # Ownership
//!
//! An order references its customer by email and its line items by id. It
//! owns the membership list, never the items or the customer.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{OrderStatus, OrderType};
use crate::domain::foundation::{Email, OrderId, OrderItemId};

/// Order aggregate.
///
/// # Invariants
///
/// - `id` never changes after construction
/// - `customer` always names the customer the order was created for
/// - `item_ids` contains no duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    order_type: OrderType,
    status: OrderStatus,
    date: NaiveDate,
    time: NaiveTime,
    customer: Email,
    item_ids: Vec<OrderItemId>,
}

impl Order {
    /// Creates an order with no items.
    pub fn new(
        id: OrderId,
        order_type: OrderType,
        status: OrderStatus,
        date: NaiveDate,
        time: NaiveTime,
        customer: Email,
    ) -> Self {
        Self {
            id,
            order_type,
            status,
            date,
            time,
            customer,
            item_ids: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the email of the owning customer.
    pub fn customer(&self) -> &Email {
        &self.customer
    }

    pub fn item_ids(&self) -> &[OrderItemId] {
        &self.item_ids
    }

    pub fn contains_item(&self, item_id: OrderItemId) -> bool {
        self.item_ids.contains(&item_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces every mutable field at once.
    pub fn reschedule(
        &mut self,
        order_type: OrderType,
        status: OrderStatus,
        date: NaiveDate,
        time: NaiveTime,
    ) {
        self.order_type = order_type;
        self.status = status;
        self.date = date;
        self.time = time;
    }

    /// Sets the status without consulting the transition table.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Links an item. Returns false if it was already linked.
    pub fn add_item(&mut self, item_id: OrderItemId) -> bool {
        if self.contains_item(item_id) {
            return false;
        }
        self.item_ids.push(item_id);
        true
    }

    /// Unlinks an item. Returns false if it was not linked.
    pub fn remove_item(&mut self, item_id: OrderItemId) -> bool {
        match self.item_ids.iter().position(|id| *id == item_id) {
            Some(index) => {
                self.item_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Tears the order down before its record is deleted.
    ///
    /// Releases every item link and returns the ids that were released.
    pub fn release(&mut self) -> Vec<OrderItemId> {
        std::mem::take(&mut self.item_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order::new(
            OrderId::new(10),
            OrderType::Delivery,
            OrderStatus::Confirmed,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            Email::new("ana@example.com").unwrap(),
        )
    }

    #[test]
    fn new_order_has_no_items() {
        let order = sample_order();
        assert_eq!(order.id(), OrderId::new(10));
        assert!(order.item_ids().is_empty());
    }

    #[test]
    fn add_item_is_idempotent() {
        let mut order = sample_order();
        assert!(order.add_item(OrderItemId::new(1)));
        assert!(!order.add_item(OrderItemId::new(1)));
        assert_eq!(order.item_ids(), &[OrderItemId::new(1)]);
    }

    #[test]
    fn remove_item_reports_membership() {
        let mut order = sample_order();
        assert!(!order.remove_item(OrderItemId::new(2)));

        order.add_item(OrderItemId::new(2));
        assert!(order.remove_item(OrderItemId::new(2)));
        assert!(!order.contains_item(OrderItemId::new(2)));
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut order = sample_order();
        order.add_item(OrderItemId::new(3));
        order.add_item(OrderItemId::new(1));
        order.add_item(OrderItemId::new(2));
        order.remove_item(OrderItemId::new(1));
        assert_eq!(order.item_ids(), &[OrderItemId::new(3), OrderItemId::new(2)]);
    }

    #[test]
    fn reschedule_replaces_mutable_fields_only() {
        let mut order = sample_order();
        let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

        order.reschedule(OrderType::PickUp, OrderStatus::Ready, date, time);

        assert_eq!(order.id(), OrderId::new(10));
        assert_eq!(order.order_type(), OrderType::PickUp);
        assert_eq!(order.status(), OrderStatus::Ready);
        assert_eq!(order.date(), date);
        assert_eq!(order.time(), time);
        assert_eq!(order.customer().as_str(), "ana@example.com");
    }

    #[test]
    fn release_clears_links() {
        let mut order = sample_order();
        order.add_item(OrderItemId::new(4));
        order.add_item(OrderItemId::new(5));

        let released = order.release();

        assert_eq!(released, vec![OrderItemId::new(4), OrderItemId::new(5)]);
        assert!(order.item_ids().is_empty());
    }
}
