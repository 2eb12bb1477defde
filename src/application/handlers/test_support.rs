//! Fixtures shared by handler tests.

use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

use crate::adapters::{
    InMemoryCustomerRepository, InMemoryOrderItemRepository, InMemoryOrderRepository,
    InMemoryReviewRepository,
};
use crate::domain::customer::Customer;
use crate::domain::foundation::{Email, OrderId, OrderItemId, Repository};
use crate::domain::order::{Order, OrderItem, OrderStatus, OrderType};

pub(crate) const ANA: &str = "ana@example.com";
pub(crate) const BEN: &str = "ben@example.com";

pub(crate) fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 2).unwrap()
}

pub(crate) fn time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 15, 0).unwrap()
}

pub(crate) fn email(raw: &str) -> Email {
    Email::new(raw).unwrap()
}

/// In-memory stores seeded with two customers and three items.
#[derive(Clone)]
pub(crate) struct Stores {
    pub customers: InMemoryCustomerRepository,
    pub orders: InMemoryOrderRepository,
    pub items: InMemoryOrderItemRepository,
    pub reviews: InMemoryReviewRepository,
}

impl Stores {
    pub async fn seeded() -> Self {
        let stores = Self {
            customers: InMemoryCustomerRepository::new(),
            orders: InMemoryOrderRepository::new(),
            items: InMemoryOrderItemRepository::new(),
            reviews: InMemoryReviewRepository::new(),
        };
        for (raw, name) in [(ANA, "Ana"), (BEN, "Ben")] {
            stores
                .customers
                .insert(Customer::new(email(raw), name, "1 Rue Sherbrooke"))
                .await
                .unwrap();
        }
        for (id, product) in [(1, "Bananas"), (2, "Oat milk"), (3, "Sourdough")] {
            stores
                .items
                .save(&OrderItem::new(OrderItemId::new(id), product, 1).unwrap())
                .await
                .unwrap();
        }
        stores
    }

    pub fn customers(&self) -> Arc<InMemoryCustomerRepository> {
        Arc::new(self.customers.clone())
    }

    pub fn orders(&self) -> Arc<InMemoryOrderRepository> {
        Arc::new(self.orders.clone())
    }

    pub fn items(&self) -> Arc<InMemoryOrderItemRepository> {
        Arc::new(self.items.clone())
    }

    pub fn reviews(&self) -> Arc<InMemoryReviewRepository> {
        Arc::new(self.reviews.clone())
    }

    /// Stores an order for the customer and returns it.
    pub async fn place(&self, id: i64, customer: &str, status: OrderStatus) -> Order {
        let order = Order::new(
            OrderId::new(id),
            OrderType::Delivery,
            status,
            date(),
            time(),
            email(customer),
        );
        self.orders.save(&order).await.unwrap();
        order
    }

    pub async fn stored_order(&self, id: i64) -> Option<Order> {
        self.orders.find_by_id(OrderId::new(id)).await.unwrap()
    }
}
