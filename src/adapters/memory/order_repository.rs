//! In-memory order store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Email, ErrorCode, OrderId, Repository};
use crate::domain::order::Order;
use crate::ports::OrderRepository;

/// In-memory order store.
///
/// Orders are kept sorted by id. `save` checks and inserts under a single
/// write lock, so two concurrent inserts of the same id cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

fn not_found(id: OrderId) -> DomainError {
    DomainError::new(ErrorCode::OrderNotFound, format!("Order {} not found", id))
        .with_detail("order_id", id.to_string())
}

#[async_trait]
impl Repository<Order, OrderId> for InMemoryOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn save(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id()) {
            return Err(DomainError::new(
                ErrorCode::OrderAlreadyExists,
                format!("Order {} already exists", order.id()),
            ));
        }
        orders.insert(order.id(), order.clone());
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(&order.id()) {
            Some(stored) => {
                *stored = order.clone();
                Ok(())
            }
            None => Err(not_found(order.id())),
        }
    }

    async fn delete(&self, id: OrderId) -> Result<(), DomainError> {
        match self.orders.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }

    async fn exists(&self, id: OrderId) -> Result<bool, DomainError> {
        Ok(self.orders.read().await.contains_key(&id))
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn find_by_customer(&self, customer: &Email) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .filter(|order| order.customer() == customer)
            .cloned()
            .collect())
    }
}
