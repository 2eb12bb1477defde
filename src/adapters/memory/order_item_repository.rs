//! In-memory line item store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrderItemId, Repository};
use crate::domain::order::OrderItem;
use crate::ports::OrderItemRepository;

/// In-memory line item store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderItemRepository {
    items: Arc<RwLock<HashMap<OrderItemId, OrderItem>>>,
}

impl InMemoryOrderItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}

fn not_found(id: OrderItemId) -> DomainError {
    DomainError::new(
        ErrorCode::OrderItemNotFound,
        format!("Order item {} not found", id),
    )
}

#[async_trait]
impl Repository<OrderItem, OrderItemId> for InMemoryOrderItemRepository {
    async fn find_by_id(&self, id: OrderItemId) -> Result<Option<OrderItem>, DomainError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn save(&self, item: &OrderItem) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id()) {
            return Err(DomainError::new(
                ErrorCode::OrderItemAlreadyExists,
                format!("Order item {} already exists", item.id()),
            ));
        }
        items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn update(&self, item: &OrderItem) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        if !items.contains_key(&item.id()) {
            return Err(not_found(item.id()));
        }
        items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn delete(&self, id: OrderItemId) -> Result<(), DomainError> {
        self.items
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

impl OrderItemRepository for InMemoryOrderItemRepository {}
