//! Base repository trait for persistence operations.
//!
//! Every entity port (`OrderRepository`, `ReviewRepository`, ...) extends
//! [`Repository`] and adds its own natural-key queries.
//!
//! ```ignore
//! #[async_trait]
//! pub trait OrderRepository: Repository<Order, OrderId> {
//!     async fn find_all(&self) -> Result<Vec<Order>, DomainError>;
//!     async fn find_by_customer(&self, email: &Email) -> Result<Vec<Order>, DomainError>;
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// Keyed CRUD operations shared by all entity stores.
///
/// # Contract
///
/// - `save` inserts and must reject an existing key atomically with a
///   conflict code (see [`DomainError::is_conflict`]). Callers rely on this to
///   settle races between two creates of the same key.
/// - A successful `save` or `update` is visible to every later `find_by_id`.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Finds an entity by its identifier.
    ///
    /// Returns `Ok(None)` if absent; `Err` only for infrastructure failures.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Inserts a new entity.
    async fn save(&self, entity: &T) -> Result<(), DomainError>;

    /// Replaces an existing entity.
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Deletes an entity by its identifier.
    async fn delete(&self, id: ID) -> Result<(), DomainError>;

    /// Checks if an entity with the given ID exists.
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Shelf {
        id: u32,
        aisle: String,
    }

    struct ShelfStore {
        data: Mutex<HashMap<u32, Shelf>>,
    }

    impl ShelfStore {
        fn new() -> Self {
            Self {
                data: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Repository<Shelf, u32> for ShelfStore {
        async fn find_by_id(&self, id: u32) -> Result<Option<Shelf>, DomainError> {
            Ok(self.data.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, entity: &Shelf) -> Result<(), DomainError> {
            let mut data = self.data.lock().unwrap();
            if data.contains_key(&entity.id) {
                return Err(DomainError::new(ErrorCode::OrderItemAlreadyExists, "taken"));
            }
            data.insert(entity.id, entity.clone());
            Ok(())
        }

        async fn update(&self, entity: &Shelf) -> Result<(), DomainError> {
            self.data.lock().unwrap().insert(entity.id, entity.clone());
            Ok(())
        }

        async fn delete(&self, id: u32) -> Result<(), DomainError> {
            self.data.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn exists_default_uses_find_by_id() {
        let store = ShelfStore::new();
        assert!(!store.exists(7).await.unwrap());

        store
            .save(&Shelf {
                id: 7,
                aisle: "produce".to_string(),
            })
            .await
            .unwrap();
        assert!(store.exists(7).await.unwrap());
    }

    #[tokio::test]
    async fn second_save_of_same_key_is_a_conflict() {
        let store = ShelfStore::new();
        let shelf = Shelf {
            id: 1,
            aisle: "dairy".to_string(),
        };
        store.save(&shelf).await.unwrap();

        let err = store.save(&shelf).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Repository<Shelf, u32>) {}
}
