//! In-memory customer directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::customer::Customer;
use crate::domain::foundation::{DomainError, Email, ErrorCode};
use crate::ports::CustomerRepository;

/// In-memory customer store keyed by email.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<Email, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer.
    ///
    /// # Errors
    ///
    /// - `CustomerAlreadyExists` if the email is taken
    pub async fn insert(&self, customer: Customer) -> Result<(), DomainError> {
        let mut customers = self.customers.write().await;
        if customers.contains_key(customer.email()) {
            return Err(DomainError::new(
                ErrorCode::CustomerAlreadyExists,
                format!("Customer {} already exists", customer.email()),
            ));
        }
        customers.insert(customer.email().clone(), customer);
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.customers.read().await.len()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, DomainError> {
        Ok(self.customers.read().await.get(email).cloned())
    }
}
