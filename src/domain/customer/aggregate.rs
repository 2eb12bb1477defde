//! Customer entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Email;

/// A registered grocery store customer, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    email: Email,
    name: String,
    address: String,
    phone: Option<String>,
}

impl Customer {
    pub fn new(email: Email, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            email,
            name: name.into(),
            address: address.into(),
            phone: None,
        }
    }

    /// Sets the contact phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}
