//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory repositories for every entity

pub mod memory;

pub use memory::{
    InMemoryCustomerRepository, InMemoryOrderItemRepository, InMemoryOrderRepository,
    InMemoryReviewRepository,
};
