//! In-memory adapters.
//!
//! Stores every entity in process memory. Used by tests and by embedders
//! that do not need durable storage.

mod customer_repository;
mod order_item_repository;
mod order_repository;
mod review_repository;

pub use customer_repository::InMemoryCustomerRepository;
pub use order_item_repository::InMemoryOrderItemRepository;
pub use order_repository::InMemoryOrderRepository;
pub use review_repository::InMemoryReviewRepository;
