//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the persistence layer. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `CustomerRepository` - Read-only customer lookup by email
//! - `OrderRepository` - Orders by id and by owning customer
//! - `OrderItemRepository` - Line items by id
//! - `ReviewRepository` - Reviews by id, customer, and (customer, order) pair

mod customer_repository;
mod order_item_repository;
mod order_repository;
mod review_repository;

pub use customer_repository::CustomerRepository;
pub use order_item_repository::OrderItemRepository;
pub use order_repository::OrderRepository;
pub use review_repository::ReviewRepository;
