//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, rating, base traits)
//! - `customer` - Customers that own orders and reviews
//! - `order` - Order aggregate, line items, type and status lifecycle
//! - `review` - One review per customer and order

pub mod customer;
pub mod foundation;
pub mod order;
pub mod review;
