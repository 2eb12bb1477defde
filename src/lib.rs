//! Grocery Orders - order management for the grocery store backend
//!
//! Customers place orders made of line items, move them through a status
//! lifecycle, and leave one review per fulfilled order.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
