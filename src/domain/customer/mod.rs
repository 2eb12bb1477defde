//! Customer domain module.
//!
//! Customers are registered elsewhere; this subsystem only reads them to
//! resolve the owner of an order or review.

mod aggregate;

pub use aggregate::Customer;
