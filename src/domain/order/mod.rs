//! Order domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Order aggregate entity
//! - `item` - OrderItem line items linked by orders
//! - `order_type` - Delivery or pick-up
//! - `status` - OrderStatus and its transition table

mod aggregate;
mod item;
mod order_type;
mod status;

pub use aggregate::Order;
pub use item::OrderItem;
pub use order_type::OrderType;
pub use status::OrderStatus;
