//! Order item repository port.

use crate::domain::foundation::{OrderItemId, Repository};
use crate::domain::order::OrderItem;

/// Repository port for line items.
///
/// Items are looked up by id only; `save` rejects a taken id with
/// `ErrorCode::OrderItemAlreadyExists`.
pub trait OrderItemRepository: Repository<OrderItem, OrderItemId> {}
