//! Order status lifecycle.
//!
//! The transition table below describes the intended lifecycle. Order
//! handlers only consult it when the `enforce_status_transitions` rule is on;
//! otherwise any status may replace any other.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Accepted, not yet started.
    Confirmed,

    /// Being picked and packed.
    Preparing,

    /// Packed and waiting for pick-up.
    Ready,

    /// Out with a driver.
    Delivering,

    /// Handed over to the customer.
    Fulfilled,

    /// Abandoned before fulfilment.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivering,
        OrderStatus::Fulfilled,
        OrderStatus::Cancelled,
    ];

    /// Parses an exact status name. Unknown text yields `None`.
    pub fn from_label(text: &str) -> Option<Self> {
        match text {
            "Confirmed" => Some(OrderStatus::Confirmed),
            "Preparing" => Some(OrderStatus::Preparing),
            "Cancelled" => Some(OrderStatus::Cancelled),
            "Delivering" => Some(OrderStatus::Delivering),
            "Ready" => Some(OrderStatus::Ready),
            "Fulfilled" => Some(OrderStatus::Fulfilled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivering => "Delivering",
            OrderStatus::Fulfilled => "Fulfilled",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl StateMachine for OrderStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            (Confirmed, Preparing)
                | (Confirmed, Cancelled)
                | (Preparing, Ready)
                | (Preparing, Delivering)
                | (Preparing, Cancelled)
                | (Ready, Fulfilled)
                | (Ready, Cancelled)
                | (Delivering, Fulfilled)
                | (Delivering, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OrderStatus::*;
        match self {
            Confirmed => vec![Preparing, Cancelled],
            Preparing => vec![Ready, Delivering, Cancelled],
            Ready => vec![Fulfilled, Cancelled],
            Delivering => vec![Fulfilled, Cancelled],
            Fulfilled => vec![],
            Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_six_names() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(OrderStatus::from_label("Shipped"), None);
    }

    #[test]
    fn confirmed_moves_to_preparing_or_cancelled() {
        let status = OrderStatus::Confirmed;
        assert!(status.can_transition_to(&OrderStatus::Preparing));
        assert!(status.can_transition_to(&OrderStatus::Cancelled));
        assert!(!status.can_transition_to(&OrderStatus::Fulfilled));
    }

    #[test]
    fn preparing_branches_on_channel() {
        let status = OrderStatus::Preparing;
        assert_eq!(
            status.transition_to(OrderStatus::Ready),
            Ok(OrderStatus::Ready)
        );
        assert_eq!(
            status.transition_to(OrderStatus::Delivering),
            Ok(OrderStatus::Delivering)
        );
    }

    #[test]
    fn fulfilled_and_cancelled_are_terminal() {
        assert!(OrderStatus::Fulfilled.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Fulfilled
            .transition_to(OrderStatus::Cancelled)
            .is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }
}
