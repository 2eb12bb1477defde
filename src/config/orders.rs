//! Business rules for orders and reviews

use serde::Deserialize;

/// Switches for rules that stakeholders have not settled yet
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRules {
    /// Refuse status changes the order lifecycle table does not allow.
    /// Off by default: any status may replace any other.
    #[serde(default)]
    pub enforce_status_transitions: bool,

    /// Only accept reviews for orders in the Fulfilled status
    #[serde(default = "default_reviews_require_fulfilled_order")]
    pub reviews_require_fulfilled_order: bool,
}

impl OrderRules {
    /// Rules with the lifecycle guard switched on
    pub fn strict() -> Self {
        Self {
            enforce_status_transitions: true,
            ..Self::default()
        }
    }
}

impl Default for OrderRules {
    fn default() -> Self {
        Self {
            enforce_status_transitions: false,
            reviews_require_fulfilled_order: default_reviews_require_fulfilled_order(),
        }
    }
}

fn default_reviews_require_fulfilled_order() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_rules_defaults() {
        let rules = OrderRules::default();
        assert!(!rules.enforce_status_transitions);
        assert!(rules.reviews_require_fulfilled_order);
    }

    #[test]
    fn test_order_rules_deserialization_fills_missing_fields() {
        let rules: OrderRules =
            serde_json::from_str(r#"{ "enforce_status_transitions": true }"#).unwrap();
        assert!(rules.enforce_status_transitions);
        assert!(rules.reviews_require_fulfilled_order);
    }

    #[test]
    fn test_strict_enables_guard() {
        assert!(OrderRules::strict().enforce_status_transitions);
    }
}
