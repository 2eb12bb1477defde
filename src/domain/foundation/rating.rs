//! Review rating value object (five-point scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer rating attached to a review, from 1 (very poor) to 5 (very good).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rating {
    VeryPoor = 1,
    Poor = 2,
    Okay = 3,
    Good = 4,
    VeryGood = 5,
}

impl Rating {
    /// Parses the labels used by the storefront. Unknown text yields `None`.
    pub fn from_label(text: &str) -> Option<Self> {
        match text {
            "VeryPoor" | "Very Poor" | "Very poor" => Some(Rating::VeryPoor),
            "Poor" => Some(Rating::Poor),
            "Okay" => Some(Rating::Okay),
            "Good" => Some(Rating::Good),
            "VeryGood" | "Very Good" | "Very good" => Some(Rating::VeryGood),
            _ => None,
        }
    }

    /// Returns the star count.
    pub fn stars(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::VeryPoor => "Very Poor",
            Rating::Poor => "Poor",
            Rating::Okay => "Okay",
            Rating::Good => "Good",
            Rating::VeryGood => "Very Good",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
