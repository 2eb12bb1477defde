//! Review domain module.

mod aggregate;

pub use aggregate::{Review, MAX_DESCRIPTION_LENGTH};
