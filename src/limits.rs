//! Domain limits applied by the validator
//!
//! Provides bounds for:
//! - Entity name length
//! - Minimum number of stations on a line route

use std::ops::RangeInclusive;

/// Bounds the validator enforces on user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubwayLimits {
    /// Minimum name length, in characters
    pub min_name_len: usize,

    /// Maximum name length, in characters
    pub max_name_len: usize,

    /// A line route never shrinks below this many stations
    pub min_route_len: usize,
}

impl Default for SubwayLimits {
    fn default() -> Self {
        Self {
            min_name_len: 2,
            max_name_len: 20,
            min_route_len: 2,
        }
    }
}

impl SubwayLimits {
    pub fn name_len(&self) -> RangeInclusive<usize> {
        self.min_name_len..=self.max_name_len
    }
}
