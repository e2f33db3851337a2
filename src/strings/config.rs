//! Configuration for string extraction and readability filtering.

use super::readability::ReadabilityThresholds;
use serde::{Deserialize, Serialize};

/// Default minimum printable-run length.
pub const DEFAULT_MIN_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringsConfig {
    /// Minimum length for a string candidate (in bytes)
    pub min_length: usize,
    /// Readability filter limits
    pub readability: ReadabilityThresholds,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            readability: ReadabilityThresholds::default(),
        }
    }
}

impl StringsConfig {
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            min_length,
            ..Self::default()
        }
    }
}
