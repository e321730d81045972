//! Picker behaviour configuration types.

use serde::{Deserialize, Serialize};

/// Picker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Maximum entries shown at once (valid range: 1-200).
    pub max_results: u32,
    /// Reopen the picker with the last query typed this session.
    pub remember_last_query: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_results: 50,
            remember_last_query: true,
        }
    }
}
