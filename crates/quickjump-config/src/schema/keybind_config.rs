//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Multiple modifiers: "Cmd+Shift+K".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub open_picker: String,
    pub select_next: String,
    pub select_prev: String,
    pub confirm: String,
    pub close: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            open_picker: "Cmd+Shift+K".into(),
            select_next: "Down".into(),
            select_prev: "Up".into(),
            confirm: "Enter".into(),
            close: "Escape".into(),
        }
    }
}
