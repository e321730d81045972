//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use quickjump_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("open_picker", config.open_picker.as_str()),
        ("select_next", config.select_next.as_str()),
        ("select_prev", config.select_prev.as_str()),
        ("confirm", config.confirm.as_str()),
        ("close", config.close.as_str()),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if binding.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybind '{name}' is empty"
            )));
        }
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}
