//! Full configuration validation.
//!
//! Validates numeric ranges, keybind uniqueness, colour format and
//! highlight markers. Each section has its own submodule; this orchestrator
//! calls them all and collects errors into a single `ConfigError`.

mod helpers;
mod highlight;
mod picker;


use crate::keybinds;
use crate::schema::QuickJumpConfig;
use quickjump_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QuickJumpConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    picker::validate_picker(&mut errors, config);
    highlight::validate_highlight(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
