//! QuickJump configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! Invalid values are reported once, as a warning, and the parsed config is
//! still returned: a bad colour or an out-of-range limit should not throw
//! away the rest of the user's settings.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quickjump_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("showing up to {} tabs", config.picker.max_results);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::QuickJumpConfig;

use quickjump_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it on first run.
pub fn load_config() -> Result<QuickJumpConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is [`ConfigError::FileNotFound`]
/// rather than a prompt to write defaults.
pub fn load_config_from(path: &Path) -> Result<QuickJumpConfig, ConfigError> {
    toml_loader::load_from_path(path)
}
