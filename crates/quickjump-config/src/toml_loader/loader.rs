//! Reading a config file: parse, report invalid values, hand it back.

use crate::schema::QuickJumpConfig;
use crate::validation;
use quickjump_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{default_config_path, write_default_config};

/// Parse config text. Missing sections and fields take their defaults.
pub fn parse_config(content: &str) -> Result<QuickJumpConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load and check the config at `path`.
///
/// This is the only place validation runs. Values that fail it are logged
/// and kept; only an unreadable or unparsable file is an error.
pub fn load_from_path(path: &Path) -> Result<QuickJumpConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let config = parse_config(&content).map_err(|e| match e {
        ConfigError::ParseError(msg) => ConfigError::ParseError(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    match validation::validate(&config) {
        Ok(()) => info!(path = %path.display(), "config loaded"),
        Err(e) => warn!(path = %path.display(), "config loaded with invalid values: {e}"),
    }
    Ok(config)
}

/// Load the config at the platform default path.
///
/// On first run the file is missing: a commented default is written there
/// and the built-in defaults are returned.
pub fn load_default() -> Result<QuickJumpConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_default_config(&path)?;
            Ok(QuickJumpConfig::default())
        }
        loaded => loaded,
    }
}
