//! Where the config lives, and seeding it on first run.

use quickjump_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const CONFIG_DIR: &str = "quickjump";
const CONFIG_FILE: &str = "config.toml";

/// `<config_dir>/quickjump/config.toml`, e.g. `~/.config/quickjump/config.toml`
/// on Linux and `~/Library/Application Support/quickjump/config.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the commented default config to `path`, creating parent directories.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write default config {}: {e}", path.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_failed)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_failed)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
