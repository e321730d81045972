//! Configuration schema types for QuickJump.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod highlight;
mod keybind_config;
mod picker;
mod system;

pub use highlight::*;
pub use keybind_config::*;
pub use picker::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for QuickJump.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct QuickJumpConfig {
    pub picker: PickerConfig,
    pub highlight: HighlightConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_picker() {
        let config = QuickJumpConfig::default();
        assert_eq!(config.picker.max_results, 50);
        assert!(config.picker.remember_last_query);
    }

    #[test]
    fn default_highlight() {
        let config = QuickJumpConfig::default();
        assert_eq!(config.highlight.style, HighlightStyle::Ansi);
        assert_eq!(config.highlight.color, "#00d4ff");
        assert_eq!(config.highlight.open_marker, "[");
        assert_eq!(config.highlight.close_marker, "]");
    }

    #[test]
    fn default_keybinds() {
        let config = QuickJumpConfig::default();
        assert_eq!(config.keybinds.open_picker, "Cmd+Shift+K");
        assert_eq!(config.keybinds.select_next, "Down");
        assert_eq!(config.keybinds.select_prev, "Up");
        assert_eq!(config.keybinds.confirm, "Enter");
        assert_eq!(config.keybinds.close, "Escape");
    }

    #[test]
    fn default_logging_level_is_info() {
        let config = QuickJumpConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_directive(), "info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
[picker]
max_results = 10
"#;
        let config: QuickJumpConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.picker.max_results, 10);
        assert!(config.picker.remember_last_query);
        assert_eq!(config.highlight.style, HighlightStyle::Ansi);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: QuickJumpConfig = toml::from_str("").unwrap();
        assert_eq!(config.picker.max_results, 50);
        assert_eq!(config.keybinds.close, "Escape");
    }

    #[test]
    fn highlight_style_parses_lowercase() {
        let config: QuickJumpConfig = toml::from_str("[highlight]\nstyle = \"plain\"\n").unwrap();
        assert_eq!(config.highlight.style, HighlightStyle::Plain);
    }

    #[test]
    fn unknown_highlight_style_is_an_error() {
        let result: Result<QuickJumpConfig, _> =
            toml::from_str("[highlight]\nstyle = \"sparkles\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: QuickJumpConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
