//! Match highlighting configuration types.

use serde::{Deserialize, Serialize};

/// How matched spans are drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum HighlightStyle {
    /// Bold + 24-bit colour escapes.
    #[default]
    Ansi,
    /// Wrap matches in `open_marker` / `close_marker`.
    Markers,
    /// No highlighting.
    Plain,
}

/// Highlight configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub style: HighlightStyle,
    /// Hex colour for matched text in `ansi` style.
    pub color: String,
    pub open_marker: String,
    pub close_marker: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            style: HighlightStyle::Ansi,
            color: "#00d4ff".into(),
            open_marker: "[".into(),
            close_marker: "]".into(),
        }
    }
}
