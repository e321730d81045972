use quickjump_common::Color;
use quickjump_config::schema::HighlightConfig;
use quickjump_matcher::{Entry, Span};

use super::{decorate, layout, ItemRenderer};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const REVERSE: &str = "\x1b[7m";

/// Terminal renderer: matches in bold colour, URL dimmed, active title reversed
/// across its whole width, matches included.
#[derive(Debug, Clone)]
pub struct AnsiRenderer {
    match_color: Color,
}

impl AnsiRenderer {
    pub fn new(match_color: Color) -> Self {
        Self { match_color }
    }

    /// Falls back to cyan when the configured colour does not parse.
    pub fn from_config(config: &HighlightConfig) -> Self {
        let color = Color::from_hex(&config.color).unwrap_or_else(|| {
            tracing::warn!("invalid highlight colour '{}', using default", config.color);
            Color::from_rgba(0, 212, 255, 255)
        });
        Self::new(color)
    }

    fn paint(&self, text: &str, spans: &[Span], base: &str) -> String {
        let fg = self.match_color.ansi_fg();
        decorate(
            text,
            spans,
            |s| format!("{base}{BOLD}{fg}{s}{RESET}"),
            |s| format!("{base}{s}{RESET}"),
        )
    }
}

impl ItemRenderer for AnsiRenderer {
    fn render(&self, entry: &Entry, active: bool) -> String {
        let title_base = if active { REVERSE } else { "" };
        layout(
            self.paint(&entry.tab.title, &entry.title_matches, title_base),
            self.paint(&entry.tab.url, &entry.url_matches, DIM),
            active,
        )
    }
}
