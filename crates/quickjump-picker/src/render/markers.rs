use quickjump_matcher::Entry;

use super::{decorate, layout, ItemRenderer};

/// Plain-text renderer that brackets each match, e.g. `[git]hub.com`.
#[derive(Debug, Clone)]
pub struct MarkerRenderer {
    open: String,
    close: String,
}

impl MarkerRenderer {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// No markers at all: the raw title and URL.
    pub fn plain() -> Self {
        Self::new("", "")
    }

    fn mark(&self, text: &str, spans: &[quickjump_matcher::Span]) -> String {
        decorate(
            text,
            spans,
            |s| format!("{}{s}{}", self.open, self.close),
            str::to_string,
        )
    }
}

impl ItemRenderer for MarkerRenderer {
    fn render(&self, entry: &Entry, active: bool) -> String {
        layout(
            self.mark(&entry.tab.title, &entry.title_matches),
            self.mark(&entry.tab.url, &entry.url_matches),
            active,
        )
    }
}
