//! Item rendering -- turn an [`Entry`] into display text.
//!
//! The matcher never depends on this; alternative renderers plug in through
//! [`ItemRenderer`].

mod ansi;
mod markers;

pub use ansi::AnsiRenderer;
pub use markers::MarkerRenderer;

use quickjump_config::schema::{HighlightConfig, HighlightStyle};
use quickjump_matcher::{segments, Entry, Span};

/// Produces the display form of one picker row.
pub trait ItemRenderer {
    fn render(&self, entry: &Entry, active: bool) -> String;
}

/// Build the renderer selected by the highlight config.
pub fn renderer_for(config: &HighlightConfig) -> Box<dyn ItemRenderer> {
    match config.style {
        HighlightStyle::Ansi => Box::new(AnsiRenderer::from_config(config)),
        HighlightStyle::Markers => Box::new(MarkerRenderer::new(
            config.open_marker.clone(),
            config.close_marker.clone(),
        )),
        HighlightStyle::Plain => Box::new(MarkerRenderer::plain()),
    }
}

/// Shared row layout: cursor + title, then the URL indented underneath.
fn layout(title: String, url: String, active: bool) -> String {
    let cursor = if active { ">" } else { " " };
    format!("{cursor} {title}\n    {url}")
}

/// Wrap matched and unmatched runs of `text` with the given closures.
fn decorate(
    text: &str,
    spans: &[Span],
    mut matched: impl FnMut(&str) -> String,
    mut unmatched: impl FnMut(&str) -> String,
) -> String {
    segments(text, spans)
        .into_iter()
        .map(|seg| {
            if seg.matched {
                matched(seg.text)
            } else {
                unmatched(seg.text)
            }
        })
        .collect()
}
