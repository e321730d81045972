//! Highlight validation (colour format, marker presence).

use crate::schema::{HighlightStyle, QuickJumpConfig};
use quickjump_common::Color;

pub(crate) fn validate_highlight(errors: &mut Vec<String>, config: &QuickJumpConfig) {
    let hl = &config.highlight;

    if Color::from_hex(&hl.color).is_none() {
        errors.push(format!("highlight.color = {:?} is not a hex colour", hl.color));
    }

    // Markers only matter when they are drawn.
    if hl.style == HighlightStyle::Markers && hl.open_marker.is_empty() && hl.close_marker.is_empty()
    {
        errors.push("highlight.open_marker and highlight.close_marker are both empty".into());
    }
}
