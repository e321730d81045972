//! Split a title or URL into matched and unmatched runs for display.

use crate::matcher::Span;

/// One run of a highlighted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Partition `text` into alternating unmatched/matched segments.
///
/// Spans are character ranges. They are sorted, clamped to the string and
/// overlapping spans are coalesced, so raw [`Entry`] spans can be passed in
/// directly. Spans that only touch stay separate matched segments.
/// Concatenating the segments yields `text` unchanged.
///
/// [`Entry`]: crate::Entry
pub fn segments<'a>(text: &'a str, spans: &[Span]) -> Vec<Segment<'a>> {
    // Byte offset of every char boundary, including the end of the string.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = offsets.len() - 1;

    let mut out = Vec::new();
    let mut cursor = 0;
    for span in coalesce(spans, char_len) {
        if cursor < span.start {
            out.push(Segment {
                text: &text[offsets[cursor]..offsets[span.start]],
                matched: false,
            });
        }
        out.push(Segment {
            text: &text[offsets[span.start]..offsets[span.end]],
            matched: true,
        });
        cursor = span.end;
    }
    if cursor < char_len {
        out.push(Segment {
            text: &text[offsets[cursor]..],
            matched: false,
        });
    }
    out
}

fn coalesce(spans: &[Span], char_len: usize) -> Vec<Span> {
    let mut sorted: Vec<Span> = spans
        .iter()
        .map(|s| Span::new(s.start.min(char_len), s.end.min(char_len)))
        .filter(|s| !s.is_empty())
        .collect();
    sorted.sort_by_key(|s| s.start);

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start < last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}
