//! Match types: Span, Entry.

use quickjump_common::Tab;
use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` range of characters (not bytes) in a title or URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A tab together with where the query's keywords hit it.
///
/// Spans are listed in keyword order and may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub tab: Tab,
    pub title_matches: Vec<Span>,
    pub url_matches: Vec<Span>,
}

impl Entry {
    pub(crate) fn new(tab: Tab) -> Self {
        Entry {
            tab,
            title_matches: Vec::new(),
            url_matches: Vec::new(),
        }
    }

    /// Ranking score: total length of every title and URL span.
    pub fn coverage(&self) -> usize {
        self.title_matches
            .iter()
            .chain(&self.url_matches)
            .map(Span::len)
            .sum()
    }

    pub fn has_matches(&self) -> bool {
        !self.title_matches.is_empty() || !self.url_matches.is_empty()
    }
}
