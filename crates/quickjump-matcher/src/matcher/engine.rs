//! Search engine: per-tab keyword lookup and coverage ranking.

use quickjump_common::Tab;

use super::types::{Entry, Span};

/// Holds the tab snapshot delivered with one picker-open event.
#[derive(Debug, Clone, Default)]
pub struct TabMatcher {
    tabs: Vec<Tab>,
}

impl TabMatcher {
    pub fn new(tabs: Vec<Tab>) -> Self {
        TabMatcher { tabs }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn search<K: AsRef<str>>(&self, keywords: &[K]) -> Vec<Entry> {
        search(&self.tabs, keywords)
    }
}

/// Rank `tabs` against `keywords`.
///
/// Each distinct keyword is looked up literally and case-sensitively in the
/// title and in the URL; only its first occurrence in each field counts.
/// Tabs with no hit are dropped, the rest are ordered by descending
/// [`Entry::coverage`] with ties left in tab order.
pub fn search<K: AsRef<str>>(tabs: &[Tab], keywords: &[K]) -> Vec<Entry> {
    let mut distinct: Vec<&str> = Vec::with_capacity(keywords.len());
    for kw in keywords.iter().map(|k| k.as_ref()) {
        if !kw.is_empty() && !distinct.contains(&kw) {
            distinct.push(kw);
        }
    }

    if distinct.is_empty() || tabs.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<Entry> = tabs
        .iter()
        .filter_map(|tab| {
            let mut entry = Entry::new(tab.clone());
            for kw in &distinct {
                if let Some(span) = first_match(&tab.title, kw) {
                    entry.title_matches.push(span);
                }
                if let Some(span) = first_match(&tab.url, kw) {
                    entry.url_matches.push(span);
                }
            }
            entry.has_matches().then_some(entry)
        })
        .collect();

    // Stable: equal coverage keeps tab order.
    result.sort_by_key(|entry| std::cmp::Reverse(entry.coverage()));

    tracing::debug!(
        tabs = tabs.len(),
        keywords = distinct.len(),
        matched = result.len(),
        "tab search"
    );
    result
}

fn first_match(haystack: &str, keyword: &str) -> Option<Span> {
    let byte_idx = haystack.find(keyword)?;
    let start = haystack[..byte_idx].chars().count();
    Some(Span::new(start, start + keyword.chars().count()))
}
