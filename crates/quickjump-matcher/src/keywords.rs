//! Query tokenization.

/// Split a raw query into keywords on runs of whitespace.
///
/// Empty tokens are dropped, so an all-whitespace query yields no keywords.
pub fn split_keywords(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}
