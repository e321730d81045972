//! Tab matcher -- find query keywords in tab titles and URLs.
//!
//! Matching is literal substring search; there is no regex or fuzzy mode.

mod engine;
mod types;

pub use engine::*;
pub use types::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
