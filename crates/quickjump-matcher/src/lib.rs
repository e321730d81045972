//! Tab matching: literal keyword search over tab titles and URLs, ranked by
//! how many characters the keywords cover.

pub mod highlight;
pub mod keywords;
pub mod matcher;

pub use highlight::{segments, Segment};
pub use keywords::split_keywords;
pub use matcher::{search, Entry, Span, TabMatcher};
