//! The tab picker: query state, selection and rendering around the matcher.
//!
//! Browser specifics stay behind two seams: [`Navigator`] performs the jump
//! and [`QueryStore`] remembers the last query for the session.

pub mod navigator;
pub mod picker;
pub mod query_store;
pub mod render;

pub use navigator::Navigator;
pub use picker::{Picker, PickerCommand, Snapshot};
pub use query_store::{QueryStore, SessionQueryStore};
pub use render::{renderer_for, AnsiRenderer, ItemRenderer, MarkerRenderer};
