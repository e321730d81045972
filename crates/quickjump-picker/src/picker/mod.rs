//! Picker -- the overlay model: opened with a tab snapshot, filtered by
//! the typed query, confirmed to jump to the active tab.

mod state;
mod types;

pub use state::*;
pub use types::*;
