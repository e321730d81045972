//! Picker types: PickerCommand, Snapshot.

use quickjump_common::TabId;
use quickjump_config::schema::KeybindConfig;
use quickjump_matcher::Entry;
use serde::{Deserialize, Serialize};

/// A user action on an open picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PickerCommand {
    /// Replace the query text.
    Query(String),
    Next,
    Prev,
    Confirm,
    Close,
}

impl PickerCommand {
    /// The command `key` is bound to in `[keybinds]`, compared exactly.
    ///
    /// `open_picker` belongs to the platform layer and never maps here.
    pub fn for_key(keybinds: &KeybindConfig, key: &str) -> Option<Self> {
        [
            (&keybinds.select_next, Self::Next),
            (&keybinds.select_prev, Self::Prev),
            (&keybinds.confirm, Self::Confirm),
            (&keybinds.close, Self::Close),
        ]
        .into_iter()
        .find(|(binding, _)| binding.as_str() == key)
        .map(|(_, command)| command)
    }
}

/// What the presentation layer needs to draw the picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub open: bool,
    pub query: String,
    pub active: Option<TabId>,
    pub entries: Vec<Entry>,
}
