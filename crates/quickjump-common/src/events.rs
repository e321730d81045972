//! Process-wide picker events.
//!
//! The platform layer publishes [`Event::OpenPicker`] whenever the user invokes
//! the picker; the UI subscribes once at startup. Dropping the receiver
//! returned by [`EventBus::subscribe`] is the unsubscribe.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Tab;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// Open the picker over this tab snapshot with an initial query.
    OpenPicker { tabs: Vec<Tab>, query: String },
    /// The UI has subscribed and can receive `OpenPicker`.
    PickerReady,
    ClosePicker,
    /// The user chose a tab; the platform should focus it.
    JumpTo(Tab),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(_) => {
                tracing::debug!("event dropped: no subscribers");
                0
            }
        }
    }
}
