//! JSON-lines bridge between the picker and a platform host.
//!
//! Messages flow in both directions, one JSON object per line:
//! - **host -> picker**: platform events (`OpenPicker`, `ClosePicker`,
//!   `Shutdown`), UI commands (`Query`, `Next`, `Prev`, `Confirm`, `Close`)
//!   and raw key presses (`{"type":"Key","data":"Down"}`) resolved through
//!   `[keybinds]`.
//! - **picker -> host**: `PickerReady` once at startup, a `Snapshot` after
//!   every handled line, and `JumpTo` when the user confirms a tab.
//!
//! Everything except the snapshot travels over an [`EventBus`]: inbound
//! platform events are published for the picker, and the picker's outbound
//! events are published back and forwarded to the host.

use std::io::{BufRead, Write};

use quickjump_common::{Event, EventBus, PlatformError, Result, Tab};
use quickjump_config::schema::KeybindConfig;
use quickjump_picker::{Navigator, Picker, PickerCommand, Snapshot};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, error::TryRecvError};

/// A line from the host. Commands and keys are tried first: `Event` swallows
/// unknown tags into `Event::Unknown`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Incoming {
    Command(PickerCommand),
    Key(KeyPress),
    Event(Event),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "data")]
enum KeyPress {
    Key(String),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data")]
enum Reply<'a> {
    Snapshot(&'a Snapshot),
}

/// Navigator that announces the jump on the bus for the host to perform.
struct BusNavigator<'a> {
    bus: &'a EventBus,
}

impl Navigator for BusNavigator<'_> {
    fn jump_to(&mut self, tab: &Tab) -> std::result::Result<(), PlatformError> {
        if self.bus.publish(Event::JumpTo(tab.clone())) == 0 {
            return Err(PlatformError::NavigationError(format!(
                "nobody is listening for jumps to {}",
                tab.id
            )));
        }
        Ok(())
    }
}

/// Serve the bridge until `Shutdown` or end of input.
pub fn run(
    picker: &mut Picker,
    keybinds: &KeybindConfig,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let bus = EventBus::new(64);
    let mut events = bus.subscribe();

    bus.publish(Event::PickerReady);
    pump(picker, &mut events, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let incoming: Incoming = match serde_json::from_str(line) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!("skipping malformed bridge line: {e}");
                continue;
            }
        };

        match incoming {
            Incoming::Command(cmd) => apply(picker, &bus, &cmd),
            Incoming::Key(KeyPress::Key(key)) => match PickerCommand::for_key(keybinds, &key) {
                Some(cmd) => apply(picker, &bus, &cmd),
                None => tracing::debug!("no binding for key {key:?}"),
            },
            Incoming::Event(Event::Shutdown) => break,
            Incoming::Event(Event::Unknown) => {
                tracing::warn!("ignoring unknown event: {line}");
                continue;
            }
            Incoming::Event(Event::PickerReady | Event::JumpTo(_)) => {
                tracing::warn!("ignoring outbound-only event from host: {line}");
                continue;
            }
            Incoming::Event(event) => {
                bus.publish(event);
            }
        }

        pump(picker, &mut events, &mut output)?;
        write_line(&mut output, &Reply::Snapshot(&picker.snapshot()))?;
    }

    drop(events);
    tracing::debug!("bridge closed");
    Ok(())
}

fn apply(picker: &mut Picker, bus: &EventBus, cmd: &PickerCommand) {
    let mut navigator = BusNavigator { bus };
    if let Err(e) = picker.apply(cmd, &mut navigator) {
        tracing::warn!("command {cmd:?} failed: {e}");
    }
}

/// Drain the bus: outbound events go to the host, the rest to the picker.
fn pump(
    picker: &mut Picker,
    events: &mut broadcast::Receiver<Event>,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event @ (Event::PickerReady | Event::JumpTo(_))) => write_line(output, &event)?,
            Ok(event) => {
                picker.handle_event(&event);
            }
            Err(TryRecvError::Lagged(n)) => tracing::warn!("picker lagged {n} events"),
            Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(()),
        }
    }
}

fn write_line(output: &mut impl Write, msg: &impl Serialize) -> Result<()> {
    serde_json::to_writer(&mut *output, msg)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
