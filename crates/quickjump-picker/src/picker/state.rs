use quickjump_common::{Event, PlatformError, Tab, TabId};
use quickjump_config::schema::PickerConfig;
use quickjump_matcher::{split_keywords, Entry, TabMatcher};

use super::types::{PickerCommand, Snapshot};
use crate::navigator::Navigator;
use crate::query_store::{QueryStore, SessionQueryStore};

/// Picker state: tab snapshot, query, ranked entries, selection.
///
/// The active entry is tracked by tab id so it stays put when the tab list
/// is refreshed under an open picker.
pub struct Picker<S: QueryStore = SessionQueryStore> {
    matcher: TabMatcher,
    query: String,
    entries: Vec<Entry>,
    active: Option<TabId>,
    open: bool,
    max_results: usize,
    remember_last_query: bool,
    store: S,
}

impl Picker<SessionQueryStore> {
    pub fn new(config: &PickerConfig) -> Self {
        Self::with_store(config, SessionQueryStore::new())
    }
}

impl<S: QueryStore> Picker<S> {
    pub fn with_store(config: &PickerConfig, store: S) -> Self {
        Self {
            matcher: TabMatcher::default(),
            query: String::new(),
            entries: Vec::new(),
            active: None,
            open: false,
            max_results: config.max_results.max(1) as usize,
            remember_last_query: config.remember_last_query,
            store,
        }
    }

    /// Show the picker over a new tab snapshot.
    ///
    /// A closed picker opens with `initial_query` (or, when that is empty and
    /// `remember_last_query` is set, the last query of this session). An
    /// already-open picker only swaps in the new tabs and keeps its query.
    pub fn open(&mut self, tabs: Vec<Tab>, initial_query: &str) {
        let was_open = self.open;
        self.matcher = TabMatcher::new(tabs);

        if !was_open {
            self.open = true;
            self.query = if initial_query.is_empty() && self.remember_last_query {
                self.store.last_query().unwrap_or_default()
            } else {
                initial_query.to_string()
            };
        }

        tracing::debug!(
            tabs = self.matcher.tabs().len(),
            query = %self.query,
            reopened = was_open,
            "picker opened"
        );
        self.refresh(!was_open);
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("picker closed");
        }
        self.open = false;
    }

    /// Set the query and re-search.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.query_changed();
    }

    /// Append a character to the query.
    pub fn append_char(&mut self, c: char) {
        self.query.push(c);
        self.query_changed();
    }

    /// Remove the last character from the query.
    pub fn backspace(&mut self) {
        self.query.pop();
        self.query_changed();
    }

    /// Move selection down, wrapping at the end.
    pub fn select_next(&mut self) {
        let count = self.visible_entries().len();
        if count == 0 {
            return;
        }
        let next = self.active_index().map_or(0, |i| (i + 1) % count);
        self.active = Some(self.entries[next].tab.id);
    }

    /// Move selection up, wrapping at the start.
    pub fn select_prev(&mut self) {
        let count = self.visible_entries().len();
        if count == 0 {
            return;
        }
        let prev = self.active_index().map_or(count - 1, |i| (i + count - 1) % count);
        self.active = Some(self.entries[prev].tab.id);
    }

    /// Jump to the active entry's tab and close.
    ///
    /// Returns `Ok(None)` without side effects when nothing is selected. A
    /// navigation failure leaves the picker open.
    pub fn confirm<N: Navigator + ?Sized>(
        &mut self,
        navigator: &mut N,
    ) -> Result<Option<Tab>, PlatformError> {
        let Some(tab) = self.active_entry().map(|e| e.tab.clone()) else {
            return Ok(None);
        };
        navigator.jump_to(&tab)?;
        tracing::info!(tab = %tab.id, "jumped to tab");
        self.close();
        Ok(Some(tab))
    }

    /// Apply a platform event. Returns `false` for events the picker ignores.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::OpenPicker { tabs, query } => {
                self.open(tabs.clone(), query);
                true
            }
            Event::ClosePicker => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Apply a UI command. `Confirm` goes through `navigator`.
    pub fn apply<N: Navigator + ?Sized>(
        &mut self,
        command: &PickerCommand,
        navigator: &mut N,
    ) -> Result<Option<Tab>, PlatformError> {
        match command {
            PickerCommand::Query(q) => self.set_query(q),
            PickerCommand::Next => self.select_next(),
            PickerCommand::Prev => self.select_prev(),
            PickerCommand::Confirm => return self.confirm(navigator),
            PickerCommand::Close => self.close(),
        }
        Ok(None)
    }

    /// All ranked entries for the current query.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Ranked entries capped at `max_results`.
    pub fn visible_entries(&self) -> &[Entry] {
        &self.entries[..self.entries.len().min(self.max_results)]
    }

    pub fn active_entry(&self) -> Option<&Entry> {
        self.active_index().map(|i| &self.entries[i])
    }

    /// Index of the active entry within `visible_entries()`.
    pub fn active_index(&self) -> Option<usize> {
        let id = self.active?;
        self.visible_entries().iter().position(|e| e.tab.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            open: self.open,
            query: self.query.clone(),
            active: self.active_entry().map(|e| e.tab.id),
            entries: self.visible_entries().to_vec(),
        }
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn query_changed(&mut self) {
        if self.open {
            self.store.set_last_query(&self.query);
        }
        self.refresh(true);
    }

    fn refresh(&mut self, reset_selection: bool) {
        let keywords = split_keywords(&self.query);
        self.entries = self.matcher.search(&keywords);

        if reset_selection || self.active_index().is_none() {
            self.active = self.visible_entries().first().map(|e| e.tab.id);
        }
    }
}
