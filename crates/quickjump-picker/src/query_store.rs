//! Last-query memory. Session scoped; nothing is written to disk.

pub trait QueryStore {
    fn last_query(&self) -> Option<String>;
    fn set_last_query(&mut self, query: &str);
}

/// In-memory store that lives as long as the picker process.
#[derive(Debug, Clone, Default)]
pub struct SessionQueryStore {
    last: Option<String>,
}

impl SessionQueryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryStore for SessionQueryStore {
    fn last_query(&self) -> Option<String> {
        self.last.clone()
    }

    fn set_last_query(&mut self, query: &str) {
        self.last = Some(query.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(SessionQueryStore::new().last_query(), None);
    }

    #[test]
    fn remembers_latest() {
        let mut store = SessionQueryStore::new();
        store.set_last_query("git");
        store.set_last_query("git pr");
        assert_eq!(store.last_query().as_deref(), Some("git pr"));
    }
}
