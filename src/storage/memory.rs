//! In-memory profile store for native builds and tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{ProfileStore, StoreError};

/// Non-persistent [`ProfileStore`] backed by a `HashMap`.
///
/// Desktop builds have no localStorage equivalent wired up, so they fall back
/// to this store; unit tests use it to exercise the submit/restore logic.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = InMemoryProfileStore::new();
        assert_eq!(store.get("scholarId").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let store = InMemoryProfileStore::new();
        store.set("scholarId", "jd123").unwrap();
        assert_eq!(store.get("scholarId").unwrap().as_deref(), Some("jd123"));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let store = InMemoryProfileStore::new();
        store.set("scholarId", "old").unwrap();
        store.set("scholarId", "new").unwrap();
        assert_eq!(store.get("scholarId").unwrap().as_deref(), Some("new"));
    }
}
