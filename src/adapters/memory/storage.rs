//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::storage::KeyValueStore;

/// Key-value store holding blobs in a process-local map.
///
/// Nothing touches the disk; dropping the store drops the data.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = self.entries.lock().map_err(|e| e.to_string())?;
        Ok(entries.get(key).cloned())
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_unwritten_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = MemoryStore::new();
        store.set("doc", "first").unwrap();
        store.set("doc", "second").unwrap();

        assert_eq!(store.get("doc").unwrap().as_deref(), Some("second"));
    }
}
