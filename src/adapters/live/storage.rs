//! File-backed key-value store.

use std::path::PathBuf;

use crate::ports::storage::KeyValueStore;

/// Key-value store keeping one `<key>.json` file per key under a root
/// directory.
///
/// The root is created lazily on first write, so constructing a store
/// never touches the disk.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_unwritten_key() {
        let store = FileStore::new("/tmp/plank_test_filestore_absent");
        assert_eq!(store.get("never-written").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let root = "/tmp/plank_test_filestore_roundtrip";
        let store = FileStore::new(root);

        store.set("doc", "{\"tasks\":[]}").unwrap();
        assert_eq!(store.get("doc").unwrap().as_deref(), Some("{\"tasks\":[]}"));

        std::fs::remove_dir_all(root).ok();
    }
}
