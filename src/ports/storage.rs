//! Key-value storage port for the persisted board document.

/// Synchronous blob store holding one JSON-serializable document per key.
///
/// Abstracting storage lets the controller and its tests run against an
/// in-memory store instead of the real disk. Reads and writes are whole
/// documents; there is no partial update.
pub trait KeyValueStore: Send + Sync {
    /// Reads the blob stored under `key`, or `None` when the key has never
    /// been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes `value` under `key`, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn set(&self, key: &str, value: &str)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
