//! Service context bundling all port trait objects.

use std::path::PathBuf;

use crate::adapters::live::{FileStore, SystemClock, UuidGenerator};
use crate::adapters::memory::MemoryStore;
use crate::ports::{Clock, IdGenerator, KeyValueStore};

/// Bundles the port trait objects into a single context.
///
/// Each field covers one external boundary. Constructors wire up the
/// different adapter sets (live, in-memory).
pub struct ServiceContext {
    /// Blob storage for the persisted board document.
    pub store: Box<dyn KeyValueStore>,
    /// ID generator for newly created tasks.
    pub id_gen: Box<dyn IdGenerator>,
    /// Clock used when rendering due dates.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Creates a live context: file-backed storage, random UUID ids, the
    /// system clock.
    ///
    /// The storage root comes from the `PLANK_STORE` environment variable,
    /// defaulting to `.plank` in the current directory.
    #[must_use]
    pub fn live() -> Self {
        Self {
            store: Box::new(FileStore::new(store_root())),
            id_gen: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
        }
    }

    /// Creates a context whose storage lives entirely in memory.
    ///
    /// Ids and clock are the live adapters; tests that need a pinned date
    /// or fixed ids construct the context field-by-field instead.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            id_gen: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
        }
    }
}

fn store_root() -> PathBuf {
    std::env::var("PLANK_STORE").map_or_else(|_| PathBuf::from(".plank"), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_context_reads_back_writes() {
        let ctx = ServiceContext::in_memory();
        ctx.store.set("doc", "value").unwrap();

        assert_eq!(ctx.store.get("doc").unwrap().as_deref(), Some("value"));
    }
}
