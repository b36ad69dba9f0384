//! Board persistence — one JSON document under a fixed storage key.
//!
//! All I/O goes through the `KeyValueStore` port so the same code runs
//! against the file-backed and in-memory adapters.

use crate::board::Board;
use crate::context::ServiceContext;

/// Storage key the board document is persisted under.
pub const STORAGE_KEY: &str = "kanban-data";

/// Persistence layer for the board document.
pub struct BoardStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BoardStore<'a> {
    /// Creates a store over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Loads the persisted board, if any.
    ///
    /// An absent document returns `Ok(None)`. A document that fails to
    /// parse also returns `Ok(None)`: corrupted data degrades to the
    /// first-run path instead of wedging the session. A parsed document's
    /// column list is discarded in favor of the canonical four.
    ///
    /// # Errors
    ///
    /// Returns an error string if the underlying store read fails.
    pub fn load(&self) -> Result<Option<Board>, String> {
        let raw = self
            .ctx
            .store
            .get(STORAGE_KEY)
            .map_err(|e| format!("Failed to read board document: {e}"))?;
        let Some(raw) = raw else { return Ok(None) };
        match serde_json::from_str::<Board>(&raw) {
            Ok(board) => Ok(Some(Board::with_tasks(board.tasks))),
            Err(_) => Ok(None),
        }
    }

    /// Persists the full board document.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization or the store write fails.
    pub fn save(&self, board: &Board) -> Result<(), String> {
        let json = serde_json::to_string(board)
            .map_err(|e| format!("Failed to serialize board: {e}"))?;
        self.ctx
            .store
            .set(STORAGE_KEY, &json)
            .map_err(|e| format!("Failed to write board document: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{seed_board, ColumnId};

    #[test]
    fn load_returns_none_on_empty_store() {
        let ctx = ServiceContext::in_memory();
        let store = BoardStore::new(&ctx);

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let ctx = ServiceContext::in_memory();
        let store = BoardStore::new(&ctx);
        let board = seed_board();

        store.save(&board).unwrap();
        let loaded = store.load().unwrap().expect("board should be present");

        assert_eq!(loaded, board);
    }

    #[test]
    fn load_treats_corrupted_document_as_absent() {
        let ctx = ServiceContext::in_memory();
        ctx.store.set(STORAGE_KEY, "not json {").unwrap();
        let store = BoardStore::new(&ctx);

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn load_discards_stored_column_lists() {
        let ctx = ServiceContext::in_memory();
        // A hand-edited document with a populated, out-of-order column list.
        let raw = r#"{
            "tasks": [{"id":"9","title":"Stray","column":"blocked"}],
            "columns": [{"id":"done","title":"Done","tasks":[
                {"id":"9","title":"Stray","column":"blocked"}
            ]}]
        }"#;
        ctx.store.set(STORAGE_KEY, raw).unwrap();

        let loaded = BoardStore::new(&ctx).load().unwrap().expect("board should parse");

        assert_eq!(loaded.columns.len(), 4);
        assert!(loaded.columns.iter().all(|c| c.tasks.is_empty()));
        assert_eq!(loaded.tasks_in(ColumnId::Blocked).len(), 1);
    }

    #[test]
    fn persisted_document_keeps_empty_column_task_arrays() {
        let ctx = ServiceContext::in_memory();
        BoardStore::new(&ctx).save(&seed_board()).unwrap();

        let raw = ctx.store.get(STORAGE_KEY).unwrap().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let columns = doc["columns"].as_array().unwrap();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0]["id"], "not-started");
        assert!(columns.iter().all(|c| c["tasks"].as_array().unwrap().is_empty()));
    }
}
