//! Board controller — owns the live board and mediates user intents.
//!
//! The controller holds the authoritative in-memory board for the
//! session. Every accepted intent runs a pure mutator and persists the
//! resulting board in full before returning; rejected intents leave both
//! the board and the store untouched. The presentation layer only ever
//! sees read-only snapshots and routes all changes through the intent
//! methods.

use crate::board::{self, Board, ColumnId, NewTask, Task, TaskPatch};
use crate::context::ServiceContext;
use crate::drag::{self, DropTarget, Point, Rect};
use crate::store::BoardStore;

/// Owns the board state and the drag-gesture marker for one session.
pub struct BoardController<'a> {
    ctx: &'a ServiceContext,
    board: Board,
    active_task_id: Option<String>,
}

impl<'a> BoardController<'a> {
    /// Loads the persisted board or, on first run, seeds and persists the
    /// example dataset.
    ///
    /// Absent and unparseable documents both take the seeding path, so a
    /// corrupted store can never wedge the session. Re-initializing
    /// against an existing document never rewrites it.
    ///
    /// # Errors
    ///
    /// Returns an error string if the store cannot be read, or if the
    /// first-run seed cannot be written.
    pub fn initialize(ctx: &'a ServiceContext) -> Result<Self, String> {
        let store = BoardStore::new(ctx);
        let board = match store.load()? {
            Some(board) => board,
            None => {
                let seeded = board::seed_board();
                store.save(&seeded)?;
                seeded
            }
        };
        Ok(Self { ctx, board, active_task_id: None })
    }

    /// Read-only snapshot of the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The task currently being dragged, if any.
    ///
    /// Looked up from the live board rather than carried separately, so
    /// it always reflects the latest state.
    #[must_use]
    pub fn active_task(&self) -> Option<&Task> {
        self.active_task_id.as_deref().and_then(|id| self.board.find_task(id))
    }

    /// Moves a task to the given column and persists.
    ///
    /// An unknown task id leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error string if persisting fails.
    pub fn request_move(&mut self, task_id: &str, target: ColumnId) -> Result<(), String> {
        self.commit(board::move_task(&self.board, task_id, target))
    }

    /// Adds a task to the "Not started" column and persists.
    ///
    /// Returns `Ok(false)` without touching the board or the store when
    /// the trimmed title is empty.
    ///
    /// # Errors
    ///
    /// Returns an error string if persisting fails.
    pub fn request_add(&mut self, title: &str, due_date: Option<String>) -> Result<bool, String> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(false);
        }
        let id = self.ctx.id_gen.generate_id();
        self.commit(board::add_task(&self.board, id, NewTask::new(title, due_date)))?;
        Ok(true)
    }

    /// Retitles a task, replaces its due date, and persists.
    ///
    /// Passing `None` for `due_date` clears any stored date. The same
    /// empty-title rejection rule as [`request_add`](Self::request_add)
    /// applies; an unknown task id leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error string if persisting fails.
    pub fn request_edit(
        &mut self,
        task_id: &str,
        title: &str,
        due_date: Option<String>,
    ) -> Result<bool, String> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(false);
        }
        let patch = TaskPatch { title: Some(title.to_string()), due_date: Some(due_date) };
        self.commit(board::update_task(&self.board, task_id, &patch))?;
        Ok(true)
    }

    /// Deletes a task (and its subtasks) and persists.
    ///
    /// # Errors
    ///
    /// Returns an error string if persisting fails.
    pub fn request_delete(&mut self, task_id: &str) -> Result<(), String> {
        self.commit(board::delete_task(&self.board, task_id))
    }

    /// Toggles a subtask's completed flag and persists.
    ///
    /// # Errors
    ///
    /// Returns an error string if persisting fails.
    pub fn request_subtask_toggle(
        &mut self,
        task_id: &str,
        subtask_id: &str,
    ) -> Result<(), String> {
        self.commit(board::toggle_subtask(&self.board, task_id, subtask_id))
    }

    /// Marks a task as actively dragged.
    ///
    /// Returns `false` and stays idle when the id matches no task or a
    /// drag is already in progress; starting from idle is the only entry
    /// transition.
    pub fn drag_start(&mut self, task_id: &str) -> bool {
        if self.active_task_id.is_some() || self.board.find_task(task_id).is_none() {
            return false;
        }
        self.active_task_id = Some(task_id.to_string());
        true
    }

    /// Completes the active drag with an already-resolved destination.
    ///
    /// The active marker is always cleared. A move is applied and
    /// persisted only when a destination exists and differs from the
    /// task's current column; a missing destination, a same-column
    /// destination, or a task deleted mid-drag is a true no-op with no
    /// store write. Returns whether a move happened.
    ///
    /// # Errors
    ///
    /// Returns an error string if persisting fails.
    pub fn drag_end(&mut self, destination: Option<ColumnId>) -> Result<bool, String> {
        let Some(task_id) = self.active_task_id.take() else { return Ok(false) };
        let Some(destination) = destination else { return Ok(false) };
        let moves =
            self.board.find_task(&task_id).is_some_and(|task| task.column != destination);
        if !moves {
            return Ok(false);
        }
        self.request_move(&task_id, destination)?;
        Ok(true)
    }

    /// Completes the active drag from a raw release, resolving the
    /// destination with the two-pass hit test in [`drag`].
    ///
    /// # Errors
    ///
    /// Returns an error string if persisting fails.
    pub fn drag_release(
        &mut self,
        pointer: Point,
        card: &Rect,
        targets: &[DropTarget],
    ) -> Result<bool, String> {
        let destination = drag::resolve_drop_target(pointer, card, targets);
        self.drag_end(destination)
    }

    /// Abandons the active drag without running any mutator.
    pub fn drag_cancel(&mut self) {
        self.active_task_id = None;
    }

    /// Persists `next` and, only once the write succeeded, makes it the
    /// live board.
    fn commit(&mut self, next: Board) -> Result<(), String> {
        BoardStore::new(self.ctx).save(&next)?;
        self.board = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::STORAGE_KEY;

    fn controller(ctx: &ServiceContext) -> BoardController<'_> {
        BoardController::initialize(ctx).expect("initialize should succeed")
    }

    fn persisted_board(ctx: &ServiceContext) -> Board {
        let raw = ctx.store.get(STORAGE_KEY).unwrap().expect("document should exist");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn initialize_seeds_empty_store() {
        let ctx = ServiceContext::in_memory();
        let controller = controller(&ctx);

        assert_eq!(controller.board().tasks.len(), 4);
        assert_eq!(persisted_board(&ctx).tasks.len(), 4);
    }

    #[test]
    fn initialize_is_idempotent_over_existing_data() {
        let ctx = ServiceContext::in_memory();
        {
            let mut first = controller(&ctx);
            first.request_delete("4").unwrap();
        }
        let second = controller(&ctx);

        // The earlier session's state survives; no re-seed happened.
        assert_eq!(second.board().tasks.len(), 3);
        assert_eq!(second.board().find_task("4"), None);
    }

    #[test]
    fn every_accepted_intent_persists_the_full_board() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);

        controller.request_move("2", ColumnId::Done).unwrap();
        assert_eq!(persisted_board(&ctx), *controller.board());

        controller.request_add("Buy milk", None).unwrap();
        assert_eq!(persisted_board(&ctx), *controller.board());

        controller.request_subtask_toggle("3", "s4").unwrap();
        assert_eq!(persisted_board(&ctx), *controller.board());
    }

    #[test]
    fn request_add_rejects_whitespace_title() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);
        let before = persisted_board(&ctx);

        assert!(!controller.request_add("   ", None).unwrap());
        assert_eq!(controller.board().tasks.len(), 4);
        assert_eq!(persisted_board(&ctx), before);
    }

    #[test]
    fn request_add_trims_title_and_defaults_column() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);

        assert!(controller.request_add("  Buy milk  ", None).unwrap());
        let task = controller.board().tasks.last().unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.column, ColumnId::NotStarted);
        assert_eq!(task.subtasks, None);
    }

    #[test]
    fn request_edit_rejects_empty_title() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);

        assert!(!controller.request_edit("2", "", None).unwrap());
        assert_eq!(controller.board().find_task("2").unwrap().title, "Taxes");
    }

    #[test]
    fn request_edit_replaces_title_and_clears_date() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);

        assert!(controller.request_edit("1", "Vet appointment", None).unwrap());
        let task = controller.board().find_task("1").unwrap();
        assert_eq!(task.title, "Vet appointment");
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn drag_start_requires_existing_task_and_idle_state() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);

        assert!(!controller.drag_start("missing"));
        assert!(controller.drag_start("1"));
        assert_eq!(controller.active_task().unwrap().id, "1");
        // A second start while dragging is ignored.
        assert!(!controller.drag_start("2"));
        assert_eq!(controller.active_task().unwrap().id, "1");
    }

    #[test]
    fn drag_end_without_destination_is_true_noop() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);
        let before = persisted_board(&ctx);

        controller.drag_start("1");
        assert!(!controller.drag_end(None).unwrap());
        assert_eq!(controller.active_task(), None);
        assert_eq!(persisted_board(&ctx), before);
    }

    #[test]
    fn drag_end_to_same_column_is_true_noop() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);
        let before = persisted_board(&ctx);

        controller.drag_start("2");
        assert!(!controller.drag_end(Some(ColumnId::InProgress)).unwrap());
        assert_eq!(persisted_board(&ctx), before);
    }

    #[test]
    fn drag_end_with_new_column_moves_and_persists() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);

        controller.drag_start("2");
        assert!(controller.drag_end(Some(ColumnId::Done)).unwrap());
        assert_eq!(controller.active_task(), None);
        assert_eq!(
            controller.board().find_task("2").unwrap().column,
            ColumnId::Done
        );
        assert_eq!(persisted_board(&ctx), *controller.board());
    }

    #[test]
    fn drag_cancel_clears_marker_without_mutation() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);
        let before = persisted_board(&ctx);

        controller.drag_start("3");
        controller.drag_cancel();

        assert_eq!(controller.active_task(), None);
        assert_eq!(persisted_board(&ctx), before);
    }

    #[test]
    fn active_task_reflects_edits_made_mid_drag() {
        let ctx = ServiceContext::in_memory();
        let mut controller = controller(&ctx);

        controller.drag_start("2");
        controller.request_edit("2", "Taxes 2024", None).unwrap();

        assert_eq!(controller.active_task().unwrap().title, "Taxes 2024");
    }
}
