//! Board data model and pure mutators.
//!
//! Defines the task/column schema and the transition functions that take a
//! board plus an intent and return a new board. Nothing in this module
//! performs I/O; persistence and intent routing live in the controller.

mod column;
mod mutate;
mod seed;
mod task;

pub use column::{Column, ColumnId};
pub use mutate::{
    add_task, delete_task, move_task, toggle_subtask, update_task, NewTask, TaskPatch,
};
pub use seed::seed_board;
pub use task::{Subtask, Task};

use serde::{Deserialize, Serialize};

/// The aggregate board document: every task plus the fixed column list.
///
/// Tasks sharing a column are ordered by their position in `tasks`; there
/// is no separate per-column ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Every task on the board, across all columns.
    pub tasks: Vec<Task>,
    /// The four workflow columns in canonical order. Informational only;
    /// the mutators never read or write per-column task lists.
    #[serde(default = "Column::canonical")]
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board holding the given tasks and the canonical columns.
    ///
    /// Any column list a persisted document carried is discarded, so the
    /// four fixed columns always exist in canonical order even when the
    /// stored document was partial or hand-edited.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, columns: Column::canonical() }
    }

    /// Tasks belonging to the given column, in overall collection order.
    #[must_use]
    pub fn tasks_in(&self, column: ColumnId) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.column == column).collect()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}
