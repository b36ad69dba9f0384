//! Pure board transition functions.
//!
//! Each function takes the current board plus operation arguments and
//! returns a new board; inputs are never mutated and no function performs
//! I/O. All five are total: an id that matches no task (or no subtask)
//! degrades to an identity transformation rather than an error.

use super::column::ColumnId;
use super::task::{Subtask, Task};
use super::Board;

/// Fields for a task about to be added, minus the generated id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    /// Display title.
    pub title: String,
    /// Optional ISO calendar date (`YYYY-MM-DD`).
    pub due_date: Option<String>,
    /// Optional checklist; tasks created through the standard intent
    /// surface start without one.
    pub subtasks: Option<Vec<Subtask>>,
    /// Destination column.
    pub column: ColumnId,
}

impl NewTask {
    /// A task destined for the default "Not started" column, with no
    /// checklist.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: Option<String>) -> Self {
        Self { title: title.into(), due_date, subtasks: None, column: ColumnId::NotStarted }
    }
}

/// A shallow update to a task's editable fields.
///
/// An outer `None` leaves the field untouched; `due_date: Some(None)`
/// clears any stored due date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    /// Replacement title, when present.
    pub title: Option<String>,
    /// Replacement due date: `Some(Some(d))` sets, `Some(None)` clears.
    pub due_date: Option<Option<String>>,
}

/// Reassigns the matching task to `target`.
///
/// All other tasks and all subtasks are unchanged, and the task keeps its
/// position in the overall collection: a cross-column move changes column
/// affiliation only, it does not insert the task at a particular rank in
/// the destination column.
#[must_use]
pub fn move_task(board: &Board, task_id: &str, target: ColumnId) -> Board {
    let tasks = board
        .tasks
        .iter()
        .map(|task| {
            if task.id == task_id {
                Task { column: target, ..task.clone() }
            } else {
                task.clone()
            }
        })
        .collect();
    Board { tasks, columns: board.columns.clone() }
}

/// Appends a task built from `new_task` under the caller-supplied `id`.
///
/// Id generation goes through the `IdGenerator` port at the intent layer,
/// keeping this function deterministic.
#[must_use]
pub fn add_task(board: &Board, id: String, new_task: NewTask) -> Board {
    let mut tasks = board.tasks.clone();
    tasks.push(Task {
        id,
        title: new_task.title,
        due_date: new_task.due_date,
        subtasks: new_task.subtasks,
        column: new_task.column,
    });
    Board { tasks, columns: board.columns.clone() }
}

/// Merges `patch` into the matching task.
///
/// Provided fields overwrite, omitted fields keep their prior value.
#[must_use]
pub fn update_task(board: &Board, task_id: &str, patch: &TaskPatch) -> Board {
    let tasks = board
        .tasks
        .iter()
        .map(|task| {
            if task.id != task_id {
                return task.clone();
            }
            let mut updated = task.clone();
            if let Some(title) = &patch.title {
                updated.title = title.clone();
            }
            if let Some(due_date) = &patch.due_date {
                updated.due_date = due_date.clone();
            }
            updated
        })
        .collect();
    Board { tasks, columns: board.columns.clone() }
}

/// Removes the matching task, and with it its subtasks.
#[must_use]
pub fn delete_task(board: &Board, task_id: &str) -> Board {
    let tasks = board.tasks.iter().filter(|task| task.id != task_id).cloned().collect();
    Board { tasks, columns: board.columns.clone() }
}

/// Flips the `completed` flag of the matching subtask within the matching
/// task.
#[must_use]
pub fn toggle_subtask(board: &Board, task_id: &str, subtask_id: &str) -> Board {
    let tasks = board
        .tasks
        .iter()
        .map(|task| {
            let Some(subtasks) = &task.subtasks else { return task.clone() };
            if task.id != task_id {
                return task.clone();
            }
            let toggled = subtasks
                .iter()
                .map(|subtask| {
                    if subtask.id == subtask_id {
                        Subtask { completed: !subtask.completed, ..subtask.clone() }
                    } else {
                        subtask.clone()
                    }
                })
                .collect();
            Task { subtasks: Some(toggled), ..task.clone() }
        })
        .collect();
    Board { tasks, columns: board.columns.clone() }
}
