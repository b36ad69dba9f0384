//! `plank toggle` command.

use crate::context::ServiceContext;
use crate::controller::BoardController;

/// Execute the `toggle` command.
///
/// Flips one subtask's completed state. Unknown task or subtask ids print
/// a notice and change nothing.
///
/// # Errors
///
/// Returns an error string if persisting fails.
pub fn run(ctx: &ServiceContext, task_id: &str, subtask_id: &str) -> Result<(), String> {
    let mut controller = BoardController::initialize(ctx)?;
    let Some(task) = controller.board().find_task(task_id) else {
        println!("No task with id \"{task_id}\".");
        return Ok(());
    };
    let known = task
        .subtasks
        .as_ref()
        .is_some_and(|subtasks| subtasks.iter().any(|s| s.id == subtask_id));
    if !known {
        println!("Task \"{}\" has no subtask with id \"{subtask_id}\".", task.title);
        return Ok(());
    }

    controller.request_subtask_toggle(task_id, subtask_id)?;

    let subtask = controller
        .board()
        .find_task(task_id)
        .and_then(|task| task.subtasks.as_ref())
        .and_then(|subtasks| subtasks.iter().find(|s| s.id == subtask_id))
        .ok_or_else(|| format!("Subtask {subtask_id} vanished after toggle"))?;
    if subtask.completed {
        println!("Checked off \"{}\".", subtask.title);
    } else {
        println!("Reopened \"{}\".", subtask.title);
    }
    Ok(())
}
