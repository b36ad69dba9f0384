//! `plank edit` command.

use crate::context::ServiceContext;
use crate::controller::BoardController;

/// Execute the `edit` command.
///
/// Replaces the task's title and due date (omitting the date clears it).
/// An unknown task id prints a notice and changes nothing; a blank title
/// rejects the intent.
///
/// # Errors
///
/// Returns an error string if the title is blank or persisting fails.
pub fn run(
    ctx: &ServiceContext,
    task_id: &str,
    title: &str,
    due: Option<String>,
) -> Result<(), String> {
    let mut controller = BoardController::initialize(ctx)?;
    if controller.board().find_task(task_id).is_none() {
        println!("No task with id \"{task_id}\".");
        return Ok(());
    }
    if !controller.request_edit(task_id, title, due)? {
        return Err("Task title must not be empty.".to_string());
    }
    println!("Updated task {task_id}.");
    Ok(())
}
