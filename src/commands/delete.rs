//! `plank delete` command.

use crate::context::ServiceContext;
use crate::controller::BoardController;

/// Execute the `delete` command.
///
/// Removes the task and its subtasks. An unknown task id prints a notice
/// and changes nothing.
///
/// # Errors
///
/// Returns an error string if persisting fails.
pub fn run(ctx: &ServiceContext, task_id: &str) -> Result<(), String> {
    let mut controller = BoardController::initialize(ctx)?;
    let Some(task) = controller.board().find_task(task_id) else {
        println!("No task with id \"{task_id}\".");
        return Ok(());
    };
    let title = task.title.clone();
    controller.request_delete(task_id)?;
    println!("Deleted \"{title}\".");
    Ok(())
}
