//! `plank move` command.

use crate::board::ColumnId;
use crate::context::ServiceContext;
use crate::controller::BoardController;

/// Execute the `move` command.
///
/// Reassigns the task to the destination column. Moving a task to the
/// column it is already in is accepted and changes nothing visible; an
/// unknown task id prints a notice.
///
/// # Errors
///
/// Returns an error string if persisting fails.
pub fn run(ctx: &ServiceContext, task_id: &str, column: ColumnId) -> Result<(), String> {
    let mut controller = BoardController::initialize(ctx)?;
    let Some(task) = controller.board().find_task(task_id) else {
        println!("No task with id \"{task_id}\".");
        return Ok(());
    };
    let title = task.title.clone();
    controller.request_move(task_id, column)?;
    println!("Moved \"{title}\" to {}.", column.title());
    Ok(())
}
