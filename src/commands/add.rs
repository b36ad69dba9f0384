//! `plank add` command.

use crate::board::ColumnId;
use crate::context::ServiceContext;
use crate::controller::BoardController;

/// Execute the `add` command.
///
/// Creates a task in the "Not started" column. A title that is empty
/// after trimming rejects the intent: nothing is written and the command
/// fails.
///
/// # Errors
///
/// Returns an error string if the title is blank or persisting fails.
pub fn run(ctx: &ServiceContext, title: &str, due: Option<String>) -> Result<(), String> {
    let mut controller = BoardController::initialize(ctx)?;
    if !controller.request_add(title, due)? {
        return Err("Task title must not be empty.".to_string());
    }
    let task = controller
        .board()
        .tasks
        .last()
        .ok_or_else(|| "Board has no tasks after add".to_string())?;
    println!("Added \"{}\" [{}] to {}.", task.title, task.id, ColumnId::NotStarted.title());
    Ok(())
}
