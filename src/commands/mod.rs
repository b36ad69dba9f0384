//! Command dispatch and handlers.

pub mod add;
pub mod delete;
pub mod edit;
pub mod move_task;
pub mod show;
pub mod toggle;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler against the live context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Show => show::run(ctx),
        Command::Add { title, due } => add::run(ctx, title, due.clone()),
        Command::Edit { task_id, title, due } => edit::run(ctx, task_id, title, due.clone()),
        Command::Delete { task_id } => delete::run(ctx, task_id),
        Command::Move { task_id, column } => move_task::run(ctx, task_id, *column),
        Command::Toggle { task_id, subtask_id } => toggle::run(ctx, task_id, subtask_id),
    }
}
