//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::board::ColumnId;

/// Top-level CLI parser for `plank`.
#[derive(Debug, Parser)]
#[command(name = "plank", version, about = "Track personal tasks on a kanban board")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the board, column by column.
    Show,
    /// Add a task to the "Not started" column.
    Add {
        /// Task title.
        title: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<String>,
    },
    /// Retitle a task and replace its due date.
    Edit {
        /// Id of the task to edit.
        task_id: String,
        /// New title.
        title: String,
        /// New due date (YYYY-MM-DD); omit to clear an existing date.
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a task along with its subtasks.
    Delete {
        /// Id of the task to delete.
        task_id: String,
    },
    /// Move a task to another column.
    Move {
        /// Id of the task to move.
        task_id: String,
        /// Destination column.
        column: ColumnId,
    },
    /// Toggle a subtask's completed state.
    Toggle {
        /// Id of the parent task.
        task_id: String,
        /// Id of the subtask to toggle.
        subtask_id: String,
    },
}
