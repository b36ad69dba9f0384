//! Column identifiers and the fixed column set.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::task::Task;

/// Identifier for one of the four workflow columns.
///
/// The column set is fixed: columns are never created, removed, or
/// reordered, regardless of how many tasks they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Work that has not been picked up yet.
    NotStarted,
    /// Work currently underway.
    InProgress,
    /// Work waiting on something else.
    Blocked,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// All columns in canonical board order.
    pub const ALL: [ColumnId; 4] =
        [ColumnId::NotStarted, ColumnId::InProgress, ColumnId::Blocked, ColumnId::Done];

    /// Display title shown above the column.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ColumnId::NotStarted => "Not started",
            ColumnId::InProgress => "In progress",
            ColumnId::Blocked => "Blocked",
            ColumnId::Done => "Done",
        }
    }

    /// Stable identifier used in the persisted document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::NotStarted => "not-started",
            ColumnId::InProgress => "in-progress",
            ColumnId::Blocked => "blocked",
            ColumnId::Done => "done",
        }
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A workflow column as it appears in the persisted document.
///
/// The `tasks` list is always empty and never authoritative; column
/// membership is derived from [`Task::column`] alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Fixed column identifier.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
    /// Informational task list, kept empty.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// The four columns in canonical order, each with an empty task list.
    #[must_use]
    pub fn canonical() -> Vec<Column> {
        ColumnId::ALL
            .iter()
            .map(|&id| Column { id, title: id.title().to_string(), tasks: Vec::new() })
            .collect()
    }
}
