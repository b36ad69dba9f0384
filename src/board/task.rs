//! Task and subtask types.

use serde::{Deserialize, Serialize};

use super::column::ColumnId;

/// A checklist entry belonging to a task.
///
/// Subtasks live and die with their parent task; there is no independent
/// subtask deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    /// Identifier unique within the parent task.
    pub id: String,
    /// Display text.
    pub title: String,
    /// Whether the entry has been checked off.
    pub completed: bool,
}

/// A single card on the board.
///
/// Column membership is stored on the task itself; a rendered column's
/// task list is always computed by filtering on `column`, never stored
/// redundantly. A task belongs to exactly one column at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier unique across the board's lifetime.
    pub id: String,
    /// Display title; non-empty (enforced at the intent boundary).
    pub title: String,
    /// Optional ISO calendar date (`YYYY-MM-DD`), no time component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Optional ordered checklist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Subtask>>,
    /// The column this task currently belongs to.
    pub column: ColumnId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_serializes_camel_case_and_skips_when_absent() {
        let task = Task {
            id: "1".to_string(),
            title: "Take Coco to a vet".to_string(),
            due_date: Some("2024-04-11".to_string()),
            subtasks: None,
            column: ColumnId::NotStarted,
        };
        let json = serde_json::to_string(&task).unwrap();

        assert!(json.contains("\"dueDate\":\"2024-04-11\""));
        assert!(!json.contains("subtasks"));
    }

    #[test]
    fn parses_task_without_optional_fields() {
        let raw = r#"{"id":"2","title":"Taxes","column":"in-progress"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();

        assert_eq!(task.title, "Taxes");
        assert_eq!(task.due_date, None);
        assert_eq!(task.subtasks, None);
        assert_eq!(task.column, ColumnId::InProgress);
    }
}
