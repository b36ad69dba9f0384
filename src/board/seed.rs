//! First-run example dataset.

use super::column::ColumnId;
use super::task::{Subtask, Task};
use super::Board;

/// The board a fresh session starts from when no document has been
/// persisted yet: four example tasks, one per column.
#[must_use]
pub fn seed_board() -> Board {
    Board::with_tasks(vec![
        Task {
            id: "1".to_string(),
            title: "Take Coco to a vet".to_string(),
            due_date: Some("2024-04-11".to_string()),
            subtasks: None,
            column: ColumnId::NotStarted,
        },
        Task {
            id: "2".to_string(),
            title: "Taxes".to_string(),
            due_date: None,
            subtasks: None,
            column: ColumnId::InProgress,
        },
        Task {
            id: "3".to_string(),
            title: "Move".to_string(),
            due_date: None,
            subtasks: Some(vec![
                subtask("s4", "Request moving estimate", false),
                subtask("s5", "Order moving boxes", true),
                subtask("s11", "Schedule utility transfers", false),
                subtask("s12", "Book elevator for moving day", false),
            ]),
            column: ColumnId::Blocked,
        },
        Task {
            id: "4".to_string(),
            title: "Nothing to be done \u{1f60c}".to_string(),
            due_date: None,
            subtasks: None,
            column: ColumnId::Done,
        },
    ])
}

fn subtask(id: &str, title: &str, completed: bool) -> Subtask {
    Subtask { id: id.to_string(), title: title.to_string(), completed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_distributes_one_task_per_column() {
        let board = seed_board();

        assert_eq!(board.tasks.len(), 4);
        for column in ColumnId::ALL {
            assert_eq!(board.tasks_in(column).len(), 1);
        }
    }

    #[test]
    fn seed_checklist_starts_with_boxes_ordered_only() {
        let board = seed_board();
        let subtasks = board.find_task("3").unwrap().subtasks.as_ref().unwrap();

        assert_eq!(subtasks.len(), 4);
        let completed: Vec<&str> =
            subtasks.iter().filter(|s| s.completed).map(|s| s.id.as_str()).collect();
        assert_eq!(completed, vec!["s5"]);
    }
}
