//! `plank show` command.

use chrono::NaiveDate;

use crate::board::{Board, Task};
use crate::context::ServiceContext;
use crate::controller::BoardController;

/// Execute the `show` command.
///
/// Prints the board header, then every column in canonical order with its
/// tasks, checklists, and due dates. Dates before today get an `overdue`
/// marker; a date that does not parse is printed as stored.
///
/// # Errors
///
/// Returns an error string if loading or first-run seeding fails.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let controller = BoardController::initialize(ctx)?;
    let today = ctx.clock.now().date_naive();
    print_board(controller.board(), today);
    Ok(())
}

fn print_board(board: &Board, today: NaiveDate) {
    println!("Personal");
    println!("A board to keep track of personal tasks.");

    for column in &board.columns {
        println!("\n{}", column.title);
        let tasks = board.tasks_in(column.id);
        if tasks.is_empty() {
            println!("  (no tasks)");
            continue;
        }
        for task in tasks {
            print_task(task, today);
        }
    }

    println!("\n{} task(s) total.", board.tasks.len());
}

fn print_task(task: &Task, today: NaiveDate) {
    println!("  {}  {}{}", task.id, task.title, due_suffix(task, today));
    if let Some(subtasks) = &task.subtasks {
        for subtask in subtasks {
            let mark = if subtask.completed { 'x' } else { ' ' };
            println!("      [{mark}] {}  {}", subtask.id, subtask.title);
        }
    }
}

fn due_suffix(task: &Task, today: NaiveDate) -> String {
    let Some(date) = &task.due_date else { return String::new() };
    let overdue =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok_and(|due| due < today);
    if overdue {
        format!("  (due {date}, overdue)")
    } else {
        format!("  (due {date})")
    }
}
