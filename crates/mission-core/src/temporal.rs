//! Temporal classification of tasks into the dashboard's three windows.

use crate::task::Task;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// The terminal kanban column. Tasks here are finished and never count as
/// overdue, however stale their due date.
pub const DONE_COLUMN: &str = "Done";

/// Tasks bucketed by due date relative to a reference day. A task lands in
/// at most one window; tasks without a due date land in none.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalWindows {
    pub today_tasks: Vec<Task>,
    pub overdue_tasks: Vec<Task>,
    pub upcoming_tasks: Vec<Task>,
}

/// Classify `tasks` against `today`: due exactly today; overdue (due before
/// today and not yet in the Done column); upcoming (due within the next
/// seven days, day seven inclusive).
pub fn classify_tasks(tasks: &[Task], today: NaiveDate) -> TemporalWindows {
    let horizon = today + Duration::days(7);
    let mut windows = TemporalWindows::default();

    for task in tasks {
        let Some(due) = task.due_date else {
            continue;
        };

        if due == today {
            windows.today_tasks.push(task.clone());
        } else if due < today {
            if task.column != DONE_COLUMN {
                windows.overdue_tasks.push(task.clone());
            }
        } else if due <= horizon {
            windows.upcoming_tasks.push(task.clone());
        }
    }

    windows
}
