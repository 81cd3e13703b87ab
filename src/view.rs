//! Rendering: a declarative description of the week screen
//!
//! [`week_view`] derives everything a front-end needs from the current state.
//! It performs no I/O and knows nothing about terminals, which keeps the
//! rendering logic testable on its own. The whole description is rebuilt on
//! every call; there is no diffing.

use crate::accordion::ExpandedState;
use crate::board::{TaskBoard, DAY_TASK_CAPACITY};
use crate::date::{DateKey, WeekWindow};
use crate::task::Task;
use crate::task::TaskId;

/// Title of the hint shown when the visible week holds no tasks at all
pub const EMPTY_WEEK_TITLE: &str = "No tasks yet";
/// Body of that hint
pub const EMPTY_WEEK_HINT: &str = "Add up to 3 tasks per day to begin your focused week.";
/// Warning shown on a day that reached its capacity
pub const LIMIT_WARNING: &str = "Limit reached (3 tasks). Prioritize or delete one.";

/// One task row
#[derive(Clone, Debug, PartialEq)]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// One day card
#[derive(Clone, Debug, PartialEq)]
pub struct DayView {
    pub date: DateKey,
    /// "Mon"
    pub weekday_label: String,
    /// "Jun 3"
    pub date_label: String,
    pub is_today: bool,
    pub expanded: bool,
    pub tasks: Vec<TaskView>,
    /// Current count, for the "n/3" capacity badge
    pub task_count: usize,
    pub capacity: usize,
    /// At capacity: the add control is disabled and `warning` is set
    pub limit_reached: bool,
    pub warning: Option<&'static str>,
}

/// The completion bar, covering the whole board (not only the visible week)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressView {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

/// The whole week screen
#[derive(Clone, Debug, PartialEq)]
pub struct WeekView {
    /// "Jun 3 — Jun 9"
    pub range_label: String,
    /// Present when the visible week holds zero tasks
    pub empty_week_hint: Option<&'static str>,
    pub days: Vec<DayView>,
    pub progress: ProgressView,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            text: task.text().to_string(),
            completed: task.completed(),
        }
    }
}

/// Build the complete description of the week screen.
///
/// Pure function of its inputs. The caller is expected to have normalized
/// `expanded` for this week beforehand (see [`ExpandedState::normalize`]).
pub fn week_view(
    week: &WeekWindow,
    board: &TaskBoard,
    expanded: &ExpandedState,
    today: DateKey,
) -> WeekView {
    let days: Vec<DayView> = week
        .days()
        .into_iter()
        .map(|date| {
            let tasks: Vec<TaskView> = board.tasks_for(date).iter().map(TaskView::from).collect();
            let task_count = tasks.len();
            let limit_reached = task_count >= DAY_TASK_CAPACITY;
            DayView {
                date,
                weekday_label: date.weekday_label(),
                date_label: date.date_label(),
                is_today: date == today,
                expanded: expanded.is_expanded(date, today),
                tasks,
                task_count,
                capacity: DAY_TASK_CAPACITY,
                limit_reached,
                warning: if limit_reached { Some(LIMIT_WARNING) } else { None },
            }
        })
        .collect();

    let progress = board.progress();
    WeekView {
        range_label: week.range_label(),
        empty_week_hint: if board.tasks_in_week(week) == 0 { Some(EMPTY_WEEK_HINT) } else { None },
        days,
        progress: ProgressView {
            completed: progress.completed,
            total: progress.total,
            percent: progress.percent(),
        },
    }
}
