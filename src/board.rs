//! The task board: one list of up to three tasks per calendar day

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::date::{DateKey, WeekWindow};
use crate::task::Task;
use crate::task::TaskId;

/// How many tasks a single day can hold
pub const DAY_TASK_CAPACITY: usize = 3;

/// Why an `add_task` call was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddTaskError {
    /// The trimmed text was empty
    EmptyText,
    /// The day already holds [`DAY_TASK_CAPACITY`] tasks
    DayFull,
}

impl Display for AddTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            AddTaskError::EmptyText => write!(f, "the task text is empty"),
            AddTaskError::DayFull => write!(f, "this day already holds {} tasks", DAY_TASK_CAPACITY),
        }
    }
}

impl Error for AddTaskError {}

/// What a completion toggle resulted in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The new completion state of the toggled task
    pub completed: bool,
    /// Whether every task of that day is now completed
    pub day_completed: bool,
}

/// Completion counts across the whole board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completed share, rounded to the nearest percent. 0 for an empty board
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            0
        } else {
            ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
        }
    }
}

/// Every task list, keyed by day.
///
/// Within a day, insertion order is display order. A day with no tasks has no
/// entry at all; the mutating operations below maintain that.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskBoard {
    days: BTreeMap<DateKey, Vec<Task>>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tasks of the given day, in display order
    pub fn tasks_for(&self, day: DateKey) -> &[Task] {
        match self.days.get(&day) {
            Some(tasks) => tasks.as_slice(),
            None => &[],
        }
    }

    /// Days that currently hold at least one task
    pub fn days(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Append a new task to a day.
    ///
    /// The text is trimmed first. An empty text or a day already at capacity
    /// is rejected and leaves the board unchanged.
    pub fn add_task(&mut self, day: DateKey, text: &str) -> Result<(), AddTaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AddTaskError::EmptyText);
        }
        if self.tasks_for(day).len() >= DAY_TASK_CAPACITY {
            return Err(AddTaskError::DayFull);
        }
        self.days.entry(day).or_insert_with(Vec::new).push(Task::new(text));
        Ok(())
    }

    /// Flip the completion state of one task.
    /// Returns `None` (and changes nothing) when the id is not present on that day.
    pub fn toggle_completed(&mut self, day: DateKey, id: &TaskId) -> Option<ToggleOutcome> {
        let tasks = self.days.get_mut(&day)?;
        let task = tasks.iter_mut().find(|task| task.id() == id)?;
        task.set_completed(!task.completed());
        let completed = task.completed();
        let day_completed = completed && tasks.iter().all(|task| task.completed());
        Some(ToggleOutcome { completed, day_completed })
    }

    /// Remove a task by id; the day's key is pruned when its list becomes empty.
    /// Returns whether a task was actually removed.
    pub fn delete_task(&mut self, day: DateKey, id: &TaskId) -> bool {
        let removed = match self.days.get_mut(&day) {
            None => false,
            Some(tasks) => {
                let before = tasks.len();
                tasks.retain(|task| task.id() != id);
                tasks.len() != before
            }
        };
        let now_empty = match self.days.get(&day) {
            Some(tasks) => tasks.is_empty(),
            None => false,
        };
        if now_empty {
            self.days.remove(&day);
        }
        removed
    }

    /// Completion counts across every week, not only the displayed one
    pub fn progress(&self) -> Progress {
        let mut progress = Progress::default();
        for tasks in self.days.values() {
            progress.total += tasks.len();
            progress.completed += tasks.iter().filter(|task| task.completed()).count();
        }
        progress
    }

    /// Number of tasks within the 7 days of the given week
    pub fn tasks_in_week(&self, week: &WeekWindow) -> usize {
        week.days().iter().map(|day| self.tasks_for(*day).len()).sum()
    }
}
