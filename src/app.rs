//! The application state and its interaction handlers
//!
//! Every user interaction is an [`Action`]. Applying one mutates the state,
//! persists it, and queues any notices; the caller then re-renders through
//! [`App::view`]. Nothing lives in module-level globals.

use crate::accordion::ExpandedState;
use crate::board::{AddTaskError, TaskBoard};
use crate::date::{DateKey, WeekWindow};
use crate::notice::Notice;
use crate::store::{SaveOutcome, Store};
use crate::task::TaskId;
use crate::view;
use crate::view::WeekView;

const EMPTY_TEXT_NOTICE: &str = "Enter a short task to add.";
const DAY_FULL_NOTICE: &str = "Daily limit reached (3).";
const MEMORY_ONLY_NOTICE: &str =
    "Local storage unavailable; changes are kept in memory and will not persist.";

/// A single user interaction
#[derive(Clone, Debug)]
pub enum Action {
    AddTask { day: DateKey, text: String },
    ToggleCompleted { day: DateKey, id: TaskId },
    DeleteTask { day: DateKey, id: TaskId },
    /// Explicit expand/collapse of one day (the accordion rule applies)
    ToggleDay { day: DateKey },
    ExpandAll,
    CollapseAll,
    NextWeek,
    PreviousWeek,
    /// Jump back to the week containing today
    CurrentWeek,
}

/// The whole application state
pub struct App {
    store: Store,
    board: TaskBoard,
    expanded: ExpandedState,
    week: WeekWindow,
    notices: Vec<Notice>,
    storage_notice_shown: bool,
}

impl App {
    /// Load the state held by the given store.
    /// The week cursor always starts on the current week; it is not persisted.
    pub fn new(mut store: Store) -> Self {
        let board = store.load_tasks();
        let expanded = store.load_expanded();
        let mut app = Self {
            store,
            board,
            expanded,
            week: WeekWindow::current(),
            notices: Vec::new(),
            storage_notice_shown: false,
        };
        if !app.store.is_file_backed() {
            app.notify_memory_only();
        }
        app
    }

    pub fn week(&self) -> &WeekWindow {
        &self.week
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Apply one user interaction: mutate, persist, queue notices
    pub fn apply(&mut self, action: Action) {
        let today = Self::today();
        match action {
            Action::AddTask { day, text } => match self.board.add_task(day, &text) {
                Ok(()) => self.persist_tasks(),
                Err(AddTaskError::EmptyText) => {
                    self.notices.push(Notice::validation(EMPTY_TEXT_NOTICE))
                }
                Err(AddTaskError::DayFull) => {
                    self.notices.push(Notice::validation(DAY_FULL_NOTICE))
                }
            },
            Action::ToggleCompleted { day, id } => {
                if let Some(outcome) = self.board.toggle_completed(day, &id) {
                    self.persist_tasks();
                    if outcome.completed {
                        self.notices.push(Notice::encouragement());
                        if outcome.day_completed {
                            self.notices.push(Notice::day_complete(day));
                        }
                    }
                }
            }
            Action::DeleteTask { day, id } => {
                if self.board.delete_task(day, &id) {
                    self.persist_tasks();
                }
            }
            Action::ToggleDay { day } => {
                self.expanded.toggle_day(&self.week, day, today);
                self.persist_expanded();
            }
            Action::ExpandAll => {
                self.expanded.expand_all(&self.week);
                self.persist_expanded();
            }
            Action::CollapseAll => {
                self.expanded.collapse_all(&self.week);
                self.persist_expanded();
            }
            Action::NextWeek => self.week = self.week.next(),
            Action::PreviousWeek => self.week = self.week.previous(),
            Action::CurrentWeek => self.week = WeekWindow::current(),
        }
    }

    /// Rebuild the whole week description.
    /// Stale expanded state for the visible week is normalized (and persisted) first.
    pub fn view(&mut self) -> WeekView {
        let today = Self::today();
        if self.expanded.normalize(&self.week, today) {
            self.persist_expanded();
        }
        view::week_view(&self.week, &self.board, &self.expanded, today)
    }

    /// Drain the pending notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn today() -> DateKey {
        DateKey::today()
    }

    fn persist_tasks(&mut self) {
        if self.store.save_tasks(&self.board) == SaveOutcome::MemoryOnly {
            self.notify_memory_only();
        }
    }

    fn persist_expanded(&mut self) {
        if self.store.save_expanded(&self.expanded) == SaveOutcome::MemoryOnly {
            self.notify_memory_only();
        }
    }

    /// The degradation notice fires once per process
    fn notify_memory_only(&mut self) {
        if !self.storage_notice_shown {
            self.storage_notice_shown = true;
            self.notices.push(Notice::storage(MEMORY_ONLY_NOTICE));
        }
    }
}
