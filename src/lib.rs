//! This crate provides a calm weekly task tracker: up to three focused tasks a day.
//!
//! The [`board`] module holds the per-day task lists and their rules (capacity,
//! completion, pruning). The [`store`] module persists the board and the
//! expanded-day map as JSON files, degrading to an in-memory copy whenever the
//! filesystem is not usable. The [`accordion`] module tracks which days are
//! expanded, keeping a single day open per week unless all of them are.
//!
//! An [`App`](app::App) ties these together behind an [`Action`](app::Action)
//! enum (mutate, persist, re-render), and the [`view`] module renders the
//! whole screen as a plain data structure that a front-end can display any way
//! it likes. A small interactive terminal front-end ships as the `zenweek`
//! binary.

pub mod config;

pub mod date;
pub use date::DateKey;
pub use date::WeekWindow;
mod task;
pub use task::Task;
pub use task::TaskId;
pub use task::MAX_TASK_TEXT_LEN;
pub mod board;
pub use board::TaskBoard;
pub mod accordion;
pub use accordion::ExpandedState;
pub mod notice;
pub use notice::Notice;

pub mod store;
pub use store::Store;
pub mod app;
pub use app::App;
pub mod view;

pub mod utils;
