//! To-do tasks

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a task text, in characters.
/// Longer input is clamped rather than rejected, like an input field with a maximum length.
pub const MAX_TASK_TEXT_LEN: usize = 120;

/// Opaque, persistent, unique identifier of a task
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        Self { content: Uuid::new_v4().to_hyphenated().to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// A single to-do entry, owned by the calendar-day bucket it was added to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stays stable across completion changes
    id: TaskId,

    /// The display text, at most [`MAX_TASK_TEXT_LEN`] characters
    text: String,

    /// Whether this task is done
    completed: bool,

    /// The time this task was created
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl Task {
    /// Create a brand new, uncompleted task.
    /// This picks a new (random) task id and clamps over-long text.
    pub fn new(text: &str) -> Self {
        Self {
            id: TaskId::random(),
            text: clamp_text(text),
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &TaskId             { &self.id         }
    pub fn text(&self) -> &str              { &self.text       }
    pub fn completed(&self) -> bool         { self.completed   }
    pub fn created_at(&self) -> &DateTime<Utc> { &self.created_at }

    /// Set the completion state
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

fn clamp_text(text: &str) -> String {
    text.chars().take(MAX_TASK_TEXT_LEN).collect()
}
