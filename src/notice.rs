//! Transient, non-blocking user notifications

use std::fmt::{Display, Formatter};
use std::time::Duration;

use rand::seq::IndexedRandom;

use crate::date::DateKey;

/// Default display time of a notice
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2500);
const ENCOURAGEMENT_DURATION: Duration = Duration::from_millis(2600);
const DAY_COMPLETE_DURATION: Duration = Duration::from_millis(3600);
const STORAGE_DURATION: Duration = Duration::from_millis(3000);

/// Messages shown when a task transitions to completed
const ENCOURAGEMENTS: [&str; 6] = [
    "Well done — small wins build momentum.",
    "Nice work! One step at a time.",
    "You're creating good focus habits — keep it up.",
    "Progress, not perfection.",
    "Calm persistence beats rushed chaos.",
    "Small, consistent steps lead to big change.",
];

/// What kind of event a notice reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// The store degraded to memory-only operation
    Storage,
    /// A user action was rejected (empty text, full day)
    Validation,
    /// A task was just completed
    Encouragement,
    /// Every task of a day is now completed
    DayComplete,
}

/// A transient message for the user.
///
/// The front-end is expected to dismiss it after `duration`; nothing in the
/// core state depends on when (or whether) that happens.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    kind: NoticeKind,
    text: String,
    duration: Duration,
}

impl Notice {
    pub fn storage<S: Into<String>>(text: S) -> Self {
        Self { kind: NoticeKind::Storage, text: text.into(), duration: STORAGE_DURATION }
    }

    pub fn validation<S: Into<String>>(text: S) -> Self {
        Self { kind: NoticeKind::Validation, text: text.into(), duration: DEFAULT_NOTICE_DURATION }
    }

    /// A randomly chosen encouragement
    pub fn encouragement() -> Self {
        let text = ENCOURAGEMENTS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(ENCOURAGEMENTS[0]);
        Self {
            kind: NoticeKind::Encouragement,
            text: text.to_string(),
            duration: ENCOURAGEMENT_DURATION,
        }
    }

    /// The "everything done today" message for a given day
    pub fn day_complete(day: DateKey) -> Self {
        Self {
            kind: NoticeKind::DayComplete,
            text: format!("All done on {}! Great job 🎉", day.weekday_name()),
            duration: DAY_COMPLETE_DURATION,
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.text)
    }
}
