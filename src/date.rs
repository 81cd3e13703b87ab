//! Calendar days and the Monday-aligned week window

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar day, in its canonical `YYYY-MM-DD` form.
///
/// This is the key every per-day record (task lists, expanded days) is stored under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    content: NaiveDate,
}

impl DateKey {
    /// The current calendar day, on the local clock
    pub fn today() -> Self {
        Self { content: Local::now().date_naive() }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|content| Self { content })
    }

    pub fn as_date(&self) -> &NaiveDate {
        &self.content
    }

    /// Full weekday name ("Monday")
    pub fn weekday_name(&self) -> String {
        self.content.format("%A").to_string()
    }

    /// Short weekday label ("Mon")
    pub fn weekday_label(&self) -> String {
        self.content.format("%a").to_string()
    }

    /// Short date label ("Jun 3")
    pub fn date_label(&self) -> String {
        self.content.format("%b %-d").to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(content: NaiveDate) -> Self {
        Self { content }
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let content = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        Ok(Self { content })
    }
}

/// Used to support serde
impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<DateKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The 7 consecutive days, Monday-aligned, currently displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekWindow {
    monday: NaiveDate,
}

impl WeekWindow {
    /// The week that contains the given day
    pub fn containing(day: DateKey) -> Self {
        let date = *day.as_date();
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self { monday }
    }

    /// The week that contains the current calendar day
    pub fn current() -> Self {
        Self::containing(DateKey::today())
    }

    pub fn monday(&self) -> DateKey {
        DateKey::from(self.monday)
    }

    /// The 7 days of this week, Monday first
    pub fn days(&self) -> Vec<DateKey> {
        (0..7)
            .map(|offset| DateKey::from(self.monday + Duration::days(offset)))
            .collect()
    }

    pub fn contains(&self, day: DateKey) -> bool {
        let offset = day.as_date().signed_duration_since(self.monday).num_days();
        (0..7_i64).contains(&offset)
    }

    pub fn next(&self) -> Self {
        Self { monday: self.monday + Duration::days(7) }
    }

    pub fn previous(&self) -> Self {
        Self { monday: self.monday - Duration::days(7) }
    }

    /// Label for the displayed range ("Jun 3 — Jun 9")
    pub fn range_label(&self) -> String {
        let days = self.days();
        format!("{} — {}", days[0].date_label(), days[6].date_label())
    }
}
