//! Expanded/collapsed days: a single-open accordion with an "all open" escape hatch

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::{DateKey, WeekWindow};

/// The saved expand/collapse choices, keyed by day.
///
/// A day with no saved entry falls back to its default: expanded iff it is the
/// current calendar day. Within a displayed week the invariant is that either
/// a single day is expanded, all 7 are, or none is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandedState {
    days: BTreeMap<DateKey, bool>,
}

impl ExpandedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective state of a day: the saved choice, else the today default
    pub fn is_expanded(&self, day: DateKey, today: DateKey) -> bool {
        match self.days.get(&day) {
            Some(saved) => *saved,
            None => day == today,
        }
    }

    /// The saved entry for a day, if any
    pub fn saved(&self, day: DateKey) -> Option<bool> {
        self.days.get(&day).copied()
    }

    /// Explicit user toggle of one day within the visible week.
    ///
    /// Opening a day closes every other day of that week; closing a day leaves
    /// the whole week collapsed, which is a valid state.
    pub fn toggle_day(&mut self, week: &WeekWindow, day: DateKey, today: DateKey) {
        if self.is_expanded(day, today) {
            self.days.insert(day, false);
        } else {
            for other in week.days() {
                self.days.insert(other, false);
            }
            self.days.insert(day, true);
        }
    }

    /// Expand all 7 days of the week, bypassing the accordion rule
    pub fn expand_all(&mut self, week: &WeekWindow) {
        for day in week.days() {
            self.days.insert(day, true);
        }
    }

    /// Collapse all 7 days of the week
    pub fn collapse_all(&mut self, week: &WeekWindow) {
        for day in week.days() {
            self.days.insert(day, false);
        }
    }

    /// Repair stale saved state for one week.
    ///
    /// When more than one but fewer than all seven days are saved as expanded,
    /// a single one is kept: today if today is among them, else the first
    /// expanded day in week order. Returns whether anything changed, so the
    /// caller knows to persist the result.
    pub fn normalize(&mut self, week: &WeekWindow, today: DateKey) -> bool {
        let days = week.days();
        let expanded: Vec<DateKey> = days
            .iter()
            .copied()
            .filter(|day| self.saved(*day).unwrap_or(false))
            .collect();
        if expanded.len() <= 1 || expanded.len() == days.len() {
            return false;
        }

        let preferred = if expanded.contains(&today) { today } else { expanded[0] };
        for day in days {
            self.days.insert(day, day == preferred);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn week() -> WeekWindow {
        WeekWindow::containing(day("2024-06-03"))
    }

    fn expanded_days(state: &ExpandedState, week: &WeekWindow, today: DateKey) -> Vec<DateKey> {
        week.days()
            .into_iter()
            .filter(|d| state.is_expanded(*d, today))
            .collect()
    }

    #[test]
    fn only_today_is_expanded_by_default() {
        let state = ExpandedState::new();
        let today = day("2024-06-05");
        assert_eq!(expanded_days(&state, &week(), today), vec![today]);
    }

    #[test]
    fn opening_a_day_closes_the_others() {
        let mut state = ExpandedState::new();
        let today = day("2024-06-05");
        state.expand_all(&week());

        state.toggle_day(&week(), day("2024-06-04"), today);
        // 2024-06-04 was expanded, so the toggle only collapses it
        assert!(!state.is_expanded(day("2024-06-04"), today));

        state.collapse_all(&week());
        state.toggle_day(&week(), day("2024-06-07"), today);
        assert_eq!(expanded_days(&state, &week(), today), vec![day("2024-06-07")]);

        state.toggle_day(&week(), day("2024-06-08"), today);
        assert_eq!(expanded_days(&state, &week(), today), vec![day("2024-06-08")]);
    }

    #[test]
    fn closing_the_open_day_leaves_everything_collapsed() {
        let mut state = ExpandedState::new();
        let today = day("2024-06-05");
        state.toggle_day(&week(), today, today);
        assert!(expanded_days(&state, &week(), today).is_empty());
    }

    #[test]
    fn expand_all_and_collapse_all_bypass_the_accordion() {
        let mut state = ExpandedState::new();
        let today = day("2024-06-05");

        state.expand_all(&week());
        assert_eq!(expanded_days(&state, &week(), today).len(), 7);

        state.collapse_all(&week());
        assert!(expanded_days(&state, &week(), today).is_empty());
    }

    #[test]
    fn normalize_keeps_today_when_it_is_expanded() {
        let mut state = ExpandedState::new();
        let today = day("2024-06-05");
        state.expand_all(&week());
        state.toggle_day(&week(), day("2024-06-08"), today);
        // 6 days are now saved as expanded: a stale, in-between state

        assert!(state.normalize(&week(), today));
        assert_eq!(expanded_days(&state, &week(), today), vec![today]);
    }

    #[test]
    fn normalize_falls_back_to_the_first_expanded_day() {
        // a stale two-day state, as an older data file could contain;
        // today (2024-06-05) is not one of them
        let today = day("2024-06-05");
        let mut stale: ExpandedState =
            serde_json::from_str("{\"2024-06-06\": true, \"2024-06-08\": true}").unwrap();

        assert!(stale.normalize(&week(), today));
        assert_eq!(expanded_days(&stale, &week(), today), vec![day("2024-06-06")]);
    }

    #[test]
    fn normalize_leaves_valid_states_alone() {
        let today = day("2024-06-05");

        let mut none: ExpandedState = serde_json::from_str("{}").unwrap();
        assert!(!none.normalize(&week(), today));

        let mut single: ExpandedState = serde_json::from_str("{\"2024-06-04\": true}").unwrap();
        assert!(!single.normalize(&week(), today));

        let mut all = ExpandedState::new();
        all.expand_all(&week());
        assert!(!all.normalize(&week(), today));
    }

    #[test]
    fn after_normalization_one_or_all_days_are_expanded() {
        let today = day("2024-06-05");
        for stale in [
            "{\"2024-06-03\": true, \"2024-06-04\": true}",
            "{\"2024-06-03\": true, \"2024-06-04\": true, \"2024-06-09\": true}",
        ]
        .iter()
        {
            let mut state: ExpandedState = serde_json::from_str(stale).unwrap();
            state.normalize(&week(), today);
            let count = expanded_days(&state, &week(), today).len();
            assert!(count == 1 || count == 7);
        }
    }

    #[test]
    fn serde_expanded_state_round_trips() {
        let mut state = ExpandedState::new();
        state.collapse_all(&week());
        let json = serde_json::to_string(&state).unwrap();
        let back: ExpandedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
