//! Two-click range selection.
//!
//! ```text
//! EMPTY --click--> START_ONLY --click later/equal*--> COMPLETE
//!                      |  ^                              |
//!                      |  +---------click----------------+
//!                      +--click earlier--> COMPLETE (endpoints swapped)
//! ```
//! `*` equal dates complete only when single-day ranges are allowed;
//! otherwise the start moves to the clicked date.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{CalendarDate, Constraints, DateRange};

/// Where the selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionState {
    /// Nothing picked
    Empty,
    /// Start picked, awaiting the end
    StartOnly,
    /// Both endpoints picked
    Complete,
}

/// Result of feeding one click into the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The date is disabled; nothing changed.
    Ignored,
    /// A new range was started at this date.
    Started(CalendarDate),
    /// A full range now exists.
    Completed(DateRange),
}

impl Transition {
    /// The range a caller must be told about, if this transition notifies.
    pub const fn completed_range(&self) -> Option<DateRange> {
        match self {
            Self::Completed(range) => Some(*range),
            Self::Ignored | Self::Started(_) => None,
        }
    }
}

/// Range selection state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSelector {
    range: Option<DateRange>,
}

impl RangeSelector {
    pub const fn new() -> Self {
        Self { range: None }
    }

    /// Starts from a caller-supplied range; `None` means empty.
    pub const fn seeded(range: Option<DateRange>) -> Self {
        Self { range }
    }

    pub const fn state(&self) -> SelectionState {
        match self.range {
            None => SelectionState::Empty,
            Some(range) if range.is_complete() => SelectionState::Complete,
            Some(_) => SelectionState::StartOnly,
        }
    }

    /// The current selection, complete or not
    pub const fn range(&self) -> Option<DateRange> {
        self.range
    }

    /// Applies a click on `date`.
    pub fn click(&mut self, date: CalendarDate, constraints: &Constraints) -> Transition {
        if constraints.is_disabled(&date) {
            trace!(date = %date, "range_click_ignored_disabled");
            return Transition::Ignored;
        }

        let pending_start = self.range.filter(|range| !range.is_complete()).map(|range| range.from());

        let next = match pending_start {
            Some(from) if date > from => DateRange::ordered(from, date),
            Some(from) if date < from => DateRange::ordered(date, from),
            Some(_) if constraints.allow_single_day() => DateRange::single(date),
            // restart on the same day, or a fresh start from EMPTY/COMPLETE
            _ => DateRange::starting(date),
        };
        self.range = Some(next);

        if next.is_complete() {
            debug!(from = %next.from(), to = %next.end(), "range_selection_complete");
            Transition::Completed(next)
        } else {
            debug!(from = %date, "range_selection_started");
            Transition::Started(date)
        }
    }

    /// Drops any selection.
    pub fn clear(&mut self) {
        debug!(previous = ?self.range.map(|range| range.to_string()), "range_selection_cleared");
        self.range = None;
    }

    /// Replaces the selection with a caller-supplied value without treating
    /// it as a user action.
    pub fn set_range(&mut self, range: Option<DateRange>) {
        self.range = range;
    }

    /// The range that would result if `hovered` were clicked next, for
    /// previewing while the end is pending. `None` outside `START_ONLY`, and
    /// on the start itself unless single-day ranges are allowed.
    pub fn preview(&self, hovered: CalendarDate, constraints: &Constraints) -> Option<DateRange> {
        let range = self.range.filter(|range| !range.is_complete())?;
        if constraints.is_disabled(&hovered) {
            return None;
        }
        if hovered == range.from() && !constraints.allow_single_day() {
            return None;
        }
        Some(DateRange::ordered(range.from(), hovered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    fn single_day() -> Constraints {
        Constraints::new().with_allow_single_day(true)
    }

    #[test]
    fn test_empty_to_start_only() {
        let mut selector = RangeSelector::new();
        assert_eq!(selector.state(), SelectionState::Empty);

        let transition = selector.click(date(2025, 1, 15), &Constraints::new());
        assert_eq!(transition, Transition::Started(date(2025, 1, 15)));
        assert_eq!(transition.completed_range(), None);
        assert_eq!(selector.state(), SelectionState::StartOnly);
        assert_eq!(selector.range(), Some(DateRange::starting(date(2025, 1, 15))));
    }

    #[test]
    fn test_later_click_completes() {
        let mut selector = RangeSelector::new();
        selector.click(date(2025, 1, 15), &Constraints::new());
        let transition = selector.click(date(2025, 1, 20), &Constraints::new());

        let expected = range(date(2025, 1, 15), date(2025, 1, 20));
        assert_eq!(transition, Transition::Completed(expected));
        assert_eq!(transition.completed_range(), Some(expected));
        assert_eq!(selector.state(), SelectionState::Complete);
    }

    #[test]
    fn test_earlier_click_swaps_endpoints() {
        let mut selector = RangeSelector::new();
        selector.click(date(2024, 12, 20), &Constraints::new());
        let transition = selector.click(date(2024, 12, 15), &Constraints::new());

        assert_eq!(
            transition,
            Transition::Completed(range(date(2024, 12, 15), date(2024, 12, 20)))
        );
    }

    #[test]
    fn test_same_day_without_single_day_restarts() {
        let mut selector = RangeSelector::new();
        selector.click(date(2025, 1, 10), &Constraints::new());
        let transition = selector.click(date(2025, 1, 10), &Constraints::new());

        assert_eq!(transition, Transition::Started(date(2025, 1, 10)));
        assert_eq!(selector.state(), SelectionState::StartOnly);
        assert_eq!(selector.range().map(|r| r.from()), Some(date(2025, 1, 10)));
    }

    #[test]
    fn test_same_day_with_single_day_completes() {
        let mut selector = RangeSelector::new();
        selector.click(date(2025, 1, 10), &single_day());
        let transition = selector.click(date(2025, 1, 10), &single_day());

        assert_eq!(transition, Transition::Completed(DateRange::single(date(2025, 1, 10))));
        assert_eq!(selector.state(), SelectionState::Complete);
    }

    #[test]
    fn test_click_after_complete_starts_over() {
        let mut selector = RangeSelector::seeded(Some(range(date(2025, 1, 15), date(2025, 1, 20))));
        assert_eq!(selector.state(), SelectionState::Complete);

        let transition = selector.click(date(2025, 1, 17), &Constraints::new());
        assert_eq!(transition, Transition::Started(date(2025, 1, 17)));
        assert_eq!(selector.range(), Some(DateRange::starting(date(2025, 1, 17))));
    }

    #[test]
    fn test_disabled_dates_never_transition() {
        let constraints = Constraints::new().with_disabled_dates([date(2025, 1, 12)]);

        for seed in [
            None,
            Some(DateRange::starting(date(2025, 1, 10))),
            Some(range(date(2025, 1, 1), date(2025, 1, 5))),
        ] {
            let mut selector = RangeSelector::seeded(seed);
            assert_eq!(selector.click(date(2025, 1, 12), &constraints), Transition::Ignored);
            assert_eq!(selector.range(), seed);
        }
    }

    #[test]
    fn test_clear_from_any_state() {
        for seed in [
            None,
            Some(DateRange::starting(date(2025, 1, 10))),
            Some(range(date(2025, 1, 10), date(2025, 1, 14))),
        ] {
            let mut selector = RangeSelector::seeded(seed);
            selector.clear();
            assert_eq!(selector.state(), SelectionState::Empty);
            assert_eq!(selector.range(), None);
        }
    }

    #[test]
    fn test_completed_ranges_are_always_ordered() {
        let picks = [
            (date(2025, 1, 31), date(2025, 1, 1)),
            (date(2025, 1, 1), date(2025, 1, 31)),
            (date(2025, 3, 1), date(2024, 2, 29)),
        ];

        for (first, second) in picks {
            let mut selector = RangeSelector::new();
            selector.click(first, &Constraints::new());
            let completed = selector
                .click(second, &Constraints::new())
                .completed_range()
                .expect("second distinct click completes");
            assert!(completed.from() <= completed.end());
        }
    }

    #[test]
    fn test_preview() {
        let mut selector = RangeSelector::new();
        assert_eq!(selector.preview(date(2025, 1, 20), &Constraints::new()), None);

        selector.click(date(2025, 1, 15), &Constraints::new());
        assert_eq!(
            selector.preview(date(2025, 1, 12), &Constraints::new()),
            Some(range(date(2025, 1, 12), date(2025, 1, 15)))
        );

        let blocked = Constraints::new().with_disabled_dates([date(2025, 1, 18)]);
        assert_eq!(selector.preview(date(2025, 1, 18), &blocked), None);
        assert_eq!(selector.state(), SelectionState::StartOnly);
    }

    #[test]
    fn test_preview_on_start_follows_single_day_rule() {
        let mut selector = RangeSelector::new();
        selector.click(date(2025, 1, 15), &Constraints::new());

        assert_eq!(selector.preview(date(2025, 1, 15), &Constraints::new()), None);

        let single = Constraints::new().with_allow_single_day(true);
        assert_eq!(
            selector.preview(date(2025, 1, 15), &single),
            Some(DateRange::single(date(2025, 1, 15)))
        );
    }

    #[test]
    fn test_state_serializes_like_the_state_names() {
        let json = serde_json::to_string(&SelectionState::StartOnly).unwrap();
        assert_eq!(json, r#""START_ONLY""#);
    }
}
