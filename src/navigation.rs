use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{CalendarDate, DAYS_PER_WEEK, Weekday, YearMonth};

/// Keys the calendar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Space,
    Escape,
}

/// What a key press asks the component to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus moved to this date; selection untouched.
    Focused(CalendarDate),
    /// Treat the focused date as clicked.
    Activate(CalendarDate),
    /// Close the calendar. A pending start is discarded; a confirmed range is kept.
    Dismiss,
}

/// Displayed month plus keyboard focus.
///
/// Month navigation never consults constraints and never touches the
/// selection; a month with nothing selectable is still reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    displayed: YearMonth,
    focus:     CalendarDate,
}

impl Navigator {
    /// Shows the month containing `focus`.
    pub fn new(focus: CalendarDate) -> Self {
        Self {
            displayed: focus.year_month().add_months(0),
            focus,
        }
    }

    pub const fn displayed_month(&self) -> YearMonth {
        self.displayed
    }

    pub const fn focus(&self) -> CalendarDate {
        self.focus
    }

    pub fn previous_month(&mut self) {
        self.show(self.displayed.previous());
    }

    pub fn next_month(&mut self) {
        self.show(self.displayed.next());
    }

    /// Shows the month containing `today`.
    pub fn go_to_today(&mut self, today: CalendarDate) {
        self.show(today.year_month());
    }

    /// Replaces the displayed month.
    pub fn show(&mut self, month: YearMonth) {
        let month = month.add_months(0);
        if month != self.displayed {
            debug!(from = %self.displayed, to = %month, "calendar_month_changed");
        }
        self.displayed = month;
    }

    /// Re-centres the view on the month of `date` if it is not shown.
    pub fn follow(&mut self, date: CalendarDate) {
        if !self.displayed.contains(&date) {
            self.show(date.year_month());
        }
    }

    /// Moves focus, following it to its month.
    pub fn focus_on(&mut self, date: CalendarDate) {
        self.focus = date;
        self.follow(date);
    }

    /// Applies a key press. Movement keys only move focus.
    pub fn handle_key(&mut self, key: Key, week_start: Weekday) -> KeyOutcome {
        let anchor = self.anchor();
        let target = match key {
            Key::Enter | Key::Space => return KeyOutcome::Activate(anchor),
            Key::Escape => return KeyOutcome::Dismiss,
            Key::ArrowLeft => anchor.pred(),
            Key::ArrowRight => anchor.succ(),
            Key::ArrowUp => anchor.add_days(-(DAYS_PER_WEEK as i64)),
            Key::ArrowDown => anchor.add_days(DAYS_PER_WEEK as i64),
            Key::PageUp => Some(anchor.year_month().previous().date(anchor.day())),
            Key::PageDown => Some(anchor.year_month().next().date(anchor.day())),
            Key::Home => anchor.add_days(-i64::from(anchor.weekday().days_since(week_start))),
            Key::End => anchor.add_days(
                (DAYS_PER_WEEK as i64 - 1) - i64::from(anchor.weekday().days_since(week_start)),
            ),
        };

        // stay put at the edges of the calendar
        let target = target
            .filter(|date| date.year_month().is_displayable())
            .unwrap_or(anchor);
        trace!(key = ?key, focus = %target, "calendar_focus_moved");
        self.focus_on(target);
        KeyOutcome::Focused(target)
    }

    /// Focus if it is inside the displayed month, else the same day of the
    /// displayed month.
    fn anchor(&self) -> CalendarDate {
        if self.displayed.contains(&self.focus) {
            self.focus
        } else {
            self.displayed.date(self.focus.day())
        }
    }
}
