use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, YearMonth};

/// Caller-supplied limits on which dates can be picked.
///
/// Bounds are inclusive. A missing bound leaves that side open, and a
/// reversed pair (`min_date > max_date`) simply disables every date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constraints {
    min_date:         Option<CalendarDate>,
    max_date:         Option<CalendarDate>,
    disabled_dates:   BTreeSet<CalendarDate>,
    allow_single_day: bool,
}

impl Constraints {
    /// No bounds, no blocked dates, single-day ranges disallowed
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_date(mut self, min_date: Option<CalendarDate>) -> Self {
        self.min_date = min_date;
        self
    }

    #[must_use]
    pub fn with_max_date(mut self, max_date: Option<CalendarDate>) -> Self {
        self.max_date = max_date;
        self
    }

    #[must_use]
    pub fn with_disabled_dates<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = CalendarDate>,
    {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_allow_single_day(mut self, allow: bool) -> Self {
        self.allow_single_day = allow;
        self
    }

    pub const fn min_date(&self) -> Option<CalendarDate> {
        self.min_date
    }

    pub const fn max_date(&self) -> Option<CalendarDate> {
        self.max_date
    }

    pub const fn disabled_dates(&self) -> &BTreeSet<CalendarDate> {
        &self.disabled_dates
    }

    /// Whether a range may start and end on the same day
    pub const fn allow_single_day(&self) -> bool {
        self.allow_single_day
    }

    /// Whether the date can not be picked.
    pub fn is_disabled(&self, date: &CalendarDate) -> bool {
        if self.min_date.is_some_and(|min| *date < min) {
            return true;
        }
        if self.max_date.is_some_and(|max| *date > max) {
            return true;
        }
        self.disabled_dates.contains(date)
    }

    pub fn is_enabled(&self, date: &CalendarDate) -> bool {
        !self.is_disabled(date)
    }

    /// First pickable date of the month, if any
    pub fn first_enabled_in(&self, month: YearMonth) -> Option<CalendarDate> {
        let last = month.last_day();
        std::iter::successors(Some(month.first_day()), |d| d.succ().filter(|next| *next <= last))
            .find(|d| self.is_enabled(d))
    }
}
