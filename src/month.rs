use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    CalendarDate, Day, FEBRUARY, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR, Month, NOVEMBER, Year,
    types::days_in_month,
};

/// A month of a specific year; the unit the calendar displays.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

impl YearMonth {
    /// Earliest month that can be displayed: its grid needs padding days
    /// from the previous month, which must still be representable.
    pub const MIN_VIEW: (u16, u8) = (MIN_YEAR, FEBRUARY);
    /// Latest month that can be displayed.
    pub const MAX_VIEW: (u16, u8) = (MAX_YEAR, NOVEMBER);

    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Creates a year/month pair from a 1-based month.
    ///
    /// # Errors
    /// Returns `ParseError` if the year or month is invalid.
    pub fn new(year: u16, month: u8) -> Result<Self, crate::ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// Builds a month from a year and an arbitrary 0-based month offset,
    /// rolling overflow and underflow into adjacent years
    /// (`(2024, 12)` is January 2025, `(2025, -1)` is December 2024).
    /// The result is clamped to the displayable window.
    pub fn normalized(year: i32, month_index: i32) -> Self {
        let total = i64::from(year) * i64::from(MONTHS_PER_YEAR) + i64::from(month_index);
        Self::from_month_number(total)
    }

    /// Month shifted by `delta` months, clamped to the displayable window.
    pub fn add_months(self, delta: i32) -> Self {
        Self::from_month_number(self.month_number() + i64::from(delta))
    }

    /// The following month
    pub fn next(self) -> Self {
        self.add_months(1)
    }

    /// The preceding month
    pub fn previous(self) -> Self {
        self.add_months(-1)
    }

    /// Whether this month is inside the displayable window
    pub fn is_displayable(self) -> bool {
        let (min_year, min_month) = Self::MIN_VIEW;
        let (max_year, max_month) = Self::MAX_VIEW;
        let key = (self.year(), self.month());
        (min_year, min_month) <= key && key <= (max_year, max_month)
    }

    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// 1-based month
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// 0-based month index
    pub const fn month_index(self) -> u8 {
        self.month.index()
    }

    pub const fn month_typed(self) -> Month {
        self.month
    }

    /// Number of days in this month
    pub const fn len_days(self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    pub const fn first_day(self) -> CalendarDate {
        self.date(MIN_DAY)
    }

    pub const fn last_day(self) -> CalendarDate {
        self.date(self.len_days())
    }

    /// The date with the given day in this month, clamped into `1..=len_days`.
    pub const fn date(self, day: u8) -> CalendarDate {
        let day = Day::clamped(day, self.year.get(), self.month.get());
        CalendarDate::from_parts_unchecked(self.year, self.month, day)
    }

    pub fn contains(self, date: &CalendarDate) -> bool {
        date.year_month() == self
    }

    fn month_number(self) -> i64 {
        i64::from(self.year()) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month_index())
    }

    fn from_month_number(total: i64) -> Self {
        let per_year = i64::from(MONTHS_PER_YEAR);
        let min = i64::from(Self::MIN_VIEW.0) * per_year + i64::from(Self::MIN_VIEW.1 - 1);
        let max = i64::from(Self::MAX_VIEW.0) * per_year + i64::from(Self::MAX_VIEW.1 - 1);
        let total = total.clamp(min, max);

        Self {
            year:  Year::saturating(total.div_euclid(per_year)),
            month: Month::wrapping_from_index(total.rem_euclid(per_year)),
        }
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
