//! Zone-naive date-range selecting calendar.
//!
//! The crate models the logic behind a booking-style range picker: a
//! 6x7 month grid, a two-click range selection state machine, per-date
//! constraints and month navigation. Rendering is left to the host; the
//! [`RangeCalendar`] component exposes a per-cell render model and reports
//! results through [`CalendarEvents`].

mod calendar;
mod clock;
mod consts;
mod constraints;
mod format;
mod grid;
mod month;
mod navigation;
mod options;
mod prelude;
mod range;
mod selection;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarAction, CalendarEvents, Callbacks, ClickOutcome, DayCell, RangeCalendar};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use constraints::Constraints;
pub use format::{format_date_label, format_month_title, format_range_label, month_name, month_short_name, weekday_short_name};
pub use grid::MonthGrid;
pub use month::YearMonth;
pub use navigation::{Key, KeyOutcome, Navigator};
pub use options::CalendarOptions;
pub use range::{DateRange, RangeError};
pub use selection::{RangeSelector, SelectionState, Transition};
pub use types::{Day, Month, Weekday, Year};

use crate::prelude::*;
use consts::{DAYS_PER_ERA, UNIX_EPOCH_DAY_OFFSET};
use std::str::FromStr;
use types::days_in_month;

/// A concrete civil day: year, month and day without time-of-day or zone.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Day number {_0} is outside the supported calendar")]
    OutOfRange(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from validated components, checking the day against
    /// the month length of that year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        if day.get() > days_in_month(year.get(), month.get()) {
            return Err(ParseError::InvalidDay {
                month: month.get(),
                day:   day.get(),
                year:  year.get(),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Assembles a date whose day is already known to fit the month.
    pub(crate) const fn from_parts_unchecked(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from a 1-based month.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let y = Year::new(year)?;
        let m = Month::new(month)?;
        let d = Day::new(day, year, month)?;
        Ok(Self { year: y, month: m, day: d })
    }

    /// Creates a date from a 0-based month index (0 = January).
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range.
    pub fn from_index(year: u16, month_index: u8, day: u8) -> Result<Self, ParseError> {
        let month = Month::from_index(month_index)?;
        Self::from_ymd(year, month.get(), day)
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1 = January)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the 0-based month index (0 = January)
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// The month this date belongs to
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    /// Days since 1970-01-01 (negative before the epoch).
    pub fn to_days(&self) -> i64 {
        days_from_civil(self.year(), self.month(), self.day())
    }

    /// Inverse of [`CalendarDate::to_days`].
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` when the day lies outside years 1..=9999.
    pub fn from_days(days: i64) -> Result<Self, ParseError> {
        let (year, month, day) = civil_from_days(days);
        let year = u16::try_from(year).map_err(|_| ParseError::OutOfRange(days))?;
        Self::from_ymd(year, month, day).map_err(|_| ParseError::OutOfRange(days))
    }

    /// Shifts the date by a signed number of days. `None` when the result
    /// leaves the supported calendar.
    pub fn add_days(&self, delta: i64) -> Option<Self> {
        let target = self.to_days().checked_add(delta)?;
        Self::from_days(target).ok()
    }

    /// The following day, if representable
    pub fn succ(&self) -> Option<Self> {
        self.add_days(1)
    }

    /// The preceding day, if representable
    pub fn pred(&self) -> Option<Self> {
        self.add_days(-1)
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: &Self) -> i64 {
        other.to_days() - self.to_days()
    }

    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday
        Weekday::from_sunday_index(self.to_days() + i64::from(Weekday::Thursday.index_from_sunday()))
    }

    /// Converts to plain components: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
                parts.len()
            )));
        };

        Self::from_ymd(parse_number(year)?, parse_number(month)?, parse_number(day)?)
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --- civil day-count conversions (proleptic Gregorian) ---

fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let m = i64::from(month);
    let y = i64::from(year) - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAY_OFFSET
}

fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + UNIX_EPOCH_DAY_OFFSET;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    // month is 1..=12 and day 1..=31 by construction
    (year, month as u8, day as u8)
}
