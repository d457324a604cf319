use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this is a Gregorian leap year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Clamps an arbitrary year number into `1..=MAX_YEAR`
    pub(crate) const fn saturating(value: i64) -> Self {
        let clamped = if value < 1 {
            1
        } else if value > MAX_YEAR as i64 {
            MAX_YEAR
        } else {
            value as u16
        };
        match NonZeroU16::new(clamped) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU16::MIN),
        }
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
///
/// The calendar speaks in two numberings: the human one (`get`, 1 = January)
/// used for display and ISO strings, and the 0-based `index` used for grid
/// arithmetic and by callers that count months from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month from a 0-based index (0 = January)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is >= `MAX_MONTH`.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        Self::new(index.saturating_add(1))
    }

    /// Returns the month value as u8 (1 = January)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the 0-based month index (0 = January)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }

    /// Month for any 0-based index, wrapping modulo 12
    pub(crate) const fn wrapping_from_index(index: i64) -> Self {
        let value = index.rem_euclid(MAX_MONTH as i64) as u8 + 1;
        match NonZeroU8::new(value) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU8::MIN),
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Clamps `value` into `1..=days_in_month(year, month)`
    pub(crate) const fn clamped(value: u8, year: u16, month: u8) -> Self {
        let max = days_in_month(year, month);
        let clamped = if value < MIN_DAY {
            MIN_DAY
        } else if value > max {
            max
        } else {
            value
        };
        match NonZeroU8::new(clamped) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU8::MIN),
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check minimum
        if value < MIN_DAY {
            return Err(ParseError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, in Sunday-first order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays starting from Sunday
    pub const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Position in a Sunday-first week (Sunday = 0)
    #[inline]
    pub const fn index_from_sunday(self) -> u8 {
        self as u8
    }

    /// Weekday at the given Sunday-first position, wrapping modulo 7
    pub const fn from_sunday_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(DAYS_PER_WEEK as i64) as usize]
    }

    /// Number of days from `start` forward to `self` (0..=6)
    pub const fn days_since(self, start: Self) -> u8 {
        (self.index_from_sunday() + DAYS_PER_WEEK as u8 - start.index_from_sunday())
            % DAYS_PER_WEEK as u8
    }

    /// The seven weekdays of a week that begins on `start`
    pub fn week_from(start: Self) -> [Self; DAYS_PER_WEEK] {
        let offset = i64::from(start.index_from_sunday());
        let mut days = Self::ALL;
        for (idx, slot) in (0_i64..).zip(days.iter_mut()) {
            *slot = Self::from_sunday_index(offset + idx);
        }
        days
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
