use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, RANGE_SEPARATOR};

/// A selected range of civil dates (inclusive).
///
/// `to` is `None` while the end is still being picked. When present it is
/// never before `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    from: CalendarDate,
    to:   Option<CalendarDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// End date is before start date.
    #[error("Invalid date range: from ({from}) is after to ({to})")]
    InvalidRange { from: CalendarDate, to: CalendarDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a complete range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if from > to.
    pub fn new(from: CalendarDate, to: CalendarDate) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::InvalidRange { from, to });
        }
        Ok(Self { from, to: Some(to) })
    }

    /// A range whose end has not been picked yet
    pub const fn starting(from: CalendarDate) -> Self {
        Self { from, to: None }
    }

    /// A complete range from two dates in either order
    pub fn ordered(a: CalendarDate, b: CalendarDate) -> Self {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        Self { from, to: Some(to) }
    }

    /// A complete one-day range
    pub const fn single(day: CalendarDate) -> Self {
        Self {
            from: day,
            to:   Some(day),
        }
    }

    pub const fn from(&self) -> CalendarDate {
        self.from
    }

    pub const fn to(&self) -> Option<CalendarDate> {
        self.to
    }

    /// Whether both endpoints are set
    pub const fn is_complete(&self) -> bool {
        self.to.is_some()
    }

    /// The last day covered; `from` while the end is still open
    pub fn end(&self) -> CalendarDate {
        self.to.unwrap_or(self.from)
    }

    /// Both endpoints, when complete
    pub fn dates(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.to.map(|to| (self.from, to))
    }

    /// Checks if the range contains a given date. An open range covers only
    /// its start.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.from <= *date && *date <= self.end()
    }

    /// Whether the date is either endpoint
    pub fn is_endpoint(&self, date: &CalendarDate) -> bool {
        self.from == *date || self.to == Some(*date)
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.end() && other.from <= self.end()
    }

    /// Number of calendar days covered, both ends included
    pub fn day_count(&self) -> u32 {
        u32::try_from(self.from.days_until(&self.end()) + 1).unwrap_or(u32::MAX)
    }

    /// Nights between check-in and check-out; zero for a one-day range
    pub fn nights(&self) -> u32 {
        self.day_count() - 1
    }

    /// Iterates over every date in the range
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        let end = self.end();
        std::iter::successors(Some(self.from), move |d| d.succ().filter(|next| *next <= end))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}{RANGE_SEPARATOR}{to}", self.from),
            None => write!(f, "{}{RANGE_SEPARATOR}", self.from),
        }
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval: use RANGE_SEPARATOR to separate from/to
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (from_str, to_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let from = from_str.trim().parse::<CalendarDate>()?;
                let to_str = to_str.trim();
                if to_str.is_empty() {
                    return Ok(Self::starting(from));
                }

                Self::new(from, to_str.parse::<CalendarDate>()?)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates; open ranges sort first
        match self.from.cmp(&other.from) {
            Ordering::Equal => self.to.cmp(&other.to),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            from:           CalendarDate,
            to:             CalendarDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                from:           date(2025, 1, 15),
                to:             date(2025, 1, 20),
                should_succeed: true,
                description:    "valid range (from < to)",
            },
            TestCase {
                from:           date(2025, 1, 20),
                to:             date(2025, 1, 15),
                should_succeed: false,
                description:    "invalid range (from > to)",
            },
            TestCase {
                from:           date(2025, 1, 10),
                to:             date(2025, 1, 10),
                should_succeed: true,
                description:    "single day (from == to)",
            },
        ];

        for case in &cases {
            let result = DateRange::new(case.from, case.to);
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_ordered_swaps_reversed_picks() {
        let r = DateRange::ordered(date(2024, 12, 20), date(2024, 12, 15));
        assert_eq!(r.from(), date(2024, 12, 15));
        assert_eq!(r.to(), Some(date(2024, 12, 20)));
    }

    #[test]
    fn test_open_range() {
        let r = DateRange::starting(date(2025, 1, 10));
        assert!(!r.is_complete());
        assert_eq!(r.end(), date(2025, 1, 10));
        assert_eq!(r.dates(), None);
        assert!(r.contains(&date(2025, 1, 10)));
        assert!(!r.contains(&date(2025, 1, 11)));
        assert_eq!(r.day_count(), 1);
    }

    #[test]
    fn test_contains_and_endpoints() {
        let r = range(date(2025, 1, 15), date(2025, 1, 20));
        assert!(r.contains(&date(2025, 1, 15)));
        assert!(r.contains(&date(2025, 1, 17)));
        assert!(r.contains(&date(2025, 1, 20)));
        assert!(!r.contains(&date(2025, 1, 14)));
        assert!(!r.contains(&date(2025, 1, 21)));

        assert!(r.is_endpoint(&date(2025, 1, 15)));
        assert!(r.is_endpoint(&date(2025, 1, 20)));
        assert!(!r.is_endpoint(&date(2025, 1, 17)));
    }

    #[test]
    fn test_overlaps() {
        let a = range(date(2025, 1, 10), date(2025, 1, 20));
        let b = range(date(2025, 1, 20), date(2025, 1, 25));
        let c = range(date(2025, 1, 21), date(2025, 1, 25));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_day_count_and_nights() {
        let r = range(date(2025, 1, 15), date(2025, 1, 20));
        assert_eq!(r.day_count(), 6);
        assert_eq!(r.nights(), 5);

        let across_leap = range(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(across_leap.day_count(), 3);

        assert_eq!(DateRange::single(date(2025, 1, 10)).nights(), 0);
    }

    #[test]
    fn test_iter() {
        let r = range(date(2024, 12, 30), date(2025, 1, 2));
        let days: Vec<_> = r.iter().collect();
        assert_eq!(
            days,
            vec![date(2024, 12, 30), date(2024, 12, 31), date(2025, 1, 1), date(2025, 1, 2)]
        );
    }

    #[test]
    fn test_display_and_parse() {
        let r = range(date(2025, 1, 15), date(2025, 1, 20));
        assert_eq!(r.to_string(), "2025-01-15/2025-01-20");
        assert_eq!("2025-01-15/2025-01-20".parse::<DateRange>().unwrap(), r);

        let open = DateRange::starting(date(2025, 1, 15));
        assert_eq!(open.to_string(), "2025-01-15/");
        assert_eq!("2025-01-15/".parse::<DateRange>().unwrap(), open);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2025-01-20/2025-01-15".parse::<DateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
        assert!(matches!("2025-01-20".parse::<DateRange>(), Err(RangeError::InvalidFormat(_))));
        assert!(matches!("2025-01-20/2025-01-21/2025-01-22".parse::<DateRange>(), Err(RangeError::InvalidFormat(_))));
        assert!(matches!("2025-13-01/2025-01-21".parse::<DateRange>(), Err(RangeError::ParseError(_))));

        let err = "2025/2026/2027".parse::<DateRange>().expect_err("expected separator error");
        assert!(err.to_string().contains("expected 1, found 2"));
    }

    #[test]
    fn test_ordering() {
        let a = range(date(2025, 1, 10), date(2025, 1, 20));
        let b = range(date(2025, 1, 10), date(2025, 1, 25));
        let open = DateRange::starting(date(2025, 1, 10));
        assert!(a < b);
        assert!(open < a);
    }

    #[test]
    fn test_serde_string_format() {
        let r = range(date(2024, 12, 15), date(2024, 12, 20));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""2024-12-15/2024-12-20""#);

        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
        assert!(serde_json::from_str::<DateRange>(r#""2024-12-20/2024-12-15""#).is_err());
    }
}
