//! Shorthand constructors for tests.

use crate::{CalendarDate, DateRange, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("test date must be valid")
}

pub fn ym(year: u16, month: u8) -> YearMonth {
    YearMonth::new(year, month).expect("test month must be valid")
}

pub fn range(from: CalendarDate, to: CalendarDate) -> DateRange {
    DateRange::new(from, to).expect("test range must be ordered")
}
