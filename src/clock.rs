use chrono::{Datelike, Local, NaiveDate};

use crate::{CalendarDate, YearMonth};

/// Source of "today" for the calendar.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Today's date in the local time zone, read from the system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        from_naive(Local::now().date_naive()).unwrap_or_else(epoch)
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

/// Civil date of a chrono reading; `None` outside years `1..=9999`.
fn from_naive(date: NaiveDate) -> Option<CalendarDate> {
    let year = u16::try_from(date.year()).ok()?;
    let month = u8::try_from(date.month()).ok()?;
    let day = u8::try_from(date.day()).ok()?;
    CalendarDate::from_ymd(year, month, day).ok()
}

fn epoch() -> CalendarDate {
    // 1970-01-01
    YearMonth::normalized(1970, 0).first_day()
}
