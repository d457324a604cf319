//! Human-readable labels for headers and summaries (English).

use crate::{CalendarDate, DateRange, Month, Weekday, YearMonth};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[usize::from(month.index())]
}

/// Three-letter month abbreviation
pub fn month_short_name(month: Month) -> &'static str {
    let name = month_name(month);
    &name[..3]
}

/// Two-letter column header
pub fn weekday_short_name(weekday: Weekday) -> &'static str {
    WEEKDAY_SHORT_NAMES[usize::from(weekday.index_from_sunday())]
}

/// "January 2025"
pub fn format_month_title(month: YearMonth) -> String {
    format!("{} {}", month_name(month.month_typed()), month.year())
}

/// "Jan 15, 2025"
pub fn format_date_label(date: CalendarDate) -> String {
    format!("{} {}, {}", month_short_name(date.month_typed()), date.day(), date.year())
}

/// Summary of a selection for the field that opens the calendar.
pub fn format_range_label(range: Option<DateRange>) -> String {
    match range.map(|r| (r.from(), r.to())) {
        None => "Select dates".to_owned(),
        Some((from, None)) => format!("{} - ...", format_date_label(from)),
        Some((from, Some(to))) if from == to => format_date_label(from),
        Some((from, Some(to))) => format!("{} - {}", format_date_label(from), format_date_label(to)),
    }
}
