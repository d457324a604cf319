use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Constraints, DateRange, Weekday};

/// Construction-time configuration for [`crate::RangeCalendar`].
///
/// Field names serialize in camelCase so options can be read straight from
/// the same JSON props a web front end would pass. Every field is optional
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarOptions {
    /// Initial selection; `None` starts empty.
    pub selected_range:    Option<DateRange>,
    /// Earliest pickable date (inclusive).
    pub min_date:          Option<CalendarDate>,
    /// Latest pickable date (inclusive).
    pub max_date:          Option<CalendarDate>,
    /// Individually blocked dates.
    pub disabled_dates:    BTreeSet<CalendarDate>,
    /// Whether `from == to` is a complete range.
    pub allow_single_day:  bool,
    pub show_today_button: bool,
    pub show_clear_button: bool,
    pub show_close_button: bool,
    /// Close as soon as a range completes.
    pub auto_close:        bool,
    /// First column of the grid.
    pub week_start:        Weekday,
    /// Styling passthrough for the host; never read by the calendar.
    pub class_name:        Option<String>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            selected_range:    None,
            min_date:          None,
            max_date:          None,
            disabled_dates:    BTreeSet::new(),
            allow_single_day:  false,
            show_today_button: true,
            show_clear_button: true,
            show_close_button: true,
            auto_close:        false,
            week_start:        Weekday::Sunday,
            class_name:        None,
        }
    }
}

impl CalendarOptions {
    /// The date constraints these options describe
    pub fn constraints(&self) -> Constraints {
        Constraints::new()
            .with_min_date(self.min_date)
            .with_max_date(self.max_date)
            .with_disabled_dates(self.disabled_dates.iter().copied())
            .with_allow_single_day(self.allow_single_day)
    }
}
