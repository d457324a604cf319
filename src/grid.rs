use crate::{CalendarDate, DAYS_PER_WEEK, GRID_CELLS, Weekday, YearMonth};

/// Six weeks of consecutive dates covering one month.
///
/// The grid always holds exactly [`GRID_CELLS`] dates: days before the 1st
/// are filled from the previous month and days after the last from the next
/// one, so short months still lay out as six rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month:      YearMonth,
    week_start: Weekday,
    cells:      [CalendarDate; GRID_CELLS],
}

impl MonthGrid {
    /// Builds the grid for `month` with weeks starting on `week_start`.
    ///
    /// Months outside the displayable window are clamped into it first.
    pub fn build(month: YearMonth, week_start: Weekday) -> Self {
        let month = month.add_months(0);
        let first = month.first_day();
        let leading = i64::from(first.weekday().days_since(week_start));

        let mut cells = [first; GRID_CELLS];
        for (offset, cell) in (0_i64..).zip(cells.iter_mut()) {
            // every cell of a displayable month is representable
            *cell = first.add_days(offset - leading).unwrap_or(first);
        }

        Self {
            month,
            week_start,
            cells,
        }
    }

    /// Sunday-first grid, the calendar's default layout
    pub fn sunday_first(month: YearMonth) -> Self {
        Self::build(month, Weekday::Sunday)
    }

    /// The month this grid displays
    pub const fn month(&self) -> YearMonth {
        self.month
    }

    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// All cells in row-major order
    pub const fn dates(&self) -> &[CalendarDate; GRID_CELLS] {
        &self.cells
    }

    /// Rows of seven dates
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Column headers in display order
    pub fn weekday_headers(&self) -> [Weekday; DAYS_PER_WEEK] {
        Weekday::week_from(self.week_start)
    }

    pub const fn first(&self) -> CalendarDate {
        self.cells[0]
    }

    pub const fn last(&self) -> CalendarDate {
        self.cells[GRID_CELLS - 1]
    }

    /// Whether the date is shown anywhere in the grid, padding included
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.first() <= *date && *date <= self.last()
    }

    /// Cell index of the date, if shown
    pub fn index_of(&self, date: &CalendarDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        usize::try_from(self.first().days_until(date)).ok()
    }

    /// Whether the date is a padding cell from an adjacent month
    pub fn is_padding(&self, date: &CalendarDate) -> bool {
        self.contains(date) && !self.month.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ym};

    #[test]
    fn test_grid_always_has_42_consecutive_dates() {
        for year in [1999_u16, 2000, 2024, 2025, 2100] {
            for month in 1..=12 {
                let view = ym(year, month);
                let grid = MonthGrid::sunday_first(view);
                let dates = grid.dates();

                assert_eq!(dates.len(), GRID_CELLS);
                for pair in dates.windows(2) {
                    assert_eq!(pair[0].days_until(&pair[1]), 1, "gap in grid for {view}");
                }
                assert!(grid.contains(&view.first_day()), "{view} start not covered");
                assert!(grid.contains(&view.last_day()), "{view} end not covered");
                assert_eq!(grid.first().weekday(), Weekday::Sunday);
            }
        }
    }

    #[test]
    fn test_leading_padding_from_previous_month() {
        // 2025-01-01 is a Wednesday
        let grid = MonthGrid::sunday_first(ym(2025, 1));
        assert_eq!(grid.first(), date(2024, 12, 29));
        assert_eq!(grid.dates()[3], date(2025, 1, 1));
        assert_eq!(grid.last(), date(2025, 2, 8));
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_leading_padding() {
        // February 2015 starts on a Sunday and spans exactly four weeks
        let grid = MonthGrid::sunday_first(ym(2015, 2));
        assert_eq!(grid.first(), date(2015, 2, 1));
        assert_eq!(grid.dates()[28], date(2015, 3, 1));
        assert_eq!(grid.last(), date(2015, 3, 14));
        assert_eq!(grid.weeks().count(), 6);
    }

    #[test]
    fn test_monday_first_layout() {
        let grid = MonthGrid::build(ym(2025, 1), Weekday::Monday);
        assert_eq!(grid.first(), date(2024, 12, 30));
        assert_eq!(grid.weekday_headers()[0], Weekday::Monday);
        assert_eq!(grid.weekday_headers()[6], Weekday::Sunday);
    }

    #[test]
    fn test_padding_and_index() {
        let grid = MonthGrid::sunday_first(ym(2025, 1));
        assert!(grid.is_padding(&date(2024, 12, 31)));
        assert!(grid.is_padding(&date(2025, 2, 1)));
        assert!(!grid.is_padding(&date(2025, 1, 31)));
        assert!(!grid.is_padding(&date(2025, 3, 1)));

        assert_eq!(grid.index_of(&date(2024, 12, 29)), Some(0));
        assert_eq!(grid.index_of(&date(2025, 1, 15)), Some(17));
        assert_eq!(grid.index_of(&date(2025, 3, 1)), None);
    }

    #[test]
    fn test_build_clamps_edge_months() {
        let grid = MonthGrid::sunday_first(ym(1, 1));
        assert_eq!(grid.month(), ym(1, 2));
        assert_eq!(grid.dates().len(), GRID_CELLS);

        let grid = MonthGrid::sunday_first(ym(9999, 12));
        assert_eq!(grid.month(), ym(9999, 11));
    }
}
