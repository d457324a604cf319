//! The range-picking calendar component.
//!
//! [`RangeCalendar`] owns its selection and view state and is driven by
//! discrete events from the host UI: clicks, key presses, hover, and the
//! today/clear/close actions. The host learns about results only through
//! [`CalendarEvents`]: once per completed range, once per clear, and once
//! per close.

use tracing::{debug, trace};

use crate::{
    CalendarDate, CalendarOptions, Clock, Constraints, DateRange, Key, KeyOutcome, MonthGrid,
    Navigator, RangeSelector, SelectionState, SystemClock, Transition, YearMonth,
    format::format_month_title,
};

/// Callbacks the calendar invokes on its host.
pub trait CalendarEvents {
    /// A range was completed (`Some`) or the selection was cleared (`None`).
    fn on_range_select(&mut self, range: Option<DateRange>);

    /// The calendar was dismissed.
    fn on_close(&mut self);
}

/// [`CalendarEvents`] backed by two closures.
pub struct Callbacks<S, C> {
    on_range_select: S,
    on_close:        C,
}

impl<S, C> Callbacks<S, C>
where
    S: FnMut(Option<DateRange>),
    C: FnMut(),
{
    pub const fn new(on_range_select: S, on_close: C) -> Self {
        Self {
            on_range_select,
            on_close,
        }
    }
}

impl<S, C> CalendarEvents for Callbacks<S, C>
where
    S: FnMut(Option<DateRange>),
    C: FnMut(),
{
    fn on_range_select(&mut self, range: Option<DateRange>) {
        (self.on_range_select)(range);
    }

    fn on_close(&mut self) {
        (self.on_close)();
    }
}

/// Optional controls shown next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarAction {
    Today,
    Clear,
    Close,
}

/// Result of a date click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub transition: Transition,
    /// The click completed a range and auto-close dismissed the calendar.
    pub closed:     bool,
}

impl ClickOutcome {
    const IGNORED: Self = Self {
        transition: Transition::Ignored,
        closed:     false,
    };
}

/// Render model for one grid cell. Every flag is derived on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date:             CalendarDate,
    pub in_current_month: bool,
    pub is_today:         bool,
    pub is_disabled:      bool,
    /// Inside the selected range, or the hover preview while the end is pending.
    pub in_range:         bool,
    pub is_range_start:   bool,
    pub is_range_end:     bool,
    pub is_focused:       bool,
}

/// Date-range picking calendar.
pub struct RangeCalendar<E, C = SystemClock> {
    options:     CalendarOptions,
    constraints: Constraints,
    selector:    RangeSelector,
    /// Last range the host was told about; restored when closing mid-pick.
    confirmed:   Option<DateRange>,
    navigator:   Navigator,
    hovered:     Option<CalendarDate>,
    open:        bool,
    events:      E,
    clock:       C,
}

impl<E: CalendarEvents> RangeCalendar<E, SystemClock> {
    /// Opens a calendar that reads today's date from the system clock.
    pub fn new(options: CalendarOptions, events: E) -> Self {
        Self::with_clock(options, events, SystemClock)
    }
}

impl<E: CalendarEvents, C: Clock> RangeCalendar<E, C> {
    /// Opens a calendar with an explicit clock.
    ///
    /// The view starts on the month of the seeded range, or of today.
    pub fn with_clock(options: CalendarOptions, events: E, clock: C) -> Self {
        let seed = options.selected_range;
        let constraints = options.constraints();
        let focus = seed.map_or_else(|| clock.today(), |range| range.from());
        debug!(
            selected = ?seed.map(|range| range.to_string()),
            allow_single_day = constraints.allow_single_day(),
            "calendar_opened"
        );

        Self {
            options,
            constraints,
            selector: RangeSelector::seeded(seed),
            confirmed: seed,
            navigator: Navigator::new(focus),
            hovered: None,
            open: true,
            events,
            clock,
        }
    }

    /// Handles a click on a grid date.
    ///
    /// Disabled dates, and any click while closed, are ignored without
    /// notifying the host. A click that only starts a range does not notify
    /// either.
    pub fn click(&mut self, date: CalendarDate) -> ClickOutcome {
        if !self.open {
            trace!(date = %date, "calendar_click_while_closed");
            return ClickOutcome::IGNORED;
        }

        let transition = self.selector.click(date, &self.constraints);
        if transition == Transition::Ignored {
            return ClickOutcome::IGNORED;
        }

        // padding-cell clicks re-centre the grid on the clicked month
        self.navigator.focus_on(date);

        let mut closed = false;
        if let Some(range) = transition.completed_range() {
            self.confirmed = Some(range);
            self.events.on_range_select(Some(range));
            if self.options.auto_close {
                self.close();
                closed = true;
            }
        }

        ClickOutcome { transition, closed }
    }

    /// Drops the selection and tells the host with `None`, even when
    /// nothing was selected.
    pub fn clear(&mut self) {
        self.selector.clear();
        self.confirmed = None;
        self.hovered = None;
        self.events.on_range_select(None);
    }

    /// Shows the month containing today. Selection is untouched.
    pub fn go_to_today(&mut self) {
        let today = self.clock.today();
        self.navigator.go_to_today(today);
    }

    pub fn previous_month(&mut self) {
        self.navigator.previous_month();
    }

    pub fn next_month(&mut self) {
        self.navigator.next_month();
    }

    /// Updates the hover target used for the pending-range preview.
    pub fn hover(&mut self, date: Option<CalendarDate>) {
        self.hovered = date;
    }

    /// Handles a key press.
    ///
    /// Movement keys change focus only; Enter/Space click the focused date
    /// and Escape closes.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.navigator.handle_key(key, self.options.week_start);
        match outcome {
            KeyOutcome::Activate(date) => {
                self.click(date);
            },
            KeyOutcome::Dismiss => self.close(),
            KeyOutcome::Focused(_) => {},
        }
        outcome
    }

    /// Runs one of the optional controls.
    pub fn trigger(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::Today => self.go_to_today(),
            CalendarAction::Clear => self.clear(),
            CalendarAction::Close => self.close(),
        }
    }

    /// Controls the host should render, per the options.
    pub fn actions(&self) -> Vec<CalendarAction> {
        [
            (CalendarAction::Today, self.options.show_today_button),
            (CalendarAction::Clear, self.options.show_clear_button),
            (CalendarAction::Close, self.options.show_close_button),
        ]
        .into_iter()
        .filter_map(|(action, shown)| shown.then_some(action))
        .collect()
    }

    /// Dismisses the calendar. A half-picked range is discarded and the
    /// last confirmed range restored.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.hovered = None;
        if self.selector.state() == SelectionState::StartOnly {
            debug!("calendar_pending_start_discarded");
        }
        self.selector.set_range(self.confirmed);
        debug!("calendar_closed");
        self.events.on_close();
    }

    /// Shows the calendar again on the month of the current selection.
    pub fn reopen(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        if let Some(range) = self.confirmed {
            self.navigator.focus_on(range.from());
        }
        debug!("calendar_reopened");
    }

    /// Replaces the selection from the host side. No callback fires.
    pub fn set_selected_range(&mut self, range: Option<DateRange>) {
        self.selector.set_range(range);
        self.confirmed = range;
        self.options.selected_range = range;
        if let Some(range) = range {
            self.navigator.focus_on(range.from());
        }
    }

    /// Replaces the bounds and blocked dates from the host side. The
    /// current selection is kept as is.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.options.min_date = constraints.min_date();
        self.options.max_date = constraints.max_date();
        self.options.disabled_dates = constraints.disabled_dates().clone();
        self.options.allow_single_day = constraints.allow_single_day();
        self.constraints = constraints;
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn selection_state(&self) -> SelectionState {
        self.selector.state()
    }

    /// Current selection, including a pending start
    pub const fn selected_range(&self) -> Option<DateRange> {
        self.selector.range()
    }

    pub const fn displayed_month(&self) -> YearMonth {
        self.navigator.displayed_month()
    }

    pub const fn focus(&self) -> CalendarDate {
        self.navigator.focus()
    }

    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub const fn options(&self) -> &CalendarOptions {
        &self.options
    }

    pub fn class_name(&self) -> Option<&str> {
        self.options.class_name.as_deref()
    }

    pub const fn events(&self) -> &E {
        &self.events
    }

    pub fn into_events(self) -> E {
        self.events
    }

    /// Header text for the displayed month
    pub fn title(&self) -> String {
        format_month_title(self.displayed_month())
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.displayed_month(), self.options.week_start)
    }

    pub fn is_disabled(&self, date: &CalendarDate) -> bool {
        self.constraints.is_disabled(date)
    }

    /// Render model for the displayed month.
    pub fn cells(&self) -> Vec<DayCell> {
        let grid = self.grid();
        let month = grid.month();
        let today = self.clock.today();
        let focus = self.focus();
        let highlighted = self.highlighted_range();

        grid.dates()
            .iter()
            .map(|&date| DayCell {
                date,
                in_current_month: month.contains(&date),
                is_today: date == today,
                is_disabled: self.constraints.is_disabled(&date),
                in_range: highlighted.is_some_and(|range| range.contains(&date)),
                is_range_start: highlighted.is_some_and(|range| range.from() == date),
                is_range_end: highlighted.is_some_and(|range| range.end() == date),
                is_focused: date == focus,
            })
            .collect()
    }

    /// Selected range, or the hover preview while the end is pending.
    fn highlighted_range(&self) -> Option<DateRange> {
        self.hovered
            .and_then(|hovered| self.selector.preview(hovered, &self.constraints))
            .or_else(|| self.selector.range())
    }
}
