//! The two-click check-in/check-out picker.
//!
//! The picker owns the selection, the month being viewed, and the transient
//! hover date. Hosts feed it input events and render [`RangePicker::grid`];
//! nothing is cached between renders.

use chrono::{Datelike, Local, NaiveDate};

use crate::{
    DateFormatter, DateSelection, PickerConfig, SelectionMode, SelectionState, ViewMonth, WeekStart,
    prelude::*,
};

/// Emitted once per completed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Completion {
    pub check_in:  NaiveDate,
    /// `None` in single-date mode
    pub check_out: Option<NaiveDate>,
}

/// What a day click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum SelectOutcome {
    /// Past date; nothing changed.
    Ignored,
    /// Same day as the pending check-in; nothing changed.
    Unchanged,
    /// A new selection was started at this day.
    Started,
    /// The pending check-in moved earlier.
    MovedStart,
    /// The selection is complete.
    Completed(Completion),
}

impl SelectOutcome {
    pub const fn completion(self) -> Option<Completion> {
        match self {
            Self::Completed(c) => Some(c),
            _ => None,
        }
    }
}

/// One rendered day with every flag the host needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub date:             NaiveDate,
    pub is_today:         bool,
    pub is_past:          bool,
    pub is_range_start:   bool,
    pub is_range_end:     bool,
    pub is_in_range:      bool,
    pub is_hover_preview: bool,
}

/// A grid slot: leading blanks pad the first week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

impl CalendarCell {
    pub const fn day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(cell) => Some(cell),
            Self::Blank => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePicker {
    config:    PickerConfig,
    today:     NaiveDate,
    selection: DateSelection,
    view:      ViewMonth,
    hover:     Option<NaiveDate>,
}

impl RangePicker {
    /// Opens a picker with the default selection for its mode: today to
    /// tomorrow for ranges, today for single dates.
    pub fn new(config: PickerConfig, today: NaiveDate) -> Self {
        Self {
            config,
            today,
            selection: Self::default_selection(config.mode, today),
            view: ViewMonth::containing(today),
            hover: None,
        }
    }

    /// Opens a picker using the local calendar day.
    pub fn open_today(config: PickerConfig) -> Self {
        Self::new(config, Local::now().date_naive())
    }

    /// Discards the current selection and view, as when the picker is shown
    /// again.
    pub fn reopen(&mut self, today: NaiveDate) {
        debug!("Reopening picker at {today}");
        *self = Self::new(self.config, today);
    }

    fn default_selection(mode: SelectionMode, today: NaiveDate) -> DateSelection {
        match mode {
            SelectionMode::Range => DateSelection::overnight(today),
            SelectionMode::Single => DateSelection::starting(today),
        }
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Moves "today" forward, e.g. when the host ticks past midnight.
    /// The selection is left as is.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub const fn selection(&self) -> DateSelection {
        self.selection
    }

    pub const fn check_in(&self) -> Option<NaiveDate> {
        self.selection.check_in()
    }

    pub const fn check_out(&self) -> Option<NaiveDate> {
        self.selection.check_out()
    }

    pub const fn state(&self) -> SelectionState {
        self.selection.state()
    }

    pub const fn view_month(&self) -> ViewMonth {
        self.view
    }

    pub const fn hover_date(&self) -> Option<NaiveDate> {
        self.hover
    }

    pub fn formatter(&self) -> DateFormatter {
        DateFormatter::new(self.config.locale)
    }

    pub fn week_start(&self) -> WeekStart {
        self.config.week_start()
    }

    /// Handles a click on `date`.
    pub fn select_day(&mut self, date: NaiveDate) -> SelectOutcome {
        if self.is_past(date) {
            trace!("Ignoring past date {date}");
            return SelectOutcome::Ignored;
        }

        if self.config.mode == SelectionMode::Single {
            self.selection.set_check_in(date);
            self.hover = None;
            debug!("Selected single date {date}");
            return SelectOutcome::Completed(Completion {
                check_in:  date,
                check_out: None,
            });
        }

        let check_in = match self.selection.state() {
            SelectionState::Empty | SelectionState::Complete => {
                self.selection.set_check_in(date);
                debug!("Started selection at {date}");
                return SelectOutcome::Started;
            }
            SelectionState::PartialStart => match self.selection.check_in() {
                Some(check_in) => check_in,
                None => return SelectOutcome::Ignored,
            },
        };

        if date < check_in {
            self.selection.set_check_in(date);
            debug!("Moved check-in from {check_in} to {date}");
            SelectOutcome::MovedStart
        } else if date == check_in {
            // zero-night stays are not bookable
            SelectOutcome::Unchanged
        } else {
            self.selection.set_check_out(date);
            self.hover = None;
            debug!("Completed selection {check_in} to {date}");
            SelectOutcome::Completed(Completion {
                check_in,
                check_out: Some(date),
            })
        }
    }

    /// Pages the view by `delta` months. Never touches the selection.
    pub fn change_month(&mut self, delta: i32) {
        self.view = self.view.shifted(delta);
        trace!("Viewing {}", self.view);
    }

    /// Pointer entered `date`. Ignored unless a selection is in progress.
    pub fn hover(&mut self, date: NaiveDate) {
        if self.accepts_hover() {
            self.hover = Some(date);
        }
    }

    /// Pointer left the grid.
    pub fn clear_hover(&mut self) {
        if self.accepts_hover() {
            self.hover = None;
        }
    }

    fn accepts_hover(&self) -> bool {
        self.config.mode == SelectionMode::Range && self.selection.state() != SelectionState::Complete
    }

    pub fn is_past(&self, date: NaiveDate) -> bool {
        date < self.today
    }

    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        self.selection.contains(date)
    }

    pub fn is_range_start(&self, date: NaiveDate) -> bool {
        self.selection.is_start(date)
    }

    pub fn is_range_end(&self, date: NaiveDate) -> bool {
        self.selection.is_end(date)
    }

    /// The range a click on the hovered day would produce.
    pub fn is_hover_preview(&self, date: NaiveDate) -> bool {
        match (self.selection.state(), self.selection.check_in(), self.hover) {
            (SelectionState::PartialStart, Some(check_in), Some(hover)) => check_in < date && date <= hover,
            _ => false,
        }
    }

    pub fn cell(&self, date: NaiveDate) -> DayCell {
        DayCell {
            date,
            is_today: date == self.today,
            is_past: self.is_past(date),
            is_range_start: self.is_range_start(date),
            is_range_end: self.is_range_end(date),
            is_in_range: self.is_in_range(date),
            is_hover_preview: self.is_hover_preview(date),
        }
    }

    /// Cells for the viewed month: blanks up to the weekday of the 1st, then
    /// every day in order.
    pub fn grid(&self) -> Vec<CalendarCell> {
        let first = self.view.first_day();
        let leading = self.week_start().column_of(first.weekday()) as usize;

        let mut cells = Vec::with_capacity(leading + usize::from(self.view.day_count()));
        cells.extend(std::iter::repeat_n(CalendarCell::Blank, leading));
        cells.extend(self.view.days().map(|date| CalendarCell::Day(self.cell(date))));
        cells
    }

    /// Column headers in grid order.
    pub fn weekday_headers(&self) -> Vec<&'static str> {
        let formatter = self.formatter();
        self.week_start()
            .weekdays()
            .map(|day| formatter.weekday_short(day))
            .collect()
    }

    /// Header above the grid, e.g. `March 2024`.
    pub fn month_header(&self) -> String {
        self.formatter().month_header(self.view)
    }
}
