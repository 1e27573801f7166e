//! Headless booking calendar.
//!
//! A check-in/check-out picker driven by discrete input events (day clicks,
//! pointer enter/leave, month paging) and rendered from pure state. Hosts own
//! the presentation; this crate owns the selection rules, the day grid, and
//! the Gregorian/Hijri labels shown beside it.

mod config;
mod consts;
mod destination;
mod format;
mod hijri;
mod locale;
mod picker;
mod prelude;
mod selection;
mod stay;
mod types;

pub use config::PickerConfig;
pub use consts::*;
pub use destination::{CITIES, City, Popover, SearchCard, SearchError, SearchRequest};
pub use format::DateFormatter;
pub use hijri::{HijriDate, HijriMonth};
pub use locale::{CalendarSystem, Direction, Locale, WeekStart};
pub use picker::{CalendarCell, Completion, DayCell, RangePicker, SelectOutcome};
pub use selection::{DateSelection, SelectionError, SelectionMode, SelectionState};
pub use stay::{HoldCountdown, StayForm};
pub use types::{Month, ViewMonth};

use crate::prelude::*;

/// Errors produced when turning external values (config strings, raw numbers)
/// into this crate's types. Interaction methods never return errors.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Year out of supported range: {_0}")]
    InvalidYear(i32),
    #[display(fmt = "Invalid date: {_0}")]
    InvalidDate(String),
    #[display(fmt = "Unknown locale: {_0} (expected ar or en)")]
    UnknownLocale(String),
    #[display(fmt = "Unknown calendar system: {_0} (expected gregorian or hijri)")]
    UnknownCalendar(String),
    #[display(fmt = "Unknown week start: {_0}")]
    UnknownWeekStart(String),
    #[display(fmt = "Unknown selection mode: {_0} (expected single or range)")]
    UnknownMode(String),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            ParseError::UnknownLocale("fr".into()).to_string(),
            "Unknown locale: fr (expected ar or en)"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty input");
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_MONTH, 12);
        assert_eq!(MIN_NIGHTS, 1);
        assert_eq!(HOLD_SECONDS, 600);
    }
}
