use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ParseError, RANGE_SEPARATOR, prelude::*};

/// Whether the picker collects a single date or a check-in/check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[display(fmt = "single")]
    Single,
    #[default]
    #[display(fmt = "range")]
    Range,
}

impl FromStr for SelectionMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(ParseError::EmptyInput),
            "single" => Ok(Self::Single),
            "range" => Ok(Self::Range),
            other => Err(ParseError::UnknownMode(other.to_owned())),
        }
    }
}

/// Progress of a two-click selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// No check-in chosen yet
    Empty,
    /// Check-in chosen, waiting for check-out
    PartialStart,
    /// Both dates chosen
    Complete,
}

/// Check-in and check-out dates.
/// When both are set, check-out is strictly later than check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateSelection {
    check_in:  Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

/// Error type for building a selection from external values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Check-out is not after check-in.
    #[error("Invalid selection: check-out ({check_out}) must be after check-in ({check_in})")]
    InvalidRange { check_in: NaiveDate, check_out: NaiveDate },

    /// Error parsing a date or a config value.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid selection format.
    #[error("Invalid selection format: {0}")]
    InvalidFormat(String),
}

impl DateSelection {
    /// The state before any interaction.
    pub const fn empty() -> Self {
        Self {
            check_in:  None,
            check_out: None,
        }
    }

    /// A selection in progress.
    pub const fn starting(check_in: NaiveDate) -> Self {
        Self {
            check_in:  Some(check_in),
            check_out: None,
        }
    }

    /// Creates a complete selection with validation.
    ///
    /// # Errors
    /// Returns `SelectionError::InvalidRange` if `check_out <= check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, SelectionError> {
        if check_out <= check_in {
            return Err(SelectionError::InvalidRange { check_in, check_out });
        }
        Ok(Self {
            check_in:  Some(check_in),
            check_out: Some(check_out),
        })
    }

    /// One-night stay starting `day`. Falls back to an in-progress selection
    /// on the last representable day.
    pub fn overnight(day: NaiveDate) -> Self {
        Self {
            check_in:  Some(day),
            check_out: day.succ_opt(),
        }
    }

    #[inline]
    pub const fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    #[inline]
    pub const fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub const fn state(&self) -> SelectionState {
        match (self.check_in, self.check_out) {
            (Some(_), Some(_)) => SelectionState::Complete,
            (Some(_), None) => SelectionState::PartialStart,
            (None, _) => SelectionState::Empty,
        }
    }

    /// Number of nights when complete
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => Some((b - a).num_days()),
            _ => None,
        }
    }

    /// True strictly between check-in and check-out; endpoints are excluded.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => a < date && date < b,
            _ => false,
        }
    }

    pub fn is_start(&self, date: NaiveDate) -> bool {
        self.check_in == Some(date)
    }

    pub fn is_end(&self, date: NaiveDate) -> bool {
        self.check_out == Some(date)
    }

    pub(crate) fn set_check_in(&mut self, date: NaiveDate) {
        self.check_in = Some(date);
        self.check_out = None;
    }

    pub(crate) fn set_check_out(&mut self, date: NaiveDate) {
        self.check_out = Some(date);
    }
}

impl fmt::Display for DateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => write!(f, "{a}{RANGE_SEPARATOR}{b}"),
            (Some(a), None) => write!(f, "{a}{RANGE_SEPARATOR}"),
            (None, _) => Ok(()),
        }
    }
}

impl FromStr for DateSelection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        if separator_count != 1 {
            return Err(SelectionError::InvalidFormat(format!(
                "expected one '{RANGE_SEPARATOR}' separator, found {separator_count}: {s}"
            )));
        }

        let (start, end) = trimmed
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| SelectionError::InvalidFormat(s.to_owned()))?;
        let check_in = parse_day(start)?;

        match end.trim() {
            "" => Ok(Self::starting(check_in)),
            end => Self::new(check_in, parse_day(end)?),
        }
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, ParseError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate(s.to_owned()))
}

impl Serialize for DateSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateSelection {
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

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_selection_cases() {
        struct TestCase {
            check_in:       NaiveDate,
            check_out:      NaiveDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                check_in:       day(2024, 3, 12),
                check_out:      day(2024, 3, 20),
                should_succeed: true,
                description:    "check-out after check-in",
            },
            TestCase {
                check_in:       day(2024, 3, 20),
                check_out:      day(2024, 3, 12),
                should_succeed: false,
                description:    "check-out before check-in",
            },
            TestCase {
                check_in:       day(2024, 3, 12),
                check_out:      day(2024, 3, 12),
                should_succeed: false,
                description:    "zero-night stay",
            },
        ];

        for case in &cases {
            let selection = DateSelection::new(case.check_in, case.check_out);
            assert_eq!(selection.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_states() {
        assert_eq!(DateSelection::empty().state(), SelectionState::Empty);
        assert_eq!(DateSelection::starting(day(2024, 3, 15)).state(), SelectionState::PartialStart);
        assert_eq!(
            DateSelection::new(day(2024, 3, 15), day(2024, 3, 16))
                .expect("valid selection")
                .state(),
            SelectionState::Complete
        );
    }

    #[test]
    fn test_contains_excludes_endpoints() {
        let selection = DateSelection::new(day(2024, 3, 12), day(2024, 3, 20)).expect("valid selection");

        assert!(!selection.contains(day(2024, 3, 12)));
        assert!(selection.contains(day(2024, 3, 13)));
        assert!(selection.contains(day(2024, 3, 19)));
        assert!(!selection.contains(day(2024, 3, 20)));
        assert!(!selection.contains(day(2024, 3, 25)));

        assert!(selection.is_start(day(2024, 3, 12)));
        assert!(selection.is_end(day(2024, 3, 20)));
        assert!(!selection.is_end(day(2024, 3, 12)));
    }

    #[test]
    fn test_contains_false_while_in_progress() {
        let selection = DateSelection::starting(day(2024, 3, 12));
        assert!(!selection.contains(day(2024, 3, 13)));
        assert_eq!(selection.nights(), None);
    }

    #[test]
    fn test_overnight() {
        let selection = DateSelection::overnight(day(2024, 12, 31));
        assert_eq!(selection.check_out(), Some(day(2025, 1, 1)));
        assert_eq!(selection.nights(), Some(1));
    }

    #[test]
    fn test_display_and_parse() {
        let selection = DateSelection::new(day(2024, 3, 12), day(2024, 3, 20)).expect("valid selection");
        assert_eq!(selection.to_string(), "2024-03-12/2024-03-20");
        assert_eq!("2024-03-12/2024-03-20".parse::<DateSelection>(), Ok(selection));

        let partial = DateSelection::starting(day(2024, 3, 12));
        assert_eq!(partial.to_string(), "2024-03-12/");
        assert_eq!("2024-03-12/".parse::<DateSelection>(), Ok(partial));

        assert_eq!(DateSelection::empty().to_string(), "");
        assert_eq!("".parse::<DateSelection>(), Ok(DateSelection::empty()));
    }

    #[test]
    fn test_parse_errors() {
        let err = "2024-03-20/2024-03-12"
            .parse::<DateSelection>()
            .expect_err("reversed range should fail");
        assert!(matches!(err, SelectionError::InvalidRange { .. }));

        let err = "2024-03-12".parse::<DateSelection>().expect_err("missing separator");
        assert!(err.to_string().contains("expected one '/' separator"));

        let err = "2024-03-12/2024-13-01"
            .parse::<DateSelection>()
            .expect_err("invalid month should fail");
        assert_eq!(err, SelectionError::ParseError(ParseError::InvalidDate("2024-13-01".into())));
    }

    #[test]
    fn test_serde_string_format() {
        let selection = DateSelection::new(day(2024, 3, 12), day(2024, 3, 20)).expect("valid selection");
        let json = serde_json::to_string(&selection).expect("serialize selection");
        assert_eq!(json, r#""2024-03-12/2024-03-20""#);

        let parsed: DateSelection = serde_json::from_str(&json).expect("deserialize selection");
        assert_eq!(parsed, selection);

        let result: Result<DateSelection, _> = serde_json::from_str(r#""2024-03-20/2024-03-20""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("single".parse::<SelectionMode>(), Ok(SelectionMode::Single));
        assert_eq!(" Range ".parse::<SelectionMode>(), Ok(SelectionMode::Range));
        assert_eq!(
            "multi".parse::<SelectionMode>(),
            Err(ParseError::UnknownMode("multi".into()))
        );
    }
}
