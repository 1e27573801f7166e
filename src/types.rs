use crate::ParseError;
use crate::consts::{JANUARY, MAX_MONTH, MONTHS_PER_YEAR};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index, for name tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The month shown by the calendar grid.
///
/// Always anchored to the first of the month, so any year chrono can
/// represent is a valid view and paging never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewMonth(NaiveDate);

impl ViewMonth {
    /// Creates a view of `year`/`month`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if chrono cannot represent the year.
    pub fn new(year: i32, month: Month) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, u32::from(month.get()), 1)
            .map(Self)
            .ok_or(ParseError::InvalidYear(year))
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        // chrono months are always 1..=12
        Month::new(self.0.month() as u8).unwrap_or(Month(NonZeroU8::MIN))
    }

    /// First calendar day of this month
    #[inline]
    pub const fn first_day(self) -> NaiveDate {
        self.0
    }

    /// Number of days in this month
    pub fn day_count(self) -> u8 {
        // the last representable month has no successor; it ends at NaiveDate::MAX
        let days = self.0.checked_add_months(Months::new(1)).map_or_else(
            || (NaiveDate::MAX - self.0).num_days() + 1,
            |next| (next - self.0).num_days(),
        );
        u8::try_from(days).unwrap_or(u8::MAX)
    }

    /// Shifts by `delta` whole months, rolling the year as needed.
    /// Results beyond chrono's supported years clamp to the first or last
    /// representable month.
    pub fn shifted(self, delta: i32) -> Self {
        let total = Self::total_months(self.0) + i64::from(delta);
        let total = total.clamp(Self::total_months(NaiveDate::MIN), Self::total_months(NaiveDate::MAX));

        let year = total.div_euclid(MONTHS_PER_YEAR);
        let month = total.rem_euclid(MONTHS_PER_YEAR) + i64::from(JANUARY);

        i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month as u32, 1))
            .map_or(self, Self)
    }

    /// Every day of the month in ascending order
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.0.iter_days().take(usize::from(self.day_count()))
    }

    fn total_months(date: NaiveDate) -> i64 {
        i64::from(date.year()) * MONTHS_PER_YEAR + i64::from(date.month0())
    }
}

impl fmt::Display for ViewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.0.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(year: i32, month: u8) -> ViewMonth {
        ViewMonth::new(year, Month::new(month).unwrap()).unwrap()
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_view_month_containing() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let v = ViewMonth::containing(date);
        assert_eq!(v, view(2024, 3));
        assert_eq!(v.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(v.to_string(), "2024-03");
    }

    #[test]
    fn test_view_month_shift_cases() {
        struct TestCase {
            from:        (i32, u8),
            delta:       i32,
            expected:    (i32, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        (2024, 3),
                delta:       1,
                expected:    (2024, 4),
                description: "next month",
            },
            TestCase {
                from:        (2024, 1),
                delta:       -1,
                expected:    (2023, 12),
                description: "previous month across year",
            },
            TestCase {
                from:        (2024, 12),
                delta:       1,
                expected:    (2025, 1),
                description: "December rolls to January",
            },
            TestCase {
                from:        (2024, 3),
                delta:       25,
                expected:    (2026, 4),
                description: "multi-year forward",
            },
            TestCase {
                from:        (2024, 3),
                delta:       -27,
                expected:    (2021, 12),
                description: "multi-year backward",
            },
            TestCase {
                from:        (2024, 3),
                delta:       0,
                expected:    (2024, 3),
                description: "zero delta",
            },
        ];

        for case in &cases {
            let got = view(case.from.0, case.from.1).shifted(case.delta);
            assert_eq!(
                got,
                view(case.expected.0, case.expected.1),
                "{}: {:?} shifted by {}",
                case.description,
                case.from,
                case.delta
            );
        }
    }

    #[test]
    fn test_view_month_shift_twelve_times_is_one_year() {
        let start = view(2024, 3);
        let mut v = start;
        for _ in 0..12 {
            v = v.shifted(1);
        }
        assert_eq!(v, view(2025, 3));
    }

    #[test]
    fn test_view_month_shift_extreme_delta_clamps() {
        let v = view(2024, 3);
        let far = v.shifted(i32::MAX);
        assert_eq!(far, ViewMonth::containing(NaiveDate::MAX));

        let near = v.shifted(i32::MIN);
        assert_eq!(near, ViewMonth::containing(NaiveDate::MIN));
    }

    #[test]
    fn test_view_month_days() {
        let days: Vec<_> = view(2024, 2).days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(days[28], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_view_month_day_count_cases() {
        struct TestCase {
            month:       (i32, u8),
            expected:    u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                month:       (2024, 2),
                expected:    29,
                description: "leap February",
            },
            TestCase {
                month:       (2023, 2),
                expected:    28,
                description: "common February",
            },
            TestCase {
                month:       (1900, 2),
                expected:    28,
                description: "century February",
            },
            TestCase {
                month:       (2000, 2),
                expected:    29,
                description: "400-year February",
            },
            TestCase {
                month:       (2024, 4),
                expected:    30,
                description: "thirty-day month",
            },
            TestCase {
                month:       (2024, 12),
                expected:    31,
                description: "December",
            },
        ];

        for case in &cases {
            assert_eq!(
                view(case.month.0, case.month.1).day_count(),
                case.expected,
                "{}: {:?}",
                case.description,
                case.month
            );
        }
    }

    #[test]
    fn test_view_month_day_count_at_upper_limit() {
        let last = ViewMonth::containing(NaiveDate::MAX);
        assert_eq!(last.day_count(), 31);
        assert_eq!(last.days().last(), Some(NaiveDate::MAX));
    }
}
