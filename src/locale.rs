use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, ParseError, prelude::*};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[display(fmt = "ar")]
    #[serde(rename = "ar")]
    Arabic,
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
}

/// Text direction for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    #[display(fmt = "ltr")]
    Ltr,
    #[display(fmt = "rtl")]
    Rtl,
}

impl Locale {
    pub const fn direction(self) -> Direction {
        match self {
            Self::Arabic => Direction::Rtl,
            Self::English => Direction::Ltr,
        }
    }

    /// First column of the day grid. Saudi calendars start on Sunday in
    /// both languages.
    pub const fn week_start(self) -> WeekStart {
        match self {
            Self::Arabic | Self::English => WeekStart::Sunday,
        }
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(ParseError::EmptyInput),
            "ar" | "ar-sa" => Ok(Self::Arabic),
            "en" | "en-us" | "en-gb" => Ok(Self::English),
            other => Err(ParseError::UnknownLocale(other.to_owned())),
        }
    }
}

/// Calendar used for the primary date labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "hijri")]
    Hijri,
}

impl FromStr for CalendarSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(ParseError::EmptyInput),
            "gregorian" | "gregory" => Ok(Self::Gregorian),
            "hijri" | "islamic" => Ok(Self::Hijri),
            other => Err(ParseError::UnknownCalendar(other.to_owned())),
        }
    }
}

/// First weekday shown in the day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[display(fmt = "saturday")]
    Saturday,
    #[display(fmt = "sunday")]
    Sunday,
    #[display(fmt = "monday")]
    Monday,
}

impl WeekStart {
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Saturday => Weekday::Sat,
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Column of `day` in a grid starting on this weekday (0..7)
    pub fn column_of(self, day: Weekday) -> u32 {
        let start = self.weekday().num_days_from_sunday();
        (day.num_days_from_sunday() + DAYS_PER_WEEK - start) % DAYS_PER_WEEK
    }

    /// The seven weekdays in grid column order
    pub fn weekdays(self) -> impl Iterator<Item = Weekday> {
        std::iter::successors(Some(self.weekday()), |d| Some(d.succ())).take(DAYS_PER_WEEK as usize)
    }
}

impl FromStr for WeekStart {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(ParseError::EmptyInput),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(ParseError::UnknownWeekStart(other.to_owned())),
        }
    }
}
