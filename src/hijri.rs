//! Gregorian to Hijri conversion.
//!
//! Dates from 1356 to 1500 AH (1937-03-14 to 2077-11-16) follow the Umm
//! al-Qura calendar used in Saudi Arabia. Outside that table the tabular
//! Islamic calendar (civil epoch, leap years 2, 5, 7, 10, 13, 16, 18, 21, 24,
//! 26, 29 of each 30-year cycle) is used instead.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        CE_TO_JDN, HIJRI_CYCLE_DAYS, HIJRI_EPOCH_JDN, UMM_AL_QURA_FIRST_YEAR, UMM_AL_QURA_YEARS,
    },
    prelude::*,
};

/// The twelve Hijri months
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQidah,
    DhuAlHijjah,
}

impl HijriMonth {
    const ALL: [Self; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThani,
        Self::JumadaAlAwwal,
        Self::JumadaAlThani,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhuAlQidah,
        Self::DhuAlHijjah,
    ];

    /// Month from its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// 1-based month number
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// A day in the Hijri calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.number()", "day")]
pub struct HijriDate {
    year:  i32,
    month: HijriMonth,
    day:   u8,
}

impl HijriDate {
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> HijriMonth {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Converts a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        Self::umm_al_qura(date).unwrap_or_else(|| {
            trace!("{date} is outside the Umm al-Qura table, using the tabular calendar");
            Self::tabular(date)
        })
    }

    /// Looks the date up in the Umm al-Qura table; `None` outside it.
    fn umm_al_qura(date: NaiveDate) -> Option<Self> {
        let days = date.num_days_from_ce();
        let row = UMM_AL_QURA_YEARS
            .partition_point(|&(first, _)| first <= days)
            .checked_sub(1)?;
        let (first, lengths) = UMM_AL_QURA_YEARS[row];

        let mut offset = days - first;
        for (bit, month) in HijriMonth::ALL.into_iter().enumerate() {
            let length = if lengths & (1 << bit) == 0 { 29 } else { 30 };
            if offset < length {
                return Some(Self {
                    year: UMM_AL_QURA_FIRST_YEAR + i32::try_from(row).ok()?,
                    month,
                    day: u8::try_from(offset + 1).ok()?,
                });
            }
            offset -= length;
        }
        // past the end of the last tabulated year
        None
    }

    fn tabular(date: NaiveDate) -> Self {
        let jdn = i64::from(date.num_days_from_ce()) + CE_TO_JDN;

        let l = jdn - HIJRI_EPOCH_JDN + 10_632;
        let cycles = (l - 1).div_euclid(HIJRI_CYCLE_DAYS);
        let l = l - HIJRI_CYCLE_DAYS * cycles + 354;
        let j = ((10_985 - l).div_euclid(5_316)) * ((50 * l).div_euclid(17_719))
            + (l.div_euclid(5_670)) * ((43 * l).div_euclid(15_238));
        let l = l - ((30 - j).div_euclid(15)) * ((17_719 * j).div_euclid(50))
            - (j.div_euclid(16)) * ((15_238 * j).div_euclid(43))
            + 29;
        let month = (24 * l).div_euclid(709);
        let day = l - (709 * month).div_euclid(24);
        let year = 30 * cycles + j - 30;

        Self {
            year:  i32::try_from(year).unwrap_or(i32::MAX),
            month: u8::try_from(month)
                .ok()
                .and_then(HijriMonth::from_number)
                .unwrap_or(HijriMonth::Muharram),
            day:   u8::try_from(day).unwrap_or(1),
        }
    }
}

impl From<NaiveDate> for HijriDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_gregorian(date)
    }
}
