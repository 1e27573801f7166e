//! Booking form dates: check-in, nights, and check-out kept in step.
//!
//! Edits never fail. Out-of-order input is corrected (check-out is pushed
//! forward) or dropped, so the form always describes at least one night.

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::{DateSelection, HOLD_SECONDS, MIN_NIGHTS, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayForm {
    check_in:  NaiveDate,
    check_out: NaiveDate,
    nights:    i64,
    hold:      HoldCountdown,
}

impl StayForm {
    /// A one-night stay starting today with a fresh hold.
    pub fn open(today: NaiveDate) -> Self {
        Self {
            check_in:  today,
            check_out: add_nights(today, MIN_NIGHTS),
            nights:    MIN_NIGHTS,
            hold:      HoldCountdown::default(),
        }
    }

    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub const fn nights(&self) -> i64 {
        self.nights
    }

    pub const fn hold(&self) -> &HoldCountdown {
        &self.hold
    }

    pub fn hold_mut(&mut self) -> &mut HoldCountdown {
        &mut self.hold
    }

    /// The form's dates as a complete selection.
    pub fn selection(&self) -> DateSelection {
        DateSelection::new(self.check_in, self.check_out)
            .unwrap_or_else(|_| DateSelection::overnight(self.check_in))
    }

    /// Sets the stay length, at least one night, and moves check-out to match.
    pub fn set_nights(&mut self, nights: i64) {
        self.nights = nights.max(MIN_NIGHTS);
        self.check_out = add_nights(self.check_in, self.nights);
        debug!("Stay set to {} nights, check-out {}", self.nights, self.check_out);
    }

    /// Moves check-in. If it lands on or after check-out, check-out is pushed
    /// forward keeping the night count; otherwise the night count follows.
    pub fn set_check_in(&mut self, date: NaiveDate) {
        self.check_in = date;
        if date >= self.check_out {
            self.check_out = add_nights(date, self.nights);
            debug!("Check-in {date} passed check-out, pushed check-out to {}", self.check_out);
        } else {
            self.nights = (self.check_out - date).num_days();
        }
    }

    /// Moves check-out. Dates on or before check-in are ignored.
    pub fn set_check_out(&mut self, date: NaiveDate) {
        if date <= self.check_in {
            trace!("Ignoring check-out {date} not after check-in {}", self.check_in);
            return;
        }
        self.check_out = date;
        self.nights = (date - self.check_in).num_days();
    }

    /// Nightly rate times nights.
    pub fn subtotal(&self, nightly_rate: u64) -> u64 {
        nightly_rate.saturating_mul(self.nights.unsigned_abs())
    }
}

fn add_nights(date: NaiveDate, nights: i64) -> NaiveDate {
    date.checked_add_days(Days::new(nights.unsigned_abs())).unwrap_or(NaiveDate::MAX)
}

/// How long the reservation is held while the booking form is open.
/// Purely informational; nothing is released when it runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoldCountdown {
    remaining: u32,
}

impl Default for HoldCountdown {
    fn default() -> Self {
        Self::new(HOLD_SECONDS)
    }
}

impl HoldCountdown {
    pub const fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// Seconds left
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advances one second; stops at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.remaining = HOLD_SECONDS;
    }
}

impl fmt::Display for HoldCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
