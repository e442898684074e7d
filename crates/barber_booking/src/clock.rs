// --- File: crates/barber_booking/src/clock.rs ---
//! The "current time" capability.
//!
//! Rules never read the wall clock themselves; callers hand them `now` from a
//! [`Clock`], which is re-read at selection time and again at submission time.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Unknown time zone: {0}")]
pub struct UnknownTimeZone(pub String);

/// Source of the shop-local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local date and time at the shop.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day at the shop.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock and converts it into the shop's time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    time_zone: Tz,
}

impl SystemClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Builds a clock from an IANA zone name such as `Europe/London`.
    pub fn from_name(name: &str) -> Result<Self, UnknownTimeZone> {
        Tz::from_str(name)
            .map(Self::new)
            .map_err(|_| UnknownTimeZone(name.to_string()))
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.time_zone).naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
