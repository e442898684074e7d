// --- File: crates/barber_booking/src/slots.rs ---
//! The fixed catalog of bookable times: every 30 minutes from 09:00 to 16:30.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes after midnight of the first slot (09:00).
const FIRST_SLOT_MINUTES: i64 = 9 * 60;
/// Length of one slot.
pub const SLOT_MINUTES: i64 = 30;
/// Number of slots in a day, 09:00 through 16:30 inclusive.
pub const SLOT_COUNT: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotParseError {
    #[error("Invalid time format (HH:MM): {0}")]
    Malformed(String),
    #[error("{0} is not a bookable time")]
    NotInCatalog(String),
}

/// One of the catalog times, displayed as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// The slot at `index` in the catalog, if any.
    pub fn at(index: usize) -> Option<Self> {
        if index >= SLOT_COUNT {
            return None;
        }
        let minutes = FIRST_SLOT_MINUTES + SLOT_MINUTES * index as i64;
        Some(TimeSlot(NaiveTime::MIN + Duration::minutes(minutes)))
    }

    /// Position of this slot in the catalog.
    pub fn index(&self) -> usize {
        let minutes = i64::from(self.0.hour() * 60 + self.0.minute());
        ((minutes - FIRST_SLOT_MINUTES) / SLOT_MINUTES) as usize
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// The catalog slot starting exactly at `time`.
    pub fn from_time(time: NaiveTime) -> Option<Self> {
        catalog().find(|slot| slot.0 == time)
    }
}

/// All catalog slots in order.
pub fn catalog() -> impl Iterator<Item = TimeSlot> {
    (0..SLOT_COUNT).filter_map(TimeSlot::at)
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let time = NaiveTime::parse_from_str(label, "%H:%M")
            .map_err(|_| SlotParseError::Malformed(label.to_string()))?;
        TimeSlot::from_time(time).ok_or_else(|| SlotParseError::NotInCatalog(label.to_string()))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
