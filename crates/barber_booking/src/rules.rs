// --- File: crates/barber_booking/src/rules.rs ---
//! Availability and closed-day rules.
//!
//! All functions are pure: `now` is always passed in and never cached, so two
//! checks a moment apart may disagree right at a slot boundary.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::trace;

use crate::slots::TimeSlot;

/// Why a slot can or cannot be picked.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    /// The slot start lies before now.
    Past,
    /// The shop is closed that day.
    Closed,
}

/// The shop is closed on Sundays.
pub fn is_closed(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Whether the calendar may offer `date` for selection.
pub fn is_date_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && !is_closed(date)
}

/// Classifies a slot against the current time.
///
/// On the current day a slot is past as soon as its start lies strictly
/// before `now`, seconds included.
pub fn slot_status(date: NaiveDate, time: TimeSlot, now: NaiveDateTime) -> SlotStatus {
    if is_closed(date) {
        return SlotStatus::Closed;
    }

    let status = match date.cmp(&now.date()) {
        Ordering::Greater => SlotStatus::Available,
        Ordering::Less => SlotStatus::Past,
        Ordering::Equal => {
            let starts_at = date.and_time(time.time());
            if starts_at < now {
                SlotStatus::Past
            } else {
                SlotStatus::Available
            }
        }
    };
    trace!(%date, %time, %now, ?status, "slot status");
    status
}

/// Whether `time` on `date` can still be booked at `now`.
pub fn is_slot_available(date: NaiveDate, time: TimeSlot, now: NaiveDateTime) -> bool {
    slot_status(date, time, now) == SlotStatus::Available
}
