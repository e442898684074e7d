// --- File: crates/barber_booking/src/models.rs ---
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::contact::ContactDetails;
use crate::rules::{is_closed, slot_status, SlotStatus};
use crate::slots::{catalog, TimeSlot};

/// A confirmed date and time, carried from the selection page to the details page.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotChoice {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2025-04-28"))]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "10:00"))]
    pub time: TimeSlot,
}

/// The completed booking handed to the confirmation page. Never persisted.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2025-04-28"))]
    pub selected_date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "10:00"))]
    pub selected_time: TimeSlot,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

impl BookingPayload {
    pub fn new(choice: SlotChoice, contact: ContactDetails) -> Self {
        Self {
            selected_date: choice.date,
            selected_time: choice.time,
            contact,
        }
    }

    pub fn choice(&self) -> SlotChoice {
        SlotChoice {
            date: self.selected_date,
            time: self.selected_time,
        }
    }
}

/// One catalog slot as evaluated at a given instant.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "09:00"))]
    pub time: TimeSlot,
    pub status: SlotStatus,
    pub available: bool,
}

/// Every catalog slot for one day.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlots {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2025-04-28"))]
    pub date: NaiveDate,
    pub closed: bool,
    pub slots: Vec<SlotView>,
}

impl DaySlots {
    pub fn evaluate(date: NaiveDate, now: NaiveDateTime) -> Self {
        let slots = catalog()
            .map(|time| {
                let status = slot_status(date, time, now);
                SlotView {
                    time,
                    status,
                    available: status == SlotStatus::Available,
                }
            })
            .collect();
        DaySlots {
            date,
            closed: is_closed(date),
            slots,
        }
    }
}
