// --- File: crates/barber_booking/src/selection.rs ---
//! Date/time selection state machine for the booking page.
//!
//! Phases are derived from the state: `Empty` until a valid date is chosen,
//! then `DateChosen`, `TimeChosen` and `Confirmed`. Every transition that would
//! break an invariant is rejected and leaves the state as it was.

use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::clock::Clock;
use crate::models::{DaySlots, SlotChoice};
use crate::rules::{is_closed, is_date_selectable, is_slot_available};
use crate::slots::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    DateChosen,
    TimeChosen,
    Confirmed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionRejected {
    #[error("{0} is in the past")]
    DateInPast(NaiveDate),
    #[error("The shop is closed on {0}")]
    DateClosed(NaiveDate),
    #[error("Pick a date first")]
    NoDateChosen,
    #[error("{time} on {date} is no longer available")]
    SlotUnavailable { date: NaiveDate, time: TimeSlot },
    #[error("Pick a time first")]
    NoTimeSelected,
    #[error("Confirm the selected time first")]
    NotConfirmed,
}

/// The page-local selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_date: NaiveDate,
    pub selected_time: Option<TimeSlot>,
    pub confirmed: bool,
}

/// Owns a [`SelectionState`] and applies the legal transitions to it.
pub struct SlotSelector {
    state: SelectionState,
    date_chosen: bool,
    clock: Arc<dyn Clock>,
}

impl SlotSelector {
    /// Starts on today's date, or in `Empty` when today cannot be booked.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let today = clock.today();
        Self {
            state: SelectionState {
                selected_date: today,
                selected_time: None,
                confirmed: false,
            },
            date_chosen: !is_closed(today),
            clock,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.date_chosen, self.state.selected_time, self.state.confirmed) {
            (false, _, _) => SelectionPhase::Empty,
            (true, None, _) => SelectionPhase::DateChosen,
            (true, Some(_), false) => SelectionPhase::TimeChosen,
            (true, Some(_), true) => SelectionPhase::Confirmed,
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), SelectionRejected> {
        let today = self.clock.today();
        if !is_date_selectable(date, today) {
            let reason = if is_closed(date) {
                SelectionRejected::DateClosed(date)
            } else {
                SelectionRejected::DateInPast(date)
            };
            debug!(%date, %today, %reason, "date rejected");
            return Err(reason);
        }

        self.state = SelectionState {
            selected_date: date,
            selected_time: None,
            confirmed: false,
        };
        self.date_chosen = true;
        debug!(%date, "date selected");
        Ok(())
    }

    pub fn select_time(&mut self, time: TimeSlot) -> Result<(), SelectionRejected> {
        if !self.date_chosen {
            return Err(SelectionRejected::NoDateChosen);
        }
        let date = self.state.selected_date;
        let now = self.clock.now();
        if !is_slot_available(date, time, now) {
            debug!(%date, %time, %now, "time rejected");
            return Err(SelectionRejected::SlotUnavailable { date, time });
        }

        self.state.selected_time = Some(time);
        self.state.confirmed = false;
        debug!(%date, %time, "time selected");
        Ok(())
    }

    /// Flips the confirmation flag and returns its new value.
    pub fn toggle_confirm(&mut self) -> Result<bool, SelectionRejected> {
        if self.state.selected_time.is_none() {
            return Err(SelectionRejected::NoTimeSelected);
        }
        self.state.confirmed = !self.state.confirmed;
        Ok(self.state.confirmed)
    }

    /// Whether the page may move on, with the slot re-checked against a fresh `now`.
    pub fn can_advance(&self) -> bool {
        self.confirmed_choice().is_ok()
    }

    /// The confirmed choice, or the reason it cannot be carried forward right now.
    pub fn confirmed_choice(&self) -> Result<SlotChoice, SelectionRejected> {
        if !self.date_chosen {
            return Err(SelectionRejected::NoDateChosen);
        }
        let time = self
            .state
            .selected_time
            .ok_or(SelectionRejected::NoTimeSelected)?;
        if !self.state.confirmed {
            return Err(SelectionRejected::NotConfirmed);
        }

        let date = self.state.selected_date;
        let now = self.clock.now();
        if is_closed(date) {
            return Err(SelectionRejected::DateClosed(date));
        }
        if !is_slot_available(date, time, now) {
            debug!(%date, %time, %now, "confirmed slot expired");
            return Err(SelectionRejected::SlotUnavailable { date, time });
        }
        Ok(SlotChoice { date, time })
    }

    /// The catalog for the selected date, evaluated now.
    pub fn slot_board(&self) -> DaySlots {
        DaySlots::evaluate(self.state.selected_date, self.clock.now())
    }
}
