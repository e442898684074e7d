// --- File: crates/barber_booking/src/lib.rs ---
//! Booking core for a single-location barber shop.
//!
//! Leaves first: the [`slots`] catalog, the availability and closed-day
//! [`rules`], the [`selection`] state machine, [`contact`] validation, and the
//! [`flow`] controller that moves a booking from landing to confirmation.
//! [`routes`] exposes the read-only rule evaluation over HTTP.

pub mod calendar;
pub mod clock;
pub mod contact;
pub mod details;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod flow;
pub mod format;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod models;
pub mod routes;
pub mod rules;
#[cfg(test)]
mod rules_proptest;
pub mod selection;
pub mod slots;
pub mod submission;

pub use clock::{Clock, FixedClock, SystemClock};
pub use flow::{BookingMode, FlowController, Member, Navigation, NavigationState, Route};
pub use models::{BookingPayload, SlotChoice};
pub use routes::routes;
pub use selection::{SelectionPhase, SelectionRejected, SelectionState, SlotSelector};
pub use slots::TimeSlot;
