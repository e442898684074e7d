// --- File: crates/services/barber_backend/src/lib.rs ---
//! Process wiring for the barber booking service.
//!
//! [`app::build_app`] assembles the HTTP surface served by the
//! `barber_backend` binary. [`kiosk::Kiosk`] drives the booking flow over a
//! line-oriented terminal for the `barber_kiosk` binary.

pub mod app;
pub mod kiosk;

pub use app::build_app;
pub use kiosk::{Kiosk, KioskError};
