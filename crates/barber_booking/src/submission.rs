// --- File: crates/barber_booking/src/submission.rs ---
//! Booking submission.
//!
//! Nothing is persisted: [`SimulatedSubmitter`] waits a configured delay,
//! re-checks the booking against the clock and hands back a receipt.

use barber_common::{external_service_error, BarberError, BoxFuture};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::contact::FieldErrors;
use crate::models::BookingPayload;
use crate::rules::is_slot_available;
use crate::slots::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    pub reference: Uuid,
    pub payload: BookingPayload,
    pub submitted_at: NaiveDateTime,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please correct the highlighted fields")]
    InvalidContact(FieldErrors),
    #[error("Sorry, {time} on {date} is no longer available. Please pick another time.")]
    SlotExpired { date: NaiveDate, time: TimeSlot },
    #[error("An error occurred. Please try again.")]
    Unavailable(String),
}

impl From<SubmissionError> for BarberError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::InvalidContact(fields) => BarberError::ValidationError(fields.to_string()),
            expired @ SubmissionError::SlotExpired { .. } => {
                BarberError::ConflictError(expired.to_string())
            }
            SubmissionError::Unavailable(detail) => external_service_error("Booking", detail),
        }
    }
}

/// Accepts a completed booking.
pub trait BookingSubmitter: Send + Sync {
    fn submit(&self, payload: BookingPayload) -> BoxFuture<'_, BookingReceipt, SubmissionError>;
}

pub struct SimulatedSubmitter {
    delay: Duration,
    clock: Arc<dyn Clock>,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { delay, clock }
    }

    pub fn from_millis(delay_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self::new(Duration::from_millis(delay_ms), clock)
    }
}

impl BookingSubmitter for SimulatedSubmitter {
    fn submit(&self, payload: BookingPayload) -> BoxFuture<'_, BookingReceipt, SubmissionError> {
        Box::pin(async move {
            payload
                .contact
                .validate()
                .map_err(SubmissionError::InvalidContact)?;

            tokio::time::sleep(self.delay).await;

            let now = self.clock.now();
            let (date, time) = (payload.selected_date, payload.selected_time);
            if !is_slot_available(date, time, now) {
                warn!(%date, %time, %now, "Slot expired while submitting");
                return Err(SubmissionError::SlotExpired { date, time });
            }

            let receipt = BookingReceipt {
                reference: Uuid::new_v4(),
                payload,
                submitted_at: now,
            };
            info!(
                reference = %receipt.reference,
                %date,
                %time,
                "Booking accepted"
            );
            Ok(receipt)
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::contact::ContactDetails;
    use crate::models::SlotChoice;
    use barber_common::HttpStatusCode;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 24)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn payload(time: &str) -> BookingPayload {
        BookingPayload::new(
            SlotChoice {
                date: NaiveDate::from_ymd_opt(2025, 4, 24).unwrap(),
                time: time.parse().unwrap(),
            },
            ContactDetails::new("Jane Doe", "jane@x.com", "+12025550123"),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_accepts_after_delay() {
        let clock = Arc::new(FixedClock::new(at(9, 30)));
        let submitter = SimulatedSubmitter::from_millis(1000, clock);

        let started = tokio::time::Instant::now();
        let receipt = submitter.submit(payload("10:00")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(receipt.payload, payload("10:00"));
        assert_eq!(receipt.submitted_at, at(9, 30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_slot_that_passed_during_delay() {
        let clock = Arc::new(FixedClock::new(at(9, 59)));
        clock.advance(chrono::Duration::minutes(2));
        let submitter = SimulatedSubmitter::from_millis(1000, clock);

        let err = submitter.submit(payload("10:00")).await.unwrap_err();
        assert!(matches!(err, SubmissionError::SlotExpired { .. }));
        assert_eq!(BarberError::from(err).status_code(), 409);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_invalid_contact_before_waiting() {
        let clock = Arc::new(FixedClock::new(at(9, 30)));
        let submitter = SimulatedSubmitter::from_millis(1000, clock);
        let mut bad = payload("10:00");
        bad.contact.email = "a@b".to_string();

        let err = submitter.submit(bad).await.unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidContact(_)));
    }
}
