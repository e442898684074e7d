// --- File: crates/barber_booking/src/details.rs ---
//! The contact-details page and its simulated submission.
//!
//! The page owns its form state. A running submission only keeps a weak handle
//! to it, so a result that arrives after the page is gone is dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::contact::{ContactDetails, ContactField, FieldErrors};
use crate::models::{BookingPayload, SlotChoice};
use crate::submission::{BookingReceipt, BookingSubmitter, SubmissionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    /// Shown inline; the user may retry.
    Failed(String),
    Submitted(BookingReceipt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsForm {
    pub contact: ContactDetails,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

/// Why a submit request did not start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("Please correct the highlighted fields")]
    Invalid(FieldErrors),
    #[error("A submission is already in progress")]
    InFlight,
    #[error("This booking has already been submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(BookingReceipt),
    Rejected(SubmissionError),
    /// The page was torn down before the result arrived.
    Discarded,
}

/// Handle to a submission running in the background.
pub struct PendingSubmission {
    handle: JoinHandle<SubmitOutcome>,
}

impl PendingSubmission {
    pub async fn outcome(self) -> SubmitOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(join_err) => {
                warn!("Submission task failed: {}", join_err);
                SubmitOutcome::Rejected(SubmissionError::Unavailable(join_err.to_string()))
            }
        }
    }
}

pub struct DetailsPage {
    choice: SlotChoice,
    form: Arc<Mutex<DetailsForm>>,
    submitter: Arc<dyn BookingSubmitter>,
}

impl DetailsPage {
    pub fn new(
        choice: SlotChoice,
        prefill: ContactDetails,
        submitter: Arc<dyn BookingSubmitter>,
    ) -> Self {
        Self {
            choice,
            form: Arc::new(Mutex::new(DetailsForm {
                contact: prefill,
                errors: FieldErrors::default(),
                status: SubmissionStatus::Idle,
            })),
            submitter,
        }
    }

    pub fn choice(&self) -> SlotChoice {
        self.choice
    }

    /// Snapshot of the form.
    pub fn form(&self) -> DetailsForm {
        self.lock().clone()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.lock().contact.set(field, value);
    }

    /// Validates the current input and records per-field messages.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut form = self.lock();
        let result = form.contact.validate();
        form.errors = result.clone().err().unwrap_or_default();
        result
    }

    /// Validates and starts the submission.
    pub fn submit(&self) -> Result<PendingSubmission, SubmitBlocked> {
        let payload = {
            let mut form = self.lock();
            match form.status {
                SubmissionStatus::Submitting => return Err(SubmitBlocked::InFlight),
                SubmissionStatus::Submitted(_) => return Err(SubmitBlocked::AlreadySubmitted),
                SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
            }
            if let Err(errors) = form.contact.validate() {
                debug!(fields = %errors, "details rejected");
                form.errors = errors.clone();
                return Err(SubmitBlocked::Invalid(errors));
            }
            form.errors = FieldErrors::default();
            form.status = SubmissionStatus::Submitting;
            BookingPayload::new(self.choice, form.contact.clone())
        };

        info!(date = %payload.selected_date, time = %payload.selected_time, "Submitting booking");
        let submitter = Arc::clone(&self.submitter);
        let form = Arc::downgrade(&self.form);
        let handle = tokio::spawn(async move {
            let result = submitter.submit(payload).await;
            settle(form, result)
        });
        Ok(PendingSubmission { handle })
    }

    fn lock(&self) -> MutexGuard<'_, DetailsForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn settle(
    form: Weak<Mutex<DetailsForm>>,
    result: Result<BookingReceipt, SubmissionError>,
) -> SubmitOutcome {
    let Some(cell) = form.upgrade() else {
        debug!("Details page closed before submission finished; result dropped");
        return SubmitOutcome::Discarded;
    };
    let mut form = cell.lock().unwrap_or_else(PoisonError::into_inner);
    match result {
        Ok(receipt) => {
            form.status = SubmissionStatus::Submitted(receipt.clone());
            SubmitOutcome::Accepted(receipt)
        }
        Err(err) => {
            warn!("Booking submission failed: {}", err);
            if let SubmissionError::InvalidContact(errors) = &err {
                form.errors = errors.clone();
            }
            form.status = SubmissionStatus::Failed(err.to_string());
            SubmitOutcome::Rejected(err)
        }
    }
}
