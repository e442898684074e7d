// --- File: crates/barber_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The booking flow only ever talks to these traits, so the concrete backends
//! (Firebase, in-memory doubles) are injected and never hard-wired.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A signed-in account as seen by the booking flow.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Backend user id.
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// The fixed set of user-facing authentication failures.
///
/// Backend-specific codes are translated into one of these; anything unknown
/// becomes [`AuthError::Failure`], which keeps the raw detail for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("This email is already registered.")]
    EmailInUse,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Email/password accounts are not enabled.")]
    OperationNotAllowed,
    #[error("Password is too weak.")]
    WeakPassword,
    #[error("This account has been disabled.")]
    UserDisabled,
    #[error("No account found with this email.")]
    UserNotFound,
    #[error("Incorrect password.")]
    WrongPassword,
    #[error("An error occurred. Please try again.")]
    Failure { detail: String },
}

impl AuthError {
    /// Stable slug for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::EmailInUse => "email-in-use",
            AuthError::InvalidEmail => "invalid-email",
            AuthError::OperationNotAllowed => "operation-not-allowed",
            AuthError::WeakPassword => "weak-password",
            AuthError::UserDisabled => "user-disabled",
            AuthError::UserNotFound => "user-not-found",
            AuthError::WrongPassword => "wrong-password",
            AuthError::Failure { .. } => "generic-failure",
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        AuthError::Failure {
            detail: detail.into(),
        }
    }
}

/// Operations consumed from the authentication backend.
pub trait AuthService: Send + Sync {
    /// Create an account and set its display name. Signs the new user in.
    fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> BoxFuture<'_, AuthUser, AuthError>;

    /// Sign in with email and password.
    fn login(&self, email: &str, password: &str) -> BoxFuture<'_, AuthUser, AuthError>;

    /// Sign the current user out.
    fn logout(&self) -> BoxFuture<'_, (), AuthError>;

    /// Send a password reset email.
    fn reset_password(&self, email: &str) -> BoxFuture<'_, (), AuthError>;

    /// The user signed in on this session, if any.
    fn current_user(&self) -> Option<AuthUser>;
}
