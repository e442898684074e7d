//! Firebase errors and their translation into the fixed auth failures.

use barber_common::{AuthError, BarberError};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when talking to the Identity Toolkit API
#[derive(Error, Debug)]
pub enum FirebaseError {
    /// Missing required configuration
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    /// Error during HTTP request to Firebase API
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Firebase API
    #[error("Firebase API error {status}: {code}")]
    ApiError { status: u16, code: String },
}

/// Maps an error code onto a user-facing failure.
///
/// Accepts the SDK style (`auth/email-already-in-use`) as well as the REST
/// style (`EMAIL_EXISTS`, optionally followed by ` : detail`).
pub fn translate_code(code: &str) -> AuthError {
    let code = code.split(" : ").next().unwrap_or(code).trim();
    match code {
        "auth/email-already-in-use" | "EMAIL_EXISTS" => AuthError::EmailInUse,
        "auth/invalid-email" | "INVALID_EMAIL" | "MISSING_EMAIL" => AuthError::InvalidEmail,
        "auth/operation-not-allowed" | "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => {
            AuthError::OperationNotAllowed
        }
        "auth/weak-password" | "WEAK_PASSWORD" => AuthError::WeakPassword,
        "auth/user-disabled" | "USER_DISABLED" => AuthError::UserDisabled,
        "auth/user-not-found" | "EMAIL_NOT_FOUND" => AuthError::UserNotFound,
        "auth/wrong-password" | "INVALID_PASSWORD" | "auth/invalid-credential"
        | "INVALID_LOGIN_CREDENTIALS" => AuthError::WrongPassword,
        other => {
            warn!(code = other, "Unrecognised Firebase error code");
            AuthError::failure(other)
        }
    }
}

impl From<FirebaseError> for AuthError {
    fn from(err: FirebaseError) -> Self {
        match err {
            FirebaseError::ApiError { code, .. } => translate_code(&code),
            other => AuthError::failure(other.to_string()),
        }
    }
}

impl From<FirebaseError> for BarberError {
    fn from(err: FirebaseError) -> Self {
        match err {
            FirebaseError::ConfigError(msg) => BarberError::ConfigError(msg),
            other => AuthError::from(other).into(),
        }
    }
}
