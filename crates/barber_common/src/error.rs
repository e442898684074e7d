// --- File: crates/barber_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

use crate::services::AuthError;

/// The base error type shared by every crate in the workspace.
///
/// Crate-specific errors convert into this via `From`, which gives handlers a
/// single type to turn into an HTTP response.
#[derive(Error, Debug)]
pub enum BarberError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., account already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for BarberError {
    fn status_code(&self) -> u16 {
        match self {
            BarberError::HttpError(_) => 500,
            BarberError::ParseError(_) => 400,
            BarberError::ConfigError(_) => 500,
            BarberError::AuthError(_) => 401,
            BarberError::ValidationError(_) => 400,
            BarberError::ExternalServiceError { .. } => 502,
            BarberError::ConflictError(_) => 409,
            BarberError::NotFoundError(_) => 404,
            BarberError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for BarberError {
    fn from(err: reqwest::Error) -> Self {
        BarberError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for BarberError {
    fn from(err: serde_json::Error) -> Self {
        BarberError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for BarberError {
    fn from(err: std::io::Error) -> Self {
        BarberError::InternalError(err.to_string())
    }
}

/// Auth failures keep their user-facing message; the variant decides the status.
impl From<AuthError> for BarberError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::EmailInUse => BarberError::ConflictError(message),
            AuthError::InvalidEmail | AuthError::WeakPassword => {
                BarberError::ValidationError(message)
            }
            AuthError::UserDisabled | AuthError::UserNotFound | AuthError::WrongPassword => {
                BarberError::AuthError(message)
            }
            AuthError::OperationNotAllowed => BarberError::ConfigError(message),
            AuthError::Failure { .. } => external_service_error("Authentication", message),
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> BarberError {
    BarberError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> BarberError {
    BarberError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> BarberError {
    BarberError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_statuses() {
        assert_eq!(BarberError::from(AuthError::EmailInUse).status_code(), 409);
        assert_eq!(BarberError::from(AuthError::WeakPassword).status_code(), 400);
        assert_eq!(BarberError::from(AuthError::WrongPassword).status_code(), 401);
        assert_eq!(
            BarberError::from(AuthError::Failure {
                detail: "TOO_MANY_ATTEMPTS_TRY_LATER".to_string()
            })
            .status_code(),
            502
        );
    }

    #[test]
    fn auth_error_keeps_user_facing_message() {
        let err = BarberError::from(AuthError::UserNotFound);
        assert_eq!(
            err.to_string(),
            "Authentication error: No account found with this email."
        );
    }
}
