//! Firebase authentication for the barber booking service
//!
//! Implements [`barber_common::AuthService`] over the Firebase Identity
//! Toolkit REST API, and translates Firebase error codes into the fixed set of
//! user-facing [`barber_common::AuthError`] messages.
//!
//! # Example
//!
//! ```rust,no_run
//! use barber_config::AppConfig;
//! use barber_firebase::auth_service;
//!
//! async fn sign_in() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let auth = auth_service(&config)?;
//!     let user = auth.login("jane@x.com", "secret1").await?;
//!     println!("Signed in as {}", user.email);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod local;
pub mod models;
pub mod service;

pub use client::FirebaseAuthClient;
pub use error::{translate_code, FirebaseError};
pub use local::LocalAuthService;
pub use service::auth_service;
