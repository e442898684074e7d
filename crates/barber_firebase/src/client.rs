//! Firebase Identity Toolkit client.
//!
//! Email/password accounts over the REST API: sign up (followed by a profile
//! update carrying the display name), sign in, and password reset. The signed-in
//! user is cached for the lifetime of the client; signing out only clears it.

use barber_common::{
    create_client, AuthError, AuthService, AuthUser, BoxFuture, DEFAULT_TIMEOUT_SECS,
};
use barber_config::FirebaseConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

use crate::error::FirebaseError;
use crate::models::{
    ErrorEnvelope, OobCodeRequest, PasswordRequest, SignInResponse, UpdateProfileRequest,
    UpdateProfileResponse,
};

pub const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Client for the Firebase Identity Toolkit v1 API
pub struct FirebaseAuthClient {
    client: Client,
    api_key: String,
    base_url: String,
    session: RwLock<Option<AuthUser>>,
}

impl FirebaseAuthClient {
    /// Creates a client from configuration. The API key is required.
    pub fn new(config: &FirebaseConfig) -> Result<Self, FirebaseError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FirebaseError::ConfigError("Missing api_key in FirebaseConfig".to_string()))?;
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client: create_client(DEFAULT_TIMEOUT_SECS)?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/accounts:{}", self.base_url, method)
    }

    async fn call<B, R>(&self, method: &str, body: &B) -> Result<R, FirebaseError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(method, "Calling Identity Toolkit");
        let response = self
            .client
            .post(self.endpoint(method))
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let code = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(text);
            return Err(FirebaseError::ApiError {
                status: status.as_u16(),
                code,
            });
        }

        Ok(response.json::<R>().await?)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthUser, FirebaseError> {
        let created: SignInResponse = self
            .call(
                "signUp",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        let updated: UpdateProfileResponse = self
            .call(
                "update",
                &UpdateProfileRequest {
                    id_token: &created.id_token,
                    display_name,
                    return_secure_token: true,
                },
            )
            .await?;

        let user = AuthUser {
            uid: created.local_id,
            email: if updated.email.is_empty() {
                created.email
            } else {
                updated.email
            },
            display_name: updated.display_name,
        };
        self.store(&user);
        info!(uid = %user.uid, "Account created");
        Ok(user)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, FirebaseError> {
        let signed_in: SignInResponse = self
            .call(
                "signInWithPassword",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        let user = AuthUser {
            uid: signed_in.local_id,
            email: signed_in.email,
            display_name: signed_in.display_name.filter(|name| !name.is_empty()),
        };
        self.store(&user);
        info!(uid = %user.uid, "Signed in");
        Ok(user)
    }

    pub async fn send_password_reset(&self, email: &str) -> Result<(), FirebaseError> {
        let _: serde_json::Value = self
            .call(
                "sendOobCode",
                &OobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    email,
                },
            )
            .await?;
        info!("Password reset email sent");
        Ok(())
    }

    pub fn sign_out(&self) {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = session.take() {
            info!(uid = %previous.uid, "Signed out");
        }
    }

    fn store(&self, user: &AuthUser) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
    }
}

impl AuthService for FirebaseAuthClient {
    fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> BoxFuture<'_, AuthUser, AuthError> {
        let (email, password, display_name) =
            (email.to_string(), password.to_string(), display_name.to_string());
        Box::pin(async move {
            self.sign_up(&email, &password, &display_name)
                .await
                .map_err(AuthError::from)
        })
    }

    fn login(&self, email: &str, password: &str) -> BoxFuture<'_, AuthUser, AuthError> {
        let (email, password) = (email.to_string(), password.to_string());
        Box::pin(async move { self.sign_in(&email, &password).await.map_err(AuthError::from) })
    }

    fn logout(&self) -> BoxFuture<'_, (), AuthError> {
        Box::pin(async move {
            self.sign_out();
            Ok(())
        })
    }

    fn reset_password(&self, email: &str) -> BoxFuture<'_, (), AuthError> {
        let email = email.to_string();
        Box::pin(async move {
            self.send_password_reset(&email)
                .await
                .map_err(AuthError::from)
        })
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
