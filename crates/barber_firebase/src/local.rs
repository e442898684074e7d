//! In-process account store used when Firebase is switched off.
//!
//! Applies the same rules the hosted backend enforces for email/password
//! accounts, so the booking flow behaves the same in local runs and tests.

use barber_common::{AuthError, AuthService, AuthUser, BoxFuture};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// Shortest password the hosted backend accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    user: AuthUser,
    password: String,
    disabled: bool,
}

#[derive(Default)]
pub struct LocalAuthService {
    accounts: Mutex<HashMap<String, Account>>,
    current: RwLock<Option<AuthUser>>,
}

impl LocalAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks sign-in for an existing account.
    pub fn disable(&self, email: &str) -> bool {
        let mut accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        match accounts.get_mut(&normalise(email)) {
            Some(account) => {
                account.disabled = true;
                true
            }
            None => false,
        }
    }

    fn create(&self, email: &str, password: &str, display_name: &str) -> Result<AuthUser, AuthError> {
        if !looks_like_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let key = normalise(email);
        let mut accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        if accounts.contains_key(&key) {
            return Err(AuthError::EmailInUse);
        }

        let user = AuthUser {
            uid: Uuid::new_v4().simple().to_string(),
            email: email.trim().to_string(),
            display_name: Some(display_name.to_string()).filter(|name| !name.is_empty()),
        };
        accounts.insert(
            key,
            Account {
                user: user.clone(),
                password: password.to_string(),
                disabled: false,
            },
        );
        info!(uid = %user.uid, "Local account created");
        Ok(user)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        if !looks_like_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        let accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        let account = accounts
            .get(&normalise(email))
            .ok_or(AuthError::UserNotFound)?;
        if account.disabled {
            return Err(AuthError::UserDisabled);
        }
        if account.password != password {
            debug!(uid = %account.user.uid, "Local sign-in with wrong password");
            return Err(AuthError::WrongPassword);
        }
        Ok(account.user.clone())
    }

    fn set_current(&self, user: Option<AuthUser>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = user;
    }
}

fn normalise(email: &str) -> String {
    email.trim().to_lowercase()
}

fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}

impl AuthService for LocalAuthService {
    fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> BoxFuture<'_, AuthUser, AuthError> {
        let result = self.create(email, password, display_name);
        if let Ok(user) = &result {
            self.set_current(Some(user.clone()));
        }
        Box::pin(async move { result })
    }

    fn login(&self, email: &str, password: &str) -> BoxFuture<'_, AuthUser, AuthError> {
        let result = self.authenticate(email, password);
        if let Ok(user) = &result {
            self.set_current(Some(user.clone()));
        }
        Box::pin(async move { result })
    }

    fn logout(&self) -> BoxFuture<'_, (), AuthError> {
        self.set_current(None);
        Box::pin(async move { Ok(()) })
    }

    fn reset_password(&self, email: &str) -> BoxFuture<'_, (), AuthError> {
        let result = if !looks_like_email(email) {
            Err(AuthError::InvalidEmail)
        } else if self
            .accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&normalise(email))
        {
            info!("Local password reset requested");
            Ok(())
        } else {
            Err(AuthError::UserNotFound)
        };
        Box::pin(async move { result })
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_then_login() {
        let auth = LocalAuthService::new();
        let user = auth.register("jane@x.com", "secret1", "Jane").await.unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Jane"));
        assert_eq!(auth.current_user(), Some(user.clone()));

        auth.logout().await.unwrap();
        assert_eq!(auth.current_user(), None);

        let again = auth.login("JANE@x.com", "secret1").await.unwrap();
        assert_eq!(again.uid, user.uid);
    }

    #[tokio::test]
    async fn test_failures_use_fixed_kinds() {
        let auth = LocalAuthService::new();
        assert_eq!(
            auth.register("jane", "secret1", "Jane").await,
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            auth.register("jane@x.com", "123", "Jane").await,
            Err(AuthError::WeakPassword)
        );
        auth.register("jane@x.com", "secret1", "Jane").await.unwrap();
        assert_eq!(
            auth.register("jane@x.com", "secret2", "Jane").await,
            Err(AuthError::EmailInUse)
        );
        assert_eq!(
            auth.login("jane@x.com", "nope").await,
            Err(AuthError::WrongPassword)
        );
        assert_eq!(
            auth.login("john@x.com", "secret1").await,
            Err(AuthError::UserNotFound)
        );
        assert!(auth.disable("jane@x.com"));
        assert_eq!(
            auth.login("jane@x.com", "secret1").await,
            Err(AuthError::UserDisabled)
        );
        assert_eq!(
            auth.reset_password("john@x.com").await,
            Err(AuthError::UserNotFound)
        );
        assert_eq!(auth.reset_password("jane@x.com").await, Ok(()));
    }
}
