//! Auth service selection.

use barber_common::AuthService;
use barber_config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

use crate::client::FirebaseAuthClient;
use crate::error::FirebaseError;
use crate::local::LocalAuthService;

/// Builds the auth service the configuration asks for.
///
/// With `use_firebase` on, a missing `firebase` section or API key is an
/// error. With it off, accounts live in memory for the life of the process.
pub fn auth_service(config: &AppConfig) -> Result<Arc<dyn AuthService>, FirebaseError> {
    if !config.use_firebase {
        warn!("Firebase disabled; using in-memory accounts");
        return Ok(Arc::new(LocalAuthService::new()));
    }

    let firebase = config
        .firebase
        .as_ref()
        .ok_or_else(|| FirebaseError::ConfigError("firebase section missing".to_string()))?;
    let client = FirebaseAuthClient::new(firebase)?;
    info!(
        project_id = firebase.project_id.as_deref().unwrap_or("<unset>"),
        "Using Firebase authentication"
    );
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use barber_config::FirebaseConfig;

    #[test]
    fn test_disabled_uses_local_store() {
        let config = AppConfig {
            use_firebase: false,
            ..Default::default()
        };
        let auth = auth_service(&config).unwrap();
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_enabled_requires_api_key() {
        let config = AppConfig {
            use_firebase: true,
            firebase: Some(FirebaseConfig::default()),
            ..Default::default()
        };
        assert!(matches!(
            auth_service(&config),
            Err(FirebaseError::ConfigError(_))
        ));

        let config = AppConfig {
            use_firebase: true,
            firebase: None,
            ..Default::default()
        };
        assert!(auth_service(&config).is_err());
    }

    #[test]
    fn test_enabled_with_key_builds_client() {
        let config = AppConfig {
            use_firebase: true,
            firebase: Some(FirebaseConfig {
                api_key: Some("test-key".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(auth_service(&config).is_ok());
    }
}
