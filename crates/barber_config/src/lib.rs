use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub mod models;
pub use models::*;

/// Marker value in config files for settings that must come from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "BARBER";

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("failed to apply environment secrets: {0}")]
    Secrets(#[from] serde_json::Error),
}

/// Loads the layered configuration.
///
/// Sources, later ones winning:
/// 1. `<config dir>/default.*`
/// 2. `<config dir>/<RUN_ENV>.*` (`RUN_ENV` defaults to `debug`)
/// 3. environment variables `<PREFIX>__SECTION__KEY` (`PREFIX` defaults to `BARBER`)
///
/// The config dir is `CONFIG_DIR` when set, otherwise `./config`.
pub fn load_config() -> Result<AppConfig, ConfigLoadError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env)
}

/// Loads configuration from an explicit directory and run environment.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigLoadError> {
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Recursively replaces all "secret_from_env" string values with environment variable values
fn inject_env_secrets(value: &mut Value) {
    fn walk(path: Vec<String>, obj: &mut Value) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let env_key = path.join("_").to_uppercase();
                match env::var(&env_key) {
                    Ok(env_val) => *obj = Value::String(env_val),
                    Err(_) => {
                        warn!("env var {} not found for {}", env_key, SECRET_MARKER);
                        *obj = Value::Null;
                    }
                }
            }
            _ => {}
        }
    }

    walk(vec![], value);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config.
///
/// A marker whose env var is missing becomes `None`, so optional secrets stay unset
/// instead of carrying the marker text into the running service.
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigLoadError> {
    let mut json = serde_json::to_value(&config)?;
    inject_env_secrets(&mut json);
    Ok(serde_json::from_value(json)?)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment once.
///
/// `DOTENV_OVERRIDE` names the file; a first CLI argument starting with `.env`
/// is honoured next; `.env` is the fallback. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path(), "nowhere").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.shop.submission_delay_ms, 1000);
        assert_eq!(config.shop.time_zone, "Europe/London");
        assert!(!config.use_firebase);
        assert!(config.firebase.is_none());
    }

    #[test]
    fn run_env_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nhost = \"0.0.0.0\"\nport = 3000\n\n[shop]\nname = \"Tota\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[server]\nhost = \"0.0.0.0\"\nport = 4000\n",
        )
        .unwrap();

        let config = load_config_from(dir.path(), "staging").unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.shop.name, "Tota");
    }

    #[test]
    fn secret_marker_is_replaced_from_environment() {
        env::set_var("FIREBASE_API_KEY", "test-web-key");
        let config = AppConfig {
            use_firebase: true,
            firebase: Some(FirebaseConfig {
                api_key: Some(SECRET_MARKER.to_string()),
                project_id: Some("tota-booking".to_string()),
                auth_domain: None,
                base_url: None,
            }),
            ..AppConfig::default()
        };

        let resolved = apply_env_overrides_from_marker(config).unwrap();
        let firebase = resolved.firebase.unwrap();
        assert_eq!(firebase.api_key.as_deref(), Some("test-web-key"));
        assert_eq!(firebase.project_id.as_deref(), Some("tota-booking"));
    }

    #[test]
    fn unresolved_secret_marker_becomes_none() {
        let config = AppConfig {
            firebase: Some(FirebaseConfig {
                auth_domain: Some(SECRET_MARKER.to_string()),
                ..FirebaseConfig::default()
            }),
            ..AppConfig::default()
        };

        let resolved = apply_env_overrides_from_marker(config).unwrap();
        assert!(resolved.firebase.unwrap().auth_domain.is_none());
    }
}
