// --- File: crates/barber_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Shop Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShopConfig {
    #[serde(default = "default_shop_name")]
    pub name: String,
    /// IANA time zone name the slot catalog is expressed in.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Artificial delay of the simulated booking submission.
    #[serde(default = "default_submission_delay_ms")]
    pub submission_delay_ms: u64,
}

fn default_shop_name() -> String {
    "Your Barber's truly".to_string()
}

fn default_time_zone() -> String {
    "Europe/London".to_string()
}

fn default_submission_delay_ms() -> u64 {
    1000
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            time_zone: default_time_zone(),
            submission_delay_ms: default_submission_delay_ms(),
        }
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// trace | debug | info | warn | error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// --- Static Client Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ClientConfig {
    /// Directory holding the built client bundle (index.html + assets).
    pub dir: Option<String>,
}

// --- Firebase Auth Config ---
// Holds non-secret Firebase config. The web API key is loaded from env via "secret_from_env".
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FirebaseConfig {
    pub api_key: Option<String>, // FIREBASE_API_KEY
    pub project_id: Option<String>,
    pub auth_domain: Option<String>,
    /// Identity Toolkit endpoint, overridable for emulators and tests.
    pub base_url: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub client: ClientConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_firebase: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub firebase: Option<FirebaseConfig>,
}
