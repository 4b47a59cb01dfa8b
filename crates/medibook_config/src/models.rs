// --- File: crates/medibook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via MEDIBOOK_DATABASE__URL or DATABASE_URL
    /// Optional path to a JSON file with appointment option templates to seed at startup.
    #[serde(default)]
    pub seed_templates_path: Option<String>,
}

// --- Auth Config ---
// Holds non-secret auth config. The signing secret is loaded directly from
// the ACCESS_TOKEN_SECRET env var when not present in a config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    #[serde(default)]
    pub access_token_secret: Option<String>,
    #[serde(default = "default_token_expiry_secs")]
    pub token_expiry_secs: i64,
}

fn default_token_expiry_secs() -> i64 {
    3600
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: None,
            token_expiry_secs: default_token_expiry_secs(),
        }
    }
}

// --- Booking Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BookingConfig {
    /// When true, admission re-checks that the requested slot is still among
    /// the treatment's remaining slots before inserting. Off by default: the
    /// uniqueness invariant is on (date, treatment, email) either way.
    #[serde(default)]
    pub check_slot_availability: bool,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub booking: Option<BookingConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            database: None,
            auth: None,
            booking: None,
        }
    }
}
