//! Configuration loading for MediBook.
//!
//! Configuration is layered: an optional `config/default` file, an optional
//! `config/{RUN_ENV}` file, then environment variables with the `MEDIBOOK`
//! prefix and `__` separator (e.g. `MEDIBOOK_SERVER__PORT=5000`). Secrets can
//! also come from bare env vars (`ACCESS_TOKEN_SECRET`, `DATABASE_URL`).

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "MEDIBOOK".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let mut raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_secrets(&mut raw_config);
    Ok(raw_config)
}

/// Fills secret fields from bare environment variables when a config file
/// left them unset.
fn apply_env_secrets(config: &mut AppConfig) {
    if let Some(auth) = config.auth.as_mut() {
        if auth.access_token_secret.is_none() {
            auth.access_token_secret = env::var("ACCESS_TOKEN_SECRET").ok();
        }
    }
    if let Some(database) = config.database.as_mut() {
        if database.url.is_empty() {
            if let Ok(url) = env::var("DATABASE_URL") {
                database.url = url;
            }
        }
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is loaded at most once per process. `DOTENV_OVERRIDE` selects an
/// alternative file; the default is `.env` in the working directory.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
