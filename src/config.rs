//! Process configuration loaded from environment variables.

use crate::error::config::ConfigError;

/// Application configuration, loaded once at startup and passed explicitly.
pub struct Config {
    /// Database connection string, e.g. `sqlite://veranda.db?mode=rwc`.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDRESS` defaults to
    /// `127.0.0.1:8080` when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        })
    }
}
