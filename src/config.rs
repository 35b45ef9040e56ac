//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DATABASE_URL` - `SQLite` connection string (default: `sqlite://alumni.db`)
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default `SQLite` database location (created on first start if missing).
const DEFAULT_DATABASE_URL: &str = "sqlite://alumni.db";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `SQLite` database connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HOST` or `PORT` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL);
        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
