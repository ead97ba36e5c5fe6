//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both values carry defaults, so the server comes up on the fixed local
    /// address with no environment at all.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3333".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        Ok(Self { host, port })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
