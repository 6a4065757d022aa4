//! Configuration for the contact book.
//!
//! This module handles loading and validating configuration from
//! environment variables. The tool has no flags and no config file; the
//! two knobs below are operator conveniences with sensible defaults.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

const DEFAULT_BOOK_PATH: &str = "contacts.json";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the contacts file lives (default: "contacts.json")
    pub book_path: String,

    /// Log filter directive for stderr diagnostics (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: path of the persisted contacts file
    ///   (default: `contacts.json`)
    /// - `LOG_LEVEL`: tracing filter directive (default: `error`);
    ///   `RUST_LOG` takes precedence at startup when set
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path =
            env::var("CONTACT_BOOK_PATH").unwrap_or_else(|_| DEFAULT_BOOK_PATH.to_string());
        if book_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        if EnvFilter::try_new(&log_level).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Not a valid log filter directive: {}", log_level),
            });
        }

        Ok(Config {
            book_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: DEFAULT_BOOK_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
