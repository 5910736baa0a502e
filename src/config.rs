//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is saved between runs
    pub data_file: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Save after every mutating command (default: true)
    pub autosave: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Data file path (default: `addressbook.json`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `ADDRESS_BOOK_AUTOSAVE`: `true` or `false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let autosave = Self::parse_env_bool("ADDRESS_BOOK_AUTOSAVE", true)?;

        Ok(Config {
            data_file,
            log_level,
            autosave,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "warn".to_string(),
            autosave: true,
        }
    }
}
