//! Configuration management for the `comm-info-validate` host.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honored if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default ceiling on the size of a payload document, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

/// Configuration for the `comm-info-validate` host.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Largest accepted payload document in bytes (default: 65536)
    pub max_input_bytes: usize,

    /// Pretty-print the normalized output (default: false)
    pub pretty: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `COMM_INFO_MAX_INPUT_BYTES`: Max payload size in bytes (default: 65536)
    /// - `COMM_INFO_PRETTY`: Pretty-print output, `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let max_input_bytes =
            Self::parse_env_usize("COMM_INFO_MAX_INPUT_BYTES", DEFAULT_MAX_INPUT_BYTES)?;
        if max_input_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "COMM_INFO_MAX_INPUT_BYTES".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let pretty = Self::parse_env_bool("COMM_INFO_PRETTY", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            log_level,
            max_input_bytes,
            pretty,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
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
            log_level: "warn".to_string(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            pretty: false,
        }
    }
}
