//! Error types for the command-line host.
//!
//! Validation failures live in [`crate::domain::ValidationError`]; this module
//! covers configuration and payload loading, using `thiserror`.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading a payload document.
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading the source failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The document exceeds the configured size limit
    #[error("Input exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// The document is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with InputError
pub type InputResult<T> = Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "COMM_INFO_PRETTY".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for COMM_INFO_PRETTY: Must be true or false"
        );

        let err = InputError::TooLarge { limit: 16 };
        assert_eq!(err.to_string(), "Input exceeds 16 bytes");
    }
}
