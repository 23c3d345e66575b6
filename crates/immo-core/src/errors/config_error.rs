//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors from loading, layering, or validating `ImmoConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {path} does not exist")]
    FileNotFound { path: String },

    #[error("config file {path} could not be read: {message}")]
    Unreadable { path: String, message: String },

    #[error("config file {path} is not valid TOML: {message}")]
    ParseError { path: String, message: String },

    /// A merged value breaks a constraint. `key` is the dotted TOML key.
    #[error("{key}: {message}")]
    ValidationFailed { key: &'static str, message: String },

    /// A single override (env var or key) could not be interpreted.
    #[error("{source_name}='{value}' is invalid, expected {expected}")]
    InvalidValue {
        source_name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("config could not be rendered as TOML: {0}")]
    Serialize(String),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
