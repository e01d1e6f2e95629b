//! Core error types for geoquiz-core.
//!
//! The tracker and the quiz parser cannot fail. Everything around them
//! (configuration files, the text-generation service) reports through the
//! hierarchy below.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for geoquiz-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Text-generation service errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    MissingKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Errors talking to the chat-completion service.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No topic to generate a quiz about
    #[error("Location keyword must not be empty")]
    EmptyKeyword,

    /// The bearer token environment variable is unset
    #[error("API key not configured: set the {var} environment variable")]
    MissingApiKey { var: String },

    /// Transport, TLS or body decoding failure
    #[error("Request to generation service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API call failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response carried no message content
    #[error("Generation service returned no content")]
    EmptyResponse,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_code() {
        let err = GenerationError::Status {
            status: 429,
            body: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API call failed with status 429: rate limited");
    }

    #[test]
    fn test_config_error_converts_into_core_error() {
        let err: CoreError = ConfigError::MissingKey("tracker.foo".into()).into();
        assert!(matches!(err, CoreError::Config(ConfigError::MissingKey(_))));
        assert!(err.to_string().contains("tracker.foo"));
    }
}
