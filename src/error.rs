//! Error types for recap.

use std::time::Duration;

/// Message returned when a review request carries no profile identifier.
pub const MISSING_INPUT_MESSAGE: &str = "Profile URL is required";

/// Fallback message for server errors that carry no detail of their own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process request";

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Post source error: {0}")]
    Source(#[from] SourceError),

    #[error("Review error: {0}")]
    Review(#[from] ReviewError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Errors raised by a post source while producing posts for a profile.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read posts from {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse posts from {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Post source {name} timed out after {timeout:?}")]
    Timeout { name: String, timeout: Duration },
}

/// Errors surfaced at the review boundary.
///
/// Only two kinds exist: the caller forgot the identifier, or something
/// else went wrong and the request produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,

    #[error("{}", unexpected_message(.0))]
    Unexpected(String),
}

fn unexpected_message(message: &str) -> &str {
    if message.is_empty() {
        GENERIC_FAILURE_MESSAGE
    } else {
        message
    }
}

impl From<SourceError> for ReviewError {
    fn from(err: SourceError) -> Self {
        ReviewError::Unexpected(err.to_string())
    }
}

/// Web gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway failed to start: {reason}")]
    StartupFailed { reason: String },
}
