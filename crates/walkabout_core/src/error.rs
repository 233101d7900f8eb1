//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a [`WalkConfig`](crate::WalkConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or does not match the config type.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document does not conform to the config schema.
    #[error("Config validation failed: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
