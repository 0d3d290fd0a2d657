//! Crate-wide error types
//!
//! Detection and mock construction are total and never produce an error.
//! Only validation, configuration loading and the hand-off to a renderer
//! return `Result`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bootstrap error type
///
/// Serializable so it can be surfaced to the browser host as-is.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// A built simulation context violates one of its invariants
    #[error("Invalid simulation context: {0}")]
    InvalidContext(String),

    /// A renderer collaborator failed; passed through untouched
    #[error("Render failed: {0}")]
    RenderFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<AppError> for String {
    fn from(error: AppError) -> String {
        error.to_string()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
