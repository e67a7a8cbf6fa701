//! Error types for civicline-ai
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in this crate
#[derive(Debug, Error)]
pub enum AiError {
    /// Prompt file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Credential environment variable unset or empty
    #[error("Missing credential: environment variable {env_var} not set or empty")]
    MissingCredential { env_var: String },

    /// Non-success status from the hosted API
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure talking to the hosted API
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for civicline-ai operations
pub type Result<T> = std::result::Result<T, AiError>;
