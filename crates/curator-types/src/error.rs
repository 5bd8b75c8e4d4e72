//! Error types for the curator pipeline.

use thiserror::Error;

/// Unified error type for curator operations.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A signal record failed validation. Aborts the whole run.
    #[error("Signal at index {index} {reason}")]
    MalformedSignal {
        /// Position of the record in the input array
        index: usize,
        /// Human-readable description of what is wrong
        reason: String,
    },

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CuratorError {
    /// Build a `MalformedSignal` error for the record at `index`.
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        CuratorError::MalformedSignal {
            index,
            reason: reason.into(),
        }
    }
}
