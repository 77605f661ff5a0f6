//! Error types for the Weave engine.
//!
//! All crates return `WeaveResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Weave engine.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// Grid dimensions or spacing cannot produce a cloth.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeaveError>`.
pub type WeaveResult<T> = Result<T, WeaveError>;
