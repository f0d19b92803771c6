//! Structured error types for the Lobelia toolkit.

use thiserror::Error;

/// Unified error type for all Lobelia operations.
#[derive(Debug, Error)]
pub enum LobeliaError {
    /// A record's symbols violate its alphabet.
    #[error("validation error: {0}")]
    Validation(String),

    /// A range operation requested positions outside the record.
    #[error("index error: {0}")]
    Index(String),

    /// Structurally invalid arguments (empty alphabet, bad adapter, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the Lobelia workspace.
pub type Result<T> = std::result::Result<T, LobeliaError>;
