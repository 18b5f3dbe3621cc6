//! Error types for the agendo ecosystem.

use thiserror::Error;

/// Errors that can occur in agendo operations.
#[derive(Error, Debug)]
pub enum AgendoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agendo operations.
pub type AgendoResult<T> = Result<T, AgendoError>;
