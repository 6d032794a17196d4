//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range user input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Removing or looking up an appliance that is not in the ledger
    #[error("Appliance not found: {0}")]
    NotFound(String),

    /// A report or projection was requested without enough data
    #[error("Not enough data: {0}")]
    EmptyState(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Shared session lock was poisoned by a panicking holder
    #[error("Session state unavailable: {0}")]
    State(String),
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn empty_state(msg: impl Into<String>) -> Self {
        Self::EmptyState(msg.into())
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
