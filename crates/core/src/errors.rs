//! Core error types for the workshop application.
//!
//! This module defines transport-agnostic error types. HTTP-specific
//! failures (from reqwest) are converted to these types by the connect
//! layer.

use thiserror::Error;

use crate::constants::GENERIC_ERROR_MESSAGE;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the workshop application.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a server response (DNS, connect, timeout).
    #[error("Network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    ///
    /// `message` carries the server's human-readable `message` field when
    /// the error body had one.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Local precondition violation: the record is not present in the
    /// loaded collection. This is a usage error, not a server failure.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// An edit or delete for this budget is already in flight.
    #[error("Budget {0} already has a pending operation")]
    EditInFlight(i64),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// The text shown to the user in the single error notification.
    ///
    /// Server-reported messages are surfaced verbatim; everything else
    /// falls back to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Error::Validation(err) => err.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(format!("Failed to parse payload: {}", err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
