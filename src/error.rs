//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by [`crate::models::Record`] phone operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not on the record
    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),

    /// The replacement phone failed validation
    #[error("New phone number is invalid: {0}")]
    InvalidNewPhone(ValidationError),
}

/// Errors a command handler reports back to the operator.
///
/// Every variant renders as a one-line message; the router never lets these
/// escape the command loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The contact name argument was blank
    #[error("Enter user name.")]
    MissingName,

    /// A phone or birthday argument failed validation
    #[error("{0}")]
    Validation(ValidationError),

    /// Fewer arguments than the command needs
    #[error("Enter arguments both name and phone number.")]
    NotEnoughArguments,

    /// No contact with the given name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// A record-level operation failed
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => CommandError::MissingName,
            other => CommandError::Validation(other),
        }
    }
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid address book JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file parsed but its content is unusable
    #[error("Corrupt data file: {0}")]
    Corrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
