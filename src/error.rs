//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by [`crate::models::Record`] phone operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors returned by [`crate::models::AddressBook`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// The three kinds of failure a command handler can report.
///
/// Each kind maps to one fixed reply, see [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed phone, date or name
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced contact or phone is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// The command was given too few arguments
    #[error("Missing argument for command: {0}")]
    MissingArgument(String),
}

impl CommandError {
    /// The reply shown to the user for this kind of error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Give me name and phone, please.",
            Self::NotFound(_) => "Oops, contact not found. Enter the existing in Contacts name.",
            Self::MissingArgument(_) => "Enter the argument for the command, please.",
        }
    }
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => Self::Validation(e),
            RecordError::PhoneNotFound(phone) => Self::NotFound(phone),
        }
    }
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::ContactNotFound(name) => Self::NotFound(name),
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The book file is not valid JSON or holds invalid contacts
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
