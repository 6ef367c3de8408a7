//! Error types for the addrbook assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by directory and record operations.
///
/// Every variant is a value-level failure: the command loop renders it
/// as a message and keeps accepting input.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone number or birthday failed format validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced phone number is not on the record
    #[error("Phone number not found")]
    PhoneNotFound,

    /// The phone number to be replaced is not on the record
    #[error("Old phone number not found")]
    OldPhoneNotFound,

    /// The referenced contact does not exist in the book
    #[error("Contact not found.")]
    ContactNotFound,

    /// Too few (or too many) arguments supplied for a command
    #[error("Not enough information provided. Try again.")]
    MissingArguments,

    /// Persistence read/write failure other than "file absent"
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while reading or writing the book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot bytes could not be encoded or decoded
    #[error("Snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// Snapshot carries a format version this build does not understand
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u8),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
