//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input line contained no tokens
    #[error("Empty command. Please try again.")]
    EmptyLine,

    /// The command keyword is not known
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    /// Wrong argument count or shape for a known command
    #[error("Invalid arguments for '{command}'. Usage: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },
}

/// Errors that can occur in address book and record operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// No contact is stored under the given name
    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    /// The record holds no phone equal to the given number
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// The rename target is already taken by another contact
    #[error("Contact '{0}' already exists")]
    NameTaken(String),

    /// Pagination was requested with a zero page size
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the contacts file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The contacts file exists but could not be read
    #[error("Failed to read contacts file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contacts file could not be written
    #[error("Failed to write contacts file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contacts file contents are not a valid address book
    #[error("Failed to parse contacts file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The address book could not be encoded for storage
    #[error("Failed to encode contacts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Any error a single command can produce.
///
/// The session loop catches this at its boundary, prints it as a one-line
/// message and keeps reading commands; no command error is fatal.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Book(#[from] BookError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
