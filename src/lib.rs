//! Contact Book - an interactive command-line contact manager.
//!
//! Stores names, phone numbers and birthdays, supports lookup, editing and
//! search, and persists the whole book between sessions.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones and birthdays
//! - **models**: the [`Record`] and [`AddressBook`] data structures
//! - **command**: the input grammar and command dispatch
//! - **storage**: JSON load/save of the whole book
//! - **session**: the interactive read-eval-print loop
//! - **config**: configuration from environment variables
//! - **error**: typed errors for parsing, book operations, storage and config

// Re-export commonly used types
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use command::{execute, help_text, parse, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, ParseError, StorageError};
pub use models::{AddressBook, Pages, Record};
pub use session::Session;
pub use storage::ContactStore;
