//! Contact Assistant - a command-line contact book with birthday reminders.
//!
//! The library keeps named contacts with validated phone numbers and an
//! optional birthday, and works out whom to congratulate in the coming days,
//! moving weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: `Record` and the `AddressBook` with birthday scheduling
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Whole-book persistence
//! - **commands**: Input parsing and command handlers
//! - **session**: The interactive read-eval-print loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::{Command, CommandContext, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileBookRepository};
pub use session::Session;
