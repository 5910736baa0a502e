//! Contact Book - a command-line contact manager.
//!
//! Stores named contacts with phone numbers and optional birthdays, persists
//! them between runs and answers queries such as "whose birthday is in the
//! next 7 days".
//!
//! # Architecture
//!
//! - **domain**: Validated field types (`Name`, `Phone`, `Birthday`)
//! - **models**: The contact `Record` and the `AddressBook`
//! - **repositories**: Persistence of the book (JSON file)
//! - **commands**: Tokenizer, command set, handlers and router
//! - **view**: Console input and output
//! - **session**: The read-eval loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;
pub mod view;

pub use commands::{Command, CommandRouter, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::run_session;
pub use view::{ConsoleView, UserView};
