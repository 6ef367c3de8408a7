//! addrbook - a line-oriented assistant bot for a personal contact directory.
//!
//! Contacts carry a name, validated 10-digit phone numbers and an
//! optional DD.MM.YYYY birthday. The book answers which contacts have a
//! birthday in the coming week (weekend dates roll forward to Monday)
//! and persists itself to a snapshot file between sessions.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone numbers, birthdays)
//! - **models**: the contact record
//! - **book**: the name-keyed directory and the upcoming-birthday query
//! - **storage**: snapshot persistence to a file
//! - **view**: output rendering
//! - **repl**: command parsing, handlers and the interactive loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;
pub mod view;

pub use book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
pub use models::Record;
pub use storage::{BookStore, FileStore};
pub use view::{ConsoleView, View};
