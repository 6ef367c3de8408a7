//! Configuration management for the addrbook assistant.
//!
//! Configuration comes from environment variables, with an optional
//! `.env` file loaded via dotenvy. Everything has a default; nothing is
//! required to start the program.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_BOOK_FILE: &str = "address_book.bin";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book snapshot
    pub book_path: PathBuf,

    /// Log level used when RUST_LOG is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRBOOK_FILE`: snapshot path (default: `address_book.bin`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; absence is fine.
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ADDRBOOK_FILE") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ADDRBOOK_FILE".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_BOOK_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_FILE),
            log_level: "error".to_string(),
        }
    }
}
