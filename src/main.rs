//! addrbook - Main entry point
//!
//! Loads the persisted address book, runs the interactive command loop
//! over stdin, and saves the book on the way out.

use addrbook::storage::BookStore;
use addrbook::view::{ConsoleView, View};
use addrbook::{Config, FileStore};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr only; stdout is the interactive surface.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(book = %config.book_path.display(), "starting addrbook");

    let store = FileStore::new(&config.book_path);
    let mut book = match store.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let view = ConsoleView;
    view.show_message("Welcome to the assistant bot!");

    addrbook::repl::run(&mut book, &store, &view)?;

    info!("addrbook shutdown complete");
    Ok(())
}
