//! The interactive command loop.
//!
//! Lines from stdin are tokenized into a command name and arguments,
//! dispatched to one handler, and the result rendered through the
//! [`View`]. Errors cross exactly one boundary here: every [`BookError`]
//! kind maps to a fixed display string and the loop keeps going.

pub mod handlers;

use crate::book::AddressBook;
use crate::error::{BookError, BookResult, StorageError};
use crate::storage::BookStore;
use crate::view::View;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Commands and their descriptions, as shown by `help`.
pub const COMMANDS: &[(&str, &str)] = &[
    ("hello", "Greet the bot"),
    ("add", "Add a new contact"),
    ("change", "Change a contact's phone number"),
    ("phone", "Show contact's phone number"),
    ("all", "Show all contacts"),
    ("add-birthday", "Add a birthday to a contact"),
    ("show-birthday", "Show a contact's birthday"),
    ("birthdays", "Show upcoming birthdays"),
    ("help", "Show this command list"),
    ("exit", "Save and exit the program"),
];

/// Split a line into a lowercased command and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// The fixed mapping from each error kind to its display string.
pub fn render_error(err: &BookError) -> String {
    match err {
        BookError::Validation(e) => e.to_string(),
        BookError::PhoneNotFound
        | BookError::OldPhoneNotFound
        | BookError::ContactNotFound => err.to_string(),
        BookError::MissingArguments => err.to_string(),
        BookError::Storage(e) => format!("Storage error: {}", e),
    }
}

/// Run the blocking command loop over stdin until `exit`/`close` or EOF.
///
/// The book is saved through `store` exactly once, on the way out.
pub fn run(book: &mut AddressBook, store: &dyn BookStore, view: &dyn View) -> BookResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter a command: ");
        io::stdout().flush().map_err(StorageError::from)?;

        let line = match lines.next() {
            Some(line) => line.map_err(StorageError::from)?,
            // EOF behaves like exit so a piped session still persists.
            None => {
                store.save(book)?;
                view.show_message("Good bye!");
                return Ok(());
            }
        };

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(%command, args = args.len(), "dispatching");

        match command.as_str() {
            "exit" | "close" => {
                store.save(book)?;
                view.show_message("Good bye!");
                return Ok(());
            }
            "hello" => view.show_message("How can I help you?"),
            "add" => respond(view, handlers::add_contact(&args, book)),
            "change" => respond(view, handlers::change_contact(&args, book)),
            "phone" => respond(view, handlers::show_phone(&args, book)),
            "all" => view.show_all_contacts(book),
            "add-birthday" => respond(view, handlers::add_birthday(&args, book)),
            "show-birthday" => respond(view, handlers::show_birthday(&args, book)),
            "birthdays" => {
                let today = Local::now().date_naive();
                view.show_message(&handlers::upcoming_birthdays(book, today));
            }
            "help" => view.show_command_list(COMMANDS),
            _ => view.show_message("Invalid command."),
        }
    }
}

fn respond(view: &dyn View, result: BookResult<String>) {
    match result {
        Ok(message) => view.show_message(&message),
        Err(err) => {
            warn!(error = %err, "command failed");
            view.show_message(&render_error(&err));
        }
    }
}
