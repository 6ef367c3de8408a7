//! Output rendering.
//!
//! The command loop talks to a [`View`] so the display target can be
//! swapped without touching the handlers. The shipped implementation
//! writes to stdout.

use crate::book::AddressBook;
use crate::models::Record;

/// A renderer for everything the assistant shows the user.
pub trait View {
    /// Render one contact.
    fn show_contact(&self, record: &Record);

    /// Render every contact in the book, or a placeholder when empty.
    fn show_all_contacts(&self, book: &AddressBook);

    /// Render the command list with descriptions.
    fn show_command_list(&self, commands: &[(&str, &str)]);

    /// Render a plain message line.
    fn show_message(&self, message: &str);
}

/// Console renderer writing to stdout.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl View for ConsoleView {
    fn show_contact(&self, record: &Record) {
        println!("{}", record);
    }

    fn show_all_contacts(&self, book: &AddressBook) {
        if book.is_empty() {
            println!("No contacts found.");
        } else {
            for record in book.iter() {
                self.show_contact(record);
            }
        }
    }

    fn show_command_list(&self, commands: &[(&str, &str)]) {
        println!("Available commands:");
        for (command, description) in commands {
            println!("{}: {}", command, description);
        }
    }

    fn show_message(&self, message: &str) {
        println!("{}", message);
    }
}
