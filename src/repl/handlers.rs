//! Command handlers.
//!
//! One function per command. Each takes the raw argument list and the
//! book, validates arity exactly, and returns the message to display or
//! a [`BookError`] for the boundary to render. Handlers that depend on
//! the current date take it as a parameter so tests can pin it.

use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;

fn one_arg(args: &[String]) -> BookResult<&str> {
    match args {
        [a] => Ok(a),
        _ => Err(BookError::MissingArguments),
    }
}

fn two_args(args: &[String]) -> BookResult<(&str, &str)> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(BookError::MissingArguments),
    }
}

fn three_args(args: &[String]) -> BookResult<(&str, &str, &str)> {
    match args {
        [a, b, c] => Ok((a, b, c)),
        _ => Err(BookError::MissingArguments),
    }
}

/// `add <name> <phone>` — append a phone to an existing contact, or
/// create the contact with that phone.
///
/// An existing contact is never replaced here; only a name not yet in
/// the book goes through [`AddressBook::add_record`].
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let (name, phone) = two_args(args)?;
    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }
    Ok(format!("Contact {} added or updated.", name))
}

/// `change <name> <old> <new>` — edit one phone in place.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let (name, old, new) = three_args(args)?;
    let record = book.find_mut(name).ok_or(BookError::ContactNotFound)?;
    record.edit_phone(old, new)?;
    Ok(format!("Phone for {} changed.", name))
}

/// `phone <name>` — the contact's canonical one-line rendering.
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = one_arg(args)?;
    let record = book.find(name).ok_or(BookError::ContactNotFound)?;
    Ok(record.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>` — set or overwrite the birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let (name, birthday) = two_args(args)?;
    let record = book.find_mut(name).ok_or(BookError::ContactNotFound)?;
    record.add_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>` — the stored date or the sentinel.
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = one_arg(args)?;
    let record = book.find(name).ok_or(BookError::ContactNotFound)?;
    Ok(format!(
        "{}'s birthday is {}.",
        name,
        record.birthday_display()
    ))
}

/// `birthdays` — who to congratulate in the next week, relative to `today`.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No birthdays in the next 7 days.".to_string();
    }
    upcoming
        .iter()
        .map(|b| format!("{} - {}", b.name, b.date))
        .collect::<Vec<_>>()
        .join("\n")
}
