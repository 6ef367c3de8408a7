//! Record model representing one contact in the book.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel shown when a contact has no birthday on file.
pub const NO_BIRTHDAY: &str = "No birthday set";

/// A contact: an immutable name, an ordered list of phone numbers and
/// an optional birthday.
///
/// The name is the record's identity inside an [`AddressBook`] and
/// never changes after construction. Phones keep insertion order and
/// duplicates are permitted; every stored phone satisfies the 10-digit
/// invariant because only validated [`PhoneNumber`]s are inserted.
///
/// [`AddressBook`]: crate::book::AddressBook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    // No skip_serializing_if here: the snapshot codec is not
    // self-describing, so every field must be written even when None.
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with an empty phone list and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Get the contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the phone list in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Propagates the validation failure unchanged; the list is not
    /// modified on error.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone entry exactly equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no entry matches.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(idx) => {
                self.phones.remove(idx);
                Ok(())
            }
            None => Err(BookError::PhoneNotFound),
        }
    }

    /// Replace the first phone entry exactly equal to `old` with a
    /// validated `new` number, in place.
    ///
    /// # Errors
    ///
    /// Returns `BookError::OldPhoneNotFound` if no entry matches `old`,
    /// or the validation failure for `new`. In both cases the list is
    /// left untouched — `new` is validated before anything is replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or(BookError::OldPhoneNotFound)?;
        let replacement = PhoneNumber::new(new)?;
        self.phones[idx] = replacement;
        Ok(())
    }

    /// Validate and set the birthday, overwriting any previous value.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        let birthday = Birthday::new(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The stored birthday string, or the no-birthday sentinel.
    pub fn birthday_display(&self) -> &str {
        self.birthday
            .as_ref()
            .map(|b| b.as_str())
            .unwrap_or(NO_BIRTHDAY)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(name).unwrap()
    }

    #[test]
    fn test_record_new() {
        let rec = record("Alice");
        assert_eq!(rec.name(), "Alice");
        assert!(rec.phones().is_empty());
        assert!(rec.birthday().is_none());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        assert!(matches!(
            Record::new(""),
            Err(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_add_phone_validates() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        assert_eq!(rec.phones().len(), 1);

        let err = rec.add_phone("123").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits");
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("1234567890").unwrap();
        assert_eq!(rec.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5555555555").unwrap();
        rec.add_phone("1234567890").unwrap();

        rec.remove_phone("1234567890").unwrap();
        let left: Vec<_> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(left, ["5555555555", "1234567890"]);
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        let err = rec.remove_phone("0000000000").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound));
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("2222222222").unwrap();
        rec.add_phone("3333333333").unwrap();

        rec.edit_phone("2222222222", "9999999999").unwrap();
        let phones: Vec<_> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1111111111", "9999999999", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_old_not_found() {
        let mut rec = record("Bob");
        rec.add_phone("0000000000").unwrap();
        let err = rec.edit_phone("1111111111", "2222222222").unwrap_err();
        assert!(matches!(err, BookError::OldPhoneNotFound));
        assert_eq!(rec.phones()[0].as_str(), "0000000000");
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut rec = record("Bob");
        rec.add_phone("0000000000").unwrap();

        let err = rec.edit_phone("0000000000", "abc").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(rec.phones()[0].as_str(), "0000000000");
    }

    #[test]
    fn test_birthday_set_and_overwrite() {
        let mut rec = record("Alice");
        assert_eq!(rec.birthday_display(), NO_BIRTHDAY);

        rec.add_birthday("10.06.1990").unwrap();
        assert_eq!(rec.birthday_display(), "10.06.1990");

        rec.add_birthday("11.07.1991").unwrap();
        assert_eq!(rec.birthday_display(), "11.07.1991");
    }

    #[test]
    fn test_invalid_birthday_rejected() {
        let mut rec = record("Alice");
        assert!(rec.add_birthday("31.02.2020").is_err());
        assert!(rec.birthday().is_none());
    }

    #[test]
    fn test_display_without_birthday() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5555555555").unwrap();
        assert_eq!(
            rec.to_string(),
            "Contact name: Alice, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_birthday("10.06.1990").unwrap();
        assert_eq!(
            rec.to_string(),
            "Contact name: Alice, phones: 1234567890, birthday: 10.06.1990"
        );
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_birthday("10.06.1990").unwrap();

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
