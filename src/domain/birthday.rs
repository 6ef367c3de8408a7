//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted input and display format.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for a contact's birthday.
///
/// Input must be a real calendar date written strictly as `DD.MM.YYYY`
/// (two-digit day and month, four-digit year, dot separators). The
/// original string is kept verbatim so redisplay is byte-identical to
/// what the user typed; the parsed date is derived once at construction
/// for the upcoming-birthday arithmetic.
///
/// # Example
///
/// ```
/// use addrbook::domain::Birthday;
///
/// let birthday = Birthday::new("24.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "24.03.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not
    /// match `DD.MM.YYYY` exactly or names an impossible date
    /// (e.g. "31.02.2020").
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();

        // chrono alone is lenient about field widths ("1.1.2020"
        // parses), so the shape is checked before calendar validity.
        if !Self::has_strict_shape(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidDate(raw)),
        }
    }

    /// Exactly `DD.MM.YYYY`: 10 bytes, dots at 2 and 5, digits elsewhere.
    fn has_strict_shape(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
    }

    /// Get the birthday exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the (month, day) pair used for yearly recurrence.
    pub fn month_day(&self) -> (u32, u32) {
        use chrono::Datelike;
        (self.date.month(), self.date.day())
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("24.03.1990").unwrap();
        assert_eq!(birthday.as_str(), "24.03.1990");
        assert_eq!(birthday.date().year(), 1990);
        assert_eq!(birthday.month_day(), (3, 24));
    }

    #[test]
    fn test_birthday_rejects_loose_shapes() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.1.2020").is_err());
        assert!(Birthday::new("01-01-2020").is_err());
        assert!(Birthday::new("01.01.20").is_err());
        assert!(Birthday::new("2020.01.01").is_err());
        assert!(Birthday::new(" 01.01.2020").is_err());
        assert!(Birthday::new("01.01.2020 ").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2020").is_err());
        assert!(Birthday::new("32.01.2020").is_err());
        assert!(Birthday::new("01.13.2020").is_err());
        assert!(Birthday::new("00.01.2020").is_err());
    }

    #[test]
    fn test_birthday_leap_day() {
        assert!(Birthday::new("29.02.2020").is_ok());
        assert!(Birthday::new("29.02.2021").is_err());
    }

    #[test]
    fn test_birthday_error_message() {
        let err = Birthday::new("31.02.2020").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_birthday_preserves_input_verbatim() {
        let birthday = Birthday::new("05.06.1999").unwrap();
        assert_eq!(birthday.to_string(), "05.06.1999");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("10.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"10.06.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31.02.2020\"");
        assert!(result.is_err());
    }
}
