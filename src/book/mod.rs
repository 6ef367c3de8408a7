//! The address book: a name-keyed, insertion-ordered record collection.
//!
//! Lookup and mutation go through the owning book; records are never
//! aliased outside it. The upcoming-birthday query is pure over an
//! explicit `today` so it can be pinned in tests.

use crate::domain::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days ahead (inclusive) covered by the upcoming-birthday window.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// One entry in the upcoming-birthdays result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// The congratulation date, weekend-adjusted, as DD.MM.YYYY
    pub date: String,
}

/// The directory of contacts.
///
/// Keys (record names) are unique; adding under an existing name
/// replaces the stored record wholesale. Iteration follows insertion
/// order, and a replaced record keeps its original position.
///
/// Backed by a `Vec` with linear name lookup: the book is
/// interactive-session sized and insertion order is part of the
/// contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name.
    ///
    /// No merging happens: the previous record under that name is
    /// replaced in its existing position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx])
    }

    /// Exact-match lookup by name, for mutation through the book.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let idx = self.position(name)?;
        Some(&mut self.records[idx])
    }

    /// Remove the record with this name. No-op if absent.
    pub fn delete(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.records.remove(idx);
        }
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    /// Contacts whose birthday falls within the next
    /// [`UPCOMING_WINDOW_DAYS`] days of `today` (inclusive on both
    /// ends), with weekend occurrences rolled forward to Monday.
    ///
    /// For each record with a birthday the next occurrence of its
    /// (month, day) is taken in `today`'s year, or the year after if
    /// that has already passed. A Feb 29 birthday clamps to Feb 28 in
    /// non-leap years. Results follow the book's insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = today + Duration::days(UPCOMING_WINDOW_DAYS);
        let mut results = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let (month, day) = birthday.month_day();

            let mut next = match occurrence_in_year(today.year(), month, day) {
                Some(date) => date,
                None => continue,
            };
            if next < today {
                next = match occurrence_in_year(today.year() + 1, month, day) {
                    Some(date) => date,
                    None => continue,
                };
            }

            if next < today || next > window_end {
                continue;
            }

            // Saturday = 5, Sunday = 6 counted from Monday.
            let weekday = i64::from(next.weekday().num_days_from_monday());
            if weekday >= 5 {
                next = next + Duration::days(7 - weekday);
            }

            results.push(UpcomingBirthday {
                name: record.name().to_string(),
                date: next.format(DATE_FORMAT).to_string(),
            });
        }

        results
    }
}

/// The (month, day) occurrence within `year`, clamping Feb 29 to
/// Feb 28 when `year` is not a leap year.
fn occurrence_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if (month, day) == (2, 29) {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AddressBook:")?;
        let mut first = true;
        for record in &self.records {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
            first = false;
        }
        Ok(())
    }
}
