//! Data structures for contacts.

pub mod record;

pub use record::{Record, NO_BIRTHDAY};
