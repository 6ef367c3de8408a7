//! Persistence adapter: whole-book snapshots on disk.
//!
//! The book is written as one bincode blob: a version byte followed by
//! the serialized record list. Each save replaces the file's full
//! contents; each load rebuilds a complete book. A missing file on load
//! is the defined empty-start condition, not an error.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current snapshot format version.
const SNAPSHOT_VERSION: u8 = 1;

/// On-disk shape of the book.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u8,
    records: Vec<Record>,
}

/// Storage seam for the address book.
///
/// Provides abstraction over snapshot persistence, enabling different
/// implementations (file, in-memory for tests).
pub trait BookStore {
    /// Load the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the full current book, replacing any previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}

/// File-backed snapshot store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for FileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no snapshot found, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = bincode::deserialize(&bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }

        let mut book = AddressBook::new();
        for record in snapshot.records {
            book.add_record(record);
        }
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            records: book.iter().cloned().collect(),
        };
        let bytes = bincode::serialize(&snapshot)?;
        fs::write(&self.path, bytes)?;
        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "saved address book"
        );
        Ok(())
    }
}
