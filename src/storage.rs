//! On-disk persistence for the address book.
//!
//! The whole book is stored as one JSON document at a fixed path. Saves
//! overwrite the file in place and are not atomic with respect to a crash
//! mid-write; for a single-user tool that trade-off is accepted.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads and saves the address book at a fixed file path.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Create a store backed by `path`. Nothing is touched on disk until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book from disk.
    ///
    /// A missing file yields an empty book. Read and parse failures are
    /// returned so the caller decides how to degrade; every stored value
    /// is re-validated on the way in by the field deserializers.
    pub fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "contacts file not found, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let book = serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(book)
    }

    /// Save the whole book, replacing any previous file contents.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
