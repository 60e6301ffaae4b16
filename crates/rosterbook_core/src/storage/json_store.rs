//! File-backed JSON storage for the address book.
//!
//! # Responsibility
//! - Read and write the persisted address-book document at a fixed path.
//! - Surface load-time constraint violations without leaving partial state.
//!
//! # Invariants
//! - A missing data file reads as `Ok(None)`, never as an error.
//! - A load that fails returns no book at all; the caller's prior state is
//!   untouched.
//! - Save writes the parent directories before the file.

use super::serde_book::JsonAddressBook;
use super::StorageResult;
use crate::model::address_book::AddressBook;
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Storage seam between the address-book core and the filesystem.
pub trait AddressBookStorage {
    /// Path of the backing data file.
    fn book_path(&self) -> &Path;

    /// Reads the persisted book, or `None` when no data file exists yet.
    fn read_book(&self) -> StorageResult<Option<AddressBook>>;

    /// Persists the whole book, replacing any previous document.
    fn save_book(&self, book: &AddressBook) -> StorageResult<()>;
}

/// JSON-file implementation of [`AddressBookStorage`].
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_document(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = JsonAddressBook::from_book(book);
        let raw = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn book_path(&self) -> &Path {
        &self.path
    }

    /// # Side effects
    /// - Emits `book_load` logging events with duration and status.
    fn read_book(&self) -> StorageResult<Option<AddressBook>> {
        let started_at = Instant::now();
        info!(
            "event=book_load module=storage status=start path={}",
            self.path.display()
        );

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=book_load module=storage status=ok outcome=no_data_file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=book_load module=storage status=error duration_ms={} error_code=book_read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        let document: JsonAddressBook = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(err) => {
                error!(
                    "event=book_load module=storage status=error duration_ms={} error_code=book_parse_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match document.to_book() {
            Ok(book) => {
                info!(
                    "event=book_load module=storage status=ok persons={} assignments={} duration_ms={}",
                    book.persons().len(),
                    book.assignments().len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Some(book))
            }
            Err(err) => {
                error!(
                    "event=book_load module=storage status=error duration_ms={} error_code=book_data_invalid error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// # Side effects
    /// - Creates missing parent directories of the data file.
    /// - Emits `book_save` logging events with duration and status.
    fn save_book(&self, book: &AddressBook) -> StorageResult<()> {
        let started_at = Instant::now();
        info!(
            "event=book_save module=storage status=start path={}",
            self.path.display()
        );

        match self.write_document(book) {
            Ok(()) => {
                info!(
                    "event=book_save module=storage status=ok persons={} assignments={} duration_ms={}",
                    book.persons().len(),
                    book.assignments().len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=book_save module=storage status=error duration_ms={} error_code=book_write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
