//! JSON persistence for the address book.
//!
//! # Responsibility
//! - Convert the in-memory aggregate to and from the persisted JSON
//!   document.
//! - Validate referential and duplication constraints when loading.
//!
//! # Invariants
//! - Load is all-or-nothing: the first violation aborts the whole load and
//!   no partially built book escapes.
//! - Save performs no validation; an in-memory book is valid by
//!   construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod serde_book;
mod json_store;

pub use json_store::{AddressBookStorage, JsonAddressBookStorage};

use serde_book::DataError;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while reading or writing the persisted address book.
#[derive(Debug)]
pub enum StorageError {
    /// Filesystem failure around the data file.
    Io(std::io::Error),
    /// The data file is not a well-formed document.
    Json(serde_json::Error),
    /// The document is well-formed but violates a data constraint.
    Data(DataError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Data(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Data(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<DataError> for StorageError {
    fn from(value: DataError) -> Self {
        Self::Data(value)
    }
}
