//! Core domain logic for RosterBook.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address_book::AddressBook;
pub use model::assignment::{Assignment, AssignmentList};
pub use model::fields::{
    AssignmentDetails, Availability, Email, FieldError, FieldResult, Name, Phone, Tag,
};
pub use model::person::{Person, UniquePersonList};
pub use model::sample::{sample_address_book, sample_persons};
pub use model::{ModelError, ModelResult};
pub use storage::serde_book::{DataError, DataResult, JsonAddressBook};
pub use storage::{AddressBookStorage, JsonAddressBookStorage, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
