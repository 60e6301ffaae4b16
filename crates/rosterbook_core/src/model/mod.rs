//! Domain model for contacts and duty assignments.
//!
//! # Responsibility
//! - Define the validated value objects and the Person/Assignment records.
//! - Enforce identity uniqueness inside the two collections and referential
//!   integrity across them in the AddressBook aggregate.
//!
//! # Invariants
//! - Person identity is the exact name string; case and whitespace are
//!   significant.
//! - Every assignment references a listed person and one of that person's
//!   availability slots; cascade operations keep this true across edits and
//!   removals.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod address_book;
pub mod assignment;
pub mod fields;
pub mod person;
pub mod sample;

pub type ModelResult<T> = Result<T, ModelError>;

/// Precondition violations raised by the list and aggregate mutators.
///
/// Every violation rejects the whole operation; no mutator leaves partial
/// state behind on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// The operation would put two same-person entries in the person list.
    DuplicatePerson,
    /// The targeted person is not in the list.
    PersonNotFound,
    /// The operation would put two identity-equal assignments in the list.
    DuplicateAssignment,
    /// The targeted assignment is not in the list.
    AssignmentNotFound,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "operation would result in duplicate persons"),
            Self::PersonNotFound => write!(f, "target person not found in the person list"),
            Self::DuplicateAssignment => {
                write!(f, "operation would result in duplicate assignments")
            }
            Self::AssignmentNotFound => {
                write!(f, "target assignment not found in the assignment list")
            }
        }
    }
}

impl Error for ModelError {}
