//! Assignment record and the identity-unique assignment collection.
//!
//! # Responsibility
//! - Define the record linking a person, one of their availability slots,
//!   and free-text details.
//! - Keep the assignment collection free of identity duplicates while
//!   preserving insertion order.
//!
//! # Invariants
//! - Assignment identity is the (person, availability) pair using full
//!   person equality; details never participate in identity.
//! - Assignments change only by replacement; there are no in-place setters.

use super::fields::{AssignmentDetails, Availability};
use super::person::Person;
use super::{ModelError, ModelResult};

/// Links one person to one of their availability slots.
///
/// The person is held by value; a cascade that rewrites an assignment after
/// a person edit builds a fresh `Assignment` carrying the edited person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub person: Person,
    pub details: AssignmentDetails,
    pub availability: Availability,
}

impl Assignment {
    /// Creates an assignment of `person` on `availability`.
    ///
    /// The slot is expected to be one of `person`'s availabilities; callers
    /// validate that before constructing, and the aggregate's cascades keep
    /// it true afterwards.
    pub fn new(person: Person, details: AssignmentDetails, availability: Availability) -> Self {
        Self {
            person,
            details,
            availability,
        }
    }

    /// Identity equivalence: same person (every field) on the same slot.
    pub fn is_same_assignment(&self, other: &Assignment) -> bool {
        self.person == other.person && self.availability == other.availability
    }
}

/// Ordered assignment collection rejecting identity duplicates.
///
/// Same contract shape as the person list: lookup targets by full value
/// equality, duplicate guards by identity, failed operations mutate nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentList {
    items: Vec<Assignment>,
}

impl AssignmentList {
    /// True iff some element is identity-equal with `assignment`.
    pub fn contains(&self, assignment: &Assignment) -> bool {
        self.items
            .iter()
            .any(|existing| existing.is_same_assignment(assignment))
    }

    /// Appends `assignment`, rejecting identity duplicates.
    pub fn add(&mut self, assignment: Assignment) -> ModelResult<()> {
        if self.contains(&assignment) {
            return Err(ModelError::DuplicateAssignment);
        }
        self.items.push(assignment);
        Ok(())
    }

    /// Replaces `target` (located by full value equality) with `edited`,
    /// keeping its position.
    pub fn set_assignment(&mut self, target: &Assignment, edited: Assignment) -> ModelResult<()> {
        let index = match self.items.iter().position(|existing| existing == target) {
            Some(index) => index,
            None => return Err(ModelError::AssignmentNotFound),
        };
        if !target.is_same_assignment(&edited) && self.contains(&edited) {
            return Err(ModelError::DuplicateAssignment);
        }
        self.items[index] = edited;
        Ok(())
    }

    /// Removes `assignment` (located by full value equality).
    pub fn remove(&mut self, assignment: &Assignment) -> ModelResult<()> {
        match self.items.iter().position(|existing| existing == assignment) {
            Some(index) => {
                self.items.remove(index);
                Ok(())
            }
            None => Err(ModelError::AssignmentNotFound),
        }
    }

    /// Atomically replaces the whole contents; validated before mutation.
    pub fn set_assignments(&mut self, assignments: Vec<Assignment>) -> ModelResult<()> {
        if !assignments_are_unique(&assignments) {
            return Err(ModelError::DuplicateAssignment);
        }
        self.items = assignments;
        Ok(())
    }

    /// Read-only view of the current contents.
    pub fn as_slice(&self) -> &[Assignment] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssignmentList {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn assignments_are_unique(assignments: &[Assignment]) -> bool {
    for (index, left) in assignments.iter().enumerate() {
        for right in &assignments[index + 1..] {
            if left.is_same_assignment(right) {
                return false;
            }
        }
    }
    true
}
