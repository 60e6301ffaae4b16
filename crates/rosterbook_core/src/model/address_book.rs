//! AddressBook aggregate: owns the person and assignment collections and
//! keeps them referentially consistent.
//!
//! # Responsibility
//! - Route every mutation through the checked list operations.
//! - Maintain the assignment-to-person invariant via cascade operations.
//!
//! # Invariants
//! - Every assignment's person matches a listed person by full value
//!   equality, and its slot is in that person's availability set.
//! - Granular mutators (`set_person`, `remove_person`) never cascade by
//!   themselves; `edit_person`/`delete_person` bundle the cascade for
//!   callers that must not get the ordering wrong.
//! - Equality and hashing cover the person list only.

use super::assignment::{Assignment, AssignmentList};
use super::fields::{Email, Phone};
use super::person::{Person, UniquePersonList};
use super::ModelResult;
use std::hash::{Hash, Hasher};

/// Aggregate root of the whole data set.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: UniquePersonList,
    assignments: AssignmentList,
}

impl AddressBook {
    /// Creates an empty book; both collections are constructed here, no
    /// process-wide state is involved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all data with a copy of `other`.
    ///
    /// Infallible: the source aggregate already satisfies both uniqueness
    /// invariants, so no re-validation can fail.
    pub fn reset_data(&mut self, other: &AddressBook) {
        self.persons = other.persons.clone();
        self.assignments = other.assignments.clone();
    }

    /// Bulk-replaces the person list; duplicate checking is delegated.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> ModelResult<()> {
        self.persons.set_persons(persons)
    }

    /// Bulk-replaces the assignment list; duplicate checking is delegated.
    pub fn set_assignments(&mut self, assignments: Vec<Assignment>) -> ModelResult<()> {
        self.assignments.set_assignments(assignments)
    }

    /// True iff a same-person entry exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// True iff a full-value-equal entry exists (stricter than
    /// [`has_person`](Self::has_person)).
    pub fn has_exact_person(&self, person: &Person) -> bool {
        self.persons.contains_exact(person)
    }

    /// True iff some listed person holds exactly this phone number.
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.persons.contains_phone(phone)
    }

    /// True iff some listed person holds exactly this email.
    pub fn has_email(&self, email: &Email) -> bool {
        self.persons.contains_email(email)
    }

    /// True iff an identity-equal assignment exists.
    pub fn has_assignment(&self, assignment: &Assignment) -> bool {
        self.assignments.contains(assignment)
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.persons.add(person)
    }

    /// Adds an assignment. Consistency of the person/slot pair is the
    /// caller's already-validated precondition; only identity duplication is
    /// re-checked here.
    pub fn add_assignment(&mut self, assignment: Assignment) -> ModelResult<()> {
        self.assignments.add(assignment)
    }

    /// Replaces `target` with `edited` in the person list only.
    ///
    /// Assignments referencing `target` are left untouched; pair this with
    /// [`cascade_update_assignments`](Self::cascade_update_assignments) or
    /// call [`edit_person`](Self::edit_person) instead.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.persons.set_person(target, edited)
    }

    /// Removes `key` from the person list only.
    ///
    /// Assignments referencing `key` are left untouched; pair this with
    /// [`cascade_delete_assignments`](Self::cascade_delete_assignments) or
    /// call [`delete_person`](Self::delete_person) instead.
    pub fn remove_person(&mut self, key: &Person) -> ModelResult<()> {
        self.persons.remove(key)
    }

    /// Removes one assignment.
    pub fn remove_assignment(&mut self, key: &Assignment) -> ModelResult<()> {
        self.assignments.remove(key)
    }

    /// Removes every assignment held by `to_delete` (same-person match).
    ///
    /// Errors cannot occur while the referential invariant holds; the
    /// `Result` only surfaces misuse against an inconsistent book.
    pub fn cascade_delete_assignments(&mut self, to_delete: &Person) -> ModelResult<()> {
        let doomed: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|assignment| assignment.person.is_same_person(to_delete))
            .cloned()
            .collect();
        for assignment in doomed {
            self.assignments.remove(&assignment)?;
        }
        Ok(())
    }

    /// Rewrites every assignment held by `before` to reference `after`,
    /// dropping those whose slot is no longer in `after`'s availability set.
    ///
    /// An edit can shrink a person's availability set and orphan assignments
    /// tied to a removed slot; those are deleted outright rather than left
    /// dangling. Surviving assignments become new values carrying `after`
    /// with details and slot unchanged.
    pub fn cascade_update_assignments(
        &mut self,
        before: &Person,
        after: &Person,
    ) -> ModelResult<()> {
        let affected: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|assignment| assignment.person.is_same_person(before))
            .cloned()
            .collect();
        for assignment in affected {
            if after.has_availability(&assignment.availability) {
                let rewritten = Assignment::new(
                    after.clone(),
                    assignment.details.clone(),
                    assignment.availability.clone(),
                );
                self.assignments.set_assignment(&assignment, rewritten)?;
            } else {
                self.assignments.remove(&assignment)?;
            }
        }
        Ok(())
    }

    /// Replaces `target` with `edited` and cascades assignments in one call.
    ///
    /// The person replacement is validated first, so a rejected call mutates
    /// nothing.
    pub fn edit_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.persons.set_person(target, edited.clone())?;
        self.cascade_update_assignments(target, &edited)
    }

    /// Removes `key` and its assignments in one call.
    ///
    /// The removal is validated first, so a rejected call mutates nothing.
    pub fn delete_person(&mut self, key: &Person) -> ModelResult<()> {
        self.persons.remove(key)?;
        self.cascade_delete_assignments(key)
    }

    /// Read-only view of the person list, in insertion order.
    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    /// Read-only view of the assignment list, in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        self.assignments.as_slice()
    }
}

/// Equality covers the person list only. Assignment contents never affect
/// aggregate equality or hashing; dirty-checking around full-state snapshots
/// relies on this asymmetry.
impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons
    }
}

impl Eq for AddressBook {}

impl Hash for AddressBook {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.persons.hash(state);
    }
}
