//! Person record and the identity-unique person collection.
//!
//! # Responsibility
//! - Define the Person record and its "same person" identity rule.
//! - Keep the person collection free of identity duplicates while preserving
//!   insertion order.
//!
//! # Invariants
//! - No two listed persons are same-person (exact name equality).
//! - Mutation goes through the checked operations only; readers receive
//!   immutable slices and re-poll after mutating.
//! - A failed operation leaves the list contents untouched.

use super::fields::{Availability, Email, Name, Phone, Tag};
use super::{ModelError, ModelResult};
use std::collections::BTreeSet;

/// A contact: identifying name, reachability fields, tags, and the
/// availability slots they can be assigned on.
///
/// Identity is the exact name string: two persons with equal names are the
/// "same person" no matter what the other fields hold. Full `==` compares
/// every field; the tag and availability sets compare as sets, insertion
/// order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub tags: BTreeSet<Tag>,
    pub availabilities: BTreeSet<Availability>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        tags: BTreeSet<Tag>,
        availabilities: BTreeSet<Availability>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            tags,
            availabilities,
        }
    }

    /// Identity equivalence: exact name equality, nothing else.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// Whether this person can host an assignment on `slot`.
    pub fn has_availability(&self, slot: &Availability) -> bool {
        self.availabilities.contains(slot)
    }
}

/// Ordered person collection rejecting same-person duplicates.
///
/// Lookup targets (`set_person`, `remove`) are located by full value
/// equality; duplicate guards use the weaker same-person identity. Linear
/// scans throughout: the expected data volume is a personal contact list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UniquePersonList {
    items: Vec<Person>,
}

impl UniquePersonList {
    /// True iff some element is same-person with `person`.
    pub fn contains(&self, person: &Person) -> bool {
        self.items.iter().any(|existing| existing.is_same_person(person))
    }

    /// True iff some element equals `person` in every field. Stricter than
    /// [`contains`](Self::contains); the load path uses this to validate
    /// assignment references.
    pub fn contains_exact(&self, person: &Person) -> bool {
        self.items.iter().any(|existing| existing == person)
    }

    /// True iff some element holds exactly this phone number.
    pub fn contains_phone(&self, phone: &Phone) -> bool {
        self.items.iter().any(|existing| existing.phone == *phone)
    }

    /// True iff some element holds exactly this email.
    pub fn contains_email(&self, email: &Email) -> bool {
        self.items.iter().any(|existing| existing.email == *email)
    }

    /// Appends `person`, rejecting same-person duplicates.
    pub fn add(&mut self, person: Person) -> ModelResult<()> {
        if self.contains(&person) {
            return Err(ModelError::DuplicatePerson);
        }
        self.items.push(person);
        Ok(())
    }

    /// Replaces `target` (located by full value equality) with `edited`,
    /// keeping its position.
    ///
    /// Rejects `DuplicatePerson` when `edited` is same-person with a
    /// *different* element than `target`.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        let index = match self.items.iter().position(|existing| existing == target) {
            Some(index) => index,
            None => return Err(ModelError::PersonNotFound),
        };
        if !target.is_same_person(&edited) && self.contains(&edited) {
            return Err(ModelError::DuplicatePerson);
        }
        self.items[index] = edited;
        Ok(())
    }

    /// Removes `person` (located by full value equality).
    pub fn remove(&mut self, person: &Person) -> ModelResult<()> {
        match self.items.iter().position(|existing| existing == person) {
            Some(index) => {
                self.items.remove(index);
                Ok(())
            }
            None => Err(ModelError::PersonNotFound),
        }
    }

    /// Atomically replaces the whole contents.
    ///
    /// The replacement is validated as a whole before anything mutates, so a
    /// rejected call leaves the prior contents intact.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> ModelResult<()> {
        if !persons_are_unique(&persons) {
            return Err(ModelError::DuplicatePerson);
        }
        self.items = persons;
        Ok(())
    }

    /// Read-only view of the current contents.
    pub fn as_slice(&self) -> &[Person] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a UniquePersonList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn persons_are_unique(persons: &[Person]) -> bool {
    for (index, left) in persons.iter().enumerate() {
        for right in &persons[index + 1..] {
            if left.is_same_person(right) {
                return false;
            }
        }
    }
    true
}
