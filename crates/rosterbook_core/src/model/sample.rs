//! Deterministic seed data for a first run.
//!
//! # Responsibility
//! - Provide a small valid address book for shells to fall back on when no
//!   saved data exists yet.
//!
//! # Invariants
//! - Seed contents are fixed literals; every call returns an equal book.
//! - Every seeded assignment references a seeded person on one of that
//!   person's availability slots.

use super::address_book::AddressBook;
use super::assignment::Assignment;
use super::fields::{AssignmentDetails, Availability, Email, Name, Phone, Tag};
use super::person::Person;
use std::collections::BTreeSet;

/// Returns the seed persons in a fixed order.
pub fn sample_persons() -> Vec<Person> {
    vec![
        seed_person(
            "Aisha Rahman",
            "87438807",
            "aisha@example.com",
            &["eldercare"],
            &["2026-09-05", "2026-09-12"],
        ),
        seed_person(
            "Ben Ong",
            "99272758",
            "benong@example.com",
            &["tutoring"],
            &["2026-09-06"],
        ),
        seed_person(
            "Carmen Silva",
            "93210283",
            "carmen@example.com",
            &["eldercare", "weekend"],
            &["2026-09-12", "2026-09-13"],
        ),
        seed_person(
            "Devi Kumar",
            "91031282",
            "devi@example.com",
            &["logistics"],
            &["2026-09-20"],
        ),
        seed_person(
            "Elliot Wong",
            "92492021",
            "elliot@example.com",
            &[],
            &["2026-10-03"],
        ),
        seed_person(
            "Farah Aziz",
            "92624417",
            "farah@example.com",
            &["tutoring", "weekend"],
            &["2026-09-13", "2026-10-04"],
        ),
    ]
}

/// Returns a populated book: the seed persons plus two consistent
/// assignments.
pub fn sample_address_book() -> AddressBook {
    let persons = sample_persons();
    let assignments = vec![
        seed_assignment(
            &persons[0],
            "Grocery run for the Anderson block seniors",
            "2026-09-05",
        ),
        seed_assignment(
            &persons[5],
            "Reading circle at the community library",
            "2026-09-13",
        ),
    ];

    let mut book = AddressBook::new();
    book.set_persons(persons).expect("seed persons are unique");
    book.set_assignments(assignments)
        .expect("seed assignments are unique");
    book
}

fn seed_person(name: &str, phone: &str, email: &str, tags: &[&str], slots: &[&str]) -> Person {
    let tags: BTreeSet<Tag> = tags
        .iter()
        .map(|tag| Tag::parse(tag).expect("seed tag is valid"))
        .collect();
    let availabilities: BTreeSet<Availability> = slots
        .iter()
        .map(|slot| Availability::parse(slot).expect("seed availability is valid"))
        .collect();
    Person::new(
        Name::parse(name).expect("seed name is valid"),
        Phone::parse(phone).expect("seed phone is valid"),
        Email::parse(email).expect("seed email is valid"),
        tags,
        availabilities,
    )
}

fn seed_assignment(person: &Person, details: &str, slot: &str) -> Assignment {
    Assignment::new(
        person.clone(),
        AssignmentDetails::parse(details).expect("seed details are valid"),
        Availability::parse(slot).expect("seed availability is valid"),
    )
}

#[cfg(test)]
mod tests {
    use super::sample_address_book;

    #[test]
    fn seed_book_is_referentially_consistent() {
        let book = sample_address_book();

        assert!(!book.persons().is_empty());
        for assignment in book.assignments() {
            assert!(book.has_exact_person(&assignment.person));
            assert!(assignment.person.has_availability(&assignment.availability));
        }
    }

    #[test]
    fn seed_book_is_deterministic() {
        assert_eq!(sample_address_book(), sample_address_book());
        assert_eq!(
            sample_address_book().assignments(),
            sample_address_book().assignments()
        );
    }
}
