use rosterbook_core::{
    Availability, Email, ModelError, Name, Person, Phone, Tag, UniquePersonList,
};
use std::collections::BTreeSet;

#[test]
fn same_person_ignores_every_field_but_name() {
    let base = person("Bernice Tan", "99272758", "bernice@example.com");
    let mut reshaped = person("Bernice Tan", "87438807", "other@example.com");
    reshaped.tags = tag_set(&["eldercare"]);
    reshaped.availabilities = slot_set(&["2026-09-05"]);

    assert!(base.is_same_person(&reshaped));
    assert!(reshaped.is_same_person(&base));
}

#[test]
fn same_person_is_exact_on_case_and_trailing_whitespace() {
    let base = person("Bernice Tan", "99272758", "bernice@example.com");
    let lowercased = person("bernice tan", "99272758", "bernice@example.com");
    let padded = person("Bernice Tan ", "99272758", "bernice@example.com");

    assert!(!base.is_same_person(&lowercased));
    assert!(!base.is_same_person(&padded));
}

#[test]
fn full_equality_compares_every_field() {
    let base = person("Bernice Tan", "99272758", "bernice@example.com");

    assert_eq!(base, base.clone());
    assert_ne!(base, person("Devi Kumar", "99272758", "bernice@example.com"));
    assert_ne!(base, person("Bernice Tan", "91031282", "bernice@example.com"));
    assert_ne!(base, person("Bernice Tan", "99272758", "devi@example.com"));

    let mut tagged = base.clone();
    tagged.tags = tag_set(&["tutoring"]);
    assert_ne!(base, tagged);

    let mut available = base.clone();
    available.availabilities = slot_set(&["2026-09-05"]);
    assert_ne!(base, available);
}

#[test]
fn tag_and_availability_sets_compare_without_order() {
    let mut left = person("Bernice Tan", "99272758", "bernice@example.com");
    left.tags = tag_set(&["eldercare", "weekend"]);
    left.availabilities = slot_set(&["2026-09-05", "2026-09-12"]);

    let mut right = person("Bernice Tan", "99272758", "bernice@example.com");
    right.tags = tag_set(&["weekend", "eldercare"]);
    right.availabilities = slot_set(&["2026-09-12", "2026-09-05"]);

    assert_eq!(left, right);
}

#[test]
fn add_rejects_same_person_duplicate_and_keeps_contents() {
    let mut list = UniquePersonList::default();
    list.add(person("Bernice Tan", "99272758", "bernice@example.com"))
        .unwrap();

    let duplicate = person("Bernice Tan", "87438807", "other@example.com");
    assert_eq!(list.add(duplicate), Err(ModelError::DuplicatePerson));

    assert_eq!(list.len(), 1);
    assert_eq!(list.as_slice()[0].phone.as_str(), "99272758");
}

#[test]
fn add_preserves_insertion_order() {
    let mut list = UniquePersonList::default();
    list.add(person("Bernice Tan", "99272758", "bernice@example.com"))
        .unwrap();
    list.add(person("Aisha Rahman", "87438807", "aisha@example.com"))
        .unwrap();
    list.add(person("Devi Kumar", "91031282", "devi@example.com"))
        .unwrap();

    let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Bernice Tan", "Aisha Rahman", "Devi Kumar"]);
}

#[test]
fn set_person_requires_the_exact_target() {
    let mut list = UniquePersonList::default();
    list.add(person("Bernice Tan", "99272758", "bernice@example.com"))
        .unwrap();

    // Same name is not enough; the target must match in every field.
    let near_miss = person("Bernice Tan", "87438807", "bernice@example.com");
    let edited = person("Bernice Tan", "91031282", "bernice@example.com");
    assert_eq!(
        list.set_person(&near_miss, edited),
        Err(ModelError::PersonNotFound)
    );
}

#[test]
fn set_person_rejects_identity_collision_with_another_entry() {
    let mut list = UniquePersonList::default();
    let bernice = person("Bernice Tan", "99272758", "bernice@example.com");
    let devi = person("Devi Kumar", "91031282", "devi@example.com");
    list.add(bernice.clone()).unwrap();
    list.add(devi.clone()).unwrap();

    let renamed = person("Bernice Tan", "91031282", "devi@example.com");
    assert_eq!(
        list.set_person(&devi, renamed),
        Err(ModelError::DuplicatePerson)
    );
    assert_eq!(list.as_slice(), [bernice, devi]);
}

#[test]
fn set_person_replaces_in_place_preserving_position() {
    let mut list = UniquePersonList::default();
    let bernice = person("Bernice Tan", "99272758", "bernice@example.com");
    let devi = person("Devi Kumar", "91031282", "devi@example.com");
    list.add(bernice.clone()).unwrap();
    list.add(devi.clone()).unwrap();

    let edited = person("Bernice Tan", "87438807", "bernice@example.com");
    list.set_person(&bernice, edited.clone()).unwrap();

    assert_eq!(list.as_slice(), [edited, devi]);
}

#[test]
fn set_person_allows_reshaping_the_same_identity() {
    let mut list = UniquePersonList::default();
    let bernice = person("Bernice Tan", "99272758", "bernice@example.com");
    list.add(bernice.clone()).unwrap();

    let mut edited = bernice.clone();
    edited.availabilities = slot_set(&["2026-09-05"]);
    assert!(list.set_person(&bernice, edited.clone()).is_ok());
    assert_eq!(list.as_slice(), [edited]);
}

#[test]
fn remove_requires_the_exact_target() {
    let mut list = UniquePersonList::default();
    let bernice = person("Bernice Tan", "99272758", "bernice@example.com");
    list.add(bernice.clone()).unwrap();

    let near_miss = person("Bernice Tan", "87438807", "bernice@example.com");
    assert_eq!(list.remove(&near_miss), Err(ModelError::PersonNotFound));
    assert_eq!(list.len(), 1);

    list.remove(&bernice).unwrap();
    assert!(list.is_empty());
}

#[test]
fn set_persons_rejects_duplicates_atomically() {
    let mut list = UniquePersonList::default();
    let bernice = person("Bernice Tan", "99272758", "bernice@example.com");
    list.add(bernice.clone()).unwrap();

    let replacement = vec![
        person("Devi Kumar", "91031282", "devi@example.com"),
        person("Devi Kumar", "87438807", "other@example.com"),
    ];
    assert_eq!(
        list.set_persons(replacement),
        Err(ModelError::DuplicatePerson)
    );

    // The failed call must leave the prior contents intact.
    assert_eq!(list.as_slice(), [bernice]);
}

#[test]
fn set_persons_replaces_the_whole_contents() {
    let mut list = UniquePersonList::default();
    list.add(person("Bernice Tan", "99272758", "bernice@example.com"))
        .unwrap();

    let replacement = vec![
        person("Devi Kumar", "91031282", "devi@example.com"),
        person("Aisha Rahman", "87438807", "aisha@example.com"),
    ];
    list.set_persons(replacement.clone()).unwrap();

    assert_eq!(list.as_slice(), replacement);
}

#[test]
fn membership_queries_distinguish_identity_and_exact_match() {
    let mut list = UniquePersonList::default();
    let bernice = person("Bernice Tan", "99272758", "bernice@example.com");
    list.add(bernice.clone()).unwrap();

    let same_name = person("Bernice Tan", "87438807", "other@example.com");
    assert!(list.contains(&same_name));
    assert!(!list.contains_exact(&same_name));
    assert!(list.contains_exact(&bernice));

    assert!(list.contains_phone(&Phone::parse("99272758").unwrap()));
    assert!(!list.contains_phone(&Phone::parse("87438807").unwrap()));
    assert!(list.contains_email(&Email::parse("bernice@example.com").unwrap()));
    assert!(!list.contains_email(&Email::parse("other@example.com").unwrap()));
}

fn person(name: &str, phone: &str, email: &str) -> Person {
    Person::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        BTreeSet::new(),
        BTreeSet::new(),
    )
}

fn tag_set(tags: &[&str]) -> BTreeSet<Tag> {
    tags.iter().map(|tag| Tag::parse(tag).unwrap()).collect()
}

fn slot_set(slots: &[&str]) -> BTreeSet<Availability> {
    slots
        .iter()
        .map(|slot| Availability::parse(slot).unwrap())
        .collect()
}
