//! JSON document types for the persisted address book.
//!
//! # Responsibility
//! - Mirror the persisted document shape field by field.
//! - Rebuild a valid [`AddressBook`] from raw document data, rejecting
//!   constraint violations in document order.
//!
//! # Invariants
//! - `from_book` never validates: in-memory state is valid by construction.
//! - `to_book` is fail-fast: the first violation aborts the whole load.
//! - Scalar fields are optional in the raw document; absence surfaces as a
//!   `MissingField` error at conversion time, not as a parse failure.

use crate::model::address_book::AddressBook;
use crate::model::assignment::Assignment;
use crate::model::fields::{AssignmentDetails, Availability, Email, FieldError, Name, Phone, Tag};
use crate::model::person::Person;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DataResult<T> = Result<T, DataError>;

/// Constraint violation found while converting a document to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A person array entry is null.
    NullPerson,
    /// An assignment array entry is null.
    NullAssignment,
    /// Two person entries are the same person.
    DuplicatePerson,
    /// Two assignment entries are identity-equal.
    DuplicateAssignment,
    /// An assignment references a person absent from the persons array.
    NoSuchPerson,
    /// A required scalar field is absent from an entry.
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    /// A present field failed value validation.
    Field(FieldError),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullPerson => write!(f, "Persons list contains null."),
            Self::NullAssignment => write!(f, "Assignment list contains null."),
            Self::DuplicatePerson => write!(f, "Persons list contains duplicate person(s)."),
            Self::DuplicateAssignment => {
                write!(f, "Assignment list contains duplicate assignment(s).")
            }
            Self::NoSuchPerson => write!(f, "Persons list does not contain such person."),
            Self::MissingField { entity, field } => {
                write!(f, "{entity}'s {field} field is missing!")
            }
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for DataError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

/// Raw person entry. Every scalar is optional so malformed documents reach
/// validated conversion instead of failing shape parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPerson {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    tags: Option<Vec<String>>,
    availabilities: Option<Vec<String>>,
}

impl JsonPerson {
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: Some(person.name.as_str().to_string()),
            phone: Some(person.phone.as_str().to_string()),
            email: Some(person.email.as_str().to_string()),
            tags: Some(person.tags.iter().map(|tag| tag.as_str().to_string()).collect()),
            availabilities: Some(
                person
                    .availabilities
                    .iter()
                    .map(|slot| slot.as_str().to_string())
                    .collect(),
            ),
        }
    }

    /// Converts to a model person, rejecting missing or malformed fields.
    ///
    /// An absent tag/availability array reads as empty, matching the shape
    /// older data files were written with.
    pub fn to_person(&self) -> DataResult<Person> {
        let name = match &self.name {
            Some(raw) => Name::parse(raw)?,
            None => {
                return Err(DataError::MissingField {
                    entity: "Person",
                    field: "Name",
                })
            }
        };
        let phone = match &self.phone {
            Some(raw) => Phone::parse(raw)?,
            None => {
                return Err(DataError::MissingField {
                    entity: "Person",
                    field: "Phone",
                })
            }
        };
        let email = match &self.email {
            Some(raw) => Email::parse(raw)?,
            None => {
                return Err(DataError::MissingField {
                    entity: "Person",
                    field: "Email",
                })
            }
        };

        let mut tags = BTreeSet::new();
        for raw in self.tags.iter().flatten() {
            tags.insert(Tag::parse(raw)?);
        }
        let mut availabilities = BTreeSet::new();
        for raw in self.availabilities.iter().flatten() {
            availabilities.insert(Availability::parse(raw)?);
        }

        Ok(Person::new(name, phone, email, tags, availabilities))
    }
}

/// Raw assignment entry with the referenced person embedded in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonAssignment {
    person: Option<JsonPerson>,
    details: Option<String>,
    availability: Option<String>,
}

impl JsonAssignment {
    pub fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            person: Some(JsonPerson::from_person(&assignment.person)),
            details: Some(assignment.details.as_str().to_string()),
            availability: Some(assignment.availability.as_str().to_string()),
        }
    }

    /// Converts to a model assignment. The embedded person is rebuilt here;
    /// resolving it against the person list is the book loader's step.
    pub fn to_assignment(&self) -> DataResult<Assignment> {
        let person = match &self.person {
            Some(raw) => raw.to_person()?,
            None => {
                return Err(DataError::MissingField {
                    entity: "Assignment",
                    field: "Person",
                })
            }
        };
        let details = match &self.details {
            Some(raw) => AssignmentDetails::parse(raw)?,
            None => {
                return Err(DataError::MissingField {
                    entity: "Assignment",
                    field: "AssignmentDetails",
                })
            }
        };
        let availability = match &self.availability {
            Some(raw) => Availability::parse(raw)?,
            None => {
                return Err(DataError::MissingField {
                    entity: "Assignment",
                    field: "Availability",
                })
            }
        };

        Ok(Assignment::new(person, details, availability))
    }
}

/// The whole persisted document. Both array properties are required; array
/// entries stay nullable so null entries reach [`to_book`](Self::to_book) as
/// data errors rather than parse failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonAddressBook {
    persons: Vec<Option<JsonPerson>>,
    assignments: Vec<Option<JsonAssignment>>,
}

impl JsonAddressBook {
    /// Field-by-field structural mapping of a valid in-memory book.
    pub fn from_book(book: &AddressBook) -> Self {
        Self {
            persons: book
                .persons()
                .iter()
                .map(|person| Some(JsonPerson::from_person(person)))
                .collect(),
            assignments: book
                .assignments()
                .iter()
                .map(|assignment| Some(JsonAssignment::from_assignment(assignment)))
                .collect(),
        }
    }

    /// Rebuilds the model book, validating entries in document order.
    ///
    /// Persons load first: null entries, malformed fields, and same-person
    /// duplicates each abort the load. Assignments follow: their embedded
    /// person must match an already-loaded person in every field, and no two
    /// assignments may be identity-equal. Slot membership inside the
    /// person's availability set is not re-checked here; the in-memory
    /// cascades maintain that invariant for data this process writes.
    pub fn to_book(&self) -> DataResult<AddressBook> {
        let mut book = AddressBook::new();

        for entry in &self.persons {
            let person = match entry {
                Some(raw) => raw.to_person()?,
                None => return Err(DataError::NullPerson),
            };
            book.add_person(person)
                .map_err(|_| DataError::DuplicatePerson)?;
        }

        for entry in &self.assignments {
            let assignment = match entry {
                Some(raw) => raw.to_assignment()?,
                None => return Err(DataError::NullAssignment),
            };
            if !book.has_exact_person(&assignment.person) {
                return Err(DataError::NoSuchPerson);
            }
            book.add_assignment(assignment)
                .map_err(|_| DataError::DuplicateAssignment)?;
        }

        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataError, JsonPerson};
    use crate::model::fields::{Email, FieldError, Name, Phone};
    use crate::model::person::Person;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn raw_person(value: serde_json::Value) -> JsonPerson {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn person_conversion_round_trips_every_field() {
        let person = Person::new(
            Name::parse("Carmen Silva").unwrap(),
            Phone::parse("93210283").unwrap(),
            Email::parse("carmen@example.com").unwrap(),
            BTreeSet::new(),
            BTreeSet::new(),
        );

        let rebuilt = JsonPerson::from_person(&person).to_person().unwrap();
        assert_eq!(rebuilt, person);
    }

    #[test]
    fn missing_scalar_field_is_reported_with_entity_and_field() {
        let entry = raw_person(json!({
            "name": "Carmen Silva",
            "email": "carmen@example.com",
            "tags": [],
            "availabilities": []
        }));

        let err = entry.to_person().unwrap_err();
        assert_eq!(
            err,
            DataError::MissingField {
                entity: "Person",
                field: "Phone"
            }
        );
        assert_eq!(err.to_string(), "Person's Phone field is missing!");
    }

    #[test]
    fn malformed_field_surfaces_the_field_error() {
        let entry = raw_person(json!({
            "name": "Carmen Silva",
            "phone": "93p",
            "email": "carmen@example.com"
        }));

        let err = entry.to_person().unwrap_err();
        assert_eq!(err, DataError::Field(FieldError::InvalidPhone("93p".into())));
    }

    #[test]
    fn absent_tag_and_availability_arrays_read_as_empty() {
        let entry = raw_person(json!({
            "name": "Carmen Silva",
            "phone": "93210283",
            "email": "carmen@example.com",
            "tags": null
        }));

        let person = entry.to_person().unwrap();
        assert!(person.tags.is_empty());
        assert!(person.availabilities.is_empty());
    }

    #[test]
    fn data_errors_display_the_fixed_messages() {
        assert_eq!(
            DataError::NullPerson.to_string(),
            "Persons list contains null."
        );
        assert_eq!(
            DataError::NullAssignment.to_string(),
            "Assignment list contains null."
        );
        assert_eq!(
            DataError::DuplicatePerson.to_string(),
            "Persons list contains duplicate person(s)."
        );
        assert_eq!(
            DataError::DuplicateAssignment.to_string(),
            "Assignment list contains duplicate assignment(s)."
        );
        assert_eq!(
            DataError::NoSuchPerson.to_string(),
            "Persons list does not contain such person."
        );
    }
}
