//! Validated field value objects.
//!
//! # Responsibility
//! - Parse and hold the constrained string fields of persons and
//!   assignments.
//! - Reject malformed input at construction time, independent of any list
//!   operation.
//!
//! # Invariants
//! - A constructed value always satisfies its field constraint.
//! - Values never normalize input: stored text is byte-for-byte what was
//!   accepted, and equality is exact.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[[:alnum:]]+([+_.-][[:alnum:]]+)*@([[:alnum:]]+(-[[:alnum:]]+)*\.)*([[:alnum:]]{2,}|[[:alnum:]]+(-[[:alnum:]]+)+)$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));
static AVAILABILITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid availability regex")
});
static DETAILS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s].*$").expect("valid details regex"));

pub type FieldResult<T> = Result<T, FieldError>;

/// Rejection of one malformed field value, raised by the `parse`
/// constructors below and surfaced unchanged by the storage loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidTag(String),
    InvalidAvailability(String),
    InvalidDetails(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names should only contain alphanumeric characters and spaces, and should not be blank"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers should only contain digits, and should be at least 3 digits long"
            ),
            Self::InvalidEmail(value) => write!(
                f,
                "invalid email `{value}`: emails should be of the format local-part@domain"
            ),
            Self::InvalidTag(value) => {
                write!(f, "invalid tag `{value}`: tag names should be alphanumeric")
            }
            Self::InvalidAvailability(value) => write!(
                f,
                "invalid availability `{value}`: availabilities should be dates in YYYY-MM-DD format"
            ),
            Self::InvalidDetails(value) => write!(
                f,
                "invalid assignment details `{value}`: details should not be blank"
            ),
        }
    }
}

impl Error for FieldError {}

/// Person identity key: exact, case-sensitive, untrimmed.
///
/// The pattern permits trailing spaces; such names are distinct identities
/// from their trimmed spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn parse(input: &str) -> FieldResult<Self> {
        if NAME_RE.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(FieldError::InvalidName(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact phone number: ASCII digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub fn parse(input: &str) -> FieldResult<Self> {
        if PHONE_RE.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(FieldError::InvalidPhone(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact email: `local-part@domain`.
///
/// The local part is alphanumeric runs joined by single `+ _ . -`
/// separators; domain labels are alphanumeric with single interior hyphens,
/// and the final label is at least two characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub fn parse(input: &str) -> FieldResult<Self> {
        if EMAIL_RE.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(FieldError::InvalidEmail(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form label attached to a person; single alphanumeric word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(input: &str) -> FieldResult<Self> {
        if TAG_RE.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(FieldError::InvalidTag(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One day slot a person can be assigned on, in `YYYY-MM-DD` form.
///
/// ASCII digits only, with numeric range checks (month 01-12, day 01-31);
/// month lengths and leap years are not modeled. Slots compare as exact
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Availability(String);

impl Availability {
    pub fn parse(input: &str) -> FieldResult<Self> {
        let caps = match AVAILABILITY_RE.captures(input) {
            Some(caps) => caps,
            None => return Err(FieldError::InvalidAvailability(input.to_string())),
        };
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(FieldError::InvalidAvailability(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Availability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text body of an assignment; anything goes except blank or
/// leading-whitespace input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssignmentDetails(String);

impl AssignmentDetails {
    pub fn parse(input: &str) -> FieldResult<Self> {
        if DETAILS_RE.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(FieldError::InvalidDetails(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssignmentDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
