//! Visitor model
//!
//! Represents one member of an excursion group. Identity fields come off
//! the visitor's ID document; age is always derived from the date of
//! birth, never entered directly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as recorded from the visitor's identity document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    Male,
    Female,
    Other,
    /// Not yet recorded
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl Gender {
    /// Parse a gender label as it appears on scanned documents.
    ///
    /// Returns `None` for anything other than the three known labels, so
    /// callers can drop unrecognized values instead of guessing.
    pub fn parse_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
            Self::Unspecified => write!(f, "-"),
        }
    }
}

/// One member of an excursion group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    /// Full name as per identity document
    pub name: String,

    /// Residential address (required for the head visitor, optional otherwise)
    #[serde(default)]
    pub address: String,

    /// Phone number (required for the head visitor, optional otherwise)
    #[serde(default)]
    pub phone: String,

    /// Identity document number (Aadhar / passport / voter ID)
    pub id_number: String,

    /// Gender from the identity document
    #[serde(default)]
    pub gender: Gender,

    /// Date of birth; `None` until a document has been recorded
    pub date_of_birth: Option<NaiveDate>,

    /// Whole years of age, derived from `date_of_birth`
    #[serde(default)]
    pub age: u32,

    /// Whether this visitor is the group head (invoice contact)
    #[serde(default)]
    pub is_head: bool,
}

impl Visitor {
    /// Create a new visitor with the minimum identity fields
    pub fn new(name: impl Into<String>, id_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            phone: String::new(),
            id_number: id_number.into(),
            gender: Gender::Unspecified,
            date_of_birth: None,
            age: 0,
            is_head: false,
        }
    }

    /// Create a visitor with a known date of birth, deriving the age
    pub fn with_date_of_birth(
        name: impl Into<String>,
        id_number: impl Into<String>,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        let mut visitor = Self::new(name, id_number);
        visitor.set_date_of_birth(date_of_birth, today);
        visitor
    }

    /// Set the date of birth and re-derive the age as of `today`
    pub fn set_date_of_birth(&mut self, date_of_birth: NaiveDate, today: NaiveDate) {
        self.date_of_birth = Some(date_of_birth);
        self.age = age_on(date_of_birth, today);
    }

    /// Merge the present fields of a partial update into this visitor.
    ///
    /// When the patch carries a date of birth the age is re-derived as of
    /// `today`. Absent fields are left untouched.
    pub fn apply(&mut self, patch: &VisitorPatch, today: NaiveDate) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(address) = &patch.address {
            self.address = address.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(id_number) = &patch.id_number {
            self.id_number = id_number.clone();
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.set_date_of_birth(date_of_birth, today);
        }
    }

    /// Validate identity fields.
    ///
    /// Contact fields are only checked for the head visitor; everyone
    /// else may leave phone and address blank.
    pub fn validate(&self) -> Result<(), VisitorValidationError> {
        if self.name.trim().is_empty() {
            return Err(VisitorValidationError::EmptyName);
        }
        if self.is_head {
            if self.phone.trim().is_empty() {
                return Err(VisitorValidationError::MissingHeadContact("phone"));
            }
            if self.address.trim().is_empty() {
                return Err(VisitorValidationError::MissingHeadContact("address"));
            }
        }
        Ok(())
    }
}

/// Partial visitor update, used both by the authoring workflow and by
/// document extraction results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitorPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub id_number: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
}

impl VisitorPatch {
    /// Whether the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.id_number.is_none()
            && self.gender.is_none()
            && self.date_of_birth.is_none()
    }
}

/// Whole years elapsed between `date_of_birth` and `on`.
///
/// Calendar-aware truncation: a year is only counted once the birthday
/// has passed. Never negative, even for a future date of birth.
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut age = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Validation errors for visitors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitorValidationError {
    EmptyName,
    MissingHeadContact(&'static str),
}

impl fmt::Display for VisitorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Visitor name cannot be empty"),
            Self::MissingHeadContact(field) => {
                write!(f, "Head visitor must have a {}", field)
            }
        }
    }
}

impl std::error::Error for VisitorValidationError {}
