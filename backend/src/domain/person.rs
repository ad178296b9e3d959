//! People records.

use std::fmt;

use super::MAX_FIELD_CHARS;

/// Validation errors returned by [`PersonDraft::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyName,
    NameTooLong,
    EmptyDescription,
}

impl PersonValidationError {
    /// Request field the failure relates to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong => "name",
            Self::EmptyDescription => "description",
        }
    }
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong => write!(f, "name must be at most {MAX_FIELD_CHARS} characters"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
        }
    }
}

impl std::error::Error for PersonValidationError {}

/// Database-assigned person identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(i32);

impl PersonId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for PersonId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated person fields awaiting an identifier.
///
/// # Examples
/// ```
/// use backend::domain::PersonDraft;
///
/// let draft = PersonDraft::try_new(" Luke ", "hero").expect("valid person");
/// assert_eq!(draft.name(), "Luke");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    name: String,
    description: String,
}

impl PersonDraft {
    pub fn try_new(
        name: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Self, PersonValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        if name.chars().count() > MAX_FIELD_CHARS {
            return Err(PersonValidationError::NameTooLong);
        }
        let description = description.as_ref().trim();
        if description.is_empty() {
            return Err(PersonValidationError::EmptyDescription);
        }
        Ok(Self {
            name: name.to_owned(),
            description: description.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attach the identifier the store assigned.
    pub fn with_id(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Persisted person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
    description: String,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
