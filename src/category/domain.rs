//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, endpoints, resource::Resource};

/// The minimum number of characters in a category or entry name.
pub const MIN_NAME_LENGTH: usize = 2;

/// Trim `name` and check that it has at least [MIN_NAME_LENGTH] characters.
///
/// # Errors
/// Returns [Error::NameTooShort] if the trimmed name is too short.
pub fn validate_name(name: &str) -> Result<&str, Error> {
    let name = name.trim();

    if name.chars().count() < MIN_NAME_LENGTH {
        Err(Error::NameTooShort("name"))
    } else {
        Ok(name)
    }
}

/// A validated category name with at least [MIN_NAME_LENGTH] characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NameTooShort] if `name` has fewer
    /// than [MIN_NAME_LENGTH] characters after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        validate_name(name).map(|name| Self(name.to_owned()))
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the name is long enough.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A named grouping for entries, e.g. 'Housing' or 'Salary'.
///
/// This is the record exchanged with the REST API. The ID is `None` until
/// the category has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Category {
    const API_PATH: &'static str = endpoints::CATEGORIES_API;

    fn id(&self) -> Option<CategoryId> {
        self.id
    }
}

/// Form data for category creation and editing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFormData {
    pub name: String,
    pub description: Option<String>,
}
