//! Value-object identifiers
//!
//! Entities are keyed by [`Uuid`], a validated wrapper around a v4 UUID.
//! Equality is structural: two identifiers built from the same string are
//! equal regardless of where they were allocated.
//!
//! ```rust
//! use catalog::ids::Uuid;
//! use std::str::FromStr;
//!
//! let id = Uuid::new();
//! let parsed = Uuid::from_str(id.as_str()).unwrap();
//! assert_eq!(id, parsed);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated UUID identifier.
///
/// The canonical hyphenated lowercase form is kept alongside the parsed value
/// so that `as_str` can hand out a borrowed string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid {
    id: String,
}

impl Uuid {
    /// Creates a new random (v4) identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Parses and validates an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUuidError`] when `value` is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, InvalidUuidError> {
        let parsed = uuid::Uuid::parse_str(value).map_err(|_| InvalidUuidError {
            value: value.to_string(),
        })?;
        Ok(Self {
            id: parsed.hyphenated().to_string(),
        })
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for Uuid {
    type Err = InvalidUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidUuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl AsRef<str> for Uuid {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Uuid> for String {
    fn from(id: Uuid) -> Self {
        id.id
    }
}

/// Error returned when a string is not a valid UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Id must be a valid UUID")]
pub struct InvalidUuidError {
    /// The rejected input.
    pub value: String,
}
