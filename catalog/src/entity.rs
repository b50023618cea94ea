//! Entity contracts
//!
//! Every record stored through a [`Repository`](crate::repository::Repository)
//! implements [`Entity`]: it exposes a single identity value and a plain JSON
//! rendering. Records that can be ordered by a search additionally implement
//! [`Sortable`].

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

/// Identity of an entity.
///
/// Equality must be structural (`Eq` over the identifier's contents), which
/// is what identity-keyed repository operations compare with.
pub trait EntityId: Clone + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> EntityId for T where T: Clone + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// A record with a persistent identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type
    type Id: EntityId;

    /// Entity kind reported in not-found errors (e.g. `"Category"`)
    const KIND: &'static str;

    /// Returns the entity identity
    fn entity_id(&self) -> &Self::Id;

    /// Renders the entity as a plain JSON record
    fn to_json(&self) -> serde_json::Value;
}

/// A field value used to order search results.
///
/// The ordering is total. Values of the same variant compare naturally, with
/// floats ordered by [`f64::total_cmp`] (NaN sorts after every number).
/// Values of different variants are ordered by variant, in declaration order.
#[derive(Debug, Clone)]
pub enum SortValue {
    /// Boolean (`false < true`)
    Boolean(bool),
    /// Signed integer
    Integer(i64),
    /// Floating point
    Float(f64),
    /// Text, compared lexicographically (byte order)
    Text(String),
    /// Point in time
    Timestamp(DateTime<Utc>),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Boolean(_) => 0,
            Self::Integer(_) => 1,
            Self::Float(_) => 2,
            Self::Text(_) => 3,
            Self::Timestamp(_) => 4,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl From<&str> for SortValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SortValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for SortValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for SortValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Timestamp(t)
    }
}

/// Field access for comparison-based sorting.
pub trait Sortable {
    /// Returns the value of `field`, or `None` if the field is unknown or
    /// holds no value. Missing values sort after present ones.
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}
