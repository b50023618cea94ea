//! Search query parameters
//!
//! [`SearchParams`] is the canonical, always-valid query descriptor consumed by
//! [`SearchableRepository::search`](super::SearchableRepository::search). It is
//! built by normalizing untrusted input ([`RawSearchInput`]): malformed values
//! never fail a request, they fall back to defaults.
//!
//! | field      | accepted                                    | fallback |
//! |------------|---------------------------------------------|----------|
//! | `page`     | positive integer (number or numeric string) | `1`      |
//! | `per_page` | positive integer (number or numeric string) | `15`     |
//! | `sort`     | non-empty string, number or boolean         | `None`   |
//! | `sort_dir` | `asc` / `desc`, any case                    | `asc`    |
//! | `filter`   | non-empty string, number or boolean         | `None`   |
//!
//! # Example
//!
//! ```rust
//! use catalog::repository::{RawSearchInput, SearchParams, SortDirection};
//! use serde_json::json;
//!
//! let raw: RawSearchInput = serde_json::from_value(json!({
//!     "page": "fake",
//!     "per_page": 0,
//!     "sort": "name",
//!     "sort_dir": "DESC",
//!     "filter": ""
//! }))
//! .unwrap();
//!
//! let params = SearchParams::from_raw(&raw);
//! assert_eq!(params.page(), 1);
//! assert_eq!(params.per_page(), 15);
//! assert_eq!(params.sort(), Some("name"));
//! assert_eq!(params.sort_dir(), Some(SortDirection::Desc));
//! assert_eq!(params.filter(), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page used when the requested page is missing or invalid
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the requested page size is missing or invalid
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Direction for ordering results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Sort in ascending order (A-Z, 0-9, oldest first)
    #[default]
    Asc,
    /// Sort in descending order (Z-A, 9-0, newest first)
    Desc,
}

impl SortDirection {
    /// Case-insensitive parse; anything other than `asc`/`desc` yields `Asc`.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Untyped search input as received from a caller.
///
/// Every key is optional and may hold any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSearchInput {
    /// Requested page (1-indexed)
    pub page: Option<Value>,
    /// Requested page size
    pub per_page: Option<Value>,
    /// Field to sort by
    pub sort: Option<Value>,
    /// Sort direction
    pub sort_dir: Option<Value>,
    /// Backend-defined filter
    pub filter: Option<Value>,
}

/// Normalized search query.
///
/// `sort_dir` is `Some` exactly when `sort` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSearchInput")]
pub struct SearchParams {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
}

impl SearchParams {
    /// First page, default page size, no sort, no filter
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }

    /// Normalize untrusted input. Never fails.
    #[must_use]
    pub fn from_raw(raw: &RawSearchInput) -> Self {
        let sort = scalar_text(raw.sort.as_ref());
        let sort_dir = sort.as_ref().map(|_| match &raw.sort_dir {
            Some(Value::String(dir)) => SortDirection::parse_lenient(dir),
            _ => SortDirection::Asc,
        });

        Self {
            page: positive_integer(raw.page.as_ref()).unwrap_or(DEFAULT_PAGE),
            per_page: positive_integer(raw.per_page.as_ref()).unwrap_or(DEFAULT_PER_PAGE),
            sort,
            sort_dir,
            filter: scalar_text(raw.filter.as_ref()),
        }
    }

    /// Set the page; `0` falls back to the first page
    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self
    }

    /// Set the page size; `0` falls back to the default
    #[must_use]
    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };
        self
    }

    /// Set the sort field and direction; an empty field clears sorting
    #[must_use]
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        let field = field.into();
        if field.is_empty() {
            self.sort = None;
            self.sort_dir = None;
        } else {
            self.sort = Some(field);
            self.sort_dir = Some(direction);
        }
        self
    }

    /// Set the filter; an empty filter clears filtering
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    /// Requested page, always `>= 1`
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Requested page size, always `>= 1`
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Field to sort by
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Sort direction, present only alongside a sort field
    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    /// Backend-defined filter
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RawSearchInput> for SearchParams {
    fn from(raw: RawSearchInput) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<&RawSearchInput> for SearchParams {
    fn from(raw: &RawSearchInput) -> Self {
        Self::from_raw(raw)
    }
}

/// A strictly positive integer, given as a JSON number or a numeric string.
fn positive_integer(value: Option<&Value>) -> Option<u64> {
    let number = match value? {
        Value::Number(n) => match n.as_u64() {
            Some(int) => Some(int),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64),
        },
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    number.filter(|n| *n >= 1)
}

/// Stringified scalar; empty strings, null, objects and arrays yield `None`.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawSearchInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults() {
        let params = SearchParams::new();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 15);
        assert_eq!(params.sort(), None);
        assert_eq!(params.sort_dir(), None);
        assert_eq!(params.filter(), None);
        assert_eq!(params, SearchParams::from_raw(&RawSearchInput::default()));
    }

    #[test]
    fn test_page_normalization() {
        let cases = [
            (json!(null), 1),
            (json!(""), 1),
            (json!("fake"), 1),
            (json!(0), 1),
            (json!(-1), 1),
            (json!(5.5), 1),
            (json!(true), 1),
            (json!(false), 1),
            (json!({}), 1),
            (json!([]), 1),
            (json!(1), 1),
            (json!(2), 2),
            (json!(2.0), 2),
            (json!("3"), 3),
            (json!("-3"), 1),
        ];

        for (input, expected) in cases {
            let params = SearchParams::from_raw(&raw(json!({ "page": input.clone() })));
            assert_eq!(params.page(), expected, "page input {input}");
        }
    }

    #[test]
    fn test_per_page_normalization() {
        let cases = [
            (json!(null), 15),
            (json!(""), 15),
            (json!("fake"), 15),
            (json!(0), 15),
            (json!(-15), 15),
            (json!(5.5), 15),
            (json!(true), 15),
            (json!(false), 15),
            (json!({}), 15),
            (json!(1), 1),
            (json!(2), 2),
            (json!("10"), 10),
        ];

        for (input, expected) in cases {
            let params = SearchParams::from_raw(&raw(json!({ "per_page": input.clone() })));
            assert_eq!(params.per_page(), expected, "per_page input {input}");
        }
    }

    #[test]
    fn test_sort_normalization() {
        let cases = [
            (json!(null), None),
            (json!(""), None),
            (json!(0), Some("0")),
            (json!(-1), Some("-1")),
            (json!(5.5), Some("5.5")),
            (json!(true), Some("true")),
            (json!(false), Some("false")),
            (json!({}), None),
            (json!("field"), Some("field")),
        ];

        for (input, expected) in cases {
            let params = SearchParams::from_raw(&raw(json!({ "sort": input.clone() })));
            assert_eq!(params.sort(), expected, "sort input {input}");
        }
    }

    #[test]
    fn test_sort_dir_absent_without_sort() {
        let params = SearchParams::from_raw(&raw(json!({ "sort_dir": "desc" })));
        assert_eq!(params.sort_dir(), None);

        let params = SearchParams::from_raw(&raw(json!({ "sort": "", "sort_dir": "desc" })));
        assert_eq!(params.sort_dir(), None);
    }

    #[test]
    fn test_sort_dir_normalization() {
        let cases = [
            (json!(null), SortDirection::Asc),
            (json!(""), SortDirection::Asc),
            (json!(0), SortDirection::Asc),
            (json!("fake"), SortDirection::Asc),
            (json!(true), SortDirection::Asc),
            (json!("asc"), SortDirection::Asc),
            (json!("ASC"), SortDirection::Asc),
            (json!("desc"), SortDirection::Desc),
            (json!("DESC"), SortDirection::Desc),
            (json!("DeSc"), SortDirection::Desc),
        ];

        for (input, expected) in cases {
            let params =
                SearchParams::from_raw(&raw(json!({ "sort": "field", "sort_dir": input.clone() })));
            assert_eq!(params.sort_dir(), Some(expected), "sort_dir input {input}");
        }
    }

    #[test]
    fn test_filter_normalization() {
        let cases = [
            (json!(null), None),
            (json!(""), None),
            (json!(0), Some("0")),
            (json!(-1), Some("-1")),
            (json!(5.5), Some("5.5")),
            (json!(true), Some("true")),
            (json!(false), Some("false")),
            (json!([1, 2]), None),
            (json!("field"), Some("field")),
        ];

        for (input, expected) in cases {
            let params = SearchParams::from_raw(&raw(json!({ "filter": input.clone() })));
            assert_eq!(params.filter(), expected, "filter input {input}");
        }
    }

    #[test]
    fn test_deserialize_normalizes() {
        let params: SearchParams =
            serde_json::from_value(json!({ "page": -4, "per_page": "x", "sort": "name" })).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 15);
        assert_eq!(params.sort_dir(), Some(SortDirection::Asc));
    }

    #[test]
    fn test_builder_keeps_values_valid() {
        let params = SearchParams::new()
            .with_page(0)
            .with_per_page(0)
            .with_sort("", SortDirection::Desc)
            .with_filter("");
        assert_eq!(params, SearchParams::new());

        let params = SearchParams::new()
            .with_page(3)
            .with_per_page(2)
            .with_sort("name", SortDirection::Desc)
            .with_filter("abc");
        assert_eq!(params.page(), 3);
        assert_eq!(params.per_page(), 2);
        assert_eq!(params.sort(), Some("name"));
        assert_eq!(params.sort_dir(), Some(SortDirection::Desc));
        assert_eq!(params.filter(), Some("abc"));
    }

    #[test]
    fn test_sort_direction_display_and_parse() {
        assert_eq!(SortDirection::Asc.to_string(), "asc");
        assert_eq!(SortDirection::Desc.to_string(), "desc");
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!(SortDirection::parse_lenient("Desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_lenient("up"), SortDirection::Asc);
    }
}
