//! Paginated search result envelope

use serde::Serialize;

use crate::entity::Entity;

/// Immutable outcome of one search.
///
/// Serializes as `{items, total, current_page, per_page, last_page}`.
///
/// # Example
///
/// ```rust
/// use catalog::repository::SearchResult;
///
/// let result = SearchResult::new(vec!["a", "b"], 4, 1, 2);
/// assert_eq!(result.last_page(), 2);
///
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["last_page"], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<T> {
    items: Vec<T>,
    total: u64,
    current_page: u64,
    per_page: u64,
    last_page: u64,
}

impl<T> SearchResult<T> {
    /// Build a result; `last_page` is derived from `total` and `per_page`
    pub fn new(items: Vec<T>, total: u64, current_page: u64, per_page: u64) -> Self {
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: last_page(total, per_page),
        }
    }

    /// Items of the current page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items matching the filter, before pagination
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// Convert every item, keeping the pagination metadata
    pub fn map_items<U, F>(self, f: F) -> SearchResult<U>
    where
        F: FnMut(T) -> U,
    {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

impl<E: Entity> SearchResult<E> {
    /// Same result with items rendered as plain JSON records
    pub fn to_plain(&self) -> SearchResult<serde_json::Value> {
        SearchResult {
            items: self.items.iter().map(Entity::to_json).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

/// `ceil(total / per_page)`, never below 1.
fn last_page(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructor_props() {
        let result = SearchResult::new(vec!["entity1", "entity2"], 4, 1, 2);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "items": ["entity1", "entity2"],
                "total": 4,
                "current_page": 1,
                "per_page": 2,
                "last_page": 2
            })
        );
    }

    #[test]
    fn test_last_page_is_one_when_per_page_exceeds_total() {
        let result: SearchResult<()> = SearchResult::new(vec![], 4, 1, 15);
        assert_eq!(result.last_page(), 1);
    }

    #[test]
    fn test_last_page_rounds_up() {
        let result: SearchResult<()> = SearchResult::new(vec![], 101, 1, 20);
        assert_eq!(result.last_page(), 6);

        let result: SearchResult<()> = SearchResult::new(vec![], 16, 1, 15);
        assert_eq!(result.last_page(), 2);
    }

    #[test]
    fn test_last_page_for_empty_total() {
        let result: SearchResult<()> = SearchResult::new(vec![], 0, 1, 15);
        assert_eq!(result.last_page(), 1);
    }

    #[test]
    fn test_map_items_keeps_metadata() {
        let result = SearchResult::new(vec![1, 2], 7, 2, 2).map_items(|n| n * 10);
        assert_eq!(result.items(), &[10, 20]);
        assert_eq!(result.total(), 7);
        assert_eq!(result.current_page(), 2);
        assert_eq!(result.per_page(), 2);
        assert_eq!(result.last_page(), 4);
    }
}
