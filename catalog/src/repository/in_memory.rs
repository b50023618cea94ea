//! In-memory searchable repository
//!
//! [`InMemoryRepository`] keeps entities in insertion order behind a
//! [`tokio::sync::RwLock`]. Each mutation takes the write lock once, so a bulk
//! insert is never partially visible, and a failed update or delete leaves the
//! store untouched. Reads work on a snapshot; search never reorders the store.
//!
//! Searching is a three-stage pipeline: filter, sort, paginate. The
//! entity-specific parts are supplied by a [`SearchStrategy`]:
//!
//! ```rust,ignore
//! struct ProductSearch;
//!
//! impl SearchStrategy<Product> for ProductSearch {
//!     fn sortable_fields(&self) -> &[&'static str] {
//!         &["name"]
//!     }
//!
//!     fn matches(&self, product: &Product, filter: &str) -> bool {
//!         product.name.to_lowercase().contains(&filter.to_lowercase())
//!     }
//! }
//!
//! let repo = InMemoryRepository::new(ProductSearch);
//! let page = repo.search(&SearchParams::new().with_filter("lamp")).await?;
//! ```

use std::cmp::Ordering;

use tokio::sync::RwLock;
use tracing::{debug, trace};

use super::error::{RepositoryError, RepositoryOperation};
use super::search_params::{SearchParams, SortDirection};
use super::search_result::SearchResult;
use super::traits::{Repository, RepositoryResult, SearchableRepository};
use crate::entity::{Entity, Sortable};

/// Entity-specific search behaviour plugged into [`InMemoryRepository`].
pub trait SearchStrategy<E>: Send + Sync {
    /// Field names accepted as a sort key; anything else leaves order unchanged
    fn sortable_fields(&self) -> &[&'static str] {
        &[]
    }

    /// Whether `entity` passes `filter`.
    ///
    /// Only called when a filter is present.
    fn matches(&self, entity: &E, filter: &str) -> bool;

    /// Ordering applied when the query names no sort field
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// Ordered in-memory store of entities.
///
/// `S` is the search strategy; with `S = ()` the repository supports the
/// plain [`Repository`] contract only.
#[derive(Debug)]
pub struct InMemoryRepository<E, S = ()> {
    items: RwLock<Vec<E>>,
    strategy: S,
}

impl<E: Entity, S> InMemoryRepository<E, S> {
    /// Create an empty repository
    pub fn new(strategy: S) -> Self {
        Self::with_items(strategy, Vec::new())
    }

    /// Create a repository pre-populated with `items`
    pub fn with_items(strategy: S, items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
            strategy,
        }
    }

    /// The search strategy in use
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Number of stored entities
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Slice `[start, start + per_page)` of `items`, clipped to its bounds.
    ///
    /// Pages start at 1; an out-of-range page yields an empty vector.
    pub fn apply_pagination(items: Vec<E>, page: u64, per_page: u64) -> Vec<E> {
        let start = page.saturating_sub(1).saturating_mul(per_page);
        let start = usize::try_from(start).unwrap_or(usize::MAX);
        let take = usize::try_from(per_page).unwrap_or(usize::MAX);
        items.into_iter().skip(start).take(take).collect()
    }

    fn position_of(items: &[E], id: &E::Id) -> Option<usize> {
        items.iter().position(|item| item.entity_id() == id)
    }

    fn not_found(id: &E::Id, operation: RepositoryOperation) -> RepositoryError {
        debug!(entity = E::KIND, id = %id, %operation, "entity not found");
        RepositoryError::not_found(E::KIND, id).with_operation(operation)
    }
}

impl<E: Entity, S: Default> Default for InMemoryRepository<E, S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<E, S> Repository<E> for InMemoryRepository<E, S>
where
    E: Entity,
    S: Send + Sync,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        self.items.write().await.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        let count = entities.len();
        self.items.write().await.extend(entities);
        trace!(entity = E::KIND, count, "bulk insert");
        Ok(())
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        let mut items = self.items.write().await;
        match Self::position_of(&items, entity.entity_id()) {
            Some(index) => {
                items[index] = entity;
                Ok(())
            }
            None => Err(Self::not_found(entity.entity_id(), RepositoryOperation::Update)),
        }
    }

    async fn delete(&self, id: &E::Id) -> RepositoryResult<()> {
        let mut items = self.items.write().await;
        match Self::position_of(&items, id) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(Self::not_found(id, RepositoryOperation::Delete)),
        }
    }

    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.entity_id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.items.read().await.clone())
    }
}

impl<E, S> InMemoryRepository<E, S>
where
    E: Entity + Sortable,
    S: SearchStrategy<E>,
{
    /// Items passing `filter`, in their original relative order.
    ///
    /// With no filter every item is returned and the strategy is not consulted.
    pub fn apply_filter(&self, items: &[E], filter: Option<&str>) -> Vec<E> {
        match filter {
            None => items.to_vec(),
            Some(filter) => items
                .iter()
                .filter(|item| self.strategy.matches(item, filter))
                .cloned()
                .collect(),
        }
    }

    /// Stable sort by a sortable field.
    ///
    /// With no sort field the strategy's default ordering applies, if any. An
    /// unsupported field returns `items` unchanged. Entities without a value
    /// for the field come last in either direction.
    pub fn apply_sort(
        &self,
        items: Vec<E>,
        sort: Option<&str>,
        direction: Option<SortDirection>,
    ) -> Vec<E> {
        let (field, direction) = match sort {
            Some(field) => (field, direction.unwrap_or_default()),
            None => match self.strategy.default_sort() {
                Some(default) => default,
                None => return items,
            },
        };

        if !self
            .strategy
            .sortable_fields()
            .iter()
            .any(|sortable| *sortable == field)
        {
            return items;
        }

        let mut sorted = items;
        sorted.sort_by(|a, b| compare_field(a, b, field, direction));
        sorted
    }
}

impl<E, S> SearchableRepository<E> for InMemoryRepository<E, S>
where
    E: Entity + Sortable,
    S: SearchStrategy<E>,
{
    fn sortable_fields(&self) -> &[&'static str] {
        self.strategy.sortable_fields()
    }

    async fn search(&self, params: &SearchParams) -> RepositoryResult<SearchResult<E>> {
        let filtered = {
            let items = self.items.read().await;
            self.apply_filter(&items, params.filter())
        };
        let total = filtered.len() as u64;
        let sorted = self.apply_sort(filtered, params.sort(), params.sort_dir());
        let items = Self::apply_pagination(sorted, params.page(), params.per_page());

        debug!(
            entity = E::KIND,
            total,
            returned = items.len(),
            page = params.page(),
            per_page = params.per_page(),
            "search completed"
        );

        Ok(SearchResult::new(
            items,
            total,
            params.page(),
            params.per_page(),
        ))
    }
}

/// Total ordering of a field in `direction`; missing values always come last.
fn compare_field<E: Sortable>(a: &E, b: &E, field: &str, direction: SortDirection) -> Ordering {
    match (a.sort_value(field), b.sort_value(field)) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(&b),
            SortDirection::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
