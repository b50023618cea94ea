//! Category storage and search

use std::fs;
use std::path::Path;

use tracing::info;

use super::entity::{Category, CreateCategoryCommand};
use crate::error::Result;
use crate::repository::{InMemoryRepository, SearchStrategy, SearchableRepository, SortDirection};

/// Repository contract for categories
pub trait CategoryRepository: SearchableRepository<Category> {}

impl<T: SearchableRepository<Category>> CategoryRepository for T {}

/// Category search rules.
///
/// Filters by case-insensitive substring of the name. Results are newest
/// first unless another sort is requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySearch;

impl SearchStrategy<Category> for CategorySearch {
    fn sortable_fields(&self) -> &[&'static str] {
        &["name", "created_at"]
    }

    fn matches(&self, category: &Category, filter: &str) -> bool {
        category
            .name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

/// In-memory category store
pub type CategoryInMemoryRepository = InMemoryRepository<Category, CategorySearch>;

/// Load a JSON array of [`CreateCategoryCommand`]s from `path`.
///
/// Every entry is validated before anything is stored; the categories are
/// then written in one bulk insert. Returns the number stored.
pub async fn seed_from_file<R: CategoryRepository>(repository: &R, path: &Path) -> Result<usize> {
    let contents = fs::read_to_string(path)?;
    let commands: Vec<CreateCategoryCommand> = serde_json::from_str(&contents)?;
    let categories = commands
        .into_iter()
        .map(Category::create)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let count = categories.len();
    repository.bulk_insert(categories).await?;
    info!(count, seed = %path.display(), "catalog seeded");

    Ok(count)
}
