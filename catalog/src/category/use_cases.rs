//! Category application use cases
//!
//! Each use case wraps a shared [`CategoryRepository`] and maps entities to
//! [`CategoryOutput`] records. Absent identities surface as not-found
//! repository errors.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use super::entity::{Category, CategoryId, CreateCategoryCommand};
use super::repository::CategoryRepository;
use crate::entity::Entity;
use crate::error::Result;
use crate::repository::{RawSearchInput, RepositoryError, SearchParams, SearchResult};

/// A single application operation
pub trait UseCase<I, O>: Send + Sync {
    fn execute(&self, input: I) -> impl Future<Output = Result<O>> + Send;
}

/// Category as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategoryInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCategoryInput {
    pub id: String,
}

/// Partial update; absent fields are left alone.
///
/// `description` distinguishes a missing key (`None`) from an explicit
/// `null` (`Some(None)`), which clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn parse_id(id: &str) -> Result<CategoryId> {
    Ok(CategoryId::parse(id)?)
}

async fn find_or_fail<R: CategoryRepository>(repository: &R, id: &CategoryId) -> Result<Category> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found(Category::KIND, id).into())
}

/// Validate and store a new category
pub struct CreateCategoryUseCase<R> {
    repository: Arc<R>,
}

impl<R> CreateCategoryUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: CategoryRepository> UseCase<CreateCategoryCommand, CategoryOutput>
    for CreateCategoryUseCase<R>
{
    async fn execute(&self, input: CreateCategoryCommand) -> Result<CategoryOutput> {
        let category = Category::create(input)?;
        let output = CategoryOutput::from(&category);
        self.repository.insert(category).await?;
        info!(id = %output.id, name = %output.name, "category created");
        Ok(output)
    }
}

pub struct GetCategoryUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetCategoryUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: CategoryRepository> UseCase<GetCategoryInput, CategoryOutput> for GetCategoryUseCase<R> {
    async fn execute(&self, input: GetCategoryInput) -> Result<CategoryOutput> {
        let id = parse_id(&input.id)?;
        let category = find_or_fail(self.repository.as_ref(), &id).await?;
        Ok(CategoryOutput::from(&category))
    }
}

/// Apply a partial update.
///
/// An empty name is treated as absent. The stored category is replaced only
/// if every change validates.
pub struct UpdateCategoryUseCase<R> {
    repository: Arc<R>,
}

impl<R> UpdateCategoryUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: CategoryRepository> UseCase<UpdateCategoryInput, CategoryOutput>
    for UpdateCategoryUseCase<R>
{
    async fn execute(&self, input: UpdateCategoryInput) -> Result<CategoryOutput> {
        let id = parse_id(&input.id)?;
        let mut category = find_or_fail(self.repository.as_ref(), &id).await?;

        if let Some(name) = input.name.filter(|name| !name.is_empty()) {
            category.change_name(name)?;
        }
        if let Some(description) = input.description {
            category.change_description(description)?;
        }
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        let output = CategoryOutput::from(&category);
        self.repository.update(category).await?;
        info!(id = %output.id, "category updated");
        Ok(output)
    }
}

pub struct DeleteCategoryUseCase<R> {
    repository: Arc<R>,
}

impl<R> DeleteCategoryUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: CategoryRepository> UseCase<DeleteCategoryInput, ()> for DeleteCategoryUseCase<R> {
    async fn execute(&self, input: DeleteCategoryInput) -> Result<()> {
        let id = parse_id(&input.id)?;
        self.repository.delete(&id).await?;
        info!(%id, "category deleted");
        Ok(())
    }
}

/// Search categories from untrusted query input
pub struct ListCategoriesUseCase<R> {
    repository: Arc<R>,
}

impl<R> ListCategoriesUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: CategoryRepository> UseCase<RawSearchInput, SearchResult<CategoryOutput>>
    for ListCategoriesUseCase<R>
{
    async fn execute(&self, input: RawSearchInput) -> Result<SearchResult<CategoryOutput>> {
        let params = SearchParams::from_raw(&input);
        let result = self.repository.search(&params).await?;
        Ok(result.map_items(|category| CategoryOutput::from(&category)))
    }
}
