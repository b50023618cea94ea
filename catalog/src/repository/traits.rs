//! Repository trait definitions
//!
//! This module provides generic traits for entity storage using RPITIT
//! (Return Position Impl Trait In Traits), available since Rust 1.75.
//!
//! # Overview
//!
//! - [`Repository`]: identity-keyed CRUD and bulk insert
//! - [`SearchableRepository`]: adds filter/sort/paginate search
//!
//! Every operation is asynchronous so in-memory and I/O-backed stores share
//! one contract. Within one repository instance a mutation that completed
//! before a call started is visible to that call.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::repository::{Repository, RepositoryResult};
//!
//! async fn rename(repo: &impl Repository<Category>, id: &Uuid) -> RepositoryResult<()> {
//!     if let Some(mut category) = repo.find_by_id(id).await? {
//!         category.change_name("Documentary")?;
//!         repo.update(category).await?;
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use super::error::RepositoryError;
use super::search_params::SearchParams;
use super::search_result::SearchResult;
use crate::entity::Entity;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Base repository trait for identity-keyed storage
///
/// "Same identity" always means structural equality of [`Entity::Id`].
pub trait Repository<E: Entity>: Send + Sync {
    /// Append one entity
    ///
    /// No uniqueness check beyond what the backend naturally enforces.
    fn insert(&self, entity: E) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Append a batch of entities
    ///
    /// Readers observe either none or all of the batch.
    fn bulk_insert(&self, entities: Vec<E>) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Replace the stored entity sharing `entity`'s identity
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` [`RepositoryError`] when no stored entity has that
    /// identity; the store is left unchanged.
    fn update(&self, entity: E) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Remove the entity with the given identity
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` [`RepositoryError`] when the identity is absent.
    fn delete(&self, id: &E::Id) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Find an entity by its identity
    ///
    /// Returns `Ok(None)` when absent; absence is not an error here.
    fn find_by_id(&self, id: &E::Id) -> impl Future<Output = RepositoryResult<Option<E>>> + Send;

    /// Every stored entity, in insertion order for in-memory stores
    fn find_all(&self) -> impl Future<Output = RepositoryResult<Vec<E>>> + Send;
}

/// Repository that supports filtered, sorted, paginated search
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Field names accepted as `sort`
    fn sortable_fields(&self) -> &[&'static str];

    /// Filter, then sort, then paginate.
    ///
    /// `total` in the result counts the filtered items before pagination.
    fn search(
        &self,
        params: &SearchParams,
    ) -> impl Future<Output = RepositoryResult<SearchResult<E>>> + Send;
}
