//! Generic searchable repository
//!
//! This module provides the storage contract shared by every entity type and
//! an in-memory reference implementation.
//!
//! # Features
//!
//! - **Contract**: [`Repository`] for identity-keyed CRUD and bulk insert,
//!   [`SearchableRepository`] for filter/sort/paginate search
//! - **Query normalization**: [`SearchParams`] turns untrusted input
//!   ([`RawSearchInput`]) into an always-valid query
//! - **Results**: [`SearchResult`] with derived `last_page`
//! - **In-memory store**: [`InMemoryRepository`] with a pluggable
//!   [`SearchStrategy`]
//! - **Errors**: [`RepositoryError`] with a `NotFound` kind for absent identities
//!
//! # Example
//!
//! ```rust
//! use catalog::category::{Category, CategoryInMemoryRepository, CreateCategoryCommand};
//! use catalog::repository::{Repository, SearchParams, SearchableRepository};
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let repo = CategoryInMemoryRepository::default();
//! let movie = Category::create(CreateCategoryCommand::new("Movie")).unwrap();
//! repo.insert(movie).await.unwrap();
//!
//! let result = repo.search(&SearchParams::new().with_filter("mov")).await.unwrap();
//! assert_eq!(result.total(), 1);
//! # });
//! # }
//! ```

mod error;
mod in_memory;
mod search_params;
mod search_result;
mod traits;

// Re-export all public types
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use in_memory::{InMemoryRepository, SearchStrategy};
pub use search_params::{
    RawSearchInput, SearchParams, SortDirection, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
pub use search_result::SearchResult;
pub use traits::{Repository, RepositoryResult, SearchableRepository};
