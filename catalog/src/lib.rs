//! # catalog
//!
//! Searchable repositories for domain entities, with a category catalog built
//! on top.
//!
//! ## Features
//!
//! - **Repository contract**: identity-keyed CRUD, bulk insert and search
//! - **Query normalization**: untrusted paging, sorting and filtering input
//!   becomes an always-valid [`SearchParams`](repository::SearchParams)
//! - **In-memory store**: filter, stable sort and paginate behind a pluggable
//!   search strategy
//! - **Categories**: validated entity, search rules and CRUD use cases
//! - **Ambient**: Figment configuration and JSON tracing
//!
//! ## Example
//!
//! ```rust,no_run
//! use catalog::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let repository = Arc::new(CategoryInMemoryRepository::default());
//!     CreateCategoryUseCase::new(repository.clone())
//!         .execute(CreateCategoryCommand::new("Movie"))
//!         .await?;
//!
//!     let page = ListCategoriesUseCase::new(repository)
//!         .execute(RawSearchInput::default())
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&page)?);
//!
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod observability;
pub mod repository;
pub mod validation;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::category::{
        Category, CategoryId, CategoryInMemoryRepository, CategoryOutput, CategoryProps,
        CategoryRepository, CategorySearch, CreateCategoryCommand, CreateCategoryUseCase,
        DeleteCategoryInput, DeleteCategoryUseCase, GetCategoryInput, GetCategoryUseCase,
        ListCategoriesUseCase, UpdateCategoryInput, UpdateCategoryUseCase, UseCase,
    };
    pub use crate::config::{CatalogConfig, Config, ServiceConfig};
    pub use crate::entity::{Entity, EntityId, SortValue, Sortable};
    pub use crate::error::{Error, Result};
    pub use crate::ids::{InvalidUuidError, Uuid};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        InMemoryRepository, RawSearchInput, Repository, RepositoryError, RepositoryErrorKind,
        RepositoryResult, SearchParams, SearchResult, SearchStrategy, SearchableRepository,
        SortDirection,
    };
    pub use crate::validation::{EntityValidationError, FieldError};

    pub use tracing::{debug, error, info, instrument, trace, warn};
}
