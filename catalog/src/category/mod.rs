//! Category bounded context
//!
//! The [`Category`] entity, its searchable in-memory repository and the
//! application use cases built on top of it.

mod entity;
mod repository;
mod use_cases;

pub use entity::{
    Category, CategoryId, CategoryProps, CreateCategoryCommand, NAME_MAX_LENGTH,
};
pub use repository::{
    seed_from_file, CategoryInMemoryRepository, CategoryRepository, CategorySearch,
};
pub use use_cases::{
    CategoryOutput, CreateCategoryUseCase, DeleteCategoryInput, DeleteCategoryUseCase,
    GetCategoryInput, GetCategoryUseCase, ListCategoriesUseCase, UpdateCategoryInput,
    UpdateCategoryUseCase, UseCase,
};
