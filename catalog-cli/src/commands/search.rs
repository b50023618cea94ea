use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::category::{
    seed_from_file, CategoryInMemoryRepository, CategoryOutput, ListCategoriesUseCase, UseCase,
};
use catalog::observability::init_tracing;
use catalog::repository::{RawSearchInput, SearchResult};
use clap::Args;
use serde_json::Value;

use super::load_config;

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Configuration file (defaults to the standard search path)
    #[arg(long, env = "CATALOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON array of categories to load before searching
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Page to return, starting at 1
    #[arg(long)]
    pub page: Option<String>,

    /// Items per page
    #[arg(long)]
    pub per_page: Option<String>,

    /// Field to sort by (name, created_at)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub sort_dir: Option<String>,

    /// Case-insensitive name filter
    #[arg(long)]
    pub filter: Option<String>,
}

impl SearchArgs {
    /// Query input exactly as given; normalization happens in the use case
    fn raw_input(&self) -> RawSearchInput {
        let text = |value: &Option<String>| value.clone().map(Value::String);
        RawSearchInput {
            page: text(&self.page),
            per_page: text(&self.per_page),
            sort: text(&self.sort),
            sort_dir: text(&self.sort_dir),
            filter: text(&self.filter),
        }
    }
}

pub async fn execute(args: SearchArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    init_tracing(&config)?;

    let repository = Arc::new(CategoryInMemoryRepository::default());
    if let Some(seed) = args.seed.as_ref().or(config.catalog.seed_file.as_ref()) {
        seed_from_file(repository.as_ref(), seed)
            .await
            .with_context(|| format!("Failed to seed catalog from {}", seed.display()))?;
    }

    let result = run(repository, &args).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

async fn run(
    repository: Arc<CategoryInMemoryRepository>,
    args: &SearchArgs,
) -> Result<SearchResult<CategoryOutput>> {
    let result = ListCategoriesUseCase::new(repository)
        .execute(args.raw_input())
        .await?;
    Ok(result)
}
