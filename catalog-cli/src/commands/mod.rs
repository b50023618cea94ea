pub mod search;

use std::path::Path;

use anyhow::{Context, Result};
use catalog::config::Config;

/// Load configuration from `path`, or from the standard search path
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::load().context("Failed to load configuration"),
    }
}
