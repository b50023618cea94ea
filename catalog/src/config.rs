//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: CATALOG_, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/catalog/config.toml
//! 4. System directory: /etc/catalog/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

const ENV_PREFIX: &str = "CATALOG_";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Catalog data configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_name")]
    pub name: String,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Catalog data configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON array of categories loaded at startup
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            environment: default_environment(),
        }
    }
}

fn default_name() -> String {
    "catalog".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Config files are merged lowest priority first, so ./config.toml
    /// overrides the XDG file, which overrides /etc/catalog/config.toml.
    /// Environment variables override all file-based configs.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = figment.merge(Self::env()).extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses the search path. A missing file contributes nothing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env())
            .extract()?;

        Ok(config)
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    /// Candidate config files, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];

        let xdg_dirs = xdg::BaseDirectories::with_prefix("catalog");
        if let Some(path) = xdg_dirs.find_config_file(CONFIG_FILE) {
            paths.push(path);
        }

        paths.push(Path::new("/etc/catalog").join(CONFIG_FILE));
        paths
    }
}
