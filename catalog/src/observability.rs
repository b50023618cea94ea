//! Structured logging

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Error, error::Result};

/// Install the global JSON tracing subscriber.
///
/// Events are written to stderr. `RUST_LOG` is ignored; the filter comes from
/// `service.log_level` and falls back to `info` when that directive does not
/// parse.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = config.service.log_level.as_str();

    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to initialize tracing: {e}")))?;

    tracing::info!(
        environment = %config.service.environment,
        "Tracing initialized for service: {}",
        config.service.name
    );

    Ok(())
}
