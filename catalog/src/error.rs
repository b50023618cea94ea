//! Crate-level error type

use thiserror::Error;

use crate::ids::InvalidUuidError;
use crate::repository::RepositoryError;
use crate::validation::EntityValidationError;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by catalog operations
///
/// Every failure is returned to the immediate caller; nothing is retried or
/// swallowed here.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Repository failure, including not-found
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Entity invariants violated
    #[error("{0}")]
    Validation(#[from] EntityValidationError),

    /// Malformed identifier
    #[error("{0}")]
    InvalidId(#[from] InvalidUuidError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this is a not-found repository error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Repository(err) if err.is_not_found())
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
