//! Entity validation errors
//!
//! Entity constructors and mutators report every failed rule at once,
//! grouped by field.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error code (e.g., "REQUIRED", "TOO_LONG")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// One or more entity invariants were violated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityValidationError {
    /// Field-level validation errors
    pub errors: BTreeMap<String, Vec<FieldError>>,
}

impl EntityValidationError {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field-level error
    pub fn add_field_error(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        let field = field.into();
        let error = FieldError {
            field: field.clone(),
            code: code.into(),
            message: message.into(),
        };

        self.errors.entry(field).or_default().push(error);
    }

    /// Check if there are any validation errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the number of field errors
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Errors recorded for `field`
    pub fn field(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// `Err(self)` if any error was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for EntityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity validation failed")?;
        let mut separator = ": ";
        for error in self.errors.values().flatten() {
            write!(f, "{separator}{} {}", error.field, error.message)?;
            separator = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for EntityValidationError {}
