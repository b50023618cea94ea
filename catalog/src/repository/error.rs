//! Repository error types
//!
//! Identity-keyed operations fail with a [`RepositoryErrorKind::NotFound`]
//! error carrying the missing identity and the entity kind. Lookups that may
//! legitimately find nothing (`find_by_id`) return `Ok(None)` instead.
//!
//! # Example
//!
//! ```rust
//! use catalog::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::not_found("Category", "9366b7dc-2d71-4799-b91c-c64adb205104")
//!     .with_operation(RepositoryOperation::Delete);
//! assert!(error.is_not_found());
//! assert_eq!(error.entity_type.as_deref(), Some("Category"));
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Inserting a single entity
    Insert,
    /// Inserting a batch of entities
    BulkInsert,
    /// Replacing an existing entity
    Update,
    /// Removing an entity
    Delete,
    /// Finding a single entity by ID
    FindById,
    /// Listing every stored entity
    FindAll,
    /// Filtered, sorted, paginated query
    Search,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "insert"),
            Self::BulkInsert => write!(f, "bulk_insert"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::FindById => write!(f, "find_by_id"),
            Self::FindAll => write!(f, "find_all"),
            Self::Search => write!(f, "search"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// The identity targeted by the operation is absent
    NotFound,
    /// The storage backend failed (connection, disk, driver)
    Backend,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Backend => write!(f, "backend"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The kind of entity involved (e.g., "Category")
    pub entity_type: Option<String>,
    /// The identity of the entity involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    /// Create a "not found" error with entity context
    ///
    /// The operation defaults to [`RepositoryOperation::FindById`]; mutations
    /// override it with [`with_operation`](Self::with_operation).
    pub fn not_found(entity_type: impl Into<String>, entity_id: impl fmt::Display) -> Self {
        Self {
            operation: RepositoryOperation::FindById,
            kind: RepositoryErrorKind::NotFound,
            message: format!("Entity not found using ID {entity_id}"),
            entity_type: Some(entity_type.into()),
            entity_id: Some(entity_id.to_string()),
        }
    }

    /// Create a backend failure error
    ///
    /// ```rust
    /// use catalog::repository::{RepositoryError, RepositoryOperation};
    ///
    /// let error = RepositoryError::backend(RepositoryOperation::Search, "connection reset");
    /// assert!(!error.is_not_found());
    /// ```
    pub fn backend(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Backend, message)
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Whether this error signals an absent identity
    pub fn is_not_found(&self) -> bool {
        self.kind == RepositoryErrorKind::NotFound
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_operation_display() {
        assert_eq!(format!("{}", RepositoryOperation::Insert), "insert");
        assert_eq!(format!("{}", RepositoryOperation::BulkInsert), "bulk_insert");
        assert_eq!(format!("{}", RepositoryOperation::Update), "update");
        assert_eq!(format!("{}", RepositoryOperation::Delete), "delete");
        assert_eq!(format!("{}", RepositoryOperation::FindById), "find_by_id");
        assert_eq!(format!("{}", RepositoryOperation::FindAll), "find_all");
        assert_eq!(format!("{}", RepositoryOperation::Search), "search");
    }

    #[test]
    fn test_not_found_carries_identity_and_kind() {
        let error = RepositoryError::not_found("Category", "abc");
        assert_eq!(error.kind, RepositoryErrorKind::NotFound);
        assert_eq!(error.operation, RepositoryOperation::FindById);
        assert_eq!(error.entity_type, Some("Category".to_string()));
        assert_eq!(error.entity_id, Some("abc".to_string()));
        assert_eq!(error.message, "Entity not found using ID abc");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_with_operation() {
        let error =
            RepositoryError::not_found("Category", "abc").with_operation(RepositoryOperation::Update);
        assert_eq!(error.operation, RepositoryOperation::Update);
        assert!(error.is_not_found());
    }

    #[test]
    fn test_backend_error() {
        let error = RepositoryError::backend(RepositoryOperation::Insert, "disk full")
            .with_entity("Category", "abc");
        assert_eq!(error.kind, RepositoryErrorKind::Backend);
        assert!(!error.is_not_found());
        assert_eq!(error.entity_id, Some("abc".to_string()));
    }

    #[test]
    fn test_display_without_entity() {
        let error = RepositoryError::backend(RepositoryOperation::Search, "timeout");
        let display = error.to_string();
        assert_eq!(display, "Repository backend error during search: timeout");
    }

    #[test]
    fn test_display_with_entity() {
        let error =
            RepositoryError::not_found("Category", "abc").with_operation(RepositoryOperation::Delete);
        let display = error.to_string();
        assert!(display.contains("not_found"));
        assert!(display.contains("delete"));
        assert!(display.contains("[Category: abc]"));
    }

    #[test]
    fn test_error_is_error_trait() {
        let error: Box<dyn std::error::Error> =
            Box::new(RepositoryError::not_found("Category", "abc"));
        assert!(error.to_string().contains("not_found"));
    }
}
