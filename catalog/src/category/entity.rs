//! Category entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entity::{Entity, SortValue, Sortable};
use crate::ids::Uuid;
use crate::validation::EntityValidationError;

/// Maximum name length, in characters
pub const NAME_MAX_LENGTH: usize = 255;

/// Identity of a [`Category`]
pub type CategoryId = Uuid;

/// Construction properties; missing values take their defaults.
///
/// Used to rehydrate stored categories, so no validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProps {
    /// Generated when absent
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
    /// Defaults to now
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    /// Props with only a name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Input for creating a validated category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateCategoryCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// A catalog category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Build from props without validation
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Build a new, validated category
    ///
    /// # Errors
    ///
    /// Returns [`EntityValidationError`] when the name is blank or longer
    /// than [`NAME_MAX_LENGTH`] characters.
    pub fn create(command: CreateCategoryCommand) -> Result<Self, EntityValidationError> {
        let category = Self::new(CategoryProps {
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            ..CategoryProps::default()
        });
        category.validate()?;
        Ok(category)
    }

    /// Rename; the category is unchanged if the new name is invalid
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replace (or clear) the description
    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        self.description = description;
        self.validate()
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Check every invariant
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        validate_name(&self.name)
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn validate_name(name: &str) -> Result<(), EntityValidationError> {
    let mut errors = EntityValidationError::new();
    if name.trim().is_empty() {
        errors.add_field_error("name", "REQUIRED", "name should not be empty");
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        errors.add_field_error(
            "name",
            "TOO_LONG",
            format!("name must be shorter than or equal to {NAME_MAX_LENGTH} characters"),
        );
    }
    errors.into_result()
}

impl Entity for Category {
    type Id = CategoryId;
    const KIND: &'static str = "Category";

    fn entity_id(&self) -> &CategoryId {
        &self.category_id
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "category_id": self.category_id.as_str(),
            "name": self.name,
            "description": self.description,
            "is_active": self.is_active,
            "created_at": self.created_at.to_rfc3339(),
        })
    }
}

impl Sortable for Category {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "name" => Some(self.name.as_str().into()),
            "created_at" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_defaults() {
        let category = Category::new(CategoryProps::new("Movie"));
        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert!(category.created_at() <= Utc::now());
    }

    #[test]
    fn test_new_with_all_values() {
        let id = CategoryId::new();
        let created_at = Utc::now() - chrono::Duration::days(1);
        let category = Category::new(CategoryProps {
            category_id: Some(id.clone()),
            name: "Movie".to_string(),
            description: Some("Movie Description".to_string()),
            is_active: Some(false),
            created_at: Some(created_at),
        });

        assert_eq!(category.category_id(), &id);
        assert_eq!(category.description(), Some("Movie Description"));
        assert!(!category.is_active());
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn test_create_validates() {
        let category = Category::create(
            CreateCategoryCommand::new("Movie")
                .with_description("Movie Description")
                .with_is_active(false),
        )
        .unwrap();
        assert_eq!(category.name(), "Movie");
        assert!(!category.is_active());

        let err = Category::create(CreateCategoryCommand::new("  ")).unwrap_err();
        assert_eq!(err.field("name")[0].code, "REQUIRED");

        let err = Category::create(CreateCategoryCommand::new("a".repeat(256))).unwrap_err();
        assert_eq!(err.field("name")[0].code, "TOO_LONG");

        assert!(Category::create(CreateCategoryCommand::new("a".repeat(255))).is_ok());
    }

    #[test]
    fn test_change_name() {
        let mut category = Category::create(CreateCategoryCommand::new("Movie")).unwrap();
        category.change_name("Comedy").unwrap();
        assert_eq!(category.name(), "Comedy");

        assert!(category.change_name("").is_err());
        assert_eq!(category.name(), "Comedy");
    }

    #[test]
    fn test_change_description() {
        let mut category = Category::create(CreateCategoryCommand::new("Movie")).unwrap();
        category
            .change_description(Some("Movies category".to_string()))
            .unwrap();
        assert_eq!(category.description(), Some("Movies category"));

        category.change_description(None).unwrap();
        assert_eq!(category.description(), None);
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut category =
            Category::create(CreateCategoryCommand::new("Movie").with_is_active(false)).unwrap();
        category.activate();
        assert!(category.is_active());
        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn test_to_json() {
        let category = Category::create(CreateCategoryCommand::new("Movie")).unwrap();
        let json = category.to_json();
        assert_eq!(json["name"], "Movie");
        assert_eq!(json["category_id"], category.category_id().as_str());
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["is_active"], true);
    }

    #[test]
    fn test_sort_values() {
        let category = Category::new(CategoryProps::new("Movie"));
        assert_eq!(category.sort_value("name"), Some(SortValue::from("Movie")));
        assert_eq!(category.sort_value("is_active"), None);
        assert_eq!(category.sort_value("unknown"), None);
        assert_eq!(
            category.sort_value("created_at"),
            Some(SortValue::Timestamp(category.created_at()))
        );
    }
}
