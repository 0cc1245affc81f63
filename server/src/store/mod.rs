//! Recipe persistence. One trait, four adapters; which one is live is a
//! configuration decision made at startup, and callers cannot tell them
//! apart: identity, field normalization and ordering are identical.

pub mod graph;
pub mod memory;
pub mod postgres;
pub mod sql;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{Backend, Config};
use crate::db;
use crate::error::StoreError;

pub use memory::MemoryStore;

/// Image shown when a recipe is created without one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-food.jpg";

/// A stored recipe as every backend returns it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Free-text preparation steps.
    pub recipe: String,
    /// One ingredient per line.
    pub ingredients: String,
    pub cooking_time: String,
    pub difficulty: String,
    pub servings: String,
    pub category: String,
    pub tiktok_url: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the record is updated for the first time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Incoming recipe fields for create and update. Optional fields that the
/// client omits deserialize to empty strings, so every backend persists the
/// same shape and nothing downstream ever sees a null.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub recipe: String,
    pub ingredients: String,
    pub cooking_time: String,
    pub difficulty: String,
    pub servings: String,
    pub category: String,
    pub tiktok_url: String,
}

impl RecipeDraft {
    /// Required-field check, shared by the HTTP boundary and every adapter.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::required("Name"));
        }
        if self.recipe.trim().is_empty() {
            return Err(StoreError::required("Recipe"));
        }
        if self.ingredients.trim().is_empty() {
            return Err(StoreError::required("Ingredients"));
        }
        Ok(())
    }

    /// Apply the uniform defaults before persisting.
    pub fn normalize(mut self) -> Self {
        if self.image_url.trim().is_empty() {
            self.image_url = PLACEHOLDER_IMAGE.to_string();
        }
        self
    }
}

/// Backend-agnostic recipe persistence.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes, newest first. The read path is fail-soft: backend
    /// failures are logged and an empty list returned so public browsing
    /// stays available while the backend is degraded.
    async fn list(&self) -> Vec<Recipe>;

    /// A single recipe, or `None` when the id does not resolve. Backend
    /// connectivity failures surface as errors instead of masquerading as
    /// not-found.
    async fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    /// Validates, normalizes, assigns `id` and `created_at`, persists, and
    /// returns the stored record including the generated fields.
    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// Full replace of all mutable fields; stamps `updated_at`. `None` when
    /// the id does not exist.
    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Option<Recipe>, StoreError>;

    /// Returns whether a record was actually removed. Deleting a missing id
    /// is `false`, not an error.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    fn backend_name(&self) -> &'static str;
}

/// Build the store selected by `RECIPE_BACKEND`.
pub fn connect(config: &Config) -> Arc<dyn RecipeStore> {
    match config.backend {
        Backend::Postgres => {
            let url = required_database_url(config);
            Arc::new(postgres::PostgresStore::new(db::create_pool(url)))
        }
        Backend::PostgresRaw => {
            let url = required_database_url(config);
            Arc::new(sql::RawSqlStore::new(db::create_pool(url)))
        }
        Backend::Neo4j => Arc::new(graph::Neo4jStore::new(
            &config.neo4j_uri,
            &config.neo4j_user,
            &config.neo4j_password,
        )),
        Backend::Memory => Arc::new(MemoryStore::new()),
    }
}

fn required_database_url(config: &Config) -> &str {
    config
        .database_url
        .as_deref()
        .expect("DATABASE_URL must be set for the postgres backends")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> RecipeDraft {
        RecipeDraft {
            name: "Bryndzové halušky".to_string(),
            recipe: "1. Nastrúhame zemiaky.\n2. Uvaríme halušky.".to_string(),
            ingredients: "500g zemiakov\n250g bryndze".to_string(),
            ..RecipeDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(full_draft().validate().is_ok());
    }

    #[test]
    fn missing_name_is_field_specific() {
        let mut draft = full_draft();
        draft.name = "   ".to_string();
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Name cannot be empty");
    }

    #[test]
    fn missing_recipe_is_field_specific() {
        let mut draft = full_draft();
        draft.recipe = String::new();
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Recipe cannot be empty");
    }

    #[test]
    fn missing_ingredients_is_field_specific() {
        let mut draft = full_draft();
        draft.ingredients = String::new();
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Ingredients cannot be empty");
    }

    #[test]
    fn normalize_fills_in_the_placeholder_image() {
        let draft = full_draft().normalize();
        assert_eq!(draft.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn normalize_keeps_a_provided_image() {
        let mut draft = full_draft();
        draft.image_url = "https://example.com/haluskyy.jpg".to_string();
        let draft = draft.normalize();
        assert_eq!(draft.image_url, "https://example.com/haluskyy.jpg");
    }

    #[test]
    fn omitted_optional_fields_deserialize_to_empty_strings() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{"name": "Pizza", "recipe": "Bake it.", "ingredients": "dough\ncheese"}"#,
        )
        .unwrap();
        assert_eq!(draft.description, "");
        assert_eq!(draft.category, "");
        assert_eq!(draft.tiktok_url, "");
        assert!(draft.validate().is_ok());
    }
}
