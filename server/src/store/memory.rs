//! In-memory store, used by the test suite and as a zero-dependency dev
//! backend. Same contract as the real adapters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreError;

use super::{Recipe, RecipeDraft, RecipeStore};

pub struct MemoryStore {
    recipes: RwLock<Vec<Recipe>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            recipes: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_id(recipe: &Recipe) -> u64 {
    recipe.id.parse().unwrap_or(0)
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list(&self) -> Vec<Recipe> {
        let mut all = self.recipes.read().unwrap().clone();
        // Newest first; ids are monotonic so they break created_at ties.
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| numeric_id(b).cmp(&numeric_id(a)))
        });
        all
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Ok(self
            .recipes
            .read()
            .unwrap()
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned())
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();

        let recipe = Recipe {
            id: self.next_id.fetch_add(1, Ordering::SeqCst).to_string(),
            name: draft.name,
            description: draft.description,
            image_url: draft.image_url,
            recipe: draft.recipe,
            ingredients: draft.ingredients,
            cooking_time: draft.cooking_time,
            difficulty: draft.difficulty,
            servings: draft.servings,
            category: draft.category,
            tiktok_url: draft.tiktok_url,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.recipes.write().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Option<Recipe>, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();

        let mut recipes = self.recipes.write().unwrap();
        match recipes.iter_mut().find(|recipe| recipe.id == id) {
            Some(existing) => {
                existing.name = draft.name;
                existing.description = draft.description;
                existing.image_url = draft.image_url;
                existing.recipe = draft.recipe;
                existing.ingredients = draft.ingredients;
                existing.cooking_time = draft.cooking_time;
                existing.difficulty = draft.difficulty;
                existing.servings = draft.servings;
                existing.category = draft.category;
                existing.tiktok_url = draft.tiktok_url;
                existing.updated_at = Some(Utc::now());
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut recipes = self.recipes.write().unwrap();
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != id);
        Ok(recipes.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
