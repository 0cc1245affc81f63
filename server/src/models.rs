use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::store::{Recipe, RecipeDraft};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id.to_string(),
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            recipe: row.recipe,
            ingredients: row.ingredients,
            cooking_time: row.cooking_time,
            difficulty: row.difficulty,
            servings: row.servings,
            category: row.category,
            tiktok_url: row.tiktok_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub recipe: &'a str,
    pub ingredients: &'a str,
    pub cooking_time: &'a str,
    pub difficulty: &'a str,
    pub servings: &'a str,
    pub category: &'a str,
    pub tiktok_url: &'a str,
}

impl<'a> NewRecipeRow<'a> {
    pub fn from_draft(draft: &'a RecipeDraft) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
            image_url: &draft.image_url,
            recipe: &draft.recipe,
            ingredients: &draft.ingredients,
            cooking_time: &draft.cooking_time,
            difficulty: &draft.difficulty,
            servings: &draft.servings,
            category: &draft.category,
            tiktok_url: &draft.tiktok_url,
        }
    }
}

/// Full replace of the mutable recipe fields; `id` and `created_at` never
/// change, `updated_at` is stamped separately alongside this changeset.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChangeset<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub recipe: &'a str,
    pub ingredients: &'a str,
    pub cooking_time: &'a str,
    pub difficulty: &'a str,
    pub servings: &'a str,
    pub category: &'a str,
    pub tiktok_url: &'a str,
}

impl<'a> RecipeChangeset<'a> {
    pub fn from_draft(draft: &'a RecipeDraft) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
            image_url: &draft.image_url,
            recipe: &draft.recipe,
            ingredients: &draft.ingredients,
            cooking_time: &draft.cooking_time,
            difficulty: &draft.difficulty,
            servings: &draft.servings,
            category: &draft.category,
            tiktok_url: &draft.tiktok_url,
        }
    }
}
