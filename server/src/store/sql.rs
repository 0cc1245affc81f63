//! Raw-SQL variant of the relational adapter.
//!
//! # Safety
//!
//! All SQL in this module has been reviewed for SQL injection safety:
//! - User input is ALWAYS passed via `.bind()` parameters
//! - No string concatenation or interpolation with user data

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Text, Uuid as SqlUuid};
use uuid::Uuid;

use crate::db::{DbConn, DbPool};
use crate::error::StoreError;

use super::{Recipe, RecipeDraft, RecipeStore};

const LIST_SQL: &str = "SELECT * FROM recipes ORDER BY created_at DESC";

const GET_SQL: &str = "SELECT * FROM recipes WHERE id = $1";

const INSERT_SQL: &str = "INSERT INTO recipes (
        name, description, image_url, recipe, ingredients,
        cooking_time, difficulty, servings, category, tiktok_url
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
    RETURNING *";

const UPDATE_SQL: &str = "UPDATE recipes SET
        name = $1,
        description = $2,
        image_url = $3,
        recipe = $4,
        ingredients = $5,
        cooking_time = $6,
        difficulty = $7,
        servings = $8,
        category = $9,
        tiktok_url = $10,
        updated_at = now()
    WHERE id = $11
    RETURNING *";

const DELETE_SQL: &str = "DELETE FROM recipes WHERE id = $1";

#[derive(QueryableByName)]
struct RawRecipeRow {
    #[diesel(sql_type = SqlUuid)]
    id: Uuid,
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Text)]
    description: String,
    #[diesel(sql_type = Text)]
    image_url: String,
    #[diesel(sql_type = Text)]
    recipe: String,
    #[diesel(sql_type = Text)]
    ingredients: String,
    #[diesel(sql_type = Text)]
    cooking_time: String,
    #[diesel(sql_type = Text)]
    difficulty: String,
    #[diesel(sql_type = Text)]
    servings: String,
    #[diesel(sql_type = Text)]
    category: String,
    #[diesel(sql_type = Text)]
    tiktok_url: String,
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    created_at: DateTime<Utc>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<RawRecipeRow> for Recipe {
    fn from(row: RawRecipeRow) -> Self {
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

pub struct RawSqlStore {
    pool: DbPool,
}

impl RawSqlStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConn, StoreError> {
        self.pool.get().map_err(StoreError::from_pool)
    }
}

#[async_trait]
impl RecipeStore for RawSqlStore {
    async fn list(&self) -> Vec<Recipe> {
        let mut conn = match self.pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(error = %e, "failed to get connection for recipe list");
                return Vec::new();
            }
        };

        match sql_query(LIST_SQL).load::<RawRecipeRow>(&mut conn) {
            Ok(rows) => rows.into_iter().map(Recipe::from).collect(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load recipes");
                Vec::new()
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut conn = self.conn()?;

        let rows: Vec<RawRecipeRow> = sql_query(GET_SQL)
            .bind::<SqlUuid, _>(uuid)
            .load(&mut conn)
            .map_err(StoreError::from_diesel)?;

        Ok(rows.into_iter().next().map(Recipe::from))
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();
        let mut conn = self.conn()?;

        let rows: Vec<RawRecipeRow> = sql_query(INSERT_SQL)
            .bind::<Text, _>(&draft.name)
            .bind::<Text, _>(&draft.description)
            .bind::<Text, _>(&draft.image_url)
            .bind::<Text, _>(&draft.recipe)
            .bind::<Text, _>(&draft.ingredients)
            .bind::<Text, _>(&draft.cooking_time)
            .bind::<Text, _>(&draft.difficulty)
            .bind::<Text, _>(&draft.servings)
            .bind::<Text, _>(&draft.category)
            .bind::<Text, _>(&draft.tiktok_url)
            .load(&mut conn)
            .map_err(StoreError::from_diesel)?;

        rows.into_iter()
            .next()
            .map(Recipe::from)
            .ok_or_else(|| StoreError::Backend("insert returned no row".to_string()))
    }

    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Option<Recipe>, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut conn = self.conn()?;

        let rows: Vec<RawRecipeRow> = sql_query(UPDATE_SQL)
            .bind::<Text, _>(&draft.name)
            .bind::<Text, _>(&draft.description)
            .bind::<Text, _>(&draft.image_url)
            .bind::<Text, _>(&draft.recipe)
            .bind::<Text, _>(&draft.ingredients)
            .bind::<Text, _>(&draft.cooking_time)
            .bind::<Text, _>(&draft.difficulty)
            .bind::<Text, _>(&draft.servings)
            .bind::<Text, _>(&draft.category)
            .bind::<Text, _>(&draft.tiktok_url)
            .bind::<SqlUuid, _>(uuid)
            .load(&mut conn)
            .map_err(StoreError::from_diesel)?;

        Ok(rows.into_iter().next().map(Recipe::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let mut conn = self.conn()?;

        let removed = sql_query(DELETE_SQL)
            .bind::<SqlUuid, _>(uuid)
            .execute(&mut conn)
            .map_err(StoreError::from_diesel)?;

        Ok(removed > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn()?;
        sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(StoreError::from_diesel)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres-raw"
    }
}
