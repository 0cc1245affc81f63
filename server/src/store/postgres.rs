//! Relational adapter using Diesel's typed DSL.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::{DbConn, DbPool};
use crate::error::StoreError;
use crate::models::{NewRecipeRow, RecipeChangeset, RecipeRow};
use crate::schema::recipes;

use super::{Recipe, RecipeDraft, RecipeStore};

pub struct PostgresStore {
    pool: DbPool,
}

impl PostgresStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConn, StoreError> {
        self.pool.get().map_err(StoreError::from_pool)
    }
}

#[async_trait]
impl RecipeStore for PostgresStore {
    async fn list(&self) -> Vec<Recipe> {
        let mut conn = match self.pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(error = %e, "failed to get connection for recipe list");
                return Vec::new();
            }
        };

        match recipes::table
            .order(recipes::created_at.desc())
            .select(RecipeRow::as_select())
            .load(&mut conn)
        {
            Ok(rows) => rows.into_iter().map(Recipe::from).collect(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load recipes");
                Vec::new()
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        // An id that is not a UUID cannot name any row.
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut conn = self.conn()?;

        match recipes::table
            .find(uuid)
            .select(RecipeRow::as_select())
            .first(&mut conn)
        {
            Ok(row) => Ok(Some(row.into())),
            Err(diesel::NotFound) => Ok(None),
            Err(e) => Err(StoreError::from_diesel(e)),
        }
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();
        let mut conn = self.conn()?;

        let row: RecipeRow = diesel::insert_into(recipes::table)
            .values(NewRecipeRow::from_draft(&draft))
            .returning(RecipeRow::as_returning())
            .get_result(&mut conn)
            .map_err(StoreError::from_diesel)?;

        Ok(row.into())
    }

    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Option<Recipe>, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut conn = self.conn()?;

        match diesel::update(recipes::table.find(uuid))
            .set((
                RecipeChangeset::from_draft(&draft),
                recipes::updated_at.eq(Some(Utc::now())),
            ))
            .returning(RecipeRow::as_returning())
            .get_result(&mut conn)
        {
            Ok(row) => Ok(Some(row.into())),
            Err(diesel::NotFound) => Ok(None),
            Err(e) => Err(StoreError::from_diesel(e)),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let mut conn = self.conn()?;

        let removed = diesel::delete(recipes::table.find(uuid))
            .execute(&mut conn)
            .map_err(StoreError::from_diesel)?;

        Ok(removed > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn()?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(StoreError::from_diesel)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
