//! Graph adapter speaking the Neo4j transactional Cypher endpoint over HTTP.
//!
//! Recipes are `(:Recipe)` nodes whose properties mirror the relational
//! columns. Timestamps are stored as fixed-width UTC RFC 3339 strings so
//! `ORDER BY r.createdAt DESC` sorts chronologically.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use url::Url;
use uuid::Uuid;

use crate::error::StoreError;

use super::{Recipe, RecipeDraft, RecipeStore};

const LIST_CYPHER: &str = "MATCH (r:Recipe) RETURN r ORDER BY r.createdAt DESC";
const GET_CYPHER: &str = "MATCH (r:Recipe {id: $id}) RETURN r";
const CREATE_CYPHER: &str = "CREATE (r:Recipe $props) RETURN r";
const UPDATE_CYPHER: &str = "MATCH (r:Recipe {id: $id}) SET r += $props RETURN r";
const DELETE_CYPHER: &str = "MATCH (r:Recipe {id: $id}) DETACH DELETE r RETURN count(r) AS deleted";
const PING_CYPHER: &str = "RETURN 1";

pub struct Neo4jStore {
    client: reqwest::Client,
    endpoint: Url,
    user: String,
    password: String,
}

impl Neo4jStore {
    pub fn new(uri: &str, user: &str, password: &str) -> Self {
        let endpoint = Url::parse(uri)
            .and_then(|base| base.join("/db/neo4j/tx/commit"))
            .expect("NEO4J_URI must be a valid URL");

        Self {
            client: reqwest::Client::new(),
            endpoint,
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    /// Run a single statement in an auto-committed transaction and return
    /// the first cell of each result row.
    async fn run(&self, statement: &str, parameters: Value) -> Result<Vec<Value>, StoreError> {
        let body = json!({
            "statements": [{ "statement": statement, "parameters": parameters }]
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.user, Some(&self.password))
            .json(&body)
            .send()
            .await
            .map_err(StoreError::from_reqwest)?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend(format!("HTTP {status}: {detail}")));
        }

        let payload: Value = response.json().await.map_err(StoreError::from_reqwest)?;

        if let Some(error) = payload["errors"].as_array().and_then(|e| e.first()) {
            let message = error["message"].as_str().unwrap_or("unknown Cypher error");
            return Err(StoreError::Backend(message.to_string()));
        }

        let rows = payload["results"][0]["data"]
            .as_array()
            .map(|data| {
                data.iter()
                    .filter_map(|entry| entry["row"].get(0).cloned())
                    .collect()
            })
            .unwrap_or_default();

        Ok(rows)
    }
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn draft_props(draft: &RecipeDraft) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("name".to_string(), json!(draft.name));
    props.insert("description".to_string(), json!(draft.description));
    props.insert("imageUrl".to_string(), json!(draft.image_url));
    props.insert("recipe".to_string(), json!(draft.recipe));
    props.insert("ingredients".to_string(), json!(draft.ingredients));
    props.insert("cookingTime".to_string(), json!(draft.cooking_time));
    props.insert("difficulty".to_string(), json!(draft.difficulty));
    props.insert("servings".to_string(), json!(draft.servings));
    props.insert("category".to_string(), json!(draft.category));
    props.insert("tiktokUrl".to_string(), json!(draft.tiktok_url));
    props
}

fn node_to_recipe(node: &Value) -> Option<Recipe> {
    let props = node.as_object()?;
    let text = |key: &str| -> String {
        props
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    let created_at = props
        .get("createdAt")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc))?;

    let updated_at = props
        .get("updatedAt")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc));

    Some(Recipe {
        id: text("id"),
        name: text("name"),
        description: text("description"),
        image_url: text("imageUrl"),
        recipe: text("recipe"),
        ingredients: text("ingredients"),
        cooking_time: text("cookingTime"),
        difficulty: text("difficulty"),
        servings: text("servings"),
        category: text("category"),
        tiktok_url: text("tiktokUrl"),
        created_at,
        updated_at,
    })
}

#[async_trait]
impl RecipeStore for Neo4jStore {
    async fn list(&self) -> Vec<Recipe> {
        match self.run(LIST_CYPHER, json!({})).await {
            Ok(rows) => rows.iter().filter_map(node_to_recipe).collect(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load recipes");
                Vec::new()
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let rows = self.run(GET_CYPHER, json!({ "id": id })).await?;
        Ok(rows.first().and_then(node_to_recipe))
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();

        let mut props = draft_props(&draft);
        props.insert("id".to_string(), json!(Uuid::new_v4().to_string()));
        props.insert("createdAt".to_string(), json!(timestamp(Utc::now())));

        let rows = self
            .run(CREATE_CYPHER, json!({ "props": props }))
            .await?;

        rows.first()
            .and_then(node_to_recipe)
            .ok_or_else(|| StoreError::Backend("create returned no node".to_string()))
    }

    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Option<Recipe>, StoreError> {
        draft.validate()?;
        let draft = draft.normalize();

        let mut props = draft_props(&draft);
        props.insert("updatedAt".to_string(), json!(timestamp(Utc::now())));

        let rows = self
            .run(UPDATE_CYPHER, json!({ "id": id, "props": props }))
            .await?;

        Ok(rows.first().and_then(node_to_recipe))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let rows = self.run(DELETE_CYPHER, json!({ "id": id })).await?;
        let deleted = rows.first().and_then(Value::as_u64).unwrap_or(0);
        Ok(deleted > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.run(PING_CYPHER, json!({})).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "neo4j"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_node_properties() {
        let node = json!({
            "id": "3f0c9f5e-7c1d-4f6e-9a3b-2d8e1c4b5a60",
            "name": "Kapustnica",
            "description": "Hustá kyslá polievka.",
            "imageUrl": "/placeholder-food.jpg",
            "recipe": "1. Uvaríme kapustu.",
            "ingredients": "kyslá kapusta\nklobása",
            "category": "Polievky",
            "createdAt": "2024-03-01T10:00:00.000000Z"
        });

        let recipe = node_to_recipe(&node).expect("node should parse");
        assert_eq!(recipe.name, "Kapustnica");
        assert_eq!(recipe.category, "Polievky");
        assert_eq!(recipe.cooking_time, "");
        assert!(recipe.updated_at.is_none());
        assert_eq!(
            recipe.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn node_without_created_at_is_rejected() {
        let node = json!({ "id": "x", "name": "Bez času" });
        assert!(node_to_recipe(&node).is_none());
    }

    #[test]
    fn timestamps_sort_lexicographically() {
        let earlier = timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
        let later = timestamp(Utc.with_ymd_and_hms(2024, 11, 20, 8, 30, 0).unwrap());
        assert!(earlier < later);
    }
}
