//! Contract tests for the recipe store, run against the in-memory backend.
//! The real adapters implement the same trait, so these pin down the
//! behavior callers are allowed to rely on regardless of backend.

use receptar_server::error::StoreError;
use receptar_server::store::{MemoryStore, RecipeDraft, RecipeStore, PLACEHOLDER_IMAGE};

fn draft(name: &str) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        recipe: "Zmiešame a upečieme.".to_string(),
        ingredients: "2 vajcia\n100g múky".to_string(),
        ..RecipeDraft::default()
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let store = MemoryStore::new();

    let created = store.create(draft("Pizza Margherita")).await.unwrap();
    let fetched = store
        .get(&created.id)
        .await
        .unwrap()
        .expect("created recipe should be readable");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Pizza Margherita");
    assert_eq!(fetched.created_at, created.created_at);
    assert!(fetched.updated_at.is_none());
}

#[tokio::test]
async fn create_applies_uniform_defaults() {
    let store = MemoryStore::new();

    let created = store.create(draft("Palacinky")).await.unwrap();

    assert_eq!(created.image_url, PLACEHOLDER_IMAGE);
    assert_eq!(created.description, "");
    assert_eq!(created.category, "");
    assert_eq!(created.tiktok_url, "");
}

#[tokio::test]
async fn create_rejects_missing_ingredients_without_side_effects() {
    let store = MemoryStore::new();

    let mut bad = draft("Koláč");
    bad.ingredients = "   ".to_string();

    let error = store.create(bad).await.unwrap_err();
    assert!(matches!(error, StoreError::Validation(_)));
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let store = MemoryStore::new();
    assert!(store.get("does-not-exist").await.unwrap().is_none());
}

#[tokio::test]
async fn update_is_a_full_replace_and_stamps_updated_at() {
    let store = MemoryStore::new();
    let created = store.create(draft("Guláš")).await.unwrap();

    let mut changed = draft("Segedínsky guláš");
    changed.category = "Hlavné jedlá".to_string();

    let updated = store
        .update(&created.id, changed)
        .await
        .unwrap()
        .expect("existing recipe should update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Segedínsky guláš");
    assert_eq!(updated.category, "Hlavné jedlá");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn update_missing_id_leaves_records_unchanged() {
    let store = MemoryStore::new();
    let created = store.create(draft("Lečo")).await.unwrap();

    let result = store.update("999", draft("Iné lečo")).await.unwrap();
    assert!(result.is_none());

    let all = store.list().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Lečo");
    assert_eq!(all[0].id, created.id);
}

#[tokio::test]
async fn delete_is_idempotent_in_effect() {
    let store = MemoryStore::new();
    let created = store.create(draft("Žemľovka")).await.unwrap();

    assert!(store.delete(&created.id).await.unwrap());
    assert!(store.list().await.is_empty());
    assert!(!store.delete(&created.id).await.unwrap());
}

#[tokio::test]
async fn list_returns_newest_first() {
    let store = MemoryStore::new();
    let first = store.create(draft("Prvý")).await.unwrap();
    let second = store.create(draft("Druhý")).await.unwrap();
    let third = store.create(draft("Tretí")).await.unwrap();

    let ids: Vec<String> = store.list().await.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}
