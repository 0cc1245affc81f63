use crate::catalog;
use crate::store::Recipe;
use crate::SharedState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Case-insensitive substring match against name and description.
    pub q: Option<String>,
    /// Exact category match; omit for all categories.
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "All matching recipes, newest first", body = [Recipe])
    )
)]
pub async fn list_recipes(
    State(state): State<SharedState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let recipes = state.store.list().await;

    let query = params.q.unwrap_or_default();
    let category = params.category.unwrap_or_default();
    if query.is_empty() && category.is_empty() {
        return (StatusCode::OK, Json(recipes)).into_response();
    }

    let filtered: Vec<Recipe> = catalog::filter_recipes(&recipes, &query, &category)
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(filtered)).into_response()
}
