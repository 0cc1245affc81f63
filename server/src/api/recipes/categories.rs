use crate::catalog;
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesResponse {
    /// Distinct non-empty categories across the catalog.
    pub categories: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/categories",
    tag = "recipes",
    responses(
        (status = 200, description = "List of distinct categories", body = CategoriesResponse)
    )
)]
pub async fn list_categories(State(state): State<SharedState>) -> impl IntoResponse {
    let recipes = state.store.list().await;

    (
        StatusCode::OK,
        Json(CategoriesResponse {
            categories: catalog::derive_categories(&recipes),
        }),
    )
        .into_response()
}
