use crate::api::{store_error_response, ErrorResponse};
use crate::auth::AdminUser;
use crate::store::{Recipe, RecipeDraft};
use crate::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(draft): Json<RecipeDraft>,
) -> impl IntoResponse {
    if let Err(e) = draft.validate() {
        return store_error_response(e);
    }

    match state.store.update(&id, draft).await {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Recipe not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to update recipe");
            store_error_response(e)
        }
    }
}
