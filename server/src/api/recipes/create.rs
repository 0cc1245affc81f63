use crate::api::{store_error_response, ErrorResponse};
use crate::auth::AdminUser;
use crate::store::{Recipe, RecipeDraft};
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeDraft,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Json(draft): Json<RecipeDraft>,
) -> impl IntoResponse {
    // Reject bad input here as well, so nothing invalid reaches the store.
    if let Err(e) = draft.validate() {
        return store_error_response(e);
    }

    match state.store.create(draft).await {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to create recipe");
            store_error_response(e)
        }
    }
}
