pub mod auth;
pub mod health;

use crate::SharedState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Routes that never require a session token.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/auth/login", post(auth::login::login))
        .route("/api/health", get(health::health))
}

#[derive(OpenApi)]
#[openapi(
    paths(auth::login::login, health::health),
    components(schemas(
        auth::login::LoginRequest,
        auth::login::LoginResponse,
        health::HealthResponse,
    ))
)]
pub struct ApiDoc;
