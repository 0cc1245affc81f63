use axum::http::{header, request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{extract::FromRequestParts, Json};
use std::sync::Arc;

use crate::api::ErrorResponse;
use crate::AppState;

use super::token::verify_token;

/// Extractor that validates the bearer session token on admin endpoints.
///
/// Use it as the first argument of any handler that mutates data:
/// ```ignore
/// async fn my_handler(_admin: AdminUser) -> impl IntoResponse {
///     // only reached with a valid, unexpired session token
/// }
/// ```
pub struct AdminUser(pub String);

pub enum AuthError {
    MissingHeader,
    InvalidHeader,
    InvalidFormat,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingHeader => (StatusCode::UNAUTHORIZED, "Missing Authorization header"),
            AuthError::InvalidHeader => (StatusCode::UNAUTHORIZED, "Invalid Authorization header"),
            AuthError::InvalidFormat => (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header format",
            ),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?;

        let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidHeader)?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidFormat)?;

        let username =
            verify_token(&state.config.session_secret, token).ok_or(AuthError::InvalidToken)?;

        Ok(AdminUser(username))
    }
}
