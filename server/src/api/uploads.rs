use crate::api::ErrorResponse;
use crate::assets::{AssetError, StoredAsset, MAX_UPLOAD_SIZE};
use crate::auth::AdminUser;
use crate::SharedState;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use utoipa::{OpenApi, ToSchema};

/// Returns the router for the /api/upload endpoint. The body limit leaves
/// headroom above the image cap for the multipart framing.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/upload", post(upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 64 * 1024))
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "uploads",
    request_body(content_type = "multipart/form-data", content = UploadRequest),
    responses(
        (status = 200, description = "Image stored", body = StoredAsset),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload(
    _admin: AdminUser,
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut file: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Multipart read error: {}", e);
                let message = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    format!("File too large. Maximum size is {} bytes", MAX_UPLOAD_SIZE)
                } else {
                    format!("Failed to read multipart data: {}", e.body_text())
                };
                return (e.status(), Json(ErrorResponse::new(message))).into_response();
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        match field.bytes().await {
            Ok(bytes) => {
                file = Some((original_name, bytes.to_vec()));
                break;
            }
            Err(e) => {
                tracing::warn!("Field read error: {}", e);
                let message = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    format!("File too large. Maximum size is {} bytes", MAX_UPLOAD_SIZE)
                } else {
                    format!("Failed to read file data: {}", e.body_text())
                };
                return (e.status(), Json(ErrorResponse::new(message))).into_response();
            }
        }
    }

    let Some((original_name, data)) = file else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No file uploaded")),
        )
            .into_response();
    };

    match state.assets.upload(&original_name, &data).await {
        Ok(asset) => (StatusCode::OK, Json(asset)).into_response(),
        Err(AssetError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to store uploaded image");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Failed to upload file",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(paths(upload), components(schemas(UploadRequest, StoredAsset)))]
pub struct ApiDoc;
