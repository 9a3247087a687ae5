use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use linguatalk_domain::StoreError;
use serde::Serialize;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Storage failures are all server-side: the reason goes to the log, the
/// client gets a generic message. Absence is modeled as `Option` in the
/// repositories and mapped to 404 at the handlers, so it never lands here.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { ref path, .. } => {
                error!(path = %path.display(), error = %err, "storage I/O failure");
                ApiError::Internal("storage failure".to_string())
            }
            StoreError::MalformedAlignment {
                ref path,
                ref reason,
            } => {
                error!(path = %path.display(), reason = %reason, "malformed alignment file");
                ApiError::Internal("alignment data is unreadable".to_string())
            }
            StoreError::AssetMissing { ref path } => {
                error!(path = %path.display(), "asset missing on disk");
                ApiError::Internal("audio asset missing on disk".to_string())
            }
        }
    }
}
