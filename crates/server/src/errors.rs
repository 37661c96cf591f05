use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::warn;

/// Adapter-level error: maps the core taxonomy onto HTTP statuses.
/// Validation failures are client errors, missing ids are 404 (and
/// only logged, never fatal), load problems are server-side.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::Validation(_) | ServiceError::Model(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = self.0.to_string();
        if status == StatusCode::NOT_FOUND {
            warn!(error = %msg, "request referenced a missing record");
        }
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
