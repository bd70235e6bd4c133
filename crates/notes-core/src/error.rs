use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use crate::validation::FieldErrors;

/// Error translator shared by every controller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(fields) => (StatusCode::BAD_REQUEST, axum::Json(fields)).into_response(),
            Self::Internal(e) => {
                // 4xx are expected client errors; TraceLayer already records every request.
                tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
                let body = serde_json::json!({ "error": e.to_string() });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
