use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// A malformed or oversized upload, with the status the body reader chose.
    Upload(StatusCode, String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upload(status, msg) => (status, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Upload(e.status(), e.body_text())
    }
}

impl From<prospecta_extract::error::ExtractError> for ApiError {
    fn from(e: prospecta_extract::error::ExtractError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<prospecta_pipeline::error::PipelineError> for ApiError {
    fn from(e: prospecta_pipeline::error::PipelineError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
