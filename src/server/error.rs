//! HTTP mapping of application errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidEventKind(kind) => {
                tracing::warn!("Rejected clock event kind: {}", kind);
                (StatusCode::BAD_REQUEST, "Invalid type").into_response()
            }
            _ => {
                // Log the actual error, return generic message
                tracing::error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
