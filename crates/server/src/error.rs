//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rx_core::{ErrorBody, ValidationError};

use crate::ai::CompletionError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Required input missing or body unreadable (400)
    BadRequest(String),
    /// Upstream, transport or parse failure (500)
    Analysis(CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(reason) => {
                tracing::warn!(reason = %reason, "Rejected analysis request");
                (StatusCode::BAD_REQUEST, ErrorBody::missing_input())
            }
            AppError::Analysis(err) => {
                // Detail stays in the server log; the client only sees the generic message.
                tracing::error!(kind = err.kind(), error = %err, "API Error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::analysis_failed())
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Analysis(err)
    }
}
