//! Error handling

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::model::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("model not found")]
    ModelUnavailable,

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("inference error: {0}")]
    InferenceError(String),

    /// Body could not be extracted at all
    #[error("invalid request body: {1}")]
    InvalidBody(StatusCode, String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ModelUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "model not found"),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::InferenceError(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "prediction failed")
            }
            AppError::InvalidBody(status, msg) => (*status, msg.as_str()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<InferenceError> for AppError {
    /// Every load-time failure is reported as the generic "model not found"
    fn from(err: InferenceError) -> Self {
        match &err {
            InferenceError::Load(_)
            | InferenceError::NotFound(_)
            | InferenceError::ChecksumMismatch { .. }
            | InferenceError::Io(_)
            | InferenceError::Session(_) => {
                tracing::warn!("Model unavailable: {}", err.root());
                AppError::ModelUnavailable
            }
            other => AppError::InferenceError(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::InvalidBody(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.status(), rejection.body_text())
    }
}
