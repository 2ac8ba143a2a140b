use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::wizard::WizardError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Not implemented")]
    NotImplemented,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Wizard(WizardError::PhaseLocked { phase_id, message }) => {
                tracing::debug!("Refused navigation to locked phase {phase_id}");
                (StatusCode::CONFLICT, "PHASE_LOCKED", message.clone())
            }
            AppError::Wizard(e @ WizardError::MalformedResult { .. }) => {
                tracing::warn!("Rejected collaborator result: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MALFORMED_RESULT",
                    format!("{e}; nothing was changed, please retry"),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                "No generative AI backend is configured".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
