use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::workflow::PipelineAbort;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A collaborator failed mid-run. The partial state goes back to the caller.
    #[error("{0}")]
    PipelineAborted(Box<PipelineAbort>),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineAbort> for AppError {
    fn from(abort: PipelineAbort) -> Self {
        AppError::PipelineAborted(Box::new(abort))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::PipelineAborted(abort) => {
                tracing::error!("Pipeline aborted: {abort}");
                let body = Json(json!({
                    "error": {
                        "code": "PIPELINE_ABORTED",
                        "message": abort.error.to_string(),
                        "step": abort.step,
                        "category": abort.error.category(),
                    },
                    "partial_state": abort.state,
                }));
                (StatusCode::BAD_GATEWAY, body).into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

fn error_body(status: StatusCode, code: &str, message: String) -> Response {
    let body = Json(json!({
        "error": {
            "code": code,
            "message": message
        }
    }));
    (status, body).into_response()
}
