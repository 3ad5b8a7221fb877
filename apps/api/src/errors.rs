use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::envelope::ApiResponse;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing upload, empty content, wrong content type.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Completion service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Completion service error: {message}")]
    RemoteError { status: Option<u16>, message: String },

    /// The model replied, but not with a decodable analysis.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The message placed in the failure envelope.
    pub fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::RemoteUnavailable(msg) => format!("Failed to analyze resume: {msg}"),
            AppError::RemoteError {
                status: Some(status),
                message,
            } => format!("Failed to analyze resume: provider returned {status}: {message}"),
            AppError::RemoteError {
                status: None,
                message,
            } => format!("Failed to analyze resume: {message}"),
            AppError::MalformedResponse(msg) => format!("Failed to parse analysis: {msg}"),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(e) if e.is_timeout() => {
                AppError::RemoteUnavailable("request timed out".to_string())
            }
            LlmError::Http(e) => AppError::RemoteUnavailable(e.to_string()),
            LlmError::Api { status, message } => AppError::RemoteError {
                status: Some(status),
                message,
            },
            LlmError::Parse(e) => AppError::RemoteError {
                status: None,
                message: format!("unexpected response body: {e}"),
            },
            LlmError::EmptyContent => AppError::RemoteError {
                status: None,
                message: "empty response".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidInput(msg) => tracing::warn!("Rejected input: {msg}"),
            AppError::RemoteUnavailable(msg) => {
                tracing::error!("Completion service unavailable: {msg}")
            }
            AppError::RemoteError { status, message } => {
                tracing::error!("Completion service error (status {status:?}): {message}")
            }
            AppError::MalformedResponse(msg) => tracing::warn!("Malformed model response: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(ApiResponse::<()>::error(self.client_message()));

        // Failures travel inside the envelope; the transport status stays 200.
        (StatusCode::OK, body).into_response()
    }
}
