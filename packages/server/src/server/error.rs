//! Top-level error boundary.
//!
//! Every handler failure ends up here and is mapped to one of a small set
//! of response shapes. Failures carry their kind, message and the rendered
//! source chain so operators can diagnose them from the response alone.

use std::any::Any;
use std::error::Error as StdError;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use summarization::SummarizeError;
use thiserror::Error;

/// Fixed message for oversized input. No internal detail is leaked.
pub const INPUT_TOO_LONG_MESSAGE: &str = "Input text too long. Please reduce the content.";

/// Body for HTTP 413.
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub error: String,
}

/// Body for HTTP 422 and 500.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub detail: String,
    pub traceback: Option<String>,
}

/// Errors a route can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("input text too long")]
    InputTooLong,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Summarization(SummarizeError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Error kind reported in `error_type`.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InputTooLong => "InputTooLong",
            ApiError::Validation(_) => "ValidationError",
            ApiError::Summarization(_) => "RuntimeError",
            ApiError::Internal(_) => "InternalError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::InputTooLong => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Summarization(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn traceback(&self) -> Option<String> {
        match self {
            ApiError::Summarization(e) => render_chain(e.source()),
            ApiError::Internal(e) => render_chain(e.chain().nth(1)),
            ApiError::InputTooLong | ApiError::Validation(_) => None,
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::InputTooLong { .. } => ApiError::InputTooLong,
            SummarizeError::InvalidRequest { reason } => ApiError::Validation(reason),
            other => ApiError::Summarization(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::InputTooLong = self {
            return (
                status,
                Json(RejectionResponse {
                    error: INPUT_TOO_LONG_MESSAGE.to_string(),
                }),
            )
                .into_response();
        }

        if status.is_server_error() {
            tracing::error!(error_type = self.kind(), error = %self, "Request failed");
        } else {
            tracing::debug!(error_type = self.kind(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error_type: self.kind().to_string(),
            detail: self.to_string(),
            traceback: self.traceback(),
        };

        (status, Json(body)).into_response()
    }
}

/// Render an error's causes, one per line, numbered from the outermost.
fn render_chain(first: Option<&(dyn StdError + 'static)>) -> Option<String> {
    let mut lines = Vec::new();
    let mut current = first;
    while let Some(err) = current {
        lines.push(format!("{}: {}", lines.len(), err));
        current = err.source();
    }
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Turn a handler panic into the same 500 shape as any other failure.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", message)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use summarization::BackendError;

    #[test]
    fn maps_pipeline_errors() {
        let too_long: ApiError = SummarizeError::InputTooLong { chars: 10, limit: 5 }.into();
        assert!(matches!(too_long, ApiError::InputTooLong));

        let invalid: ApiError = SummarizeError::InvalidRequest {
            reason: "bad".into(),
        }
        .into();
        assert_eq!(invalid.kind(), "ValidationError");

        let backend: ApiError = SummarizeError::Backend(BackendError::Api("boom".into())).into();
        assert_eq!(backend.kind(), "RuntimeError");
        assert_eq!(backend.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn backend_traceback_lists_cause() {
        let err: ApiError = SummarizeError::Backend(BackendError::Api("boom".into())).into();
        assert_eq!(err.to_string(), "summarization failed: model API error: boom");
        assert_eq!(err.traceback().as_deref(), Some("0: model API error: boom"));
    }

    #[test]
    fn internal_without_cause_has_no_traceback() {
        let err = ApiError::Internal(anyhow::anyhow!("plain"));
        assert_eq!(err.traceback(), None);
    }

    #[test]
    fn internal_with_context_renders_chain() {
        let err = ApiError::Internal(
            anyhow::anyhow!("root cause").context("outer"),
        );
        assert_eq!(err.to_string(), "outer");
        assert_eq!(err.traceback().as_deref(), Some("0: root cause"));
    }

    #[test]
    fn panic_payloads_become_internal_errors() {
        let response = handle_panic(Box::new("kaboom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
