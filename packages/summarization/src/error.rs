//! Typed errors for the summarization library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the HTTP layer can
//! map each kind to its own response shape.

use thiserror::Error;

/// Errors that can occur while running the summarization pipeline.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Cleaned input exceeds the configured character cap
    #[error("input too long: {chars} characters (limit {limit})")]
    InputTooLong { chars: usize, limit: usize },

    /// The configured backend failed to produce a summary
    #[error("summarization failed: {0}")]
    Backend(#[source] BackendError),

    /// Request failed validation before reaching the pipeline
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
}

/// Errors raised by a summarization backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Remote model endpoint unreachable or timed out
    #[error("network error: {0}")]
    Network(String),

    /// Remote model returned a non-success response
    #[error("model API error: {0}")]
    Api(String),

    /// Response body could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Local computation failed (matrix decomposition, worker panic)
    #[error("computation error: {0}")]
    Compute(String),

    /// Backend misconfigured (missing key, bad model name)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Result type alias for backend calls.
pub type BackendResult<T> = std::result::Result<T, BackendError>;
