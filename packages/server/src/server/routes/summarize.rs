//! POST /summarize

use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::Serialize;
use summarization::SummaryRequest;
use tracing::Instrument;
use uuid::Uuid;

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Success body. Always exactly one element.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: Vec<String>,
}

/// Summarize the request text with the configured backend.
pub async fn summarize_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload?;

    let span = tracing::info_span!(
        "summarize",
        request_id = %Uuid::new_v4(),
        backend = state.pipeline.backend_name(),
    );

    let outcome = state.pipeline.run(&request).instrument(span).await?;

    Ok(Json(SummaryResponse {
        summary: vec![outcome.summary],
    }))
}
