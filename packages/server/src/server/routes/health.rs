use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    backend: String,
}

/// Health check endpoint
///
/// The backend is constructed before the listener binds, so a running
/// process is always ready to serve.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        backend: state.pipeline.backend_name().to_string(),
    })
}
