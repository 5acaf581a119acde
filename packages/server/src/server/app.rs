//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use summarization::{
    BackendKind, GenerativeConfig, GenerativeSummarizer, LsaSummarizer, PipelineConfig,
    SerializedSummarizer, Summarizer, SummaryPipeline,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::error::handle_panic;
use crate::server::routes::{health_handler, summarize_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummaryPipeline>,
}

impl AppState {
    pub fn new(pipeline: SummaryPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Construct the configured backend. Runs once at startup.
pub fn build_summarizer(config: &Config) -> Result<Arc<dyn Summarizer>> {
    match config.backend {
        BackendKind::Lsa => Ok(wrap(LsaSummarizer::new(), config.serialize_backend)),
        BackendKind::Generative => {
            let api_key = config
                .openai_api_key
                .clone()
                .context("OPENAI_API_KEY must be set for the generative backend")?;
            let generative = GenerativeSummarizer::new(
                GenerativeConfig::new(api_key)
                    .with_base_url(config.openai_base_url.clone())
                    .with_model(config.model.clone()),
            )
            .context("Failed to create generative summarizer")?;
            Ok(wrap(generative, config.serialize_backend))
        }
    }
}

fn wrap<S: Summarizer + 'static>(summarizer: S, serialize: bool) -> Arc<dyn Summarizer> {
    if serialize {
        Arc::new(SerializedSummarizer::new(summarizer))
    } else {
        Arc::new(summarizer)
    }
}

/// Build the pipeline from configuration.
pub fn build_pipeline(config: &Config) -> Result<SummaryPipeline> {
    let summarizer = build_summarizer(config)?;

    let pipeline_config = PipelineConfig {
        max_input_tokens: config.max_input_tokens,
        ..PipelineConfig::default()
    }
    .with_gate(config.gate)
    .with_max_words(config.max_output_words);

    tracing::info!(
        backend = summarizer.name(),
        min_words = config.gate.min_words,
        max_input_chars = ?config.gate.max_input_chars,
        max_output_words = config.max_output_words,
        serialized = config.serialize_backend,
        "Summarization backend ready"
    );

    Ok(SummaryPipeline::new(summarizer, pipeline_config))
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/summarize", post(summarize_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
