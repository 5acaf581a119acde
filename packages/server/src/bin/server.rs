// Main entry point for the summarization API server

use anyhow::{Context, Result};
use summarizer_server::server::{build_app, build_pipeline, AppState};
use summarizer_server::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,summarizer_server=debug,summarization=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting summarization API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(backend = %config.backend, "Configuration loaded");

    // Backend must be ready before accepting traffic
    let pipeline = build_pipeline(&config).context("Failed to initialize summarization backend")?;
    let app = build_app(AppState::new(pipeline));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Summarize: POST http://localhost:{}/summarize", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
