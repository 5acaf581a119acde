//! Test harness: the real router wired to a mock summarizer.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::Value;
use summarization::testing::MockSummarizer;
use summarization::{GatePolicy, PipelineConfig, Summarizer, SummaryPipeline};
use summarizer_server::server::{build_app, AppState};
use tower::ServiceExt;

pub struct TestHarness {
    pub app: Router,
    pub mock: MockSummarizer,
}

impl TestHarness {
    /// Router with the extractive thresholds (floor 50 words, no cap).
    pub fn extractive(mock: MockSummarizer) -> Self {
        Self::with_gate(mock, GatePolicy::EXTRACTIVE)
    }

    /// Router with the generative thresholds (floor 100 words, 2048 char cap).
    pub fn generative(mock: MockSummarizer) -> Self {
        Self::with_gate(mock, GatePolicy::GENERATIVE)
    }

    pub fn with_gate(mock: MockSummarizer, gate: GatePolicy) -> Self {
        Self::with_summarizer(Arc::new(mock.clone()), gate, mock)
    }

    pub fn with_summarizer(
        summarizer: Arc<dyn Summarizer>,
        gate: GatePolicy,
        mock: MockSummarizer,
    ) -> Self {
        let pipeline = SummaryPipeline::new(summarizer, PipelineConfig::default().with_gate(gate));
        Self {
            app: build_app(AppState::new(pipeline)),
            mock,
        }
    }

    /// POST a JSON value to /summarize.
    pub async fn summarize(&self, body: Value) -> (StatusCode, Value) {
        self.post_raw("/summarize", body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

/// `n` distinct words.
pub fn words(n: usize) -> String {
    (0..n)
        .map(|i| format!("token{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}
