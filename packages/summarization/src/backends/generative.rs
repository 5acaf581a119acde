//! Generative summarization through an OpenAI-compatible chat endpoint.
//!
//! The model is treated as an opaque sequence-to-sequence summarizer: the
//! cleaned text goes in (truncated to the input token budget), a summary of
//! bounded length comes out. Temperature is pinned to zero so the output is
//! deterministic for a given model and input.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BackendError, BackendResult};
use crate::traits::{SummaryConstraints, Summarizer};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the generative backend.
#[derive(Debug, Clone)]
pub struct GenerativeConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GenerativeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (for Azure, proxies, local inference servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Chat completion request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Summarizer backed by a hosted language model.
#[derive(Clone)]
pub struct GenerativeSummarizer {
    http_client: Client,
    config: GenerativeConfig,
}

impl GenerativeSummarizer {
    pub fn new(config: GenerativeConfig) -> BackendResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(BackendError::Config("API key is empty".into()));
        }
        Ok(Self {
            http_client: Client::new(),
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request(&self, cleaned: &str, constraints: &SummaryConstraints) -> ChatRequest<'_> {
        let input = truncate_tokens(cleaned, constraints.max_input_tokens);

        let system = format!(
            "You are a summarization model. Summarize the user's text in {} to {} tokens. \
             Use only information present in the text. Reply with the summary only.",
            constraints.min_output_tokens, constraints.max_output_tokens
        );

        ChatRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: format!("summarize: {}", input),
                },
            ],
            temperature: 0.0,
            max_tokens: constraints.max_output_tokens,
        }
    }
}

#[async_trait]
impl Summarizer for GenerativeSummarizer {
    fn name(&self) -> &'static str {
        "generative"
    }

    async fn summarize(
        &self,
        cleaned: &str,
        constraints: &SummaryConstraints,
    ) -> BackendResult<String> {
        let start = Instant::now();
        let request = self.build_request(cleaned, constraints);

        let response = self
            .http_client
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Model request failed");
                BackendError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Model API error");
            return Err(BackendError::Api(format!("{}: {}", status, error_text)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| BackendError::Api("model returned no content".into()))?;

        debug!(
            model = %self.config.model,
            duration_ms = start.elapsed().as_millis(),
            "Generative summary complete"
        );

        Ok(content.trim().to_string())
    }
}

/// Keep at most `max_tokens` whitespace tokens.
fn truncate_tokens(text: &str, max_tokens: usize) -> String {
    text.split_whitespace()
        .take(max_tokens)
        .collect::<Vec<_>>()
        .join(" ")
}
