//! Summarizer trait for interchangeable backends.
//!
//! The pipeline only ever talks to `dyn Summarizer`; the extractive and
//! generative strategies (and test doubles) are swapped at startup.

use async_trait::async_trait;

use crate::error::BackendResult;

/// Per-request knobs handed to the backend.
///
/// Each backend reads the fields it understands and ignores the rest:
/// the extractive backend uses `sentence_count`, the generative backend the
/// token budgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConstraints {
    /// Number of sentences to extract
    pub sentence_count: usize,

    /// Language tag from the request (pass-through)
    pub language: String,

    /// Input is truncated to this many whitespace tokens before generation
    pub max_input_tokens: usize,

    /// Lower bound on generated length, in tokens
    pub min_output_tokens: u32,

    /// Upper bound on generated length, in tokens
    pub max_output_tokens: u32,
}

impl Default for SummaryConstraints {
    fn default() -> Self {
        Self {
            sentence_count: 5,
            language: "en".to_string(),
            max_input_tokens: 512,
            min_output_tokens: 30,
            max_output_tokens: 150,
        }
    }
}

impl SummaryConstraints {
    pub fn with_sentence_count(mut self, n: usize) -> Self {
        self.sentence_count = n;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// A summarization strategy.
///
/// Implementations must be deterministic for a fixed input: no sampling.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Short identifier used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    /// Summarize already-cleaned text.
    async fn summarize(&self, cleaned: &str, constraints: &SummaryConstraints)
        -> BackendResult<String>;
}
