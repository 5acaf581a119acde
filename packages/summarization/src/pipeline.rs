//! Normalize, gate, summarize, post-process.
//!
//! The pipeline owns no per-request state. The backend is built once at
//! startup and shared behind an `Arc`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{Result, SummarizeError};
use crate::gate::{GatePolicy, Verdict};
use crate::normalize::normalize;
use crate::postprocess::{PostProcessor, DEFAULT_MAX_WORDS};
use crate::traits::{SummaryConstraints, Summarizer};
use crate::types::SummaryRequest;

/// Static settings for a pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub gate: GatePolicy,
    pub max_words: usize,
    pub max_input_tokens: usize,
    pub min_output_tokens: u32,
    pub max_output_tokens: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let constraints = SummaryConstraints::default();
        Self {
            gate: GatePolicy::default(),
            max_words: DEFAULT_MAX_WORDS,
            max_input_tokens: constraints.max_input_tokens,
            min_output_tokens: constraints.min_output_tokens,
            max_output_tokens: constraints.max_output_tokens,
        }
    }
}

impl PipelineConfig {
    pub fn with_gate(mut self, gate: GatePolicy) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}

/// Which route a request took through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPath {
    /// Input was under the word floor and returned without summarization
    ShortCircuit,
    /// Backend output, post-processed
    Summarized,
}

/// Final summary plus routing details for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub summary: String,
    pub path: SummaryPath,
    pub word_count: usize,
}

/// The summarization pipeline, parameterized by backend.
#[derive(Clone)]
pub struct SummaryPipeline {
    summarizer: Arc<dyn Summarizer>,
    post: PostProcessor,
    config: PipelineConfig,
}

impl SummaryPipeline {
    pub fn new(summarizer: Arc<dyn Summarizer>, config: PipelineConfig) -> Self {
        Self {
            summarizer,
            post: PostProcessor::new(config.max_words),
            config,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.summarizer.name()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub async fn run(&self, request: &SummaryRequest) -> Result<SummaryOutcome> {
        if request.sentences == 0 {
            return Err(SummarizeError::InvalidRequest {
                reason: "sentences must be at least 1".into(),
            });
        }

        let cleaned = normalize(&request.text);
        let decision = self.config.gate.classify(&cleaned);

        debug!(
            word_count = decision.word_count,
            char_count = decision.char_count,
            verdict = ?decision.verdict,
            "Length gate decision"
        );

        match decision.verdict {
            Verdict::TooLong => {
                let limit = self.config.gate.max_input_chars.unwrap_or_default();
                warn!(chars = decision.char_count, limit, "Rejecting oversized input");
                Err(SummarizeError::InputTooLong {
                    chars: decision.char_count,
                    limit,
                })
            }
            Verdict::Short => Ok(SummaryOutcome {
                summary: self.post.cap(&cleaned),
                path: SummaryPath::ShortCircuit,
                word_count: decision.word_count,
            }),
            Verdict::NeedsSummary => {
                let constraints = self.constraints_for(request);
                let candidate = self
                    .summarizer
                    .summarize(&cleaned, &constraints)
                    .await
                    .map_err(|e| {
                        warn!(backend = self.summarizer.name(), error = %e, "Backend failed");
                        SummarizeError::Backend(e)
                    })?;

                info!(
                    backend = self.summarizer.name(),
                    input_words = decision.word_count,
                    output_words = candidate.split_whitespace().count(),
                    "Summarized input"
                );

                Ok(SummaryOutcome {
                    summary: self.post.finalize(&candidate, &request.title),
                    path: SummaryPath::Summarized,
                    word_count: decision.word_count,
                })
            }
        }
    }

    fn constraints_for(&self, request: &SummaryRequest) -> SummaryConstraints {
        SummaryConstraints {
            sentence_count: request.sentences,
            language: request.lang.clone(),
            max_input_tokens: self.config.max_input_tokens,
            min_output_tokens: self.config.min_output_tokens,
            max_output_tokens: self.config.max_output_tokens,
        }
    }
}
