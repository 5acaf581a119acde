//! Backend-agnostic text summarization.
//!
//! Raw text (possibly HTML) flows through four stages:
//!
//! 1. [`normalize`] strips markup and collapses whitespace
//! 2. [`GatePolicy`] short-circuits tiny inputs and rejects oversized ones
//! 3. a [`Summarizer`] backend produces a candidate summary
//! 4. [`PostProcessor`] drops summaries that repeat the title and caps length
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use summarization::{LsaSummarizer, PipelineConfig, SummaryPipeline, SummaryRequest};
//!
//! let pipeline = SummaryPipeline::new(Arc::new(LsaSummarizer::new()), PipelineConfig::default());
//! let outcome = pipeline.run(&SummaryRequest::new("<p>Some long article...</p>")).await?;
//! println!("{}", outcome.summary);
//! ```
//!
//! # Modules
//!
//! - [`backends`] - LSA and generative summarizers
//! - [`testing`] - Mock summarizer for tests

pub mod backends;
pub mod error;
pub mod gate;
pub mod normalize;
pub mod pipeline;
pub mod postprocess;
pub mod testing;
pub mod traits;
pub mod types;

pub use backends::{
    BackendKind, GenerativeConfig, GenerativeSummarizer, LsaSummarizer, SerializedSummarizer,
};
pub use error::{BackendError, BackendResult, Result, SummarizeError};
pub use gate::{GateDecision, GatePolicy, Verdict};
pub use normalize::{collapse_whitespace, normalize, word_count};
pub use pipeline::{PipelineConfig, SummaryOutcome, SummaryPath, SummaryPipeline};
pub use postprocess::{
    cap_words, finalize, is_similar_to_title, PostProcessor, DEFAULT_MAX_WORDS, ELLIPSIS,
    SIMILAR_TO_TITLE_SENTINEL,
};
pub use traits::{SummaryConstraints, Summarizer};
pub use types::SummaryRequest;
