//! Testing utilities including a mock summarizer.
//!
//! Useful for exercising the pipeline and HTTP layer without running LSA or
//! calling a hosted model.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{BackendError, BackendResult};
use crate::traits::{SummaryConstraints, Summarizer};

/// What the mock returns.
#[derive(Debug, Clone, Default)]
enum MockBehavior {
    /// Return the input unchanged
    #[default]
    Echo,
    /// Return a fixed summary
    Fixed(String),
    /// Fail with a model API error carrying this message
    Fail(String),
}

/// Record of a call made to the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSummarizerCall {
    pub input: String,
    pub sentence_count: usize,
    pub language: String,
}

/// A mock summarizer with call tracking and failure injection.
#[derive(Clone, Default)]
pub struct MockSummarizer {
    behavior: Arc<RwLock<MockBehavior>>,
    delay: Option<Duration>,
    calls: Arc<RwLock<Vec<MockSummarizerCall>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockSummarizer {
    /// Create a mock that echoes its input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always return `summary`.
    pub fn with_summary(self, summary: impl Into<String>) -> Self {
        *self.behavior.write().unwrap() = MockBehavior::Fixed(summary.into());
        self
    }

    /// Always fail with `message`.
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.behavior.write().unwrap() = MockBehavior::Fail(message.into());
        self
    }

    /// Sleep before answering, to hold calls open.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockSummarizerCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Highest number of calls observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn summarize(
        &self,
        cleaned: &str,
        constraints: &SummaryConstraints,
    ) -> BackendResult<String> {
        self.calls.write().unwrap().push(MockSummarizerCall {
            input: cleaned.to_string(),
            sentence_count: constraints.sentence_count,
            language: constraints.language.clone(),
        });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let behavior = self.behavior.read().unwrap().clone();
        match behavior {
            MockBehavior::Echo => Ok(cleaned.to_string()),
            MockBehavior::Fixed(summary) => Ok(summary),
            MockBehavior::Fail(message) => Err(BackendError::Api(message)),
        }
    }
}
