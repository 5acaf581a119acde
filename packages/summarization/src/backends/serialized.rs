//! Mutual exclusion around a backend that is not safe to call concurrently.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::BackendResult;
use crate::traits::{SummaryConstraints, Summarizer};

/// Wraps a summarizer so only one request runs inference at a time.
pub struct SerializedSummarizer<S> {
    inner: S,
    lock: Mutex<()>,
}

impl<S: Summarizer> SerializedSummarizer<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            lock: Mutex::new(()),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: Summarizer> Summarizer for SerializedSummarizer<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn summarize(
        &self,
        cleaned: &str,
        constraints: &SummaryConstraints,
    ) -> BackendResult<String> {
        let _guard = self.lock.lock().await;
        self.inner.summarize(cleaned, constraints).await
    }
}
