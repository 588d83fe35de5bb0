use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::client::RemoteSearch;
use super::error::RemoteSearchError;
use super::model::{RemoteDocument, RemoteStatus};

/// Scripted [`RemoteSearch`] for tests.
#[derive(Debug, Default)]
pub struct MockRemoteSearch {
    by_query: HashMap<String, Vec<RemoteDocument>>,
    fallback: Vec<RemoteDocument>,
    failure: Option<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockRemoteSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents returned for any query without a specific response.
    pub fn with_documents(mut self, documents: Vec<RemoteDocument>) -> Self {
        self.fallback = documents;
        self
    }

    /// Documents returned for exactly `query`.
    pub fn with_response(mut self, query: impl Into<String>, documents: Vec<RemoteDocument>) -> Self {
        self.by_query.insert(query.into(), documents);
        self
    }

    /// Every search fails with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Every search sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

impl RemoteSearch for MockRemoteSearch {
    async fn search(&self, query: &str) -> Result<Vec<RemoteDocument>, RemoteSearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(query.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.failure {
            return Err(RemoteSearchError::Unavailable(message.clone()));
        }

        Ok(self
            .by_query
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    async fn status(&self) -> RemoteStatus {
        match &self.failure {
            Some(message) => RemoteStatus::unavailable(message.clone()),
            None => RemoteStatus::available("mock"),
        }
    }
}
