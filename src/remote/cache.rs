//! Query-keyed result cache for remote search.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::client::RemoteSearch;
use super::error::RemoteSearchError;
use super::model::{RemoteDocument, RemoteStatus};

/// Wraps a [`RemoteSearch`] and memoizes successful results per query.
///
/// Entries expire after the TTL and are bounded by capacity; failures are never cached.
pub struct CachedRemoteSearch<R> {
    inner: R,
    entries: Cache<String, Arc<Vec<RemoteDocument>>>,
}

impl<R> CachedRemoteSearch<R> {
    /// Creates a cache of at most `capacity` queries, each kept for `ttl`.
    pub fn new(inner: R, capacity: u64, ttl: Duration) -> Self {
        Self {
            inner,
            entries: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Drops the cached result for `query`.
    pub fn invalidate(&self, query: &str) {
        self.entries.invalidate(query);
    }

    /// Drops every cached result.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }

    /// Returns `true` if `query` has a live cached result.
    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    /// Number of cached queries (after pending maintenance).
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> std::fmt::Debug for CachedRemoteSearch<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedRemoteSearch")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

impl<R: RemoteSearch> RemoteSearch for CachedRemoteSearch<R> {
    async fn search(&self, query: &str) -> Result<Vec<RemoteDocument>, RemoteSearchError> {
        if let Some(hit) = self.entries.get(query) {
            debug!(query, documents = hit.len(), "Remote search cache hit");
            return Ok(hit.as_ref().clone());
        }

        let documents = self.inner.search(query).await?;
        self.entries
            .insert(query.to_string(), Arc::new(documents.clone()));
        Ok(documents)
    }

    async fn status(&self) -> RemoteStatus {
        self.inner.status().await
    }
}
