//! Session cache for fetched markdown
//!
//! Raw markdown is kept in a session-scoped key-value store under
//! `md:{slug}:{date}`, so a new date for the same slug is a new entry. There
//! is no invalidation: the store lives exactly as long as the session. The
//! cache is an optimization only; every store failure degrades to fetching.

use std::collections::HashMap;
use thiserror::Error;

use crate::content::cache_key;
use crate::content::loader::{FetchError, MarkdownSource};

/// Largest document (in characters) admitted into the cache
pub const MAX_CACHE_SIZE: usize = 250_000;

/// Session store failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session store is not available")]
    Unavailable,

    #[error("Session store quota exceeded: need {needed}, {available} available")]
    QuotaExceeded { needed: usize, available: usize },
}

/// A session-scoped text key-value store
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store with a total size quota (in characters)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    used: usize,
}

impl MemoryStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses writes past `quota` characters
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let size = key.chars().count() + value.chars().count();
        let replaced = self
            .entries
            .get(key)
            .map(|old| key.chars().count() + old.chars().count())
            .unwrap_or(0);

        if let Some(quota) = self.quota {
            let available = quota.saturating_sub(self.used - replaced);
            if size > available {
                return Err(StoreError::QuotaExceeded {
                    needed: size,
                    available,
                });
            }
        }

        self.used = self.used - replaced + size;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that is switched off; every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

impl SessionStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// Markdown cache in front of a [`MarkdownSource`]
pub struct ContentCache<S, F> {
    store: S,
    source: F,
    max_entry_size: usize,
}

impl<S: SessionStore, F: MarkdownSource> ContentCache<S, F> {
    /// Create a cache with the default admission limit
    pub fn new(store: S, source: F) -> Self {
        Self::with_limit(store, source, MAX_CACHE_SIZE)
    }

    /// Create a cache admitting documents of at most `max_entry_size` characters
    pub fn with_limit(store: S, source: F, max_entry_size: usize) -> Self {
        Self {
            store,
            source,
            max_entry_size,
        }
    }

    /// Get a post's markdown, from the store when present
    pub async fn get(&mut self, slug: &str, date: &str, file: &str) -> Result<String, FetchError> {
        let key = cache_key(slug, date);

        if let Some(cached) = self.peek_key(&key) {
            tracing::debug!("Cache hit: {}", key);
            return Ok(cached);
        }

        let markdown = self.source.fetch(file).await?;

        if markdown.chars().count() <= self.max_entry_size {
            if let Err(e) = self.store.set(&key, &markdown) {
                tracing::warn!("Failed to cache markdown for {}: {}", key, e);
            }
        } else {
            tracing::debug!("Not caching {}: larger than {} chars", key, self.max_entry_size);
        }

        Ok(markdown)
    }

    /// Cached markdown for a post, without fetching
    pub fn peek(&self, slug: &str, date: &str) -> Option<String> {
        self.peek_key(&cache_key(slug, date))
    }

    fn peek_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(cached) => cached.filter(|md| !md.is_empty()),
            Err(e) => {
                tracing::warn!("Session store not available: {}", e);
                None
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Serves fixed documents and counts fetches
    struct FakeSource {
        files: HashMap<&'static str, String>,
        fetches: Cell<usize>,
    }

    impl FakeSource {
        fn new(files: &[(&'static str, String)]) -> Self {
            Self {
                files: files.iter().cloned().collect(),
                fetches: Cell::new(0),
            }
        }
    }

    impl MarkdownSource for &FakeSource {
        async fn fetch(&self, file: &str) -> Result<String, FetchError> {
            self.fetches.set(self.fetches.get() + 1);
            self.files
                .get(file)
                .cloned()
                .ok_or_else(|| FetchError::new(file, "404"))
        }
    }

    #[tokio::test]
    async fn test_second_get_hits_cache() {
        let source = FakeSource::new(&[("a.md", "# A".to_string())]);
        let mut cache = ContentCache::new(MemoryStore::new(), &source);

        assert_eq!(cache.get("a", "20260101", "a.md").await.unwrap(), "# A");
        assert_eq!(cache.get("a", "20260101", "a.md").await.unwrap(), "# A");
        assert_eq!(source.fetches.get(), 1);
        assert_eq!(cache.peek("a", "20260101").as_deref(), Some("# A"));
    }

    #[tokio::test]
    async fn test_date_is_a_version_tag() {
        let source = FakeSource::new(&[("a.md", "# A".to_string())]);
        let mut cache = ContentCache::new(MemoryStore::new(), &source);

        cache.get("a", "20260101", "a.md").await.unwrap();
        cache.get("a", "20260102", "a.md").await.unwrap();
        assert_eq!(source.fetches.get(), 2);
        assert_eq!(cache.store().len(), 2);
    }

    #[tokio::test]
    async fn test_oversized_entry_not_stored() {
        let source = FakeSource::new(&[("big.md", "x".repeat(11))]);
        let mut cache = ContentCache::with_limit(MemoryStore::new(), &source, 10);

        assert_eq!(cache.get("big", "1", "big.md").await.unwrap().len(), 11);
        assert!(cache.store().is_empty());
        assert!(cache.peek("big", "1").is_none());
    }

    #[tokio::test]
    async fn test_admission_limit_is_inclusive() {
        let source = FakeSource::new(&[("edge.md", "x".repeat(10))]);
        let mut cache = ContentCache::with_limit(MemoryStore::new(), &source, 10);

        cache.get("edge", "1", "edge.md").await.unwrap();
        assert_eq!(cache.store().len(), 1);
    }

    #[tokio::test]
    async fn test_quota_error_is_swallowed() {
        let source = FakeSource::new(&[("a.md", "y".repeat(100))]);
        let mut cache = ContentCache::new(MemoryStore::with_quota(50), &source);

        assert_eq!(cache.get("a", "1", "a.md").await.unwrap().len(), 100);
        assert!(cache.store().is_empty());
    }

    #[tokio::test]
    async fn test_disabled_store_always_fetches() {
        let source = FakeSource::new(&[("a.md", "# A".to_string())]);
        let mut cache = ContentCache::new(DisabledStore, &source);

        cache.get("a", "1", "a.md").await.unwrap();
        cache.get("a", "1", "a.md").await.unwrap();
        assert_eq!(source.fetches.get(), 2);
        assert!(cache.peek("a", "1").is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let source = FakeSource::new(&[]);
        let mut cache = ContentCache::new(MemoryStore::new(), &source);

        let err = cache.get("gone", "1", "gone.md").await.unwrap_err();
        assert_eq!(err.target, "gone.md");
    }

    #[test]
    fn test_memory_store_quota_accounts_replacement() {
        let mut store = MemoryStore::with_quota(10);
        store.set("k", "abcd").unwrap();
        store.set("k", "abcdefgh").unwrap();
        assert_eq!(
            store.set("j", "abc"),
            Err(StoreError::QuotaExceeded {
                needed: 4,
                available: 1
            })
        );
        assert_eq!(store.get("k").unwrap().as_deref(), Some("abcdefgh"));
    }
}
