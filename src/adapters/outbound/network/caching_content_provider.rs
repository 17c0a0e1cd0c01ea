use crate::ports::outbound::ContentProvider;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingContentProvider wraps a ContentProvider and adds in-memory caching.
///
/// This adapter implements the decorator pattern: found and not-found
/// answers are both cached per URL, errors are not. The cache is thread-safe
/// and shared by concurrent resolutions.
pub struct CachingContentProvider<P: ContentProvider> {
    inner: P,
    cache: Arc<DashMap<String, Option<String>>>,
}

impl<P: ContentProvider> CachingContentProvider<P> {
    /// Creates a new caching provider wrapping the given inner provider
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<P: ContentProvider> ContentProvider for CachingContentProvider<P> {
    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        if let Some(cached) = self.cache.get(url) {
            return Ok(cached.clone());
        }

        let content = self.inner.fetch(url).await?;
        self.cache.insert(url.to_string(), content.clone());

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock provider for testing that tracks call counts
    struct MockContentProvider {
        call_count: AtomicUsize,
        fail: bool,
    }

    impl MockContentProvider {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentProvider for MockContentProvider {
        async fn fetch(&self, url: &str) -> Result<Option<String>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("connection refused");
            }
            if url.ends_with("missing") {
                return Ok(None);
            }
            Ok(Some(format!("content of {}", url)))
        }
    }

    #[tokio::test]
    async fn test_caching_provider_returns_cached_value() {
        let provider = CachingContentProvider::new(MockContentProvider::new());

        let first = provider.fetch("https://example.org/LICENSE").await.unwrap();
        assert_eq!(first.as_deref(), Some("content of https://example.org/LICENSE"));
        assert_eq!(provider.inner.get_call_count(), 1);

        let second = provider.fetch("https://example.org/LICENSE").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.inner.get_call_count(), 1);
        assert_eq!(provider.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_caching_provider_caches_misses() {
        let provider = CachingContentProvider::new(MockContentProvider::new());

        assert!(provider.fetch("https://example.org/missing").await.unwrap().is_none());
        assert!(provider.fetch("https://example.org/missing").await.unwrap().is_none());
        assert_eq!(provider.inner.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_caching_provider_does_not_cache_errors() {
        let provider = CachingContentProvider::new(MockContentProvider::failing());

        assert!(provider.fetch("https://example.org/LICENSE").await.is_err());
        assert!(provider.fetch("https://example.org/LICENSE").await.is_err());
        assert_eq!(provider.inner.get_call_count(), 2);
        assert_eq!(provider.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_caching_provider_concurrent_access() {
        let provider = Arc::new(CachingContentProvider::new(MockContentProvider::new()));

        let mut handles = vec![];
        for i in 0..10 {
            let provider = Arc::clone(&provider);
            handles.push(tokio::spawn(async move {
                provider
                    .fetch(&format!("https://example.org/{}", i % 3))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }

        assert_eq!(provider.cache_size(), 3);
    }
}
