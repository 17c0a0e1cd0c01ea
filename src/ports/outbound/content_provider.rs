use crate::shared::Result;
use async_trait::async_trait;

/// ContentProvider port for fetching text content by URL
///
/// Providers compose: caching and chaining are decorators around other
/// providers implementing the same trait.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetches the text behind a URL
    ///
    /// # Returns
    /// `Ok(None)` if this provider cannot serve the URL or the content
    /// does not exist
    ///
    /// # Errors
    /// Returns an error if retrieval was attempted and failed
    async fn fetch(&self, url: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<T: ContentProvider + ?Sized> ContentProvider for Box<T> {
    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        (**self).fetch(url).await
    }
}
