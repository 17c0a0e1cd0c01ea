use crate::ports::outbound::ContentProvider;
use crate::shared::Result;
use async_trait::async_trait;

/// ChainedContentProvider asking a list of providers in order
///
/// The first provider returning content wins. An error of one provider is
/// logged and the next provider is asked; if no provider has the content
/// and at least one failed, the last error is returned.
#[derive(Default)]
pub struct ChainedContentProvider {
    providers: Vec<Box<dyn ContentProvider>>,
}

impl ChainedContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: impl ContentProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl ContentProvider for ChainedContentProvider {
    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        let mut last_error = None;

        for provider in &self.providers {
            match provider.fetch(url).await {
                Ok(Some(content)) => return Ok(Some(content)),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(url, error = %e, "content provider failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}
