use crate::ports::outbound::ContentProvider;
use crate::shared::error::ResolutionError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// HttpContentProvider adapter for fetching license texts over HTTP(S)
///
/// Non-HTTP URLs are not served (`Ok(None)`); a 404 answer means the
/// content does not exist. Other failures are retried with a short backoff.
pub struct HttpContentProvider {
    client: reqwest::Client,
    max_retries: u32,
}

impl HttpContentProvider {
    /// Creates a new provider with default timeout and retry configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("scan-curator/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: 3,
        })
    }

    fn is_http_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    async fn fetch_with_retry(&self, url: &str) -> Result<Option<String>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::debug!(url, attempt, error = %e, "content fetch failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ResolutionError::ContentRetrieval {
                reference: url.to_string(),
                details: "No attempt was made".to_string(),
            }
            .into()
        }))
    }

    async fn fetch_once(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(ResolutionError::ContentRetrieval {
                reference: url.to_string(),
                details: format!("Server returned status code {}", response.status()),
            }
            .into());
        }

        Ok(Some(response.text().await?))
    }
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        if !Self::is_http_url(url) {
            return Ok(None);
        }
        self.fetch_with_retry(url).await
    }
}
