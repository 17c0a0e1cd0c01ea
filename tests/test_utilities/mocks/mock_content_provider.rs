use async_trait::async_trait;
use scan_curator::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ContentProvider serving fixed texts and counting requests
#[derive(Default, Clone)]
pub struct MockContentProvider {
    contents: HashMap<String, String>,
    pub calls: Arc<AtomicUsize>,
}

impl MockContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, url: &str, content: &str) -> Self {
        self.contents.insert(url.to_string(), content.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.contents.get(url).cloned())
    }
}
