/// Default number of packages resolved concurrently
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// ResolveRequest - Request DTO for resolving a batch of packages
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package URLs as given by the caller; invalid ones end up as failures
    pub package_urls: Vec<String>,
    /// Curation source; `None` selects the default source, `"none"` disables curation
    pub curation_selector: Option<String>,
    /// Upper bound of in-flight resolutions
    pub max_concurrent: usize,
}

impl ResolveRequest {
    pub fn new(package_urls: Vec<String>, curation_selector: Option<String>) -> Self {
        Self {
            package_urls,
            curation_selector,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }
}
