/// Network adapters for content retrieval
mod caching_content_provider;
mod chained_content_provider;
mod file_url_content_provider;
mod http_content_provider;

pub use caching_content_provider::CachingContentProvider;
pub use chained_content_provider::ChainedContentProvider;
pub use file_url_content_provider::FileUrlContentProvider;
pub use http_content_provider::HttpContentProvider;
