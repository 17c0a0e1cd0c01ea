use crate::resolution::domain::{PackageMetadata, PackageUrl};
use crate::resolution::policies::ContentPathResolver;
use crate::shared::Result;
use async_trait::async_trait;

/// Raw scan document of a package together with its package metadata
#[derive(Debug, Clone, Default)]
pub struct RawScanData {
    /// Unparsed ScanCode JSON document
    pub raw_scan_result: String,
    pub metadata: PackageMetadata,
}

/// RawScanStore port for accessing stored scan results and package content
///
/// This port abstracts where scan results live (local directory tree,
/// object storage, ...). It also owns the mapping of scanned paths to
/// retrievable content, which is why it extends [`ContentPathResolver`].
///
/// # Async Support
/// Implementations must be `Send + Sync` so that resolutions of
/// different packages can run concurrently.
#[async_trait]
pub trait RawScanStore: ContentPathResolver + Send + Sync {
    /// Reads the raw scan result of a package
    ///
    /// # Returns
    /// `Ok(None)` when no scan result exists for the package
    ///
    /// # Errors
    /// Returns an error if a scan result exists but cannot be read
    async fn read_scan_result(&self, package_url: &PackageUrl) -> Result<Option<RawScanData>>;

    /// Retrieves the text behind a content reference
    ///
    /// `pkgcontent:` URIs are resolved against the package content; other
    /// references (web URLs) may be fetched remotely.
    ///
    /// # Returns
    /// `Ok(None)` when the content is not available
    async fn retrieve_content(
        &self,
        package_url: &PackageUrl,
        reference: &str,
    ) -> Result<Option<String>>;
}
