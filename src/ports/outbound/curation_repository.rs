use crate::resolution::domain::{Curation, PackageUrl};
use crate::shared::Result;
use async_trait::async_trait;

/// Selector value that disables curations
pub const NO_CURATIONS_SELECTOR: &str = "none";

/// Selector value naming the default curation source
pub const DEFAULT_CURATIONS_SELECTOR: &str = "default";

/// CurationRepository port for looking up human-maintained curations
#[async_trait]
pub trait CurationRepository: Send + Sync {
    /// Finds the curation of a package in the source named by the selector
    ///
    /// # Arguments
    /// * `package_url` - Package to look up
    /// * `selector` - Curation source; `None` means the default source,
    ///   `"none"` disables curation
    ///
    /// # Returns
    /// `Ok(None)` when the source has no curation for the package
    ///
    /// # Errors
    /// Returns an error if:
    /// - The selector names no known source
    /// - The curation file cannot be read or parsed
    async fn find_curations(
        &self,
        package_url: &PackageUrl,
        selector: Option<&str>,
    ) -> Result<Option<Curation>>;

    /// Checks that the selector names a known curation source
    fn validate_selector(&self, selector: Option<&str>) -> Result<()>;
}
