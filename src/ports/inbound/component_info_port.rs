use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::resolution::domain::{ComponentInfo, PackageUrl};
use crate::shared::Result;
use async_trait::async_trait;

/// ComponentInfoPort - Inbound port for component information resolution
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to obtain curated license and copyright data of packages.
#[async_trait(?Send)]
pub trait ComponentInfoPort {
    /// Resolves the component information of a single package
    ///
    /// # Returns
    /// A record with status `NotAvailable` if no scan result exists
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scan result or the curation file cannot be parsed
    /// - The curation selector is unknown
    async fn resolve(
        &self,
        package_url: &PackageUrl,
        curation_selector: Option<&str>,
    ) -> Result<ComponentInfo>;

    /// Resolves a batch of packages, collecting per-package failures
    ///
    /// # Errors
    /// Returns an error only for failures affecting the whole batch,
    /// e.g. an unknown curation selector
    async fn resolve_all(&self, request: ResolveRequest) -> Result<ResolveResponse>;
}
