use crate::application::dto::{ResolutionFailure, ResolveRequest, ResolveResponse};
use crate::ports::inbound::ComponentInfoPort;
use crate::ports::outbound::{CurationRepository, ProgressReporter, RawScanStore};
use crate::resolution::domain::{ComponentInfo, ComponentInfoData, PackageUrl, RawScanResult};
use crate::resolution::services::{
    ComponentInfoAssembler, CurationOverlay, MappingThresholds, MetadataGenerator, ScanMapper,
};
use crate::shared::error::ResolutionError;
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};

/// ResolveComponentInfoUseCase - Core use case resolving curated component data
///
/// Per package: read the raw scan result, look up the curation, map the
/// scan, overlay the curation, retrieve license and notice texts and
/// assemble the final record.
///
/// # Type Parameters
/// * `S` - RawScanStore implementation
/// * `C` - CurationRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveComponentInfoUseCase<S, C, PR> {
    scan_store: S,
    curation_repository: C,
    progress_reporter: PR,
    mapper: ScanMapper,
}

impl<S, C, PR> ResolveComponentInfoUseCase<S, C, PR>
where
    S: RawScanStore,
    C: CurationRepository,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies
    pub fn new(
        scan_store: S,
        curation_repository: C,
        progress_reporter: PR,
        thresholds: MappingThresholds,
    ) -> Self {
        Self {
            scan_store,
            curation_repository,
            progress_reporter,
            mapper: ScanMapper::new(thresholds),
        }
    }

    /// Resolves the component information of a single package
    ///
    /// Missing scan data yields a `NotAvailable` record, not an error.
    pub async fn resolve(
        &self,
        package_url: &PackageUrl,
        curation_selector: Option<&str>,
    ) -> Result<ComponentInfo> {
        let Some(scan_data) = self.scan_store.read_scan_result(package_url).await? else {
            tracing::debug!(package_url = %package_url, "no scan data, component info not available");
            return Ok(ComponentInfoAssembler::not_available(package_url));
        };

        let raw_scan = RawScanResult::from_json(&scan_data.raw_scan_result).map_err(|e| {
            ResolutionError::ScanParse {
                package_url: package_url.to_string(),
                details: e.to_string(),
            }
        })?;

        let curation = self
            .curation_repository
            .find_curations(package_url, curation_selector)
            .await?;

        let mapped = self
            .mapper
            .map(package_url, &raw_scan, curation.as_ref(), &self.scan_store);
        let mut overlay = CurationOverlay::apply(mapped, curation.as_ref());
        self.retrieve_texts(package_url, &mut overlay.data).await;

        let info = ComponentInfoAssembler::assemble(package_url, overlay, &scan_data.metadata);

        if let Some(data) = &info.component_info_data {
            tracing::debug!(
                package_url = %package_url,
                licenses = data.licenses.len(),
                copyrights = data.copyrights.len(),
                notice_files = usize::from(data.notice_file_url.is_some()),
                status = ?info.data_status,
                "resolved component info"
            );
        }

        Ok(info)
    }

    /// Resolves a batch of packages with bounded concurrency
    ///
    /// Results keep the order of the request. Per-package errors are
    /// collected as failures; an unknown curation selector aborts the batch.
    pub async fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let selector = request.curation_selector.as_deref();
        self.curation_repository.validate_selector(selector)?;

        let total = request.package_urls.len();
        self.progress_reporter.report(&format!(
            "🔍 Resolving component information for {} package(s)...",
            total
        ));

        let mut results = stream::iter(
            request
                .package_urls
                .iter()
                .map(|raw| self.resolve_raw(raw, selector)),
        )
        .buffered(request.max_concurrent.max(1));

        let mut components = Vec::with_capacity(total);
        let mut failures = Vec::new();
        let mut done = 0;

        while let Some((raw, result)) = results.next().await {
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some(raw.as_str()));
            match result {
                Ok(info) => components.push(info),
                Err(e) => {
                    tracing::warn!(package_url = %raw, error = %e, "failed to resolve package");
                    failures.push(ResolutionFailure {
                        package_url: raw,
                        error: e.to_string(),
                    });
                }
            }
        }

        self.report_summary(&components, &failures);

        let metadata = MetadataGenerator::generate_default_metadata();
        Ok(ResolveResponse::new(metadata, components, failures))
    }

    async fn resolve_raw(&self, raw: &str, selector: Option<&str>) -> (String, Result<ComponentInfo>) {
        let result = match PackageUrl::new(raw) {
            Ok(package_url) => self.resolve(&package_url, selector).await,
            Err(e) => Err(e),
        };
        (raw.to_string(), result)
    }

    /// Fills license and notice texts; retrieval failures only leave the text empty
    async fn retrieve_texts(&self, package_url: &PackageUrl, data: &mut ComponentInfoData) {
        for license in data.licenses.values_mut() {
            let reference = license.license_url().to_string();
            let text = self.retrieve_optional(package_url, &reference).await;
            license.set_given_license_text(text);
        }

        if let Some(notice_url) = data.notice_file_url.clone() {
            data.notice_file_content = self.retrieve_optional(package_url, &notice_url).await;
        }
    }

    async fn retrieve_optional(&self, package_url: &PackageUrl, reference: &str) -> Option<String> {
        match self.scan_store.retrieve_content(package_url, reference).await {
            Ok(content) => content,
            Err(e) => {
                let recoverable = e
                    .downcast_ref::<ResolutionError>()
                    .is_some_and(ResolutionError::is_recoverable);
                if recoverable {
                    tracing::warn!(
                        package_url = %package_url,
                        reference,
                        error = %e,
                        "could not retrieve content"
                    );
                } else {
                    // e.g. path traversal in scan data; still leaves only the text empty
                    tracing::error!(
                        package_url = %package_url,
                        reference,
                        error = %e,
                        "content reference rejected"
                    );
                }
                None
            }
        }
    }

    fn report_summary(&self, components: &[ComponentInfo], failures: &[ResolutionFailure]) {
        let available = components.iter().filter(|c| c.is_data_available()).count();
        let not_available = components.len() - available;

        if failures.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "✅ Resolved {} package(s): {} with data, {} without scan result",
                components.len(),
                available,
                not_available
            ));
        } else {
            for failure in failures {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to resolve {}: {}",
                    failure.package_url,
                    failure.error.lines().next().unwrap_or_default()
                ));
            }
            self.progress_reporter.report_completion(&format!(
                "⚠️  Resolved {} package(s), {} failed",
                components.len(),
                failures.len()
            ));
        }
    }
}

#[async_trait(?Send)]
impl<S, C, PR> ComponentInfoPort for ResolveComponentInfoUseCase<S, C, PR>
where
    S: RawScanStore,
    C: CurationRepository,
    PR: ProgressReporter,
{
    async fn resolve(
        &self,
        package_url: &PackageUrl,
        curation_selector: Option<&str>,
    ) -> Result<ComponentInfo> {
        ResolveComponentInfoUseCase::resolve(self, package_url, curation_selector).await
    }

    async fn resolve_all(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        self.execute(request).await
    }
}
