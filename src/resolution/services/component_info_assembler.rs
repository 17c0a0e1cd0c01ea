use crate::resolution::domain::{ComponentInfo, DataStatus, OverlayResult, PackageMetadata, PackageUrl};

/// ComponentInfoAssembler service building the final per-package record
///
/// Pure merge step without further transformation of the curated data.
pub struct ComponentInfoAssembler;

impl ComponentInfoAssembler {
    pub fn assemble(
        package_url: &PackageUrl,
        overlay: OverlayResult,
        metadata: &PackageMetadata,
    ) -> ComponentInfo {
        let OverlayResult {
            mut data,
            curation_applied,
            traceability_notes,
        } = overlay;

        data.source_download_url = metadata.source_download_url.clone();
        data.package_download_url = metadata.package_download_url.clone();

        let data_status = if curation_applied {
            DataStatus::Curated
        } else {
            DataStatus::NoIssues
        };

        ComponentInfo {
            package_url: package_url.as_str().to_string(),
            data_status,
            traceability_notes,
            component_info_data: Some(data),
        }
    }

    /// Record for a package without scan result
    pub fn not_available(package_url: &PackageUrl) -> ComponentInfo {
        ComponentInfo {
            package_url: package_url.as_str().to_string(),
            data_status: DataStatus::NotAvailable,
            traceability_notes: vec![],
            component_info_data: None,
        }
    }
}
