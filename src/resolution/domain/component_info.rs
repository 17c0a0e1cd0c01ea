use super::LicenseInfo;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Licenses keyed by SPDX id, in first-seen order
pub type LicenseSet = IndexMap<String, LicenseInfo>;

/// Output of the scan mapper, before curations are overlaid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedResult {
    pub licenses: LicenseSet,
    /// Copyright statements verbatim, duplicates included
    pub copyrights: Vec<String>,
    pub notice_file_url: Option<String>,
    /// Data-quality findings, e.g. a Classpath exception without GPL license
    pub warnings: Vec<String>,
}

/// Curated data of a component plus the provenance of the applied curations
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayResult {
    pub data: ComponentInfoData,
    pub curation_applied: bool,
    pub traceability_notes: Vec<String>,
}

/// Package metadata delivered by the raw scan store next to the scan result
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    #[serde(default)]
    pub source_download_url: Option<String>,
    #[serde(default)]
    pub package_download_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfoData {
    #[serde(serialize_with = "serialize_license_values")]
    pub licenses: LicenseSet,
    pub copyrights: Vec<String>,
    pub notice_file_url: Option<String>,
    pub notice_file_content: Option<String>,
    pub source_download_url: Option<String>,
    pub package_download_url: Option<String>,
    pub homepage_url: Option<String>,
    pub source_repo_url: Option<String>,
}

impl ComponentInfoData {
    pub fn license(&self, spdx_id: &str) -> Option<&LicenseInfo> {
        self.licenses.get(spdx_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataStatus {
    /// Data taken from the scan without curation
    NoIssues,
    /// At least one curation category was applied
    Curated,
    /// No scan result exists for the package
    NotAvailable,
}

/// Canonical, auditable per-package record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub package_url: String,
    pub data_status: DataStatus,
    pub traceability_notes: Vec<String>,
    pub component_info_data: Option<ComponentInfoData>,
}

impl ComponentInfo {
    pub fn is_data_available(&self) -> bool {
        self.component_info_data.is_some()
    }
}

fn serialize_license_values<S>(licenses: &LicenseSet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(licenses.values())
}
