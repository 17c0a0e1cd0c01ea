pub mod component_info;
pub mod curation;
pub mod license_info;
pub mod package_url;
pub mod raw_scan;
pub mod resolution_metadata;

pub use component_info::{
    ComponentInfo, ComponentInfoData, DataStatus, LicenseSet, MappedResult, OverlayResult,
    PackageMetadata,
};
pub use curation::{Curation, CurationList, LicenseOverride};
pub use license_info::LicenseInfo;
pub use package_url::PackageUrl;
pub use raw_scan::{FileEntry, FileType, RawLicenseDetection, RawScanResult};
pub use resolution_metadata::ResolutionMetadata;
