use crate::resolution::domain::{
    ComponentInfoData, Curation, LicenseInfo, LicenseSet, MappedResult, OverlayResult,
};

/// Score given to curated licenses, above the 0-100 range of the scanner
pub const CURATED_LICENSE_SCORE: f64 = 110.0;

/// CurationOverlay service applying curated overrides to mapped scan data
///
/// Each override category replaces the mapped data of that category;
/// categories without override are passed through.
pub struct CurationOverlay;

impl CurationOverlay {
    pub fn apply(mapped: MappedResult, curation: Option<&Curation>) -> OverlayResult {
        let MappedResult {
            licenses,
            copyrights,
            notice_file_url,
            warnings,
        } = mapped;

        let mut data = ComponentInfoData {
            licenses,
            copyrights,
            notice_file_url,
            ..Default::default()
        };
        let mut traceability_notes = warnings;

        let Some(curation) = curation else {
            return OverlayResult {
                data,
                curation_applied: false,
                traceability_notes,
            };
        };

        let mut curation_applied = false;

        if !curation.excluded_path_prefixes.is_empty() {
            traceability_notes.push(format!(
                "Curation '{}' excluded paths from scan data: {}",
                curation.name,
                curation.excluded_path_prefixes.join(", ")
            ));
            curation_applied = true;
        }

        if let Some(copyrights) = &curation.copyright_overrides {
            traceability_notes.push(format!(
                "Curation '{}' replaced {} scanned copyright(s) with {}",
                curation.name,
                data.copyrights.len(),
                copyrights.len()
            ));
            data.copyrights = copyrights.clone();
            curation_applied = true;
        }

        if let Some(overrides) = &curation.license_overrides {
            let mut licenses = LicenseSet::new();
            for entry in overrides {
                licenses.entry(entry.spdx_id.clone()).or_insert_with(|| {
                    LicenseInfo::new(
                        entry.spdx_id.clone(),
                        entry.url.clone(),
                        None,
                        CURATED_LICENSE_SCORE,
                    )
                });
            }
            traceability_notes.push(format!(
                "Curation '{}' replaced {} scanned license(s) with {}",
                curation.name,
                data.licenses.len(),
                licenses.len()
            ));
            data.licenses = licenses;
            curation_applied = true;
        }

        if let Some(homepage) = &curation.homepage_override {
            traceability_notes.push(format!(
                "Curation '{}' set homepage URL to {}",
                curation.name, homepage
            ));
            data.homepage_url = Some(homepage.clone());
            curation_applied = true;
        }

        if let Some(source_repo) = &curation.source_repo_override {
            traceability_notes.push(format!(
                "Curation '{}' set source repository URL to {}",
                curation.name, source_repo
            ));
            data.source_repo_url = Some(source_repo.clone());
            curation_applied = true;
        }

        OverlayResult {
            data,
            curation_applied,
            traceability_notes,
        }
    }
}
