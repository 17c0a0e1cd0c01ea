use crate::resolution::domain::{
    Curation, FileEntry, LicenseInfo, MappedResult, PackageUrl, RawLicenseDetection, RawScanResult,
};
use crate::resolution::policies::{
    ClasspathExceptionPolicy, ClasspathOutcome, ContentPathResolver, UrlNormalization,
    CLASSPATH_EXCEPTION,
};

pub const DEFAULT_MIN_LICENSE_SCORE: f64 = 80.0;
pub const DEFAULT_LICENSE_TO_TEXT_RATIO_THRESHOLD: f64 = 90.0;

const NOTICE_MARKER: &str = "/NOTICE";

/// Score thresholds applied while mapping scan detections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingThresholds {
    /// Detections scoring below this value are dropped
    pub min_license_score: f64,
    /// Files with at least this percentage of license text are referenced as a whole
    pub license_to_text_ratio_threshold: f64,
}

impl Default for MappingThresholds {
    fn default() -> Self {
        Self {
            min_license_score: DEFAULT_MIN_LICENSE_SCORE,
            license_to_text_ratio_threshold: DEFAULT_LICENSE_TO_TEXT_RATIO_THRESHOLD,
        }
    }
}

/// ScanMapper service reducing file-level scan detections to one record
///
/// Files are processed in document order and licenses are deduplicated by
/// SPDX id with the first accepted detection winning, so the result only
/// depends on the scan document. Copyrights are kept verbatim, duplicates
/// included.
pub struct ScanMapper {
    thresholds: MappingThresholds,
}

impl ScanMapper {
    pub fn new(thresholds: MappingThresholds) -> Self {
        Self { thresholds }
    }

    /// Maps a raw scan result, ignoring every file excluded by the curation
    pub fn map(
        &self,
        package_url: &PackageUrl,
        scan: &RawScanResult,
        curation: Option<&Curation>,
        resolver: &dyn ContentPathResolver,
    ) -> MappedResult {
        let mut result = MappedResult::default();

        for file in &scan.files {
            if curation.is_some_and(|c| c.is_excluded(&file.path)) {
                tracing::debug!(path = %file.path, "Skipping path excluded by curation");
                continue;
            }
            if file.is_directory() {
                continue;
            }
            self.map_file(package_url, file, resolver, &mut result);
        }

        tracing::debug!(
            "Scan info for package {}: {} licenses, {} copyrights, {} NOTICE files",
            package_url,
            result.licenses.len(),
            result.copyrights.len(),
            usize::from(result.notice_file_url.is_some())
        );

        result
    }

    fn map_file(
        &self,
        package_url: &PackageUrl,
        file: &FileEntry,
        resolver: &dyn ContentPathResolver,
        result: &mut MappedResult,
    ) {
        if result.notice_file_url.is_none() && file.path.contains(NOTICE_MARKER) {
            result.notice_file_url = Some(UrlNormalization::normalize(
                package_url,
                &file.path,
                resolver,
            ));
        }

        let take_complete_file =
            file.license_text_ratio >= self.thresholds.license_to_text_ratio_threshold;

        result.copyrights.extend(file.copyrights.iter().cloned());

        let rewrite =
            ClasspathExceptionPolicy::resolve(file.licenses.iter().map(|l| l.spdx_key.as_str()));
        if let Some(warning) = classpath_warning(package_url, &file.path, rewrite.outcome()) {
            tracing::warn!("{}", warning);
            result.warnings.push(warning);
        }

        for detection in &file.licenses {
            let Some(spdx_id) = rewrite.effective_id(&detection.spdx_key) else {
                continue;
            };
            if detection.score < self.thresholds.min_license_score {
                continue;
            }
            if result.licenses.contains_key(spdx_id) {
                continue;
            }

            let reference = license_reference(&file.path, detection, take_complete_file);
            let license_url = UrlNormalization::normalize(package_url, &reference, resolver);
            let default_url = detection
                .text_url_hint
                .as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| UrlNormalization::normalize(package_url, u, resolver));

            result.licenses.insert(
                spdx_id.to_string(),
                LicenseInfo::new(
                    spdx_id.to_string(),
                    license_url,
                    default_url,
                    detection.score,
                ),
            );
        }
    }
}

/// Reference to the license text: the whole file, or the detected lines
/// as `#L<start>[-L<end>]`
pub fn license_reference(
    path: &str,
    detection: &RawLicenseDetection,
    take_complete_file: bool,
) -> String {
    if take_complete_file {
        return path.to_string();
    }
    if detection.end_line != detection.start_line {
        format!("{}#L{}-L{}", path, detection.start_line, detection.end_line)
    } else {
        format!("{}#L{}", path, detection.start_line)
    }
}

fn classpath_warning(
    package_url: &PackageUrl,
    path: &str,
    outcome: &ClasspathOutcome,
) -> Option<String> {
    match outcome {
        ClasspathOutcome::NotPresent => None,
        ClasspathOutcome::Merged { gpl_key } => {
            tracing::debug!(
                "Adjusting {} to contain WITH {} for {} ({})",
                gpl_key,
                CLASSPATH_EXCEPTION,
                package_url,
                path
            );
            None
        }
        ClasspathOutcome::GplAbsent => Some(format!(
            "{} detected without any GPL license in '{}' of {}; exception not reported",
            CLASSPATH_EXCEPTION, path, package_url
        )),
        ClasspathOutcome::GplAmbiguous { gpl_keys } => Some(format!(
            "{} detected together with multiple GPL licenses ({}) in '{}' of {}; licenses left unchanged",
            CLASSPATH_EXCEPTION,
            gpl_keys.join(", "),
            path,
            package_url
        )),
    }
}
