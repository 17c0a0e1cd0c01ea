use serde::{Deserialize, Deserializer};

/// Raw per-file scan result of a single package, as produced by ScanCode
///
/// Parsed once from the scan document and never mutated afterwards.
/// Unknown fields of the document are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawScanResult {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl RawScanResult {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Percentage of the file content recognized as license text
    #[serde(rename = "percentage_of_license_text", default)]
    pub license_text_ratio: f64,
    #[serde(default, deserialize_with = "copyright_texts")]
    pub copyrights: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<RawLicenseDetection>,
}

impl FileEntry {
    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLicenseDetection {
    /// ScanCode license key, e.g. `apache-2.0`
    #[serde(rename = "key")]
    pub match_key: String,
    #[serde(rename = "spdx_license_key")]
    pub spdx_key: String,
    pub score: f64,
    pub start_line: u32,
    pub end_line: u32,
    /// Location of the reference license text in the ScanCode license DB
    #[serde(rename = "scancode_text_url", default)]
    pub text_url_hint: Option<String>,
}

/// Copyright detections appear as `{copyright: ..}` in current ScanCode
/// output and as `{value: ..}` in older versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum CopyrightDetection {
    Detected {
        #[serde(default)]
        copyright: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
    Plain(String),
}

fn copyright_texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let detections = Vec::<CopyrightDetection>::deserialize(deserializer)?;
    Ok(detections
        .into_iter()
        .filter_map(|d| match d {
            CopyrightDetection::Detected { copyright, value } => copyright.or(value),
            CopyrightDetection::Plain(text) => Some(text),
        })
        .collect())
}
