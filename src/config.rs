//! Configuration file support for scan-curator.
//!
//! Provides YAML-based configuration through `scan-curator.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use scan_curator::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "scan-curator.config.yml";

/// Selector names with fixed meaning that cannot name a curation source
const RESERVED_SOURCE_NAMES: [&str; 2] = ["none", "default"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repo_base_path: Option<PathBuf>,
    pub min_license_score: Option<f64>,
    pub license_to_text_ratio_threshold: Option<f64>,
    pub curations_file: Option<PathBuf>,
    /// Named curation sources, selectable with `--curation-selector`
    pub curation_sources: Option<HashMap<String, PathBuf>>,
    pub remote_content: Option<bool>,
    pub max_concurrent: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
pub fn validate_config(config: &ConfigFile) -> Result<()> {
    validate_percentage("min_license_score", config.min_license_score)?;
    validate_percentage(
        "license_to_text_ratio_threshold",
        config.license_to_text_ratio_threshold,
    )?;

    if config.max_concurrent == Some(0) {
        bail!(
            "Invalid config: max_concurrent must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of 8 concurrent resolutions."
        );
    }

    if let Some(ref sources) = config.curation_sources {
        for name in sources.keys() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: curation_sources must not contain an empty name.\n\n\
                     💡 Hint: Each curation source needs a name used as --curation-selector."
                );
            }
            if RESERVED_SOURCE_NAMES.contains(&name.as_str()) {
                bail!(
                    "Invalid config: curation source name '{}' is reserved.\n\n\
                     💡 Hint: 'none' disables curations and 'default' selects curations_file.",
                    name
                );
            }
        }
    }
    Ok(())
}

/// Validate a value given in percent.
pub fn validate_percentage(field: &str, value: Option<f64>) -> Result<()> {
    if let Some(value) = value {
        if !(0.0..=100.0).contains(&value) {
            bail!(
                "Invalid config: {} must be between 0 and 100, got {}.",
                field,
                value
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
