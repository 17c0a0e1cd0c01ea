use crate::resolution::domain::ResolutionMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service for describing a resolver run
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with current timestamp and a unique run id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ResolutionMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        ResolutionMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Generates metadata with the compile-time tool name and version
    pub fn generate_default_metadata() -> ResolutionMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
