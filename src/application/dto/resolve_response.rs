use crate::resolution::domain::{ComponentInfo, ResolutionMetadata};
use serde::Serialize;

/// Package that could not be resolved, with the rendered error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionFailure {
    pub package_url: String,
    pub error: String,
}

/// ResolveResponse - Response DTO of a batch resolution
///
/// Components keep the order of the requested package URLs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub metadata: ResolutionMetadata,
    pub components: Vec<ComponentInfo>,
    pub failures: Vec<ResolutionFailure>,
}

impl ResolveResponse {
    pub fn new(
        metadata: ResolutionMetadata,
        components: Vec<ComponentInfo>,
        failures: Vec<ResolutionFailure>,
    ) -> Self {
        Self {
            metadata,
            components,
            failures,
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
