use serde::Serialize;

/// ResolutionMetadata value object describing one resolver run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
}

impl ResolutionMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, run_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}
