use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Capabilities of the environment the generated mappers run in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractorConfig {
    /// Whether the target runtime has readonly / constructor-promoted properties.
    /// When set, property writes to such fields are refused unless the
    /// constructor is used to initialize them.
    pub supports_readonly_properties: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            supports_readonly_properties: true,
        }
    }
}

impl ExtractorConfig {
    pub fn new(supports_readonly_properties: bool) -> Self {
        Self {
            supports_readonly_properties,
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ExtractorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
