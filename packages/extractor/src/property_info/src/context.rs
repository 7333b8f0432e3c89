use serde::{Deserialize, Serialize};

/// Caller-supplied options forwarded to the write strategy provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriteContext {
    /// Allow properties to be written through constructor arguments.
    pub enable_constructor_extraction: bool,
}

impl Default for WriteContext {
    fn default() -> Self {
        Self {
            enable_constructor_extraction: true,
        }
    }
}

impl WriteContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for mapping into an already constructed target.
    pub fn without_constructor_extraction() -> Self {
        Self {
            enable_constructor_extraction: false,
        }
    }

    pub fn with_constructor_extraction(mut self, enabled: bool) -> Self {
        self.enable_constructor_extraction = enabled;
        self
    }
}
