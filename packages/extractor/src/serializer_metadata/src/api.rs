use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::sync::Arc;

/// Serialization metadata declared on a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMetadata {
    pub name: String,

    #[serde(default)]
    pub max_depth: Option<u32>,

    #[serde(default)]
    pub groups: BTreeSet<String>,

    /// `None` when the metadata model has no notion of ignored attributes.
    #[serde(default)]
    pub ignored: Option<bool>,
}

impl AttributeMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_depth: None,
            groups: BTreeSet::new(),
            ignored: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn with_ignored(mut self, ignored: bool) -> Self {
        self.ignored = Some(ignored);
        self
    }

    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Serialization metadata of a class: one entry per declared attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMetadata {
    pub class_name: String,

    #[serde(default)]
    pub attributes: Vec<AttributeMetadata>,
}

impl ClassMetadata {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeMetadata) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes(&self) -> impl Iterator<Item = &AttributeMetadata> {
        self.attributes.iter()
    }
}

/// Provides serialization metadata per class.
pub trait ClassMetadataFactory: Debug + Send + Sync {
    /// Metadata for `class`, or `None` if none is registered.
    fn metadata_for(&self, class: &str) -> Option<Arc<ClassMetadata>>;
}
