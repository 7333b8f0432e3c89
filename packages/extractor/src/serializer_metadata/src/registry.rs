use super::api::{ClassMetadata, ClassMetadataFactory};
use indexmap::IndexMap;
use std::sync::Arc;

/// Class metadata registered up front, keyed by class name.
#[derive(Debug, Clone, Default)]
pub struct StaticClassMetadataFactory {
    entries: IndexMap<String, Arc<ClassMetadata>>,
}

impl StaticClassMetadataFactory {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Parse a JSON array of class metadata.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<ClassMetadata> = serde_json::from_str(json)?;
        Ok(entries.into_iter().collect())
    }

    pub fn with_class(mut self, metadata: ClassMetadata) -> Self {
        self.insert(metadata);
        self
    }

    pub fn insert(&mut self, metadata: ClassMetadata) {
        self.entries
            .insert(metadata.class_name.clone(), Arc::new(metadata));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ClassMetadata> for StaticClassMetadataFactory {
    fn from_iter<I: IntoIterator<Item = ClassMetadata>>(iter: I) -> Self {
        let mut factory = StaticClassMetadataFactory::new();
        for metadata in iter {
            factory.insert(metadata);
        }
        factory
    }
}

impl ClassMetadataFactory for StaticClassMetadataFactory {
    fn metadata_for(&self, class: &str) -> Option<Arc<ClassMetadata>> {
        self.entries.get(class).cloned()
    }
}
