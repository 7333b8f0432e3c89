//! Mapper dependencies.
//!
//! A generated mapper that maps a nested object or collection element needs
//! a sub-mapper at runtime. Each distinct need is recorded once and injected
//! under its name.

use crate::ARRAY_TYPE;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference from a generated mapper to a sub-mapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapperDependency {
    /// Identifier the sub-mapper is injected under.
    pub name: String,
    /// Source type identifier, or `"array"`.
    pub source: String,
    /// Target type identifier, or `"array"`.
    pub target: String,
}

impl MapperDependency {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn is_array_source(&self) -> bool {
        self.source == ARRAY_TYPE
    }

    pub fn is_array_target(&self) -> bool {
        self.target == ARRAY_TYPE
    }
}

impl fmt::Display for MapperDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} -> {})", self.name, self.source, self.target)
    }
}

/// Dependencies of one generated mapper, keyed by name.
/// Uses IndexMap to preserve insertion order for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapperDependencies {
    entries: IndexMap<String, MapperDependency>,
}

impl MapperDependencies {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Record a dependency. Returns `false` if one with the same name was
    /// already recorded; the first one is kept.
    pub fn insert(&mut self, dependency: MapperDependency) -> bool {
        if self.entries.contains_key(&dependency.name) {
            return false;
        }

        self.entries.insert(dependency.name.clone(), dependency);
        true
    }

    pub fn get(&self, name: &str) -> Option<&MapperDependency> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapperDependency> {
        self.entries.values()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_vec(self) -> Vec<MapperDependency> {
        self.entries.into_values().collect()
    }
}

impl Extend<MapperDependency> for MapperDependencies {
    fn extend<I: IntoIterator<Item = MapperDependency>>(&mut self, iter: I) {
        for dependency in iter {
            self.insert(dependency);
        }
    }
}

impl FromIterator<MapperDependency> for MapperDependencies {
    fn from_iter<I: IntoIterator<Item = MapperDependency>>(iter: I) -> Self {
        let mut dependencies = MapperDependencies::new();
        dependencies.extend(iter);
        dependencies
    }
}
