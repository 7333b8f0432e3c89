// Accessor Descriptors
//
// Describe where generated code reads a value from and writes it to.

use crate::property_info::ConstructorParameter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadAccessorKind {
    Property,
    Method,
}

/// Reads a value from a source instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadAccessor {
    pub kind: ReadAccessorKind,

    /// Field or method to access.
    pub name: String,

    pub source_type: String,

    /// The accessed member is not public; generated code must bypass access control.
    pub extension_visible: bool,

    /// Target property this read feeds. May differ from `name`.
    pub property_name: String,
}

impl ReadAccessor {
    pub fn new(
        kind: ReadAccessorKind,
        name: impl Into<String>,
        source_type: impl Into<String>,
        extension_visible: bool,
        property_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            source_type: source_type.into(),
            extension_visible,
            property_name: property_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WriteMutatorKind {
    Property,
    Method,
    AdderRemover,
    Constructor,
}

/// Writes a value into a target instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteMutator {
    pub kind: WriteMutatorKind,

    /// Field, setter, adder or constructor parameter name.
    pub name: String,

    pub extension_visible: bool,

    /// Set only for [`WriteMutatorKind::Constructor`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor_parameter: Option<ConstructorParameter>,
}

impl WriteMutator {
    pub fn new(kind: WriteMutatorKind, name: impl Into<String>, extension_visible: bool) -> Self {
        Self {
            kind,
            name: name.into(),
            extension_visible,
            constructor_parameter: None,
        }
    }

    pub fn constructor(parameter: ConstructorParameter) -> Self {
        Self {
            kind: WriteMutatorKind::Constructor,
            name: parameter.name.clone(),
            extension_visible: false,
            constructor_parameter: Some(parameter),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == WriteMutatorKind::Constructor
    }
}
