use super::context::WriteContext;
use crate::error::ExtractorResult;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyReadKind {
    Field,
    Method,
}

/// How a property value is read off an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReadInfo {
    pub kind: PropertyReadKind,

    /// Field or method name to access.
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,
}

impl PropertyReadInfo {
    pub fn field(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            kind: PropertyReadKind::Field,
            name: name.into(),
            visibility,
        }
    }

    pub fn method(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            kind: PropertyReadKind::Method,
            name: name.into(),
            visibility,
        }
    }
}

/// A single write entry point: a field, a method or a constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteTarget {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl WriteTarget {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }
}

/// How a property value is written into an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyWriteInfo {
    /// The property exists but cannot be written.
    None,
    Property(WriteTarget),
    Method(WriteTarget),
    Constructor(WriteTarget),
    AdderAndRemover {
        adder: WriteTarget,
        remover: WriteTarget,
    },
}

impl PropertyWriteInfo {
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyWriteInfo::None => "none",
            PropertyWriteInfo::Property(_) => "property",
            PropertyWriteInfo::Method(_) => "method",
            PropertyWriteInfo::Constructor(_) => "constructor",
            PropertyWriteInfo::AdderAndRemover { .. } => "adder_and_remover",
        }
    }
}

bitflags! {
    /// Declaration modifiers of a property relevant to writes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PropertyFlags: u8 {
        const READONLY = 0b01;
        const PROMOTED = 0b10;
    }
}

impl PropertyFlags {
    /// Readonly or initialized from a promoted constructor parameter.
    pub fn is_immutable(self) -> bool {
        self.intersects(PropertyFlags::READONLY | PropertyFlags::PROMOTED)
    }
}

/// A constructor parameter with its declared type and ordinal position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorParameter {
    pub name: String,
    pub type_name: String,
    pub position: usize,
}

impl ConstructorParameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            position,
        }
    }
}

/// Reports how properties of a type are read and written.
pub trait PropertyAccessStrategyProvider: Debug + Send + Sync {
    /// Read strategy for `property` on `class`, or `None` if it cannot be read.
    fn read_info(&self, class: &str, property: &str) -> Option<PropertyReadInfo>;

    /// Write strategy for `property` on `class`, or `None` if nothing is known about it.
    fn write_info(
        &self,
        class: &str,
        property: &str,
        context: &WriteContext,
    ) -> Option<PropertyWriteInfo>;
}

/// Resolves constructor signatures and property modifiers of a type.
pub trait ConstructorIntrospector: Debug + Send + Sync {
    fn constructor_parameter(
        &self,
        class: &str,
        parameter: &str,
    ) -> ExtractorResult<ConstructorParameter>;

    fn property_flags(&self, class: &str, property: &str) -> ExtractorResult<PropertyFlags>;
}
