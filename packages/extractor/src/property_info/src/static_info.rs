//! In-memory property introspection.
//!
//! Classes are described declaratively (usually as JSON) and answer both
//! introspection capabilities. Write strategies follow the upstream property
//! info behavior: with constructor extraction disabled, a constructor-written
//! public property is reported as a plain property write, even when it is
//! readonly. The extractor is responsible for rejecting those.

use super::context::WriteContext;
use super::host::{
    ConstructorIntrospector, ConstructorParameter, PropertyAccessStrategyProvider, PropertyFlags,
    PropertyReadInfo, PropertyWriteInfo, Visibility, WriteTarget,
};
use crate::error::{ExtractorError, ExtractorResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declared constructor parameter, positioned by its index in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub read: Option<PropertyReadInfo>,
    #[serde(default)]
    pub write: Option<PropertyWriteInfo>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub promoted: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            read: None,
            write: None,
            readonly: false,
            promoted: false,
        }
    }

    pub fn with_read(mut self, read: PropertyReadInfo) -> Self {
        self.read = Some(read);
        self
    }

    pub fn with_write(mut self, write: PropertyWriteInfo) -> Self {
        self.write = Some(write);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn promoted(mut self) -> Self {
        self.promoted = true;
        self
    }

    pub fn flags(&self) -> PropertyFlags {
        let mut flags = PropertyFlags::empty();
        flags.set(PropertyFlags::READONLY, self.readonly);
        flags.set(PropertyFlags::PROMOTED, self.promoted);
        flags
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub constructor: Vec<ParameterDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            constructor: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_constructor_parameter(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        self.constructor.push(ParameterDescriptor {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    fn constructor_position(&self, name: &str) -> Option<usize> {
        self.constructor.iter().position(|p| p.name == name)
    }
}

/// Class descriptions keyed by class name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StaticPropertyInfo {
    classes: IndexMap<String, ClassDescriptor>,
}

impl StaticPropertyInfo {
    pub fn new() -> Self {
        Self {
            classes: IndexMap::new(),
        }
    }

    /// Parse a JSON array of class descriptions.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let classes: Vec<ClassDescriptor> = serde_json::from_str(json)?;
        Ok(classes.into_iter().collect())
    }

    pub fn with_class(mut self, class: ClassDescriptor) -> Self {
        self.insert(class);
        self
    }

    /// Register a class, replacing any previous description with the same name.
    pub fn insert(&mut self, class: ClassDescriptor) -> Option<ClassDescriptor> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn get(&self, class: &str) -> Option<&ClassDescriptor> {
        self.classes.get(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn property(&self, class: &str, property: &str) -> Option<&PropertyDescriptor> {
        self.get(class)?.property(property)
    }
}

impl FromIterator<ClassDescriptor> for StaticPropertyInfo {
    fn from_iter<I: IntoIterator<Item = ClassDescriptor>>(iter: I) -> Self {
        let mut info = StaticPropertyInfo::new();
        for class in iter {
            info.insert(class);
        }
        info
    }
}

impl PropertyAccessStrategyProvider for StaticPropertyInfo {
    fn read_info(&self, class: &str, property: &str) -> Option<PropertyReadInfo> {
        self.property(class, property)?.read.clone()
    }

    fn write_info(
        &self,
        class: &str,
        property: &str,
        context: &WriteContext,
    ) -> Option<PropertyWriteInfo> {
        let descriptor = self.get(class)?;

        let Some(prop) = descriptor.property(property) else {
            // Undeclared properties can still be fed through the constructor.
            return match descriptor.constructor_position(property) {
                Some(_) if context.enable_constructor_extraction => {
                    Some(PropertyWriteInfo::Constructor(WriteTarget::public(property)))
                }
                _ => None,
            };
        };

        match &prop.write {
            Some(PropertyWriteInfo::Constructor(_)) if !context.enable_constructor_extraction => {
                if prop.visibility.is_public() {
                    Some(PropertyWriteInfo::Property(WriteTarget::new(
                        &prop.name,
                        prop.visibility,
                    )))
                } else {
                    Some(PropertyWriteInfo::None)
                }
            }
            other => other.clone(),
        }
    }
}

impl ConstructorIntrospector for StaticPropertyInfo {
    fn constructor_parameter(
        &self,
        class: &str,
        parameter: &str,
    ) -> ExtractorResult<ConstructorParameter> {
        let descriptor = self
            .get(class)
            .ok_or_else(|| ExtractorError::class_not_found(class))?;

        descriptor
            .constructor
            .iter()
            .enumerate()
            .find(|(_, p)| p.name == parameter)
            .map(|(position, p)| ConstructorParameter::new(&p.name, &p.type_name, position))
            .ok_or_else(|| ExtractorError::constructor_parameter_not_found(class, parameter))
    }

    fn property_flags(&self, class: &str, property: &str) -> ExtractorResult<PropertyFlags> {
        let descriptor = self
            .get(class)
            .ok_or_else(|| ExtractorError::class_not_found(class))?;

        descriptor
            .property(property)
            .map(PropertyDescriptor::flags)
            .ok_or_else(|| ExtractorError::property_not_found(class, property))
    }
}
