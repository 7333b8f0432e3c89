//! Error types for metadata extraction.
//!
//! Absence (unreadable property, missing metadata, the array sentinel) is
//! never an error; it is modelled with `Option`. Only inconsistent type
//! declarations surface here.

use thiserror::Error;

/// Result type for extraction operations.
pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Errors raised while introspecting a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractorError {
    /// A constructor-strategy write names a parameter the constructor does not declare.
    #[error("Constructor of {class} has no parameter named `{parameter}`")]
    ConstructorParameterNotFound { class: String, parameter: String },

    /// The class does not declare the requested property.
    #[error("Property {class}::{property} does not exist")]
    PropertyNotFound { class: String, property: String },

    /// The class is unknown to the introspector.
    #[error("Class {class} is not declared")]
    ClassNotFound { class: String },
}

impl ExtractorError {
    pub fn constructor_parameter_not_found(
        class: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        Self::ConstructorParameterNotFound {
            class: class.into(),
            parameter: parameter.into(),
        }
    }

    pub fn property_not_found(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            class: class.into(),
            property: property.into(),
        }
    }

    pub fn class_not_found(class: impl Into<String>) -> Self {
        Self::ClassNotFound {
            class: class.into(),
        }
    }
}
