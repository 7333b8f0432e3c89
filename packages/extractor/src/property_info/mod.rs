//! Property access introspection.
//!
//! The extractor never inspects types itself. It consumes two capabilities
//! implemented by the embedding environment:
//! - [`PropertyAccessStrategyProvider`] reports how a property is read or written.
//! - [`ConstructorIntrospector`] resolves constructor parameters and property flags.
//!
//! [`StaticPropertyInfo`] implements both from declarative class descriptions.

pub mod src;

pub use src::context::WriteContext;
pub use src::host::{
    ConstructorIntrospector, ConstructorParameter, PropertyAccessStrategyProvider, PropertyFlags,
    PropertyReadInfo, PropertyReadKind, PropertyWriteInfo, Visibility, WriteTarget,
};
pub use src::static_info::{
    ClassDescriptor, ParameterDescriptor, PropertyDescriptor, StaticPropertyInfo,
};
