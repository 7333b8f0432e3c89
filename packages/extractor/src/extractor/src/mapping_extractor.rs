//! Mapping extractor.
//!
//! Interprets the strategy reports of the property introspection
//! capabilities into [`ReadAccessor`]s and [`WriteMutator`]s, and projects
//! serialization metadata into per-property gating hints.

use super::accessor::{ReadAccessor, ReadAccessorKind, WriteMutator, WriteMutatorKind};
use crate::config::ExtractorConfig;
use crate::error::ExtractorResult;
use crate::property_info::{
    ConstructorIntrospector, PropertyAccessStrategyProvider, PropertyReadKind, PropertyWriteInfo,
    WriteContext,
};
use crate::serializer_metadata::{ClassMetadata, ClassMetadataFactory};
use crate::ARRAY_TYPE;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Resolves how properties are read from a source and written into a target.
pub trait MappingExtractorInterface {
    fn get_read_accessor(&self, source: &str, target: &str, property: &str)
        -> Option<ReadAccessor>;

    fn get_write_mutator(
        &self,
        source: &str,
        target: &str,
        property: &str,
        context: &WriteContext,
    ) -> ExtractorResult<Option<WriteMutator>>;
}

#[derive(Debug, Clone)]
pub struct MappingExtractor {
    strategy_provider: Arc<dyn PropertyAccessStrategyProvider>,
    constructor_introspector: Arc<dyn ConstructorIntrospector>,
    class_metadata_factory: Option<Arc<dyn ClassMetadataFactory>>,
    config: ExtractorConfig,
}

impl MappingExtractor {
    pub fn new(
        strategy_provider: Arc<dyn PropertyAccessStrategyProvider>,
        constructor_introspector: Arc<dyn ConstructorIntrospector>,
    ) -> Self {
        Self {
            strategy_provider,
            constructor_introspector,
            class_metadata_factory: None,
            config: ExtractorConfig::default(),
        }
    }

    /// Build an extractor from a single value implementing both introspection capabilities.
    pub fn from_introspector<T>(introspector: Arc<T>) -> Self
    where
        T: PropertyAccessStrategyProvider + ConstructorIntrospector + 'static,
    {
        Self::new(introspector.clone(), introspector)
    }

    pub fn with_class_metadata_factory(mut self, factory: Arc<dyn ClassMetadataFactory>) -> Self {
        self.class_metadata_factory = Some(factory);
        self
    }

    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn get_read_accessor(
        &self,
        source: &str,
        _target: &str,
        property: &str,
    ) -> Option<ReadAccessor> {
        let Some(read_info) = self.strategy_provider.read_info(source, property) else {
            trace!(class = source, property, "No read strategy");
            return None;
        };

        let kind = match read_info.kind {
            PropertyReadKind::Field => ReadAccessorKind::Property,
            PropertyReadKind::Method => ReadAccessorKind::Method,
        };

        debug!(class = source, property, accessor = %read_info.name, ?kind, "Resolved read accessor");

        Some(ReadAccessor::new(
            kind,
            read_info.name,
            source,
            !read_info.visibility.is_public(),
            property,
        ))
    }

    pub fn get_write_mutator(
        &self,
        _source: &str,
        target: &str,
        property: &str,
        context: &WriteContext,
    ) -> ExtractorResult<Option<WriteMutator>> {
        let Some(write_info) = self.strategy_provider.write_info(target, property, context) else {
            trace!(class = target, property, "No write strategy");
            return Ok(None);
        };

        trace!(class = target, property, strategy = write_info.kind_name(), "Write strategy");

        let (kind, write_target) = match write_info {
            PropertyWriteInfo::None => return Ok(None),
            PropertyWriteInfo::Constructor(write_target) => {
                let parameter = self
                    .constructor_introspector
                    .constructor_parameter(target, &write_target.name)?;

                debug!(
                    class = target,
                    property,
                    parameter = %parameter.name,
                    position = parameter.position,
                    "Resolved constructor mutator"
                );

                return Ok(Some(WriteMutator::constructor(parameter)));
            }
            PropertyWriteInfo::Property(write_target) => {
                // Readonly and promoted properties are reported as writable when
                // constructor extraction is disabled; writing them would reassign
                // an immutable field.
                if !context.enable_constructor_extraction
                    && self.config.supports_readonly_properties
                    && self
                        .constructor_introspector
                        .property_flags(target, property)?
                        .is_immutable()
                {
                    debug!(class = target, property, "Skipping immutable property write");
                    return Ok(None);
                }

                (WriteMutatorKind::Property, write_target)
            }
            PropertyWriteInfo::Method(write_target) => (WriteMutatorKind::Method, write_target),
            PropertyWriteInfo::AdderAndRemover { adder, .. } => {
                (WriteMutatorKind::AdderRemover, adder)
            }
        };

        debug!(class = target, property, mutator = %write_target.name, ?kind, "Resolved write mutator");

        Ok(Some(WriteMutator::new(
            kind,
            write_target.name,
            !write_target.visibility.is_public(),
        )))
    }

    /// Maximum recursion depth declared on `property`, if any.
    pub fn get_max_depth(&self, class: &str, property: &str) -> Option<u32> {
        let metadata = self.class_metadata(class)?;

        metadata
            .attributes
            .iter()
            .rev()
            .find(|attribute| attribute.name == property)
            .and_then(|attribute| attribute.max_depth)
    }

    /// Groups of `property`.
    ///
    /// `None` when no attribute of the class declares any group; an empty set
    /// when groups are used in the class but not on `property`.
    pub fn get_groups(&self, class: &str, property: &str) -> Option<BTreeSet<String>> {
        let metadata = self.class_metadata(class)?;

        let mut any_group_found = false;
        let mut groups = BTreeSet::new();

        for attribute in metadata.attributes() {
            if attribute.has_groups() {
                any_group_found = true;
            }

            if attribute.name == property {
                groups = attribute.groups.clone();
            }
        }

        any_group_found.then_some(groups)
    }

    pub fn is_ignored_property(&self, class: &str, property: &str) -> bool {
        let Some(metadata) = self.class_metadata(class) else {
            return false;
        };

        metadata
            .attributes
            .iter()
            .find(|attribute| attribute.name == property)
            .and_then(|attribute| attribute.ignored)
            .unwrap_or(false)
    }

    fn class_metadata(&self, class: &str) -> Option<Arc<ClassMetadata>> {
        if class == ARRAY_TYPE {
            return None;
        }

        self.class_metadata_factory.as_ref()?.metadata_for(class)
    }
}

impl MappingExtractorInterface for MappingExtractor {
    fn get_read_accessor(
        &self,
        source: &str,
        target: &str,
        property: &str,
    ) -> Option<ReadAccessor> {
        MappingExtractor::get_read_accessor(self, source, target, property)
    }

    fn get_write_mutator(
        &self,
        source: &str,
        target: &str,
        property: &str,
        context: &WriteContext,
    ) -> ExtractorResult<Option<WriteMutator>> {
        MappingExtractor::get_write_mutator(self, source, target, property, context)
    }
}
