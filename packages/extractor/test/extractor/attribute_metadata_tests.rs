//! Serialization gating metadata tests: max depth, groups and ignored flags.

use automapper_extractor::property_info::StaticPropertyInfo;
use automapper_extractor::serializer_metadata::{
    AttributeMetadata, ClassMetadata, ClassMetadataFactory, StaticClassMetadataFactory,
};
use automapper_extractor::MappingExtractor;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const USER: &str = "App\\Entity\\User";
const POST: &str = "App\\Entity\\Post";
const LEGACY: &str = "App\\Entity\\Legacy";

fn factory() -> StaticClassMetadataFactory {
    StaticClassMetadataFactory::new()
        .with_class(
            ClassMetadata::new(USER)
                .with_attribute(AttributeMetadata::new("id").with_groups(["read"]))
                .with_attribute(
                    AttributeMetadata::new("friends")
                        .with_max_depth(2)
                        .with_groups(["read", "friends"]),
                )
                .with_attribute(AttributeMetadata::new("email").with_ignored(false))
                .with_attribute(AttributeMetadata::new("password").with_ignored(true)),
        )
        .with_class(
            ClassMetadata::new(POST)
                .with_attribute(AttributeMetadata::new("title"))
                .with_attribute(AttributeMetadata::new("author").with_max_depth(1)),
        )
        .with_class(ClassMetadata::new(LEGACY).with_attribute(AttributeMetadata::new("hidden")))
}

fn extractor() -> MappingExtractor {
    MappingExtractor::from_introspector(Arc::new(StaticPropertyInfo::new()))
        .with_class_metadata_factory(Arc::new(factory()))
}

fn groups(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Counts lookups so tests can assert the factory was never consulted.
#[derive(Debug, Default)]
struct CountingFactory {
    lookups: AtomicUsize,
}

impl ClassMetadataFactory for CountingFactory {
    fn metadata_for(&self, _class: &str) -> Option<Arc<ClassMetadata>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Some(Arc::new(
            ClassMetadata::new("array").with_attribute(
                AttributeMetadata::new("items")
                    .with_max_depth(3)
                    .with_groups(["read"])
                    .with_ignored(true),
            ),
        ))
    }
}

// getMaxDepth

#[test]
fn should_return_declared_max_depth() {
    let extractor = extractor();
    assert_eq!(extractor.get_max_depth(USER, "friends"), Some(2));
    assert_eq!(extractor.get_max_depth(POST, "author"), Some(1));
}

#[test]
fn should_return_no_max_depth_when_undeclared_or_unknown() {
    let extractor = extractor();
    assert_eq!(extractor.get_max_depth(USER, "id"), None);
    assert_eq!(extractor.get_max_depth(USER, "missing"), None);
    assert_eq!(extractor.get_max_depth("App\\Unknown", "id"), None);
}

#[test]
fn should_use_last_declaration_for_max_depth() {
    let factory = StaticClassMetadataFactory::new().with_class(
        ClassMetadata::new(USER)
            .with_attribute(AttributeMetadata::new("friends").with_max_depth(5))
            .with_attribute(AttributeMetadata::new("friends").with_max_depth(1)),
    );
    let extractor = MappingExtractor::from_introspector(Arc::new(StaticPropertyInfo::new()))
        .with_class_metadata_factory(Arc::new(factory));

    assert_eq!(extractor.get_max_depth(USER, "friends"), Some(1));
}

// getGroups

#[test]
fn should_return_property_groups() {
    let extractor = extractor();
    assert_eq!(extractor.get_groups(USER, "id"), Some(groups(&["read"])));
    assert_eq!(
        extractor.get_groups(USER, "friends"),
        Some(groups(&["friends", "read"]))
    );
}

#[test]
fn should_return_empty_groups_when_siblings_declare_groups() {
    let extractor = extractor();
    assert_eq!(extractor.get_groups(USER, "email"), Some(BTreeSet::new()));
    assert_eq!(extractor.get_groups(USER, "missing"), Some(BTreeSet::new()));
}

#[test]
fn should_return_no_groups_when_class_uses_none() {
    let extractor = extractor();
    assert_eq!(extractor.get_groups(POST, "title"), None);
    assert_eq!(extractor.get_groups(POST, "missing"), None);
}

#[test]
fn should_use_last_declaration_for_groups() {
    let factory = StaticClassMetadataFactory::new().with_class(
        ClassMetadata::new(USER)
            .with_attribute(AttributeMetadata::new("friends").with_groups(["read"]))
            .with_attribute(AttributeMetadata::new("friends").with_groups(["admin"]))
            .with_attribute(AttributeMetadata::new("email").with_groups(["read"]))
            .with_attribute(AttributeMetadata::new("email")),
    );
    let extractor = MappingExtractor::from_introspector(Arc::new(StaticPropertyInfo::new()))
        .with_class_metadata_factory(Arc::new(factory));

    assert_eq!(extractor.get_groups(USER, "friends"), Some(groups(&["admin"])));
    assert_eq!(extractor.get_groups(USER, "email"), Some(BTreeSet::new()));
}

// isIgnoredProperty

#[test]
fn should_use_first_declaration_for_ignored_flag() {
    let factory = StaticClassMetadataFactory::new().with_class(
        ClassMetadata::new(USER)
            .with_attribute(AttributeMetadata::new("password").with_ignored(true))
            .with_attribute(AttributeMetadata::new("password").with_ignored(false))
            .with_attribute(AttributeMetadata::new("email").with_ignored(false))
            .with_attribute(AttributeMetadata::new("email").with_ignored(true)),
    );
    let extractor = MappingExtractor::from_introspector(Arc::new(StaticPropertyInfo::new()))
        .with_class_metadata_factory(Arc::new(factory));

    assert!(extractor.is_ignored_property(USER, "password"));
    assert!(!extractor.is_ignored_property(USER, "email"));
}

#[test]
fn should_report_ignored_flag() {
    let extractor = extractor();
    assert!(extractor.is_ignored_property(USER, "password"));
    assert!(!extractor.is_ignored_property(USER, "email"));
    assert!(!extractor.is_ignored_property(USER, "missing"));
}

#[test]
fn should_treat_unsupported_ignored_flag_as_not_ignored() {
    assert!(!extractor().is_ignored_property(LEGACY, "hidden"));
}

// Absence

#[test]
fn should_short_circuit_array_without_consulting_factory() {
    let factory = Arc::new(CountingFactory::default());
    let extractor = MappingExtractor::from_introspector(Arc::new(StaticPropertyInfo::new()))
        .with_class_metadata_factory(factory.clone());

    assert_eq!(extractor.get_max_depth("array", "items"), None);
    assert_eq!(extractor.get_groups("array", "items"), None);
    assert!(!extractor.is_ignored_property("array", "items"));
    assert_eq!(factory.lookups.load(Ordering::SeqCst), 0);

    assert_eq!(extractor.get_max_depth("App\\Collection", "items"), Some(3));
    assert_eq!(factory.lookups.load(Ordering::SeqCst), 1);
}

#[test]
fn should_return_no_metadata_without_factory() {
    let extractor = MappingExtractor::from_introspector(Arc::new(StaticPropertyInfo::new()));

    assert_eq!(extractor.get_max_depth(USER, "friends"), None);
    assert_eq!(extractor.get_groups(USER, "id"), None);
    assert!(!extractor.is_ignored_property(USER, "password"));
}
