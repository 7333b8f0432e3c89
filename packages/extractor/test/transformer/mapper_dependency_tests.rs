//! Mapper dependency collection tests.

use automapper_extractor::{MapperDependencies, MapperDependency};

#[test]
fn should_record_each_dependency_once() {
    let mut dependencies = MapperDependencies::new();

    assert!(dependencies.insert(MapperDependency::new("address", "App\\Address", "array")));
    assert!(!dependencies.insert(MapperDependency::new("address", "App\\Other", "array")));

    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies.get("address").unwrap().source, "App\\Address");
}

#[test]
fn should_preserve_insertion_order() {
    let dependencies: MapperDependencies = vec![
        MapperDependency::new("tags", "array", "App\\Tag"),
        MapperDependency::new("author", "App\\User", "App\\Dto\\User"),
        MapperDependency::new("tags", "array", "App\\Tag"),
    ]
    .into_iter()
    .collect();

    let names: Vec<_> = dependencies.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["tags", "author"]);
    assert!(dependencies.contains("author"));
}

#[test]
fn should_serialize_as_name_keyed_map() {
    let dependencies: MapperDependencies =
        std::iter::once(MapperDependency::new("author", "App\\User", "array")).collect();

    let json = serde_json::to_value(&dependencies).unwrap();
    assert_eq!(json["author"]["source"], "App\\User");
    assert_eq!(json["author"]["target"], "array");

    let parsed: MapperDependencies = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.into_vec(), dependencies.into_vec());
}
