//! Integration tests: parse the YAML/JSON fixtures under `tests/fixtures/`.
//!
//! Both encodings of the sample application schema must converge on the
//! same generic tree and the same parsed tree, and the parsed tree must
//! serialize back to exactly what was loaded.

use std::path::PathBuf;

use formschema_core::{load_file, FormSchemaError, ParseError};
use formschema_schema::{parse, parse_source, NodeSource, SchemaType, UIRule};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_yaml_and_json_fixtures_converge() {
    let yaml = load_file(fixture("app.yaml")).expect("yaml fixture should load");
    let json = load_file(fixture("app.json")).expect("json fixture should load");
    assert_eq!(yaml, json);
    assert_eq!(parse(&yaml).unwrap(), parse(&json).unwrap());
}

#[test]
fn test_app_fixture_structure() {
    let tree = parse_source(fixture("app.yaml")).unwrap();
    let root = tree.root();

    assert_eq!(root.schema_type, Some(SchemaType::Object));
    assert_eq!(root.source, NodeSource::Root);
    let keys: Vec<&str> = root.properties().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec!["advanced", "mode", "name", "namespace", "ports", "replicas"]
    );

    let ports = root.property("ports").unwrap();
    assert_eq!(ports.min_items, Some(1));
    assert_eq!(ports.max_items, Some(8));
    let port = ports.items().unwrap();
    assert_eq!(port.property, "ports");
    assert_eq!(port.path(), ".properties.ports.items");

    let name = root.property("name").unwrap();
    let rules = name.ui_rules.as_ref().unwrap();
    assert!(matches!(&rules[0], UIRule::Ref(r) if r == "dnsName"));
    assert!(matches!(&rules[1], UIRule::Inline { .. }));

    let timeout = root
        .property("advanced")
        .and_then(|a| a.property("timeout"))
        .unwrap();
    assert_eq!(timeout.path(), ".properties.advanced.properties.timeout");
    assert_eq!(timeout.default.as_ref().unwrap().to_string(), "30.0");
}

#[test]
fn test_app_fixture_serializes_back_unchanged() {
    let original = load_file(fixture("app.yaml")).unwrap();
    let tree = parse(&original).unwrap();
    assert_eq!(tree.to_value().unwrap(), original);
}

#[test]
fn test_reparse_is_stable() {
    let original = load_file(fixture("app.json")).unwrap();
    let first = parse(&original).unwrap();
    let second = parse(&first.to_value().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_type_fixture() {
    let err = parse_source(fixture("missing_type.yaml")).unwrap_err();
    match err {
        FormSchemaError::Parse(ParseError::Required { path }) => {
            assert_eq!(path, ".properties.spec.properties.replicas.type");
        }
        other => panic!("Expected Required, got: {other}"),
    }
}

#[test]
fn test_bad_component_fixture() {
    let err = parse_source(fixture("bad_component.json")).unwrap_err();
    assert!(
        matches!(
            &err,
            FormSchemaError::Parse(ParseError::NotAValidComponent { path, value })
                if path == ".properties.size.ui:component.name" && value == "dropdown"
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn test_missing_fixture_is_load_error() {
    let err = parse_source(fixture("does-not-exist.yaml")).unwrap_err();
    assert!(matches!(err, FormSchemaError::Load(_)));
}
