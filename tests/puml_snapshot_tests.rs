//! Golden snapshot tests for PlantUML rendering
//!
//! These tests run the generator over the Java fixtures and compare the
//! rendered diagram body against stored snapshots.
//!
//! Run with: `cargo test --test puml_snapshot_tests`
//! Review changes: `cargo insta review`

use std::path::PathBuf;

use pgen::puml::render_document;
use pgen::version::PGEN_VERSION;
use pgen::{
    ClassDescriptorGenerator, DependencyLevel, Descriptor, DiagramConfig, GeneratorConfig, PumlBodyGenerator, Scope,
    Visibility, filter_for_base_class,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/java")
        .join(name)
}

fn describe(testcase: &str, config: GeneratorConfig) -> Vec<Descriptor> {
    ClassDescriptorGenerator::new(Scope::new(vec![fixture(testcase)]), config)
        .generate_class_descriptors()
        .expect("generation failed")
}

fn all_members() -> GeneratorConfig {
    GeneratorConfig::new()
        .with_method_visibility(Visibility::Private)
        .with_attribute_visibility(Visibility::Private)
}

#[test]
fn test_inheritance_with_packages() {
    let config = all_members()
        .with_dependency_level(DependencyLevel::All)
        .with_show_package(true);
    let body = PumlBodyGenerator::new(true).generate_puml_body(&describe("testcase1", config));
    insta::assert_snapshot!("inheritance_with_packages", body);
}

#[test]
fn test_enum_with_arguments() {
    let body = PumlBodyGenerator::new(false)
        .generate_puml_body(&describe("testcase4", all_members().with_show_enum_arguments(true)));
    insta::assert_snapshot!("enum_with_arguments", body);
}

#[test]
fn test_base_class_tree_of_inner_classes() {
    let descriptors = describe("testcase5", all_members());
    let filtered = filter_for_base_class(&descriptors, "ExceptionBase", None).unwrap();
    let body = PumlBodyGenerator::new(false).generate_puml_body(&filtered);
    insta::assert_snapshot!("base_class_tree_of_inner_classes", body);
}

#[test]
fn test_document_header_options() {
    let body = PumlBodyGenerator::new(false).generate_puml_body(&describe("testcase2", GeneratorConfig::new()));
    let config = DiagramConfig::new()
        .with_directories(vec![PathBuf::from("src/main/java")])
        .with_visibilities(Visibility::Public, Visibility::None)
        .with_scale(Some("1.5".to_string()))
        .with_title(Some("Fields".to_string()))
        .with_caption(Some("testcase2".to_string()))
        .with_left_to_right(true);
    let document = render_document(&body, &config);

    let expected = format!(
        "@startuml
' Generated by pgen {PGEN_VERSION}
' Directories:
' - src/main/java
' Attribute visibility: PUBLIC
' Method visibility: NONE
scale 1.5
title Fields
caption testcase2
left to right direction

'------------------------

class TestFieldVisibility {{
}}
@enduml
"
    );
    assert_eq!(document, expected);
}
