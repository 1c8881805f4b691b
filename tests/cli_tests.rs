//! End-to-end tests for the `pgen` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/java")
        .join(name)
}

fn pgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run pgen")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn test_generates_diagram_file() {
    let out_dir = tempfile::tempdir().unwrap();
    let output_file = out_dir.path().join("diagrams/classes.puml");
    let output = pgen(&[
        "--directories",
        path_arg(&fixture("testcase1")),
        "--no-maven-layout",
        "--output-file",
        path_arg(&output_file),
        "--method-visibility",
        "public",
        "--title",
        "Test Case 1",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let diagram = fs::read_to_string(&output_file).unwrap();
    assert!(diagram.starts_with("@startuml\n"));
    assert!(diagram.ends_with("@enduml\n"));
    assert!(diagram.contains("title Test Case 1\n"));
    assert!(diagram.contains("' Method visibility: PUBLIC\n"));
    assert!(diagram.contains("abstract class TestAbstract {\n+ void testAbstract(String)\n}"));
    assert!(diagram.contains("TestClass --|> TestAbstract\n"));
    assert!(diagram.contains("TestClass --|> TestInterface\n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Generating PUML Class Diagram"), "stderr: {stderr}");
}

#[test]
fn test_maven_layout_is_corrected() {
    let project = tempfile::tempdir().unwrap();
    let sources = project.path().join("src/main/java/app");
    fs::create_dir_all(&sources).unwrap();
    fs::write(sources.join("Main.java"), "package app;\n\npublic class Main {}\n").unwrap();
    let output_file = project.path().join("out.puml");

    let output = pgen(&[
        "--directories",
        path_arg(project.path()),
        "--output-file",
        path_arg(&output_file),
        "--show-package",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Corrected"), "stderr: {stderr}");
    let diagram = fs::read_to_string(&output_file).unwrap();
    assert!(diagram.contains("class app.Main {"));
    assert!(diagram.contains("src/main/java"));
}

#[test]
fn test_missing_directory_fails() {
    let project = tempfile::tempdir().unwrap();
    let output = pgen(&[
        "--directories",
        path_arg(&project.path().join("nowhere")),
        "--output-file",
        path_arg(&project.path().join("out.puml")),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist."));
    assert!(!project.path().join("out.puml").exists());
}

#[test]
fn test_base_class_filter() {
    let out_dir = tempfile::tempdir().unwrap();
    let output_file = out_dir.path().join("tree.puml");
    let output = pgen(&[
        "--directories",
        path_arg(&fixture("testcase5")),
        "--no-maven-layout",
        "--output-file",
        path_arg(&output_file),
        "--base-class",
        "ExceptionBase",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let diagram = fs::read_to_string(&output_file).unwrap();
    assert!(diagram.contains("class ExceptionBase {"));
    assert!(diagram.contains("ExceptionExtend --|> ExceptionBase"));
    assert!(!diagram.contains("class InnerClassTest"));
}

#[test]
fn test_missing_base_class_without_terminal() {
    let out_dir = tempfile::tempdir().unwrap();
    let output_file = out_dir.path().join("tree.puml");
    let sources = fixture("testcase5");
    let args = [
        "--directories",
        path_arg(&sources),
        "--no-maven-layout",
        "--output-file",
        path_arg(&output_file),
        "--base-class",
        "Throwable",
    ];

    let output = pgen(&args);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--base-class-type"));

    let mut with_kind = args.to_vec();
    with_kind.extend(["--base-class-type", "class"]);
    let output = pgen(&with_kind);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let diagram = fs::read_to_string(&output_file).unwrap();
    assert!(diagram.contains("class Throwable {\n}"));
}

#[test]
fn test_lex_and_parse_debug_flags() {
    let file = fixture("testcase4").join("TestEnum.java");

    let output = pgen(&["--lex", path_arg(&file)]);
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());

    let output = pgen(&["--parse", path_arg(&file)]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("TestEnum"));
}

#[test]
fn test_invalid_level_is_rejected() {
    let output = pgen(&["--directories", ".", "--dependency-level", "sometimes"]);
    assert!(!output.status.success());
}
