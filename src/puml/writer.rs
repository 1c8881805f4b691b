//! PlantUML document writer
//!
//! Wraps a rendered body in `@startuml` / `@enduml` with a header describing how the diagram was generated, and
//! writes the result to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::DiagramConfig;
use crate::version::PGEN_VERSION;

#[derive(Debug, Error)]
pub enum PumlError {
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Line-oriented output buffer for PlantUML text.
struct PumlWriter {
    output: String,
}

impl PumlWriter {
    fn new() -> Self {
        Self { output: String::new() }
    }

    fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    fn newline(&mut self) {
        self.output.push('\n');
    }

    fn comment(&mut self, s: &str) {
        self.write("' ");
        self.writeln(s);
    }

    fn at_line_start(&self) -> bool {
        self.output.is_empty() || self.output.ends_with('\n')
    }
}

/// Render a complete PlantUML document around `body`.
pub fn render_document(body: &str, config: &DiagramConfig) -> String {
    let mut w = PumlWriter::new();
    w.writeln("@startuml");
    w.comment(&format!("Generated by pgen {PGEN_VERSION}"));
    w.comment("Directories:");
    for directory in &config.directories {
        w.comment(&format!("- {}", directory.display()));
    }
    w.comment(&format!("Attribute visibility: {}", config.attribute_visibility));
    w.comment(&format!("Method visibility: {}", config.method_visibility));

    if let Some(scale) = &config.scale {
        w.writeln(&format!("scale {scale}"));
    }
    if let Some(title) = &config.title {
        w.writeln(&format!("title {title}"));
    }
    if let Some(caption) = &config.caption {
        w.writeln(&format!("caption {caption}"));
    }
    if config.left_to_right {
        w.writeln("left to right direction");
    }
    w.newline();

    w.write(body);
    if !w.at_line_start() {
        w.newline();
    }
    w.writeln("@enduml");
    w.finish()
}

/// Render the document and write it to `path`, creating missing parent directories.
pub fn write_puml(path: &Path, body: &str, config: &DiagramConfig) -> Result<(), PumlError> {
    let write_error = |source| PumlError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, render_document(body, config)).map_err(write_error)?;
    tracing::info!(path = %path.display(), "Wrote PlantUML diagram");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Visibility;

    #[test]
    fn test_minimal_document() {
        let doc = render_document("", &DiagramConfig::default());
        let expected = format!(
            "@startuml\n' Generated by pgen {PGEN_VERSION}\n' Directories:\n' Attribute visibility: NONE\n' Method visibility: NONE\n\n@enduml\n"
        );
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_header_options() {
        let config = DiagramConfig::new()
            .with_directories(vec![PathBuf::from("a/src/main/java")])
            .with_visibilities(Visibility::Private, Visibility::Public)
            .with_scale(Some("max 1024 height".to_string()))
            .with_title(Some("Model".to_string()))
            .with_caption(Some("v1".to_string()))
            .with_left_to_right(true);
        let doc = render_document("class A {\n}\n", &config);
        assert!(doc.contains("' - a/src/main/java\n"));
        assert!(doc.contains("' Attribute visibility: PRIVATE\n' Method visibility: PUBLIC\n"));
        assert!(doc.contains("scale max 1024 height\ntitle Model\ncaption v1\nleft to right direction\n\nclass A {"));
        assert!(doc.ends_with("}\n@enduml\n"));
    }

    #[test]
    fn test_body_without_trailing_newline() {
        let doc = render_document("class A {\n}", &DiagramConfig::default());
        assert!(doc.ends_with("class A {\n}\n@enduml\n"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/diagram.puml");
        write_puml(&path, "", &DiagramConfig::default()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("@startuml\n"));
    }

    #[test]
    fn test_write_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let err = write_puml(dir.path(), "", &DiagramConfig::default()).unwrap_err();
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
