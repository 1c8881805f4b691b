//! Class descriptor generation.
//!
//! The generator discovers `.java` files under each scope directory, parses them with `pgen_syntax`, indexes every
//! declared type, and describes each class, interface, record and enum (nested ones included) as a
//! [`Descriptor`].
//!
//! ## Modules
//!
//! - `describe` - AST to descriptor conversion for one compilation unit
//! - `resolve` - Symbol index and written-name to qualified-name resolution
//!
//! ## Notes
//!
//! - Files are visited in sorted order per directory, so output is deterministic.
//! - A file that fails to lex or parse aborts generation unless `skip_unparsable` is set.

mod describe;
pub mod resolve;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pgen_syntax::ast::CompilationUnit;
use pgen_syntax::diagnostics::{self, CompileError};
use pgen_syntax::{lexer, parser};
use thiserror::Error;
use walkdir::WalkDir;

use crate::descriptor::{DependencyLevel, Descriptor, Visibility};
use describe::Describer;
use resolve::SymbolIndex;

/// Maximum source file size (100 MB)
///
/// Larger files are rejected before reading.
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot walk directory '{}': {source}", directory.display())]
    Walk {
        directory: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source file '{}' is too large ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    /// `diagnostics` holds every lexer or parser error, rendered with source excerpts.
    #[error("failed to parse '{}' ({count} error(s))\n{diagnostics}", path.display())]
    Parse {
        path: PathBuf,
        count: usize,
        diagnostics: String,
    },
}

// ============================================================================
// Configuration
// ============================================================================

/// Directories to scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub directories: Vec<PathBuf>,
}

impl Scope {
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }
}

/// What the generator extracts from each type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Minimum access level for listed methods (`None` lists none)
    pub method_visibility: Visibility,
    /// Minimum access level for listed fields (`None` lists none)
    pub attribute_visibility: Visibility,
    /// How far dependencies are collected and resolved
    pub dependency_level: DependencyLevel,
    /// Resolve references against the scanned sources so packages can be shown
    pub show_package: bool,
    /// Keep the source text of enum constant arguments
    pub show_enum_arguments: bool,
    /// Log and skip files that fail to parse instead of aborting
    pub skip_unparsable: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            method_visibility: Visibility::None,
            attribute_visibility: Visibility::None,
            dependency_level: DependencyLevel::None,
            show_package: false,
            show_enum_arguments: false,
            skip_unparsable: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method_visibility(mut self, visibility: Visibility) -> Self {
        self.method_visibility = visibility;
        self
    }

    pub fn with_attribute_visibility(mut self, visibility: Visibility) -> Self {
        self.attribute_visibility = visibility;
        self
    }

    pub fn with_dependency_level(mut self, level: DependencyLevel) -> Self {
        self.dependency_level = level;
        self
    }

    pub fn with_show_package(mut self, show: bool) -> Self {
        self.show_package = show;
        self
    }

    pub fn with_show_enum_arguments(mut self, show: bool) -> Self {
        self.show_enum_arguments = show;
        self
    }

    pub fn with_skip_unparsable(mut self, skip: bool) -> Self {
        self.skip_unparsable = skip;
        self
    }
}

// ============================================================================
// Generator
// ============================================================================

/// A parsed file together with the text its spans point into.
struct ParsedSource {
    path: PathBuf,
    source: String,
    unit: CompilationUnit,
}

pub struct ClassDescriptorGenerator {
    scope: Scope,
    config: GeneratorConfig,
}

impl ClassDescriptorGenerator {
    pub fn new(scope: Scope, config: GeneratorConfig) -> Self {
        Self { scope, config }
    }

    /// Describe every type in every `.java` file of the scope.
    #[tracing::instrument(skip_all, fields(directories = self.scope.directories.len()))]
    pub fn generate_class_descriptors(&self) -> Result<Vec<Descriptor>, GenerateError> {
        let files = self.discover_files()?;
        tracing::info!(count = files.len(), "Found java source files");

        let mut parsed = Vec::with_capacity(files.len());
        for path in files {
            tracing::trace!(path = %path.display(), "Generating descriptors");
            let source = read_source(&path)?;
            match parse_source(&path, &source) {
                Ok(unit) => parsed.push(ParsedSource { path, source, unit }),
                Err(err @ GenerateError::Parse { .. }) if self.config.skip_unparsable => {
                    tracing::warn!(path = %path.display(), "Skipping unparsable file");
                    tracing::debug!("{err}");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(self.describe_all(&parsed))
    }

    /// Describe the types of a single in-memory source.
    ///
    /// Only the types of this source are known to the resolver.
    pub fn generate_for_source(&self, path: &Path, source: &str) -> Result<Vec<Descriptor>, GenerateError> {
        let unit = parse_source(path, source)?;
        let parsed = ParsedSource {
            path: path.to_path_buf(),
            source: source.to_string(),
            unit,
        };
        Ok(self.describe_all(std::slice::from_ref(&parsed)))
    }

    fn describe_all(&self, parsed: &[ParsedSource]) -> Vec<Descriptor> {
        let mut index = SymbolIndex::new();
        for file in parsed {
            index.add_unit(&file.unit);
        }
        tracing::debug!(types = index.len(), "Indexed declared types");

        let mut descriptors = Vec::new();
        for file in parsed {
            tracing::trace!(path = %file.path.display(), "Describing compilation unit");
            let describer = Describer::new(&index, &file.unit, &file.source, &self.config);
            descriptors.extend(describer.describe_unit());
        }
        descriptors
    }

    /// All `.java` files below the scope directories, sorted per directory.
    fn discover_files(&self) -> Result<Vec<PathBuf>, GenerateError> {
        let mut files = Vec::new();
        for directory in &self.scope.directories {
            for entry in WalkDir::new(directory).sort_by_file_name() {
                let entry = entry.map_err(|source| GenerateError::Walk {
                    directory: directory.clone(),
                    source,
                })?;
                let is_java = entry.path().extension().is_some_and(|ext| ext == "java");
                if entry.file_type().is_file() && is_java {
                    files.push(entry.into_path());
                }
            }
        }
        Ok(files)
    }
}

/// Read a source file, rejecting files over [`MAX_SOURCE_SIZE`].
pub fn read_source(path: &Path) -> Result<String, GenerateError> {
    let metadata = fs::metadata(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(GenerateError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }
    fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Lex and parse one source file.
pub fn parse_source(path: &Path, source: &str) -> Result<CompilationUnit, GenerateError> {
    let tokens = lexer::lex(source).map_err(|errs| parse_error(path, source, &errs))?;
    parser::parse(&tokens).map_err(|errs| parse_error(path, source, &errs))
}

fn parse_error(path: &Path, source: &str, errors: &[CompileError]) -> GenerateError {
    let file_name = path.display().to_string();
    let mut rendered = String::new();
    for err in errors {
        rendered.push_str(&diagnostics::format_error(&file_name, source, err));
    }
    GenerateError::Parse {
        path: path.to_path_buf(),
        count: errors.len(),
        diagnostics: rendered.trim_end().to_string(),
    }
}
