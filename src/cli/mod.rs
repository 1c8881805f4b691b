//! CLI module for pgen
//!
//! This module provides the command-line interface of the diagram generator.
//!
//! ## Entry points
//!
//! - `pgen --directories <DIR>... [options]` - Generate a PlantUML class diagram
//! - `pgen --lex <FILE>` - Dump the token stream of a Java file (debug)
//! - `pgen --parse <FILE>` - Dump the structural AST of a Java file (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::descriptor::{DependencyLevel, TypeKind, Visibility};
use crate::version::PGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate PlantUML class diagrams from Java sources
#[derive(Parser, Debug)]
#[command(name = "pgen")]
#[command(version = PGEN_VERSION)]
#[command(about = "Generate PlantUML class diagrams from Java sources", long_about = None)]
pub struct Cli {
    /// Directories with java files to analyze
    #[arg(
        long,
        value_name = "DIR",
        num_args = 1..,
        required_unless_present_any = ["lex_file", "parse_file"]
    )]
    pub directories: Vec<PathBuf>,

    /// Limit the diagram to these Java packages (and their subpackages)
    #[arg(long, value_name = "PACKAGE", num_args = 1..)]
    pub packages: Vec<String>,

    /// Leave out types from these packages, and every arrow pointing into them
    #[arg(long, value_name = "PACKAGE", num_args = 1..)]
    pub exclude_packages: Vec<String>,

    /// Output file for the PlantUML class diagram
    #[arg(long, value_name = "FILE", default_value = "output.puml")]
    pub output_file: PathBuf,

    /// Which methods to show
    #[arg(long, value_enum, ignore_case = true, default_value_t = Visibility::None)]
    pub method_visibility: Visibility,

    /// Which attributes/fields to show
    #[arg(long, value_enum, ignore_case = true, default_value_t = Visibility::None)]
    pub attribute_visibility: Visibility,

    /// Which dependencies to show in the diagram
    #[arg(long, value_enum, ignore_case = true, default_value_t = DependencyLevel::None)]
    pub dependency_level: DependencyLevel,

    /// Only draw the hierarchy below this base class
    #[arg(long, value_name = "CLASS")]
    pub base_class: Option<String>,

    /// Kind to draw the base class as when it is not among the sources (skips the prompt)
    #[arg(long, value_enum, ignore_case = true, requires = "base_class")]
    pub base_class_type: Option<TypeKind>,

    /// Scale of the diagram, e.g. '1.5', '200*100' or 'max 1024 height'
    #[arg(long)]
    pub scale: Option<String>,

    /// Title of the diagram
    #[arg(long)]
    pub title: Option<String>,

    /// Caption of the diagram
    #[arg(long)]
    pub caption: Option<String>,

    /// Lay the diagram out left to right instead of top to bottom
    #[arg(long)]
    pub left_to_right_direction: bool,

    /// Prefix type names with their package
    #[arg(long)]
    pub show_package: bool,

    /// Show the constructor arguments of enum constants
    #[arg(long)]
    pub show_enum_arguments: bool,

    /// Use the directories as given instead of descending into src/main/java
    #[arg(long)]
    pub no_maven_layout: bool,

    /// Log and skip java files that fail to parse
    #[arg(long)]
    pub skip_unparsable: bool,

    /// Debug log level
    #[arg(long)]
    pub debug: bool,

    /// Trace log level
    #[arg(long)]
    pub trace: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["directories", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "directories")]
    pub parse_file: Option<PathBuf>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.debug, cli.trace);

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Initialize structured logging: `--trace`, then `--debug`, then `RUST_LOG`, defaulting to info.
pub fn init_logging(debug: bool, trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file);
    }
    commands::generate(&cli)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["pgen", "--directories", "src"]).unwrap();
        assert_eq!(cli.directories, vec![PathBuf::from("src")]);
        assert_eq!(cli.output_file, PathBuf::from("output.puml"));
        assert_eq!(cli.method_visibility, Visibility::None);
        assert_eq!(cli.attribute_visibility, Visibility::None);
        assert_eq!(cli.dependency_level, DependencyLevel::None);
        assert!(cli.base_class.is_none());
        assert!(!cli.show_package && !cli.left_to_right_direction && !cli.no_maven_layout);
    }

    #[test]
    fn test_cli_parse_multiple_directories() {
        let cli = Cli::try_parse_from(["pgen", "--directories", "a", "b", "--directories", "c"]).unwrap();
        assert_eq!(cli.directories.len(), 3);
    }

    #[test]
    fn test_cli_parse_levels_case_insensitive() {
        let cli = Cli::try_parse_from([
            "pgen",
            "--directories",
            "src",
            "--method-visibility",
            "PUBLIC",
            "--attribute-visibility",
            "private",
            "--dependency-level",
            "External",
        ])
        .unwrap();
        assert_eq!(cli.method_visibility, Visibility::Public);
        assert_eq!(cli.attribute_visibility, Visibility::Private);
        assert_eq!(cli.dependency_level, DependencyLevel::External);
    }

    #[test]
    fn test_cli_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["pgen", "--directories", "src", "--method-visibility", "friends"]).is_err());
    }

    #[test]
    fn test_cli_requires_directories() {
        assert!(Cli::try_parse_from(["pgen"]).is_err());
        assert!(Cli::try_parse_from(["pgen", "--output-file", "x.puml"]).is_err());
    }

    #[test]
    fn test_cli_base_class_type_requires_base_class() {
        assert!(Cli::try_parse_from(["pgen", "--directories", "src", "--base-class-type", "interface"]).is_err());
        let cli = Cli::try_parse_from([
            "pgen",
            "--directories",
            "src",
            "--base-class",
            "Shape",
            "--base-class-type",
            "abstract-class",
        ])
        .unwrap();
        assert_eq!(cli.base_class_type, Some(TypeKind::AbstractClass));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["pgen", "--lex", "A.java"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["pgen", "--parse", "A.java"]).unwrap();
        assert!(cli.parse_file.is_some());

        assert!(Cli::try_parse_from(["pgen", "--lex", "A.java", "--directories", "src"]).is_err());
    }
}
