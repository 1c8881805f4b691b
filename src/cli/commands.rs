//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Select};

use crate::descriptor::{Descriptor, TypeKind};
use crate::diagnostics;
use crate::filter::{BaseClassError, PackageScope, filter_for_base_class};
use crate::generator::{self, ClassDescriptorGenerator, GeneratorConfig, Scope};
use crate::puml::{DiagramConfig, PumlBodyGenerator, write_puml};
use crate::{lexer, parser};

use super::{Cli, CliError, CliResult, ExitCode};

// ============================================================================
// Diagram generation
// ============================================================================

/// Generate the class diagram described by the CLI options.
pub fn generate(cli: &Cli) -> CliResult<ExitCode> {
    print_settings(cli);
    check_output_file(&cli.output_file)?;

    // Every directory must be the java source root or one of its children.
    let directories = if cli.no_maven_layout {
        for directory in &cli.directories {
            check_directory(directory)?;
        }
        cli.directories.clone()
    } else {
        correct_directories(&cli.directories)?
    };

    let config = GeneratorConfig::new()
        .with_method_visibility(cli.method_visibility)
        .with_attribute_visibility(cli.attribute_visibility)
        .with_dependency_level(cli.dependency_level)
        .with_show_package(cli.show_package)
        .with_show_enum_arguments(cli.show_enum_arguments)
        .with_skip_unparsable(cli.skip_unparsable);
    let generator = ClassDescriptorGenerator::new(Scope::new(directories.clone()), config);
    let descriptors = generator
        .generate_class_descriptors()
        .map_err(|e| CliError::failure(e.to_string()))?;

    let descriptors = PackageScope::new(cli.packages.clone(), cli.exclude_packages.clone()).apply(descriptors);
    let descriptors = match &cli.base_class {
        Some(base) => {
            tracing::info!("Filtering for base class {base}");
            filter_base_class(&descriptors, base, cli.base_class_type)?
        }
        None => descriptors,
    };
    tracing::info!(count = descriptors.len(), "Rendering types");

    let diagram = DiagramConfig::new()
        .with_show_package(cli.show_package)
        .with_directories(directories)
        .with_visibilities(cli.attribute_visibility, cli.method_visibility)
        .with_scale(cli.scale.clone())
        .with_title(cli.title.clone())
        .with_caption(cli.caption.clone())
        .with_left_to_right(cli.left_to_right_direction);
    let body = PumlBodyGenerator::new(diagram.show_package).generate_puml_body(&descriptors);
    write_puml(&cli.output_file, &body, &diagram).map_err(|e| CliError::failure(e.to_string()))?;
    Ok(ExitCode::SUCCESS)
}

fn print_settings(cli: &Cli) {
    let output = display_absolute(&cli.output_file);
    tracing::info!("Generating PUML Class Diagram");
    tracing::info!("Using {output} as output path");
    tracing::info!("# Using Directories:");
    for directory in &cli.directories {
        tracing::info!("# # {}", display_absolute(directory));
    }
    tracing::info!("Using Options:");
    tracing::info!("# OutputFile {output}");
    tracing::info!("# Method Visibility {}", cli.method_visibility);
    tracing::info!("# Attribute Visibility {}", cli.attribute_visibility);
    tracing::info!("# Dependency Level {}", cli.dependency_level);
    if let Some(base) = &cli.base_class {
        tracing::info!("# Base Class {base}");
    }
    if !cli.packages.is_empty() {
        tracing::info!("# Packages {}", cli.packages.join(", "));
    }
    if !cli.exclude_packages.is_empty() {
        tracing::info!("# Excluded Packages {}", cli.exclude_packages.join(", "));
    }
    if let Some(title) = &cli.title {
        tracing::info!("# Title {title}");
    }
    if let Some(caption) = &cli.caption {
        tracing::info!("# Caption {caption}");
    }
    if let Some(scale) = &cli.scale {
        tracing::info!("# Scale {scale}");
    }
    if cli.left_to_right_direction {
        tracing::info!("# Direction left to right");
    } else {
        tracing::info!("# Direction top to bottom");
    }
    if cli.show_package {
        tracing::info!("# Showing Packages");
    }
}

/// An existing output file is overwritten; anything else at that path is an error.
fn check_output_file(path: &Path) -> CliResult<()> {
    if !path.exists() {
        return Ok(());
    }
    if path.is_file() {
        tracing::info!("Output file already exists. It will be overwritten");
        Ok(())
    } else {
        Err(CliError::failure(format!(
            "Output file {} already exists and is not a file.",
            display_absolute(path)
        )))
    }
}

/// Point every directory at its maven source root (`src/main/java`) unless it already is one or lies below one.
pub fn correct_directories(directories: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut corrected = Vec::with_capacity(directories.len());
    for directory in directories {
        check_directory(directory)?;
        if is_in_maven_source_root(&absolute(directory)) {
            corrected.push(directory.clone());
            continue;
        }
        let child = match directory.file_name().and_then(|n| n.to_str()) {
            Some("main") => "java",
            Some("src") => "main/java",
            _ => "src/main/java",
        };
        let target = directory.join(child);
        tracing::warn!("Corrected {} to {}", display_absolute(directory), display_absolute(&target));
        check_directory(&target)?;
        corrected.push(target);
    }
    Ok(corrected)
}

/// `src/main/java` appears in the path, with either separator.
fn is_in_maven_source_root(path: &Path) -> bool {
    path.to_string_lossy().replace('\\', "/").contains("src/main/java")
}

fn check_directory(directory: &Path) -> CliResult<()> {
    if !directory.exists() {
        Err(CliError::failure(format!(
            "Directory {} does not exist.",
            display_absolute(directory)
        )))
    } else if !directory.is_dir() {
        Err(CliError::failure(format!("{} is not a directory.", display_absolute(directory))))
    } else {
        Ok(())
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn display_absolute(path: &Path) -> String {
    absolute(path).display().to_string()
}

// ============================================================================
// Base class filtering
// ============================================================================

/// Filter to the base class tree, asking how to draw the base class when it is not among the sources.
fn filter_base_class(descriptors: &[Descriptor], base: &str, kind: Option<TypeKind>) -> CliResult<Vec<Descriptor>> {
    match filter_for_base_class(descriptors, base, kind) {
        Ok(filtered) => Ok(filtered),
        Err(BaseClassError::NotFound(_)) => {
            let kind = prompt_base_class_kind(base)?;
            filter_for_base_class(descriptors, base, Some(kind)).map_err(|e| CliError::failure(e.to_string()))
        }
    }
}

fn prompt_base_class_kind(base: &str) -> CliResult<TypeKind> {
    if !io::stdin().is_terminal() {
        return Err(CliError::failure(format!(
            "Base class {base} could not be found in package. Pass --base-class-type to draw it anyway."
        )));
    }

    let proceed = Confirm::new()
        .with_prompt(format!("Base class {base} could not be found in package. Continue?"))
        .default(false)
        .interact()
        .map_err(|e| CliError::failure(format!("Prompt failed: {e}")))?;
    if !proceed {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    let choices = ["class", "abstract class", "interface"];
    let selected = Select::new()
        .with_prompt(format!("Choose type of {base}:"))
        .items(&choices)
        .default(0)
        .interact()
        .map_err(|e| CliError::failure(format!("Prompt failed: {e}")))?;
    choices
        .get(selected)
        .and_then(|choice| TypeKind::from_keyword(choice))
        .ok_or_else(|| CliError::failure(format!("Invalid type selection for {base}")))
}

// ============================================================================
// Debug commands
// ============================================================================

/// Read a source file, enforcing the generator's size limit.
pub fn read_source(file_path: &Path) -> CliResult<String> {
    generator::read_source(file_path).map_err(|e| CliError::failure(e.to_string()))
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = match lexer::lex(&source) {
        Ok(toks) => toks,
        Err(errs) => return Err(render_errors(file_path, &source, &errs)),
    };

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = match lexer::lex(&source) {
        Ok(t) => t,
        Err(errs) => return Err(render_errors(file_path, &source, &errs)),
    };

    match parser::parse(&tokens) {
        Ok(ast) => {
            println!("{:#?}", ast);
            Ok(ExitCode::SUCCESS)
        }
        Err(errs) => Err(render_errors(file_path, &source, &errs)),
    }
}

fn render_errors(file_path: &Path, source: &str, errs: &[diagnostics::CompileError]) -> CliError {
    let file_name = file_path.display().to_string();
    let mut msg = String::new();
    for err in errs {
        msg.push_str(&diagnostics::format_error(&file_name, source, err));
    }
    CliError::failure(msg.trim_end())
}
