#![forbid(unsafe_code)]
//! pgen: PlantUML class diagrams from Java sources
//!
//! pgen scans directories of `.java` files, describes every class, interface, enum and record it finds, and writes
//! the result as a PlantUML class diagram. The Java frontend (lexer, structural parser, diagnostics) lives in
//! `pgen_syntax`; this crate holds the descriptor model, the generator and its type resolver, the filters, the
//! PlantUML renderer and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod descriptor;
pub mod filter;
pub mod generator;
pub mod puml;
pub mod version;

pub use pgen_syntax::{ast, diagnostics, lexer, parser};

pub use descriptor::{
    ClassDescriptor, DependencyLevel, Descriptor, EnumDescriptor, FieldDescriptor, MethodDescriptor, TypeKind,
    TypeName, ValueDescriptor, Visibility,
};
pub use filter::{BaseClassError, PackageScope, filter_for_base_class};
pub use generator::{ClassDescriptorGenerator, GenerateError, GeneratorConfig, Scope};
pub use puml::{DiagramConfig, PumlBodyGenerator, PumlError};
