//! Java syntax frontend for pgen: lexer, structural parser, AST, diagnostics.
//!
//! The parser is *structural*: it understands everything that shapes a class diagram (packages, imports, type
//! declarations, modifiers, generics, fields, method and constructor signatures) and skips method bodies and
//! initializers by balanced-delimiter scanning. While skipping it still records the class types a body uses
//! (`new T(...)`, local declarations, casts, `catch` clauses) so the generator can report them as dependencies.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not resolve names or read files.
//! - Vocabulary identity (keywords/operators/punctuation/modifiers) comes from `pgen_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use pgen_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("package demo;\npublic class Foo {}\n").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.types.len(), 1);
//! assert_eq!(unit.package_name(), "demo");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
