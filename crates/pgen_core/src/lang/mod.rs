//! Java language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, punctuation,
//! declaration modifiers and the implicitly imported `java.lang` types.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer, parser and generator. Instead,
//! callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings/metadata via registry
//! tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use.
//!
//! ## Examples
//! ```rust
//! use pgen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("enum"), Some(KeywordId::Enum));
//! assert_eq!(keywords::as_str(KeywordId::Enum), "enum");
//! ```

pub mod java_lang;
pub mod keywords;
pub mod modifiers;
pub mod operators;
pub mod punctuation;
pub mod registry;
