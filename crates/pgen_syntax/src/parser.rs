//! Structural parser for Java compilation units
//!
//! Converts a token stream into a [`CompilationUnit`]. Declarations and signatures are parsed in full; method bodies,
//! initializer expressions and annotation arguments are skipped by balanced-delimiter scanning.
//!
//! ## Examples
//!
//! ```rust
//! use pgen_syntax::{lexer, parser};
//!
//! let source = "class Foo { int bar() { return 42; } }";
//! let tokens = lexer::lex(source).unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.types[0].node.methods().count(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use pgen_core::lang::keywords::KeywordId;
use pgen_core::lang::modifiers::{self, ModifierId};
use pgen_core::lang::operators::OperatorId;
use pgen_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/members.rs");
include!("parser/types.rs");
include!("parser/skip.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
