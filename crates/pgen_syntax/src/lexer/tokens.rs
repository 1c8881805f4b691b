//! Token types for the Java lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Contextual keywords (`record`, `sealed`, `permits`, `var`, `yield`) are plain `Ident` tokens; the parser
//!   recognizes them by position.
//! - `>` is never merged into `>>`/`>>>`, so nested type arguments close cleanly. Shift expressions only appear in
//!   skipped bodies and initializers where token boundaries don't matter.
//! - Literal tokens keep their raw source text; nothing downstream needs evaluated values.

use crate::ast::Span;
use pgen_core::lang::keywords::{self, KeywordId};
use pgen_core::lang::operators::OperatorId;
use pgen_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    /// Integer literal as written (`0x1F`, `1_000L`).
    Int(String),
    /// Floating-point literal as written (`1.5e3f`).
    Float(String),
    /// Character literal body, without quotes.
    Char(String),
    /// String literal body, without quotes and with escapes left as written.
    String(String),
    /// Text block body (`"""..."""`), without delimiters.
    TextBlock(String),

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
