//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: delimiters,
//! separators, access/path markers and a few structural markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//! - `?` and `:` are listed as punctuation rather than operators: the structural parser only ever sees them in
//!   wildcards (`? extends T`) and enhanced-for/label positions, and skips conditional expressions wholesale.
//!
//! ## Examples
//! ```rust
//! use pgen_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctuationId::Ellipsis), "...");
//! ```

use super::registry::Since;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
    /// Access/path markers like `.` and `::`.
    Access,
    /// Misc markers like `?`, `@`, `...`, `->`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,
    Colon,

    // Access / path
    Dot,
    ColonColon,

    // Markers
    At,
    Question,
    Ellipsis,
    Arrow,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub since: Since,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator, Since(1)),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator, Since(1)),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator, Since(1)),
    // Access / path
    info(PunctuationId::Dot, ".", PunctuationCategory::Access, Since(1)),
    info(PunctuationId::ColonColon, "::", PunctuationCategory::Access, Since(8)),
    // Markers
    info(PunctuationId::At, "@", PunctuationCategory::Marker, Since(5)),
    info(PunctuationId::Question, "?", PunctuationCategory::Marker, Since(1)),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker, Since(5)),
    info(PunctuationId::Arrow, "->", PunctuationCategory::Marker, Since(8)),
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter, Since(1)),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter, Since(1)),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter, Since(1)),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter, Since(1)),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter, Since(1)),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter, Since(1)),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory, since: Since) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        since,
    }
}
