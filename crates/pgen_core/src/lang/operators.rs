//! Operator vocabulary.
//!
//! This module defines the Java operator set along with a coarse category. The structural parser never evaluates
//! expressions, so precedence and associativity are not recorded; the registry exists so the lexer can emit
//! ID-bearing tokens and diagnostics can print canonical spellings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `>` is never merged into `>>`, `>>>`, `>>=` or `>>>=`. Those spellings are absent on purpose: a run of `>`
//!   tokens closes nested type-argument lists (`Map<K, List<V>>`), and expression skipping does not care how
//!   shifts are tokenized.
//!
//! ## Examples
//! ```rust
//! use pgen_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+="), Some(OperatorId::PlusEq));
//! assert_eq!(operators::from_str(">>"), None);
//! ```

/// Coarse operator grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Assignment,
    Arithmetic,
    Comparison,
    Logical,
    Bitwise,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Bang,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Eq, "=", OperatorCategory::Assignment),
    op(OperatorId::PlusEq, "+=", OperatorCategory::Assignment),
    op(OperatorId::MinusEq, "-=", OperatorCategory::Assignment),
    op(OperatorId::StarEq, "*=", OperatorCategory::Assignment),
    op(OperatorId::SlashEq, "/=", OperatorCategory::Assignment),
    op(OperatorId::PercentEq, "%=", OperatorCategory::Assignment),
    op(OperatorId::AmpEq, "&=", OperatorCategory::Assignment),
    op(OperatorId::PipeEq, "|=", OperatorCategory::Assignment),
    op(OperatorId::CaretEq, "^=", OperatorCategory::Assignment),
    op(OperatorId::ShlEq, "<<=", OperatorCategory::Assignment),
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    op(OperatorId::Percent, "%", OperatorCategory::Arithmetic),
    op(OperatorId::PlusPlus, "++", OperatorCategory::Arithmetic),
    op(OperatorId::MinusMinus, "--", OperatorCategory::Arithmetic),
    // Comparison
    op(OperatorId::EqEq, "==", OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
    // Logical
    op(OperatorId::AndAnd, "&&", OperatorCategory::Logical),
    op(OperatorId::OrOr, "||", OperatorCategory::Logical),
    op(OperatorId::Bang, "!", OperatorCategory::Logical),
    // Bitwise
    op(OperatorId::Amp, "&", OperatorCategory::Bitwise),
    op(OperatorId::Pipe, "|", OperatorCategory::Bitwise),
    op(OperatorId::Caret, "^", OperatorCategory::Bitwise),
    op(OperatorId::Tilde, "~", OperatorCategory::Bitwise),
    op(OperatorId::Shl, "<<", OperatorCategory::Bitwise),
];

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, spelling, category }
}
