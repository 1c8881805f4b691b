//! Define the reserved keyword vocabulary of the Java language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and the Java release that introduced
//! each word.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Contextual keywords (`record`, `sealed`, `non-sealed`, `permits`, `var`, `yield`) are deliberately absent. They
//!   are valid identifiers everywhere except in the positions where the parser gives them meaning.
//! - The literals `true`, `false` and `null` are listed here because they can never be identifiers either.
//!
//! ## Examples
//! ```rust
//! use pgen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("interface"), Some(KeywordId::Interface));
//! assert_eq!(keywords::from_str("record"), None);
//! assert_eq!(keywords::as_str(KeywordId::Int), "int");
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Package,
    Import,
    Class,
    Interface,
    Enum,
    Extends,
    Implements,
    Throws,

    // Modifiers
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,

    // Primitive types
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,

    // Control flow / statements
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Break,
    Continue,
    Return,
    Throw,
    Try,
    Catch,
    Finally,
    Assert,

    // Expressions
    New,
    This,
    Super,
    Instanceof,

    // Literals
    True,
    False,
    Null,

    // Reserved but unused
    Const,
    Goto,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Modifier,
    PrimitiveType,
    ControlFlow,
    Expression,
    Literal,
    Unused,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Package, "package", KeywordCategory::Declaration, Since(1)),
    info(KeywordId::Import, "import", KeywordCategory::Declaration, Since(1)),
    info(KeywordId::Class, "class", KeywordCategory::Declaration, Since(1)),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration, Since(1)),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration, Since(5)),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration, Since(1)),
    info(KeywordId::Implements, "implements", KeywordCategory::Declaration, Since(1)),
    info(KeywordId::Throws, "throws", KeywordCategory::Declaration, Since(1)),
    // Modifiers
    info(KeywordId::Public, "public", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Protected, "protected", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Private, "private", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Static, "static", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Abstract, "abstract", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Final, "final", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Native, "native", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Synchronized, "synchronized", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Transient, "transient", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Volatile, "volatile", KeywordCategory::Modifier, Since(1)),
    info(KeywordId::Strictfp, "strictfp", KeywordCategory::Modifier, Since(2)),
    info(KeywordId::Default, "default", KeywordCategory::Modifier, Since(1)),
    // Primitive types
    info(KeywordId::Boolean, "boolean", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Byte, "byte", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Char, "char", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Short, "short", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Int, "int", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Long, "long", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Float, "float", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Double, "double", KeywordCategory::PrimitiveType, Since(1)),
    info(KeywordId::Void, "void", KeywordCategory::PrimitiveType, Since(1)),
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Throw, "throw", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Finally, "finally", KeywordCategory::ControlFlow, Since(1)),
    info(KeywordId::Assert, "assert", KeywordCategory::ControlFlow, Since(4)),
    // Expressions
    info(KeywordId::New, "new", KeywordCategory::Expression, Since(1)),
    info(KeywordId::This, "this", KeywordCategory::Expression, Since(1)),
    info(KeywordId::Super, "super", KeywordCategory::Expression, Since(1)),
    info(KeywordId::Instanceof, "instanceof", KeywordCategory::Expression, Since(1)),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, Since(1)),
    info(KeywordId::False, "false", KeywordCategory::Literal, Since(1)),
    info(KeywordId::Null, "null", KeywordCategory::Literal, Since(1)),
    // Reserved but unused
    reserved(KeywordId::Const, "const"),
    reserved(KeywordId::Goto, "goto"),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if the keyword names a primitive type (including `void`).
pub fn is_primitive_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::PrimitiveType
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a reserved word.
/// - `None` otherwise (including contextual keywords such as `record`).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since,
        stability: Stability::Stable,
    }
}

const fn reserved(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category: KeywordCategory::Unused,
        since: Since(1),
        stability: Stability::Reserved,
    }
}
