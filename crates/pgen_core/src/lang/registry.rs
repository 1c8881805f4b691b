//! Shareable metadata for `pgen_core::lang` registries.
//!
//! The `pgen_core::lang` module is a set of **registry-first** vocabularies: keywords, operators, punctuation and
//! modifiers. This submodule provides the small, dependency-free metadata types that are reused across all of them.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/diagnostics; enforcement of syntax rules still lives in the lexer/parser.

/// Java platform release that introduced a vocabulary item.
///
/// ## Notes
/// - Pre-Java-5 items are all recorded as release `1`; the registries only care about the language additions that
///   changed how declarations look (`enum` in 5, `record` in 16, `sealed` in 17).
///
/// ## Examples
/// ```rust
/// use pgen_core::lang::registry::Since;
///
/// assert!(Since(5) < Since(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u8);

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Examples
/// ```rust
/// use pgen_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Reserved but unused by the language (`const`, `goto`).
    Reserved,
    Deprecated,
}
