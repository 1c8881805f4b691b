//! Declaration modifiers and access levels.
//!
//! Java modifiers are mostly reserved keywords (`public`, `static`, ...) plus two contextual words introduced with
//! sealed classes (`sealed`, `non-sealed`). This module maps both spellings onto a single [`ModifierId`] and derives
//! the [`AccessLevel`] a declaration ends up with.
//!
//! ## Examples
//! ```rust
//! use pgen_core::lang::keywords::KeywordId;
//! use pgen_core::lang::modifiers::{self, AccessLevel, ModifierId};
//!
//! assert_eq!(modifiers::from_keyword(KeywordId::Protected), Some(ModifierId::Protected));
//! assert_eq!(ModifierId::Protected.access(), Some(AccessLevel::Protected));
//! assert_eq!(ModifierId::Static.access(), None);
//! ```

use std::fmt;

use super::keywords::KeywordId;

/// Stable identifier for a declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierId {
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
    /// `default` on interface methods.
    Default,
    Sealed,
    NonSealed,
}

/// Metadata for a modifier.
#[derive(Debug, Clone, Copy)]
pub struct ModifierInfo {
    pub id: ModifierId,
    pub canonical: &'static str,
    /// Backing reserved word, `None` for contextual modifiers.
    pub keyword: Option<KeywordId>,
}

/// Registry of all modifiers.
pub const MODIFIERS: &[ModifierInfo] = &[
    info(ModifierId::Public, "public", Some(KeywordId::Public)),
    info(ModifierId::Protected, "protected", Some(KeywordId::Protected)),
    info(ModifierId::Private, "private", Some(KeywordId::Private)),
    info(ModifierId::Static, "static", Some(KeywordId::Static)),
    info(ModifierId::Abstract, "abstract", Some(KeywordId::Abstract)),
    info(ModifierId::Final, "final", Some(KeywordId::Final)),
    info(ModifierId::Native, "native", Some(KeywordId::Native)),
    info(ModifierId::Synchronized, "synchronized", Some(KeywordId::Synchronized)),
    info(ModifierId::Transient, "transient", Some(KeywordId::Transient)),
    info(ModifierId::Volatile, "volatile", Some(KeywordId::Volatile)),
    info(ModifierId::Strictfp, "strictfp", Some(KeywordId::Strictfp)),
    info(ModifierId::Default, "default", Some(KeywordId::Default)),
    info(ModifierId::Sealed, "sealed", None),
    info(ModifierId::NonSealed, "non-sealed", None),
];

impl ModifierId {
    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        info_for(self).canonical
    }

    /// Access level granted by this modifier, if it is an access modifier.
    pub fn access(self) -> Option<AccessLevel> {
        match self {
            ModifierId::Public => Some(AccessLevel::Public),
            ModifierId::Protected => Some(AccessLevel::Protected),
            ModifierId::Private => Some(AccessLevel::Private),
            _ => None,
        }
    }
}

/// Return the full metadata entry for a modifier.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ModifierId) -> &'static ModifierInfo {
    MODIFIERS.iter().find(|m| m.id == id).expect("modifier info missing")
}

/// Map a reserved word to the modifier it spells, if any.
pub fn from_keyword(keyword: KeywordId) -> Option<ModifierId> {
    MODIFIERS.iter().find(|m| m.keyword == Some(keyword)).map(|m| m.id)
}

/// Map a contextual identifier to the modifier it spells, if any.
///
/// ## Notes
/// - `non-sealed` is three tokens in the source (`non`, `-`, `sealed`); the parser stitches it together and looks up
///   the joined spelling here.
pub fn from_contextual(spelling: &str) -> Option<ModifierId> {
    MODIFIERS
        .iter()
        .find(|m| m.keyword.is_none() && m.canonical == spelling)
        .map(|m| m.id)
}

/// Java access level of a declaration.
///
/// `Package` is the implicit level of a member declared without an access modifier (package-private).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    Public,
    Protected,
    Package,
    Private,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::Public => write!(f, "public"),
            AccessLevel::Protected => write!(f, "protected"),
            AccessLevel::Package => write!(f, "package-private"),
            AccessLevel::Private => write!(f, "private"),
        }
    }
}

const fn info(id: ModifierId, canonical: &'static str, keyword: Option<KeywordId>) -> ModifierInfo {
    ModifierInfo { id, canonical, keyword }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contextual_modifiers() {
        assert_eq!(from_contextual("sealed"), Some(ModifierId::Sealed));
        assert_eq!(from_contextual("non-sealed"), Some(ModifierId::NonSealed));
        assert_eq!(from_contextual("public"), None);
    }

    #[test]
    fn test_access_levels() {
        assert_eq!(ModifierId::Public.access(), Some(AccessLevel::Public));
        assert_eq!(ModifierId::Private.access(), Some(AccessLevel::Private));
        assert_eq!(ModifierId::Final.access(), None);
        assert_eq!(AccessLevel::Package.to_string(), "package-private");
    }
}
