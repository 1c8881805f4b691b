//! Provide the canonical Java vocabulary used by the pgen syntax frontend and diagram generator.
//!
//! This crate is intentionally small and dependency-free. It answers questions like "is `enum` a reserved word?",
//! "which access level does `protected` grant?" or "is `Exception` implicitly imported from `java.lang`?" without
//! knowing anything about tokens, ASTs or files.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no parser-specific types.
//! - Callers work with stable IDs (`KeywordId`, `ModifierId`, ...) and look up spellings in const registries.

pub mod lang;
