//! pgen version information.
//!
//! The CLI `--version` output and the header comment of every generated diagram use this constant, so both always
//! agree.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The pgen version string (for example, `0.1.0`).
pub const PGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
