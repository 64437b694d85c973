//! # hol-core
//!
//! Shared building blocks for the holidays workspace: the error type and
//! the `Year` alias every other crate speaks in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ────────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year in the proleptic Gregorian reckoning.
///
/// Deliberately signed and wider than the supported range so that
/// out-of-range input (say, a pre-Gregorian year) can reach a validation
/// site and come back as a typed error instead of being unrepresentable.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
