//! # hol-time
//!
//! Calendar dates and the Easter computus for the holidays workspace.
//!
//! [`Date`] is a serial-number type covering 1583-01-01 through
//! 4099-12-31 — the span the Gregorian Easter computus is defined for —
//! and [`easter::western`] returns Easter Sunday for any year in that
//! range. Everything a holiday table needs (fixed dates, day offsets
//! from Easter) is built from these two pieces.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Date of Easter.
pub mod easter;

/// `Month` — month-of-year enum.
pub mod month;

/// `Weekday` — day-of-week enum.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
