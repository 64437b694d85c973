//! Error types for the holidays workspace.
//!
//! A single `thiserror`-derived enum covers the three ways a request can
//! go wrong: a date that does not exist, a year the Gregorian computus
//! does not cover, and a country code nobody registered.

use thiserror::Error;

use crate::Year;

/// The top-level error type used throughout the holidays workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An invalid calendar date: bad year/month/day combination, an
    /// unparsable date string, or arithmetic that left the supported
    /// range.
    #[error("invalid date: {0}")]
    Date(String),

    /// A year outside the supported range 1583..=4099.
    ///
    /// 1583 is the first full year of the Gregorian calendar; 4099 is
    /// the upper bound commonly quoted for the Gregorian Easter
    /// computus.
    #[error("year {0} outside the supported range [1583, 4099]")]
    YearOutOfRange(Year),

    /// A country code that matches no registered country.
    #[error("unknown country code `{0}`")]
    UnknownCountry(String),
}

/// Shorthand `Result` type used throughout the holidays workspace.
///
/// # Example
/// ```
/// use hol_core::{Error, Result, Year};
///
/// fn reject_prehistoric(year: Year) -> Result<Year> {
///     if year < 1583 {
///         return Err(Error::YearOutOfRange(year));
///     }
///     Ok(year)
/// }
///
/// assert!(reject_prehistoric(2024).is_ok());
/// assert!(reject_prehistoric(1066).is_err());
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;
