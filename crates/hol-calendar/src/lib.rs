//! # hol-calendar
//!
//! Country public-holiday calendars, generated on the fly.
//!
//! A [`HolidayCalendar`] owns a table of [`HolidayRule`]s (fixed dates
//! and Easter-relative offsets) and materializes them into concrete
//! dates one year at a time, the first time a query touches that year.
//! Results are cached, so repeated queries cost a map lookup.
//!
//! ```
//! use hol_calendar::{Country, HolidayCalendar};
//! use hol_time::Date;
//!
//! let mut li = HolidayCalendar::for_country(Country::Liechtenstein);
//! let easter_monday = Date::from_ymd(2024, 4, 1).unwrap();
//! assert_eq!(li.get(easter_monday), Some("Ostermontag"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` — the lazily populated holiday map.
pub mod calendar;

/// Country codes and their rule tables.
pub mod country;

/// Per-country holiday rule tables.
pub mod countries;

/// `HolidayRule` — one holiday, as data.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::HolidayCalendar;
pub use country::Country;
pub use rule::{easter_offset, fixed, HolidayRule, RuleKind};
