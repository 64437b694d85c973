//! # holidays
//!
//! Country public-holiday calendars, generated on the fly.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `hol-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! holidays = "0.1"
//! ```
//!
//! ```rust
//! use holidays::calendar::{Country, HolidayCalendar};
//! use holidays::time::Date;
//!
//! let mut li = HolidayCalendar::for_country(Country::Liechtenstein);
//!
//! let aug_15 = Date::from_ymd(2024, 8, 15).unwrap();
//! assert_eq!(li.get(aug_15), Some("Staatsfeiertag"));
//!
//! let whitsun: Vec<_> = li
//!     .between(
//!         Date::from_ymd(2024, 5, 19).unwrap(),
//!         Date::from_ymd(2024, 5, 20).unwrap(),
//!     )
//!     .map(|(date, name)| (date.to_string(), name.to_string()))
//!     .collect();
//! assert_eq!(whitsun.len(), 2);
//! ```
//!
//! ## Features
//! * `serde` — dates serialize as ISO-8601 strings, countries as their
//!   alpha-2 codes.
//! * `chrono` — conversions between [`time::Date`] and
//!   `chrono::NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error and year types.
pub use hol_core as core;

/// Date, month, weekday, and the Easter computus.
pub use hol_time as time;

/// Holiday rules, country tables, and the lazily populated calendar.
pub use hol_calendar as calendar;
