//! Per-country holiday rule tables.
//!
//! Each module holds one country's table as a `static` slice of
//! [`HolidayRule`](crate::rule::HolidayRule)s. Adding a country is a
//! matter of writing such a table and listing it in
//! [`Country`](crate::Country).

pub mod austria;
pub mod germany;
pub mod liechtenstein;
pub mod switzerland;
