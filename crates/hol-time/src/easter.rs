//! Date of Easter.
//!
//! Movable feasts (Good Friday, Whit Monday, Corpus Christi, …) are
//! defined as day offsets from Easter Sunday, so one computus serves
//! every holiday table in the workspace.

use hol_core::{Error, Result, Year};

use crate::date::Date;

/// Compute the date of Western Easter Sunday for `year`.
///
/// Uses the anonymous Gregorian computus (the Meeus/Jones/Butcher
/// formulation). Pure and total for every year [`Date`] supports;
/// earlier years belong to the Julian calendar and are rejected.
///
/// # Errors
/// `Error::YearOutOfRange` if `year` is outside
/// [`Date::MIN_YEAR`]..=[`Date::MAX_YEAR`].
///
/// # Example
/// ```
/// use hol_time::{easter, Date};
///
/// let sunday = easter::western(2024).unwrap();
/// assert_eq!(sunday, Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn western(year: Year) -> Result<Date> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange(year));
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = ((h + l - 7 * m + 114) / 31) as u8;
    let day = ((h + l - 7 * m + 114) % 31 + 1) as u8;
    Date::from_ymd(year, month, day)
}
