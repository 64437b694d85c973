//! `HolidayRule` — one holiday, as data.
//!
//! A country's holidays are a flat table of rules. Each rule is either
//! a fixed calendar date or a signed day offset from Easter Sunday,
//! optionally restricted to a range of years. Tables are plain `static`
//! slices built with the `const` constructors below, so adding a country
//! means writing data, not code.

use hol_core::Year;
use hol_time::{easter, Date, Month};

/// How a rule's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The same month and day every year.
    Fixed(Month, u8),
    /// A signed number of days relative to Easter Sunday.
    EasterOffset(i32),
}

/// A single holiday definition.
///
/// Construct with [`fixed`] or [`easter_offset`], then optionally narrow
/// the years it applies to with [`since`](HolidayRule::since) and
/// [`until`](HolidayRule::until):
///
/// ```
/// use hol_calendar::rule::{easter_offset, fixed};
/// use hol_time::Month;
///
/// let national_day = fixed("Nationalfeiertag", Month::October, 26).since(1967);
/// let good_friday = easter_offset("Karfreitag", -2);
///
/// assert_eq!(national_day.resolve(1966), None);
/// assert!(national_day.resolve(2024).is_some());
/// assert!(good_friday.resolve(2024).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    name: &'static str,
    kind: RuleKind,
    first: Option<Year>,
    last: Option<Year>,
}

/// A holiday that falls on the same month and day every year.
pub const fn fixed(name: &'static str, month: Month, day: u8) -> HolidayRule {
    HolidayRule {
        name,
        kind: RuleKind::Fixed(month, day),
        first: None,
        last: None,
    }
}

/// A movable feast, `days` days after Easter Sunday (negative = before).
pub const fn easter_offset(name: &'static str, days: i32) -> HolidayRule {
    HolidayRule {
        name,
        kind: RuleKind::EasterOffset(days),
        first: None,
        last: None,
    }
}

impl HolidayRule {
    /// Restrict the rule to years `>= year`.
    pub const fn since(mut self, year: Year) -> Self {
        self.first = Some(year);
        self
    }

    /// Restrict the rule to years `<= year`.
    pub const fn until(mut self, year: Year) -> Self {
        self.last = Some(year);
        self
    }

    /// The holiday's label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// How the date is derived.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Materialize the rule for `year`.
    ///
    /// Returns `None` when the rule does not apply: the year lies outside
    /// the rule's `since`/`until` window, the fixed date does not exist
    /// that year (February 29), or the offset leaves the supported date
    /// range. A rule that yields `None` is simply skipped; the year's
    /// other holidays are unaffected.
    pub fn resolve(&self, year: Year) -> Option<Date> {
        if self.first.is_some_and(|first| year < first) {
            return None;
        }
        if self.last.is_some_and(|last| year > last) {
            return None;
        }
        match self.kind {
            RuleKind::Fixed(month, day) => Date::from_ymd(year, month.number(), day).ok(),
            RuleKind::EasterOffset(days) => easter::western(year)
                .and_then(|sunday| sunday.add_days(days))
                .ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_rule_resolves_every_year() {
        let rule = fixed("Neujahr", Month::January, 1);
        assert_eq!(rule.resolve(2024), Some(date(2024, 1, 1)));
        assert_eq!(rule.resolve(1583), Some(date(1583, 1, 1)));
        assert_eq!(rule.resolve(4099), Some(date(4099, 1, 1)));
    }

    #[test]
    fn easter_offset_rule() {
        // Easter 2024 is March 31.
        let good_friday = easter_offset("Karfreitag", -2);
        assert_eq!(good_friday.resolve(2024), Some(date(2024, 3, 29)));

        let whit_monday = easter_offset("Pfingstmontag", 50);
        assert_eq!(whit_monday.resolve(2024), Some(date(2024, 5, 20)));
    }

    #[test]
    fn year_window() {
        let rule = fixed("Nationalfeiertag", Month::November, 12)
            .since(1919)
            .until(1934);
        assert_eq!(rule.resolve(1918), None);
        assert_eq!(rule.resolve(1919), Some(date(1919, 11, 12)));
        assert_eq!(rule.resolve(1934), Some(date(1934, 11, 12)));
        assert_eq!(rule.resolve(1935), None);
    }

    #[test]
    fn leap_day_rule_skips_common_years() {
        let rule = fixed("Schalttag", Month::February, 29);
        assert_eq!(rule.resolve(2024), Some(date(2024, 2, 29)));
        assert_eq!(rule.resolve(2023), None);
    }

    #[test]
    fn offset_leaving_date_range_is_skipped() {
        // Easter 1583 is April 10; 400 days back lands before the epoch.
        let rule = easter_offset("Weit zurück", -400);
        assert_eq!(rule.resolve(1583), None);
        assert!(rule.resolve(1600).is_some());

        // Easter 4099 is April 19; 300 days ahead leaves the range.
        let rule = easter_offset("Weit voraus", 300);
        assert_eq!(rule.resolve(4099), None);
    }

    #[test]
    fn resolve_outside_supported_years() {
        assert_eq!(fixed("Neujahr", Month::January, 1).resolve(1582), None);
        assert_eq!(easter_offset("Ostern", 0).resolve(4100), None);
    }
}
