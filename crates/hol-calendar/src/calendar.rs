//! `HolidayCalendar` — the lazily populated holiday map.
//!
//! The calendar owns a rule table and a cache of materialized entries.
//! Queries take `&mut self`: the first query touching a year resolves
//! every rule for that year and stores the results, later queries hit
//! the cache. Exclusive access is all the synchronization the type
//! needs; embedders that share a calendar across threads wrap it in a
//! `Mutex`.

use std::collections::{BTreeMap, HashSet};
use std::ops::Add;

use hol_core::{Error, Result, Year};
use hol_time::Date;

use crate::country::Country;
use crate::rule::HolidayRule;

/// A per-country holiday calendar with a lazily filled year cache.
///
/// ```
/// use hol_calendar::{Country, HolidayCalendar};
/// use hol_time::Date;
///
/// let mut ch = HolidayCalendar::for_country(Country::Switzerland);
/// let national_day = Date::from_ymd(2024, 8, 1).unwrap();
/// assert!(ch.contains(national_day));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    rules: Vec<HolidayRule>,
    entries: BTreeMap<Date, String>,
    populated: HashSet<Year>,
}

impl HolidayCalendar {
    /// Create an empty calendar from a rule table.
    ///
    /// No dates are materialized until the first query.
    pub fn new(name: impl Into<String>, rules: Vec<HolidayRule>) -> Self {
        Self {
            name: name.into(),
            rules,
            entries: BTreeMap::new(),
            populated: HashSet::new(),
        }
    }

    /// Create a calendar holding `country`'s rule table.
    pub fn for_country(country: Country) -> Self {
        Self::new(country.name(), country.rules().to_vec())
    }

    /// The calendar's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule table the calendar was built from.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Number of entries materialized so far (rule-derived for every
    /// populated year, plus manual insertions).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no entries have been materialized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Population ───────────────────────────────────────────────────────────

    /// Materialize `year`'s holidays into the cache.
    ///
    /// Queries call this implicitly; it is public so callers can
    /// validate a year (for instance one parsed from user input) before
    /// building dates from it. Populating an already populated year is
    /// a no-op.
    ///
    /// # Errors
    /// `Error::YearOutOfRange` if `year` is outside
    /// [`Date::MIN_YEAR`]..=[`Date::MAX_YEAR`].
    pub fn ensure_year(&mut self, year: Year) -> Result<()> {
        if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange(year));
        }
        self.populate_if_needed(year);
        Ok(())
    }

    /// Resolve every rule for `year` unless the year is already cached.
    ///
    /// Rules run in table order, so when two rules land on the same
    /// date the later one's label is kept.
    fn populate_if_needed(&mut self, year: Year) {
        if !self.populated.insert(year) {
            return;
        }
        for rule in &self.rules {
            if let Some(date) = rule.resolve(year) {
                self.entries.insert(date, rule.name().to_string());
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// `true` if `date` is a holiday in this calendar.
    pub fn contains(&mut self, date: Date) -> bool {
        self.populate_if_needed(date.year());
        self.entries.contains_key(&date)
    }

    /// The holiday's label, or `None` if `date` is not a holiday.
    pub fn get(&mut self, date: Date) -> Option<&str> {
        self.populate_if_needed(date.year());
        self.entries.get(&date).map(String::as_str)
    }

    /// Iterate the holidays in `[first, last]` in ascending date order.
    ///
    /// Populates every year the span touches. An inverted span
    /// (`first > last`) yields nothing. The iterator reads the cache,
    /// so re-iterating is cheap and returns the same sequence.
    pub fn between(&mut self, first: Date, last: Date) -> impl Iterator<Item = (Date, &str)> + '_ {
        let range = if first <= last {
            for year in first.year()..=last.year() {
                self.populate_if_needed(year);
            }
            Some(self.entries.range(first..=last))
        } else {
            None
        };
        range
            .into_iter()
            .flatten()
            .map(|(date, name)| (*date, name.as_str()))
    }

    // ── Manual entries ───────────────────────────────────────────────────────

    /// Insert or overwrite a holiday by hand.
    ///
    /// The date's year is populated first, so the manual label wins over
    /// any rule-derived one; the displaced label is returned.
    pub fn insert(&mut self, date: Date, name: impl Into<String>) -> Option<String> {
        self.populate_if_needed(date.year());
        self.entries.insert(date, name.into())
    }

    /// Remove a holiday, returning its label.
    ///
    /// The date's year is populated first, so the removal sticks: later
    /// queries of the same year will not re-insert the entry.
    pub fn remove(&mut self, date: Date) -> Option<String> {
        self.populate_if_needed(date.year());
        self.entries.remove(&date)
    }
}

// ── Combination ───────────────────────────────────────────────────────────────

impl Add for HolidayCalendar {
    type Output = HolidayCalendar;

    /// Combine two calendars into one observing the holidays of both.
    ///
    /// The result holds the concatenated rule tables and starts with an
    /// empty cache; manual entries on the operands do not carry over.
    /// When both sides define a holiday on the same date, the
    /// right-hand operand's label wins (its rules run later).
    fn add(self, rhs: HolidayCalendar) -> HolidayCalendar {
        let mut rules = self.rules;
        rules.extend(rhs.rules);
        HolidayCalendar::new(format!("{} + {}", self.name, rhs.name), rules)
    }
}
