//! Germany holidays.
//!
//! Nationwide holidays only; the Länder add their own on top of these.
//! The following days are observed:
//! * Neujahr (Jan 1)
//! * Karfreitag (2 days before Easter)
//! * Ostermontag
//! * Tag der Arbeit (May 1)
//! * Christi Himmelfahrt (Easter + 39)
//! * Pfingstmontag (Easter + 50)
//! * Tag der Deutschen Einheit (Oct 3, since 1990)
//! * Reformationstag (Oct 31, nationwide in 2017 only)
//! * Erster und Zweiter Weihnachtstag (Dec 25 and 26)

use hol_time::Month;

use crate::rule::{easter_offset, fixed, HolidayRule};

/// Germany's holiday table.
pub static RULES: &[HolidayRule] = &[
    fixed("Neujahr", Month::January, 1),
    easter_offset("Karfreitag", -2),
    easter_offset("Ostermontag", 1),
    fixed("Tag der Arbeit", Month::May, 1),
    easter_offset("Christi Himmelfahrt", 39),
    easter_offset("Pfingstmontag", 50),
    fixed("Tag der Deutschen Einheit", Month::October, 3).since(1990),
    // The Reformation's 500th anniversary was a one-off nationwide holiday.
    fixed("Reformationstag", Month::October, 31).since(2017).until(2017),
    fixed("Erster Weihnachtstag", Month::December, 25),
    fixed("Zweiter Weihnachtstag", Month::December, 26),
];

#[cfg(test)]
mod tests {
    use crate::{Country, HolidayCalendar};
    use hol_time::Date;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn good_friday_and_easter_monday_2023() {
        // Easter 2023: April 9.
        let mut cal = HolidayCalendar::for_country(Country::Germany);
        assert_eq!(cal.get(date(2023, 4, 7)), Some("Karfreitag"));
        assert_eq!(cal.get(date(2023, 4, 10)), Some("Ostermontag"));
    }

    #[test]
    fn whitsun_2023() {
        let mut cal = HolidayCalendar::for_country(Country::Germany);
        assert_eq!(cal.get(date(2023, 5, 18)), Some("Christi Himmelfahrt"));
        assert_eq!(cal.get(date(2023, 5, 29)), Some("Pfingstmontag"));
    }

    #[test]
    fn unity_day_since_reunification() {
        let mut cal = HolidayCalendar::for_country(Country::Germany);
        assert!(!cal.contains(date(1989, 10, 3)));
        assert_eq!(cal.get(date(1990, 10, 3)), Some("Tag der Deutschen Einheit"));
        assert_eq!(cal.get(date(2024, 10, 3)), Some("Tag der Deutschen Einheit"));
    }

    #[test]
    fn reformation_day_2017_only() {
        let mut cal = HolidayCalendar::for_country(Country::Germany);
        assert!(!cal.contains(date(2016, 10, 31)));
        assert_eq!(cal.get(date(2017, 10, 31)), Some("Reformationstag"));
        assert!(!cal.contains(date(2018, 10, 31)));
    }

    #[test]
    fn christmas_2024() {
        let mut cal = HolidayCalendar::for_country(Country::Germany);
        assert_eq!(cal.get(date(2024, 12, 25)), Some("Erster Weihnachtstag"));
        assert_eq!(cal.get(date(2024, 12, 26)), Some("Zweiter Weihnachtstag"));
        // Christmas Eve is not a public holiday.
        assert!(!cal.contains(date(2024, 12, 24)));
    }
}
