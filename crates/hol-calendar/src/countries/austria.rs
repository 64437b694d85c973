//! Austria holidays.
//!
//! The following days are observed:
//! * Neujahr (Jan 1)
//! * Heilige Drei Könige (Jan 6)
//! * Ostermontag
//! * Staatsfeiertag (May 1, since 1919)
//! * Christi Himmelfahrt (Easter + 39)
//! * Pfingstmontag (Easter + 50)
//! * Fronleichnam (Easter + 60)
//! * Mariä Himmelfahrt (Aug 15)
//! * Nationalfeiertag (Nov 12 from 1919 to 1934, Oct 26 since 1967)
//! * Allerheiligen (Nov 1)
//! * Mariä Empfängnis (Dec 8)
//! * Christtag (Dec 25)
//! * Stefanitag (Dec 26)

use hol_time::Month;

use crate::rule::{easter_offset, fixed, HolidayRule};

/// Austria's holiday table.
pub static RULES: &[HolidayRule] = &[
    fixed("Neujahr", Month::January, 1),
    fixed("Heilige Drei Könige", Month::January, 6),
    easter_offset("Ostermontag", 1),
    fixed("Staatsfeiertag", Month::May, 1).since(1919),
    easter_offset("Christi Himmelfahrt", 39),
    easter_offset("Pfingstmontag", 50),
    easter_offset("Fronleichnam", 60),
    fixed("Mariä Himmelfahrt", Month::August, 15),
    fixed("Nationalfeiertag", Month::November, 12).since(1919).until(1934),
    fixed("Nationalfeiertag", Month::October, 26).since(1967),
    fixed("Allerheiligen", Month::November, 1),
    fixed("Mariä Empfängnis", Month::December, 8),
    fixed("Christtag", Month::December, 25),
    fixed("Stefanitag", Month::December, 26),
];
