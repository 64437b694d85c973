//! Liechtenstein holidays.
//!
//! The following days are observed:
//! * Neujahr (Jan 1)
//! * Berchtoldstag (Jan 2)
//! * Heilige Drei König (Jan 6)
//! * Lichtmess (Feb 2)
//! * Joseftag (Mar 19)
//! * Fasnachtsdienstag (47 days before Easter)
//! * Karfreitag (2 days before Easter)
//! * Ostersonntag / Ostermontag
//! * Tag der Arbeit (May 1)
//! * Christi Himmelfahrt (Easter + 39)
//! * Pfingsten (Easter + 49) / Pfingstmontag (Easter + 50)
//! * Fronleichnam (Easter + 60)
//! * Staatsfeiertag (Aug 15)
//! * Mariä Geburt (Sep 8)
//! * Allerheiligen (Nov 1)
//! * Mariä Empfängnis (Dec 8)
//! * Heiliger Abend (Dec 24)
//! * Weihnachten (Dec 25) / Stephanstag (Dec 26)
//!
//! Berchtoldstag, Fasnachtsdienstag, Karfreitag, and Heiliger Abend are
//! bank holidays rather than legal public holidays, but are widely
//! observed and included here.

use hol_time::Month;

use crate::rule::{easter_offset, fixed, HolidayRule};

/// Liechtenstein's holiday table.
pub static RULES: &[HolidayRule] = &[
    fixed("Neujahr", Month::January, 1),
    fixed("Berchtoldstag", Month::January, 2),
    fixed("Heilige Drei König", Month::January, 6),
    fixed("Lichtmess", Month::February, 2),
    fixed("Joseftag", Month::March, 19),
    easter_offset("Fasnachtsdienstag", -47),
    easter_offset("Karfreitag", -2),
    easter_offset("Ostersonntag", 0),
    easter_offset("Ostermontag", 1),
    fixed("Tag der Arbeit", Month::May, 1),
    easter_offset("Christi Himmelfahrt", 39),
    easter_offset("Pfingsten", 49),
    easter_offset("Pfingstmontag", 50),
    easter_offset("Fronleichnam", 60),
    fixed("Staatsfeiertag", Month::August, 15),
    fixed("Mariä Geburt", Month::September, 8),
    fixed("Allerheiligen", Month::November, 1),
    fixed("Mariä Empfängnis", Month::December, 8),
    fixed("Heiliger Abend", Month::December, 24),
    fixed("Weihnachten", Month::December, 25),
    fixed("Stephanstag", Month::December, 26),
];
