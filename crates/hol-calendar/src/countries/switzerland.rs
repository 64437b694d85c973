//! Switzerland holidays.
//!
//! Federal holidays plus the near-universal cantonal ones; most other
//! holidays vary canton by canton. The following days are observed:
//! * Neujahrestag (Jan 1)
//! * Berchtoldstag (Jan 2)
//! * Karfreitag (2 days before Easter)
//! * Ostermontag
//! * Auffahrt (Easter + 39)
//! * Pfingstmontag (Easter + 50)
//! * Nationalfeiertag (Aug 1, since 1891)
//! * Weihnachten (Dec 25)
//! * Stephanstag (Dec 26)

use hol_time::Month;

use crate::rule::{easter_offset, fixed, HolidayRule};

/// Switzerland's holiday table.
pub static RULES: &[HolidayRule] = &[
    fixed("Neujahrestag", Month::January, 1),
    fixed("Berchtoldstag", Month::January, 2),
    easter_offset("Karfreitag", -2),
    easter_offset("Ostermontag", 1),
    easter_offset("Auffahrt", 39),
    easter_offset("Pfingstmontag", 50),
    fixed("Nationalfeiertag", Month::August, 1).since(1891),
    fixed("Weihnachten", Month::December, 25),
    fixed("Stephanstag", Month::December, 26),
];
