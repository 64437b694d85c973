//! Country codes and their rule tables.
//!
//! [`Country`] is the factory side of the crate: it maps an ISO 3166
//! code to the matching rule table in [`crate::countries`], so callers
//! select a calendar from configuration or user input instead of
//! naming a table directly.

use std::fmt;
use std::str::FromStr;

use hol_core::{Error, Result};

use crate::countries;
use crate::rule::HolidayRule;

/// A country with a built-in holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Austria (AT/AUT).
    Austria,
    /// Germany (DE/DEU). Nationwide holidays only.
    Germany,
    /// Liechtenstein (LI/LIE, vehicle code FL).
    Liechtenstein,
    /// Switzerland (CH/CHE). Federal holidays only.
    Switzerland,
}

impl Country {
    /// Every supported country.
    pub const ALL: [Country; 4] = [
        Country::Austria,
        Country::Germany,
        Country::Liechtenstein,
        Country::Switzerland,
    ];

    /// The ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Austria => "AT",
            Country::Germany => "DE",
            Country::Liechtenstein => "LI",
            Country::Switzerland => "CH",
        }
    }

    /// The English short name.
    pub fn name(&self) -> &'static str {
        match self {
            Country::Austria => "Austria",
            Country::Germany => "Germany",
            Country::Liechtenstein => "Liechtenstein",
            Country::Switzerland => "Switzerland",
        }
    }

    /// The country's holiday rule table.
    pub fn rules(&self) -> &'static [HolidayRule] {
        match self {
            Country::Austria => countries::austria::RULES,
            Country::Germany => countries::germany::RULES,
            Country::Liechtenstein => countries::liechtenstein::RULES,
            Country::Switzerland => countries::switzerland::RULES,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = Error;

    /// Parses an ISO 3166-1 alpha-2 or alpha-3 code, case-insensitively.
    /// The English short name and Liechtenstein's customary `FL` are
    /// accepted too.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AT" | "AUT" | "AUSTRIA" => Ok(Country::Austria),
            "DE" | "DEU" | "GERMANY" => Ok(Country::Germany),
            "LI" | "LIE" | "FL" | "LIECHTENSTEIN" => Ok(Country::Liechtenstein),
            "CH" | "CHE" | "SWITZERLAND" => Ok(Country::Switzerland),
            _ => Err(Error::UnknownCountry(s.to_string())),
        }
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Country {
    /// Serializes as the alpha-2 code.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Country {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("LI".parse::<Country>().unwrap(), Country::Liechtenstein);
        assert_eq!("lie".parse::<Country>().unwrap(), Country::Liechtenstein);
        assert_eq!("fl".parse::<Country>().unwrap(), Country::Liechtenstein);
        assert_eq!("CHE".parse::<Country>().unwrap(), Country::Switzerland);
        assert_eq!("austria".parse::<Country>().unwrap(), Country::Austria);
        assert_eq!("De".parse::<Country>().unwrap(), Country::Germany);
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "XX".parse::<Country>().unwrap_err();
        assert!(matches!(&err, Error::UnknownCountry(code) if code == "XX"));
        assert!("".parse::<Country>().is_err());
    }

    #[test]
    fn display_is_alpha2() {
        assert_eq!(Country::Liechtenstein.to_string(), "LI");
        assert_eq!(Country::Austria.to_string(), "AT");
    }

    #[test]
    fn every_country_round_trips_and_has_rules() {
        for country in Country::ALL {
            assert_eq!(country.code().parse::<Country>().unwrap(), country);
            assert_eq!(country.name().parse::<Country>().unwrap(), country);
            assert!(!country.rules().is_empty(), "{country} has no rules");
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn code_round_trip() {
            let json = serde_json::to_string(&Country::Switzerland).unwrap();
            assert_eq!(json, "\"CH\"");
            let back: Country = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Country::Switzerland);
        }

        #[test]
        fn rejects_unknown() {
            assert!(serde_json::from_str::<Country>("\"ZZ\"").is_err());
        }
    }
}
