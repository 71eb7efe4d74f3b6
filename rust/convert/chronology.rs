use chrono::format::Locale;
use chrono::prelude::*;
use chrono::LocalResult;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Return a time zone from the IANA database by name.
///
/// # Examples
/// ```rust
/// # use fntime::convert::get_zone_by_name;
/// let zone = get_zone_by_name("Europe/London").unwrap();
/// assert!(get_zone_by_name("Mars/Olympus_Mons").is_err());
/// ```
pub fn get_zone_by_name(name: &str) -> Result<Tz, Error> {
    name.parse().map_err(|_| Error::UnknownZone(name.to_string()))
}

/// Return a locale by its Unix locale name, e.g. `"en_US"` or `"fr_FR"`.
pub fn get_locale_by_name(name: &str) -> Result<Locale, Error> {
    Locale::try_from(name).map_err(|_| Error::UnknownLocale(name.to_string()))
}

/// Specifier for the calendar system interpreting local date values.
///
/// The underlying datetime library defines a single calendar system, the proleptic
/// Gregorian calendar of ISO 8601.
#[non_exhaustive]
#[derive(Debug, Hash, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarSystem {
    /// The proleptic Gregorian calendar of ISO 8601.
    #[default]
    Iso,
}

/// A calendar system paired with the target time zone of produced datetimes.
///
/// Every converter carries a `Chronology`. Local inputs are resolved against its zone,
/// instant inputs are re-expressed in it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chronology {
    pub system: CalendarSystem,
    pub zone: Tz,
}

impl Default for Chronology {
    fn default() -> Self {
        Chronology::iso_utc()
    }
}

impl Chronology {
    /// Create an ISO chronology targeting `zone`.
    pub fn iso(zone: Tz) -> Self {
        Chronology {
            system: CalendarSystem::Iso,
            zone,
        }
    }

    /// Create an ISO chronology targeting UTC.
    pub fn iso_utc() -> Self {
        Chronology::iso(Tz::UTC)
    }

    /// Interpret a local datetime in this chronology's zone.
    ///
    /// An ambiguous local time, one repeated by a DST fold, resolves to the earlier
    /// instant. A local time skipped by a DST gap does not exist and is an error.
    pub fn resolve_local(&self, datetime: NaiveDateTime) -> Result<DateTime<Tz>, Error> {
        match self.zone.from_local_datetime(&datetime) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(early, _) => Ok(early),
            LocalResult::None => Err(Error::SkippedTime {
                datetime,
                zone: self.zone,
            }),
        }
    }

    /// Re-express an instant in this chronology's zone, preserving the instant.
    pub fn at_instant(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.zone)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ndt;

    #[test]
    fn test_resolve_local_single() {
        let chronology = Chronology::iso(Tz::Europe__London);
        let result = chronology.resolve_local(ndt(2024, 6, 1)).unwrap();
        assert_eq!(result.to_rfc3339(), "2024-06-01T00:00:00+01:00");
    }

    #[test]
    fn test_resolve_local_ambiguous_takes_earlier() {
        // London repeats 01:30 on 2024-10-27; the BST instant comes first.
        let chronology = Chronology::iso(Tz::Europe__London);
        let local = ndt(2024, 10, 27).with_hour(1).unwrap().with_minute(30).unwrap();
        let result = chronology.resolve_local(local).unwrap();
        assert_eq!(
            result.with_timezone(&Utc).to_rfc3339(),
            "2024-10-27T00:30:00+00:00"
        );
    }

    #[test]
    fn test_resolve_local_gap_errors() {
        // London skips 01:00-02:00 on 2024-03-31.
        let chronology = Chronology::iso(Tz::Europe__London);
        let local = ndt(2024, 3, 31).with_hour(1).unwrap().with_minute(30).unwrap();
        let result = chronology.resolve_local(local);
        assert_eq!(
            result,
            Err(Error::SkippedTime {
                datetime: local,
                zone: Tz::Europe__London
            })
        );
    }

    #[test]
    fn test_at_instant_preserves_instant() {
        let chronology = Chronology::iso(Tz::America__New_York);
        let instant = ndt(2021, 1, 1).and_utc();
        let result = chronology.at_instant(instant);
        assert_eq!(result.with_timezone(&Utc), instant);
        assert_eq!(result.to_rfc3339(), "2020-12-31T19:00:00-05:00");
    }

    #[test]
    fn test_get_zone_by_name() {
        assert_eq!(get_zone_by_name("UTC").unwrap(), Tz::UTC);
        assert_eq!(
            get_zone_by_name("not/a_zone"),
            Err(Error::UnknownZone("not/a_zone".to_string()))
        );
    }

    #[test]
    fn test_get_locale_by_name() {
        assert_eq!(get_locale_by_name("fr_FR").unwrap(), Locale::fr_FR);
        assert_eq!(
            get_locale_by_name("xx_XX"),
            Err(Error::UnknownLocale("xx_XX".to_string()))
        );
    }
}
