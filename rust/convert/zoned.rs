use chrono::prelude::*;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::convert::{Chronology, Converter};
use crate::Error;

/// Convert already zoned datetimes into the target chronology.
///
/// The input pins an exact instant in whatever zone it carries; conversion preserves
/// the instant and re-expresses it in the chronology's zone. Accepts a
/// `DateTime` in any zone representation, fixed offsets included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZonedConverter {
    pub chronology: Chronology,
}

impl<T: TimeZone> Converter<DateTime<T>> for ZonedConverter {
    fn convert(&self, input: DateTime<T>) -> Result<DateTime<Tz>, Error> {
        Ok(self.chronology.at_instant(input.with_timezone(&Utc)))
    }
}

/// Create a converter re-expressing zoned datetimes in UTC.
pub fn from_zoned() -> ZonedConverter {
    ZonedConverter {
        chronology: Chronology::iso_utc(),
    }
}

/// Create a converter re-expressing zoned datetimes in `zone`.
pub fn from_zoned_in_zone(zone: Tz) -> ZonedConverter {
    ZonedConverter {
        chronology: Chronology::iso(zone),
    }
}

/// Create a converter re-expressing zoned datetimes under `chronology`.
pub fn from_zoned_with_chronology(chronology: Chronology) -> ZonedConverter {
    ZonedConverter { chronology }
}
