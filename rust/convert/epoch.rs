use chrono::prelude::*;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::convert::{Chronology, Converter};
use crate::Error;

/// Specifier for the unit of numeric epoch values.
#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpochUnit {
    /// Milliseconds since 1970-01-01T00:00:00Z.
    Millis,
    /// Seconds since 1970-01-01T00:00:00Z.
    Seconds,
}

/// Convert numeric epoch values into zoned datetimes.
///
/// Epoch values pin an exact instant; the chronology's zone only re-expresses it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpochConverter {
    pub unit: EpochUnit,
    pub chronology: Chronology,
}

impl Converter<i64> for EpochConverter {
    fn convert(&self, input: i64) -> Result<DateTime<Tz>, Error> {
        let instant = match self.unit {
            EpochUnit::Millis => DateTime::from_timestamp_millis(input),
            EpochUnit::Seconds => DateTime::from_timestamp(input, 0),
        }
        .ok_or(Error::EpochOutOfRange(input))?;
        Ok(self.chronology.at_instant(instant))
    }
}

/// Create a converter taking epoch milliseconds, expressed in UTC.
pub fn from_epoch_millis() -> EpochConverter {
    EpochConverter {
        unit: EpochUnit::Millis,
        chronology: Chronology::iso_utc(),
    }
}

/// Create a converter taking epoch milliseconds, expressed in `zone`.
pub fn from_epoch_millis_in_zone(zone: Tz) -> EpochConverter {
    EpochConverter {
        unit: EpochUnit::Millis,
        chronology: Chronology::iso(zone),
    }
}

/// Create a converter taking epoch milliseconds under `chronology`.
pub fn from_epoch_millis_with_chronology(chronology: Chronology) -> EpochConverter {
    EpochConverter {
        unit: EpochUnit::Millis,
        chronology,
    }
}

/// Create a converter taking epoch seconds, expressed in UTC.
pub fn from_epoch_seconds() -> EpochConverter {
    EpochConverter {
        unit: EpochUnit::Seconds,
        chronology: Chronology::iso_utc(),
    }
}

/// Create a converter taking epoch seconds, expressed in `zone`.
pub fn from_epoch_seconds_in_zone(zone: Tz) -> EpochConverter {
    EpochConverter {
        unit: EpochUnit::Seconds,
        chronology: Chronology::iso(zone),
    }
}

/// Create a converter taking epoch seconds under `chronology`.
pub fn from_epoch_seconds_with_chronology(chronology: Chronology) -> EpochConverter {
    EpochConverter {
        unit: EpochUnit::Seconds,
        chronology,
    }
}
