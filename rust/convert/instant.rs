use chrono::prelude::*;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::convert::{Chronology, Converter};
use crate::Error;

/// Convert calendar dates into zoned datetimes at local midnight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateConverter {
    pub chronology: Chronology,
}

impl Converter<NaiveDate> for DateConverter {
    fn convert(&self, input: NaiveDate) -> Result<DateTime<Tz>, Error> {
        self.chronology.resolve_local(input.and_time(NaiveTime::MIN))
    }
}

/// Convert naive timestamps into zoned datetimes, interpreted in the target zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimestampConverter {
    pub chronology: Chronology,
}

impl Converter<NaiveDateTime> for TimestampConverter {
    fn convert(&self, input: NaiveDateTime) -> Result<DateTime<Tz>, Error> {
        self.chronology.resolve_local(input)
    }
}

/// Convert [`SystemTime`] instants into zoned datetimes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemTimeConverter {
    pub chronology: Chronology,
}

impl Converter<SystemTime> for SystemTimeConverter {
    fn convert(&self, input: SystemTime) -> Result<DateTime<Tz>, Error> {
        Ok(self.chronology.at_instant(DateTime::<Utc>::from(input)))
    }
}

/// Create a converter taking dates at midnight, targeting UTC.
pub fn from_date() -> DateConverter {
    DateConverter {
        chronology: Chronology::iso_utc(),
    }
}

/// Create a converter taking dates at midnight local to `zone`.
pub fn from_date_in_zone(zone: Tz) -> DateConverter {
    DateConverter {
        chronology: Chronology::iso(zone),
    }
}

/// Create a converter taking dates at midnight under `chronology`.
pub fn from_date_with_chronology(chronology: Chronology) -> DateConverter {
    DateConverter { chronology }
}

/// Create a converter interpreting naive timestamps as UTC.
pub fn from_timestamp() -> TimestampConverter {
    TimestampConverter {
        chronology: Chronology::iso_utc(),
    }
}

/// Create a converter interpreting naive timestamps as local to `zone`.
pub fn from_timestamp_in_zone(zone: Tz) -> TimestampConverter {
    TimestampConverter {
        chronology: Chronology::iso(zone),
    }
}

/// Create a converter interpreting naive timestamps under `chronology`.
pub fn from_timestamp_with_chronology(chronology: Chronology) -> TimestampConverter {
    TimestampConverter { chronology }
}

/// Create a converter taking [`SystemTime`] instants, expressed in UTC.
pub fn from_system_time() -> SystemTimeConverter {
    SystemTimeConverter {
        chronology: Chronology::iso_utc(),
    }
}

/// Create a converter taking [`SystemTime`] instants, expressed in `zone`.
pub fn from_system_time_in_zone(zone: Tz) -> SystemTimeConverter {
    SystemTimeConverter {
        chronology: Chronology::iso(zone),
    }
}
