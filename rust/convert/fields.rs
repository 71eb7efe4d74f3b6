use chrono::prelude::*;
use chrono_tz::Tz;
use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

use crate::convert::{Chronology, Converter};
use crate::Error;

/// Convert positional integer fields into zoned datetimes at local midnight.
///
/// Fields are read positionally as year\[, month\[, day\]\]. Month and day default
/// to 1 when not supplied. Empty collections, collections of more than three
/// values, and field values which do not form a real calendar date are errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldsConverter {
    pub chronology: Chronology,
}

impl FieldsConverter {
    fn date_from_fields(&self, fields: &[i32]) -> Result<NaiveDate, Error> {
        if fields.is_empty() || fields.len() > 3 {
            return Err(Error::FieldCount(fields.len()));
        }
        let year = fields[0];
        // month and day default to 1 when not supplied
        let defaulted: Vec<i32> = fields[1..]
            .iter()
            .copied()
            .zip_longest([1_i32, 1])
            .map(|pair| match pair {
                EitherOrBoth::Both(value, _) | EitherOrBoth::Left(value) => value,
                EitherOrBoth::Right(default) => default,
            })
            .collect();
        let (month, day) = (defaulted[0], defaulted[1]);
        let invalid = || Error::InvalidDate { year, month, day };
        match (u32::try_from(month), u32::try_from(day)) {
            (Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(year, m, d).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl<'a> Converter<&'a [i32]> for FieldsConverter {
    fn convert(&self, input: &'a [i32]) -> Result<DateTime<Tz>, Error> {
        let date = self.date_from_fields(input)?;
        self.chronology.resolve_local(date.and_time(NaiveTime::MIN))
    }
}

/// Convert positional string fields into zoned datetimes at local midnight.
///
/// A wrapper over [`FieldsConverter`] which first reads each field as an integer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StringFieldsConverter {
    pub numeric: FieldsConverter,
}

impl<'a, 'b> Converter<&'a [&'b str]> for StringFieldsConverter {
    fn convert(&self, input: &'a [&'b str]) -> Result<DateTime<Tz>, Error> {
        let values: Vec<i32> = input
            .iter()
            .map(|field| {
                field
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| Error::NonNumericField(field.to_string()))
            })
            .collect::<Result<_, _>>()?;
        self.numeric.convert(&values[..])
    }
}

/// Create a converter taking integer fields, at midnight UTC.
pub fn from_fields() -> FieldsConverter {
    FieldsConverter {
        chronology: Chronology::iso_utc(),
    }
}

/// Create a converter taking integer fields, at midnight local to `zone`.
pub fn from_fields_in_zone(zone: Tz) -> FieldsConverter {
    FieldsConverter {
        chronology: Chronology::iso(zone),
    }
}

/// Create a converter taking integer fields under `chronology`.
pub fn from_fields_with_chronology(chronology: Chronology) -> FieldsConverter {
    FieldsConverter { chronology }
}

/// Create a converter taking string fields, at midnight UTC.
pub fn from_string_fields() -> StringFieldsConverter {
    StringFieldsConverter {
        numeric: from_fields(),
    }
}

/// Create a converter taking string fields, at midnight local to `zone`.
pub fn from_string_fields_in_zone(zone: Tz) -> StringFieldsConverter {
    StringFieldsConverter {
        numeric: from_fields_in_zone(zone),
    }
}

/// Create a converter taking string fields under `chronology`.
pub fn from_string_fields_with_chronology(chronology: Chronology) -> StringFieldsConverter {
    StringFieldsConverter {
        numeric: from_fields_with_chronology(chronology),
    }
}
