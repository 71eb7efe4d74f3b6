//! Build function objects which convert one input representation into a zoned datetime.
//!
//! The purpose of this module is to provide small, immutable converter values, each of
//! which maps a single input type onto a [`DateTime<Tz>`](chrono::DateTime), configured
//! up front by some combination of;
//! - a strftime-style [`Pattern`], optionally bound to a [`Locale`](chrono::format::Locale),
//! - a target time zone from the IANA database,
//! - a [`Chronology`], pairing a [`CalendarSystem`] with a target zone.
//!
//! # Converters
//!
//! All converters implement the [`Converter`] trait for their input type. A converter is
//! constructed once, by a factory function, and applied any number of times. Converters
//! hold no state beyond their configuration and are safe to share between threads.
//!
//! The available input representations and their converter types are:
//!
//! - strings, parsed by flexible ISO 8601 rules or by pattern: [`StringConverter`]
//! - calendar dates, taken at local midnight: [`DateConverter`]
//! - naive timestamps, interpreted in the target zone: [`TimestampConverter`]
//! - [`SystemTime`](std::time::SystemTime) instants: [`SystemTimeConverter`]
//! - numeric epoch values in milliseconds or seconds: [`EpochConverter`]
//! - already zoned datetimes, re-expressed in the target zone: [`ZonedConverter`]
//! - positional integer fields, year\[, month\[, day\]\]: [`FieldsConverter`]
//! - positional string fields with the same meaning: [`StringFieldsConverter`]
//!
//! ### Example
//! This example builds a pattern based string converter and applies it twice.
//! ```rust
//! use fntime::convert::{from_pattern, Converter};
//! let parser = from_pattern("%d/%m/%Y").unwrap();
//! assert_eq!(
//!     parser.convert("25/12/2021").unwrap().to_rfc3339(),
//!     "2021-12-25T00:00:00+00:00",
//! );
//! assert_eq!(
//!     parser.convert("01/07/2015").unwrap().to_rfc3339(),
//!     "2015-07-01T00:00:00+00:00",
//! );
//! ```
//!
//! # Zones and Chronology
//!
//! Every converter targets a zone, defaulting to UTC. The `*_in_zone` factories set it
//! directly, while the `*_with_chronology` factories accept a full [`Chronology`]. Local
//! inputs (dates, naive timestamps, fields, patterns without an offset) are resolved in
//! the target zone: an ambiguous local time resolves to the earlier instant, a local
//! time skipped by a DST transition is an error. Instant inputs (epochs, zoned values,
//! system times, strings carrying an offset) are re-expressed without changing the
//! instant.
//!
//! ### Example
//! ```rust
//! use fntime::convert::{from_epoch_millis_in_zone, Converter};
//! use chrono_tz::Tz;
//! let f = from_epoch_millis_in_zone(Tz::Europe__Paris);
//! assert_eq!(f.convert(0).unwrap().to_rfc3339(), "1970-01-01T01:00:00+01:00");
//! ```
//!
//! # Function objects
//!
//! A converter can be downgraded to a plain closure with [`Converter::into_fn`], for use
//! with iterator adaptors or any API expecting a function value.
//!
//! ### Example
//! ```rust
//! use fntime::convert::{from_string, Converter};
//! let f = from_string().into_fn();
//! let parsed: Vec<_> = ["2021-01-01", "2021-06-01T12:30:00"]
//!     .into_iter()
//!     .map(f)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(parsed[1].to_rfc3339(), "2021-06-01T12:30:00+00:00");
//! ```

mod chronology;
mod epoch;
mod fields;
mod instant;
mod named;
mod pattern;
mod serde;
mod string;
mod traits;
mod zoned;

pub use crate::convert::{
    chronology::{get_locale_by_name, get_zone_by_name, CalendarSystem, Chronology},
    epoch::{
        from_epoch_millis, from_epoch_millis_in_zone, from_epoch_millis_with_chronology,
        from_epoch_seconds, from_epoch_seconds_in_zone, from_epoch_seconds_with_chronology,
        EpochConverter, EpochUnit,
    },
    fields::{
        from_fields, from_fields_in_zone, from_fields_with_chronology, from_string_fields,
        from_string_fields_in_zone, from_string_fields_with_chronology, FieldsConverter,
        StringFieldsConverter,
    },
    instant::{
        from_date, from_date_in_zone, from_date_with_chronology, from_system_time,
        from_system_time_in_zone, from_timestamp, from_timestamp_in_zone,
        from_timestamp_with_chronology, DateConverter, SystemTimeConverter, TimestampConverter,
    },
    named::{
        from_named_pattern, from_named_pattern_in_zone, get_pattern_by_name, list_patterns,
    },
    pattern::Pattern,
    string::{
        from_pattern, from_pattern_in_locale, from_pattern_in_locale_and_zone,
        from_pattern_in_locale_with_chronology, from_pattern_in_zone,
        from_pattern_with_chronology, from_string, from_string_in_zone,
        from_string_with_chronology, StringConverter,
    },
    traits::Converter,
    zoned::{from_zoned, from_zoned_in_zone, from_zoned_with_chronology, ZonedConverter},
};

use chrono::prelude::*;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
