use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Failures arising when building a converter or applying one to an input.
///
/// Parse failures of the underlying datetime library are carried through
/// unchanged as the error source, with the offending input and pattern
/// attached for context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The pattern string is not a valid strftime-style pattern.
    #[error("'{0}' is not a valid datetime pattern.")]
    InvalidPattern(String),
    /// The input string could not be parsed with the given pattern.
    #[error("could not parse '{input}' with pattern '{pattern}'.")]
    Parse {
        input: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },
    /// The name is not in the IANA time zone database.
    #[error("'{0}' is not found in the time zone database.")]
    UnknownZone(String),
    /// The name is not a recognised Unix locale name.
    #[error("'{0}' is not found in the list of known locales.")]
    UnknownLocale(String),
    /// The name is not in the list of pre-defined patterns.
    #[error("'{0}' is not found in the list of pre-defined patterns.")]
    UnknownPattern(String),
    /// A field collection must supply between one and three values.
    #[error("field collections require 1 to 3 values, got {0}.")]
    FieldCount(usize),
    /// The positional field values do not form a valid calendar date.
    #[error("({year}, {month}, {day}) is not a valid calendar date.")]
    InvalidDate { year: i32, month: i32, day: i32 },
    /// A string field value is not an integer.
    #[error("'{0}' is not a numeric field value.")]
    NonNumericField(String),
    /// The epoch value is outside the representable datetime range.
    #[error("epoch value {0} is outside the representable datetime range.")]
    EpochOutOfRange(i64),
    /// The local datetime does not exist in the zone (skipped by a DST gap).
    #[error("local time {datetime} does not exist in zone {zone}.")]
    SkippedTime { datetime: NaiveDateTime, zone: Tz },
}
