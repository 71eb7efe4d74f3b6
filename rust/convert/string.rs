use chrono::format::Locale;
use chrono::prelude::*;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::convert::pattern::ParsedDateTime;
use crate::convert::{Chronology, Converter, Pattern};
use crate::Error;

/// Convert strings into zoned datetimes.
///
/// Without a pattern, inputs are parsed by flexible ISO 8601 rules: an RFC 3339
/// datetime with offset, then a naive datetime, then a date-only value at midnight.
/// With a [`Pattern`], inputs are parsed by it instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StringConverter {
    pub pattern: Option<Pattern>,
    pub chronology: Chronology,
}

impl StringConverter {
    /// Create a converter from an optional pattern and a chronology.
    pub fn new(pattern: Option<Pattern>, chronology: Chronology) -> Self {
        StringConverter {
            pattern,
            chronology,
        }
    }
}

impl<'a> Converter<&'a str> for StringConverter {
    fn convert(&self, input: &'a str) -> Result<DateTime<Tz>, Error> {
        let parsed = match &self.pattern {
            Some(pattern) => pattern.parse_str(input)?,
            None => parse_iso(input)?,
        };
        match parsed {
            ParsedDateTime::Absolute(dt) => Ok(self.chronology.at_instant(dt.with_timezone(&Utc))),
            ParsedDateTime::Local(dt) => self.chronology.resolve_local(dt),
        }
    }
}

/// Parse ISO 8601 representations with decreasing information content.
fn parse_iso(input: &str) -> Result<ParsedDateTime, Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(ParsedDateTime::Absolute(dt));
    }
    if let Ok(dt) = input.parse::<NaiveDateTime>() {
        return Ok(ParsedDateTime::Local(dt));
    }
    match input.parse::<NaiveDate>() {
        Ok(date) => Ok(ParsedDateTime::Local(date.and_time(NaiveTime::MIN))),
        Err(source) => Err(Error::Parse {
            input: input.to_string(),
            pattern: "ISO 8601".to_string(),
            source,
        }),
    }
}

/// Create a converter parsing ISO 8601 strings, targeting UTC.
pub fn from_string() -> StringConverter {
    StringConverter::new(None, Chronology::iso_utc())
}

/// Create a converter parsing ISO 8601 strings, targeting `zone`.
pub fn from_string_in_zone(zone: Tz) -> StringConverter {
    StringConverter::new(None, Chronology::iso(zone))
}

/// Create a converter parsing ISO 8601 strings under `chronology`.
pub fn from_string_with_chronology(chronology: Chronology) -> StringConverter {
    StringConverter::new(None, chronology)
}

/// Create a converter parsing strings with `pattern`, targeting UTC.
pub fn from_pattern(pattern: &str) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(Pattern::try_new(pattern)?),
        Chronology::iso_utc(),
    ))
}

/// Create a converter parsing strings with `pattern`, targeting `zone`.
pub fn from_pattern_in_zone(pattern: &str, zone: Tz) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(Pattern::try_new(pattern)?),
        Chronology::iso(zone),
    ))
}

/// Create a converter parsing strings with `pattern` under `chronology`.
pub fn from_pattern_with_chronology(
    pattern: &str,
    chronology: Chronology,
) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(Pattern::try_new(pattern)?),
        chronology,
    ))
}

/// Create a converter parsing strings with `pattern` read in `locale`, targeting UTC.
pub fn from_pattern_in_locale(pattern: &str, locale: Locale) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(Pattern::try_new_in_locale(pattern, locale)?),
        Chronology::iso_utc(),
    ))
}

/// Create a converter parsing strings with `pattern` read in `locale`, targeting `zone`.
pub fn from_pattern_in_locale_and_zone(
    pattern: &str,
    locale: Locale,
    zone: Tz,
) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(Pattern::try_new_in_locale(pattern, locale)?),
        Chronology::iso(zone),
    ))
}

/// Create a converter parsing strings with `pattern` read in `locale` under `chronology`.
pub fn from_pattern_in_locale_with_chronology(
    pattern: &str,
    locale: Locale,
    chronology: Chronology,
) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(Pattern::try_new_in_locale(pattern, locale)?),
        chronology,
    ))
}
