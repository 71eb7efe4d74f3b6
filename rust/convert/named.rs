use chrono_tz::Tz;
use indexmap::IndexMap;

use crate::convert::{Chronology, Pattern, StringConverter};
use crate::Error;

fn patterns() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        ("iso_date", "%Y-%m-%d"),
        ("iso_datetime", "%Y-%m-%dT%H:%M:%S"),
        ("iso_datetime_offset", "%Y-%m-%dT%H:%M:%S%z"),
        ("timestamp", "%Y-%m-%d %H:%M:%S"),
        ("rfc2822", "%a, %d %b %Y %H:%M:%S %z"),
        ("us_date", "%m/%d/%Y"),
        ("eur_date", "%d/%m/%Y"),
    ])
}

/// Return a pre-defined [`Pattern`] by name.
///
/// # Examples
/// ```rust
/// # use fntime::convert::get_pattern_by_name;
/// let pattern = get_pattern_by_name("eur_date").unwrap();
/// assert_eq!(pattern.fmt(), "%d/%m/%Y");
/// ```
pub fn get_pattern_by_name(name: &str) -> Result<Pattern, Error> {
    match patterns().get(name.to_lowercase().as_str()) {
        None => Err(Error::UnknownPattern(name.to_string())),
        Some(fmt) => Pattern::try_new(fmt),
    }
}

/// List the names of all pre-defined patterns, in registry order.
pub fn list_patterns() -> Vec<&'static str> {
    patterns().keys().copied().collect()
}

/// Create a string converter from a pre-defined pattern name, targeting UTC.
pub fn from_named_pattern(name: &str) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(get_pattern_by_name(name)?),
        Chronology::iso_utc(),
    ))
}

/// Create a string converter from a pre-defined pattern name, targeting `zone`.
pub fn from_named_pattern_in_zone(name: &str, zone: Tz) -> Result<StringConverter, Error> {
    Ok(StringConverter::new(
        Some(get_pattern_by_name(name)?),
        Chronology::iso(zone),
    ))
}
