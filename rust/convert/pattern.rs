use chrono::format::strftime::StrftimeItems;
use chrono::format::{parse, Locale, Parsed};
use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::convert::get_locale_by_name;
use crate::Error;

/// A validated strftime-style datetime pattern, optionally bound to a locale.
///
/// Invalid pattern strings are rejected when the `Pattern` is built, not when it is
/// first applied.
///
/// # Examples
/// ```rust
/// # use fntime::convert::Pattern;
/// assert!(Pattern::try_new("%Y-%m-%d").is_ok());
/// assert!(Pattern::try_new("%Y-%").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PatternDataModel", into = "PatternDataModel")]
pub struct Pattern {
    pub(crate) fmt: String,
    pub(crate) locale: Option<Locale>,
}

#[derive(Serialize, Deserialize)]
struct PatternDataModel {
    fmt: String,
    locale: Option<String>,
}

impl TryFrom<PatternDataModel> for Pattern {
    type Error = Error;

    fn try_from(model: PatternDataModel) -> Result<Self, Error> {
        match model.locale {
            None => Pattern::try_new(&model.fmt),
            Some(name) => Pattern::try_new_in_locale(&model.fmt, get_locale_by_name(&name)?),
        }
    }
}

impl From<Pattern> for PatternDataModel {
    fn from(pattern: Pattern) -> Self {
        PatternDataModel {
            fmt: pattern.fmt,
            locale: pattern.locale.map(|locale| format!("{locale:?}")),
        }
    }
}

/// The two shapes of information a parsed string can carry.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParsedDateTime {
    /// The input carried a UTC offset and pins an exact instant.
    Absolute(DateTime<FixedOffset>),
    /// The input carried a local datetime only, to be resolved in a target zone.
    Local(NaiveDateTime),
}

impl Pattern {
    /// Create a new [`Pattern`], validating the format string.
    pub fn try_new(fmt: &str) -> Result<Self, Error> {
        validate(fmt)?;
        Ok(Pattern {
            fmt: fmt.to_string(),
            locale: None,
        })
    }

    /// Create a new [`Pattern`] whose name-based fields (month and weekday names,
    /// am/pm markers) are read in the given locale.
    pub fn try_new_in_locale(fmt: &str, locale: Locale) -> Result<Self, Error> {
        validate(fmt)?;
        Ok(Pattern {
            fmt: fmt.to_string(),
            locale: Some(locale),
        })
    }

    /// The format string.
    pub fn fmt(&self) -> &str {
        &self.fmt
    }

    /// The bound locale, if any.
    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Parse `input`, resolving to the most information the pattern captured:
    /// offset-bearing datetime, then naive datetime, then date-only at midnight.
    /// Patterns capturing no date fail.
    pub(crate) fn parse_str(&self, input: &str) -> Result<ParsedDateTime, Error> {
        let mut parsed = Parsed::new();
        let outcome = match self.locale {
            Some(locale) => parse(
                &mut parsed,
                input,
                StrftimeItems::new_with_locale(&self.fmt, locale),
            ),
            None => parse(&mut parsed, input, StrftimeItems::new(&self.fmt)),
        };
        outcome.map_err(|e| self.parse_error(input, e))?;

        if let Ok(dt) = parsed.to_datetime() {
            return Ok(ParsedDateTime::Absolute(dt));
        }
        if let Ok(dt) = parsed.to_naive_datetime_with_offset(0) {
            return Ok(ParsedDateTime::Local(dt));
        }
        let date = parsed
            .to_naive_date()
            .map_err(|e| self.parse_error(input, e))?;
        Ok(ParsedDateTime::Local(date.and_time(NaiveTime::MIN)))
    }

    fn parse_error(&self, input: &str, source: chrono::ParseError) -> Error {
        Error::Parse {
            input: input.to_string(),
            pattern: self.fmt.clone(),
            source,
        }
    }
}

fn validate(fmt: &str) -> Result<(), Error> {
    let _ = StrftimeItems::new(fmt)
        .parse()
        .map_err(|_| Error::InvalidPattern(fmt.to_string()))?;
    Ok(())
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ndt;

    #[test]
    fn test_invalid_pattern_rejected() {
        assert_eq!(
            Pattern::try_new("%Y-%"),
            Err(Error::InvalidPattern("%Y-%".to_string()))
        );
    }

    #[test]
    fn test_parse_date_only_defaults_midnight() {
        let pattern = Pattern::try_new("%d/%m/%Y").unwrap();
        let result = pattern.parse_str("25/12/2021").unwrap();
        assert_eq!(result, ParsedDateTime::Local(ndt(2021, 12, 25)));
    }

    #[test]
    fn test_parse_datetime() {
        let pattern = Pattern::try_new("%Y-%m-%d %H:%M:%S").unwrap();
        let result = pattern.parse_str("2021-12-25 09:30:15").unwrap();
        let expected = ndt(2021, 12, 25)
            .with_hour(9)
            .unwrap()
            .with_minute(30)
            .unwrap()
            .with_second(15)
            .unwrap();
        assert_eq!(result, ParsedDateTime::Local(expected));
    }

    #[test]
    fn test_parse_with_offset_is_absolute() {
        let pattern = Pattern::try_new("%Y-%m-%dT%H:%M:%S%z").unwrap();
        let result = pattern.parse_str("2021-12-25T09:30:15+0200").unwrap();
        match result {
            ParsedDateTime::Absolute(dt) => {
                assert_eq!(dt.to_rfc3339(), "2021-12-25T09:30:15+02:00")
            }
            ParsedDateTime::Local(_) => panic!("expected an absolute datetime"),
        }
    }

    #[test]
    fn test_parse_bad_input() {
        let pattern = Pattern::try_new("%Y-%m-%d").unwrap();
        let result = pattern.parse_str("25/12/2021");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_time_only_pattern_fails() {
        // a date is required; time-only information cannot be resolved
        let pattern = Pattern::try_new("%H:%M").unwrap();
        assert!(matches!(
            pattern.parse_str("09:30"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_localized_pattern_builds() {
        let pattern = Pattern::try_new_in_locale("%d/%m/%Y", Locale::fr_FR).unwrap();
        let result = pattern.parse_str("25/12/2021").unwrap();
        assert_eq!(result, ParsedDateTime::Local(ndt(2021, 12, 25)));
        assert_eq!(pattern.locale(), Some(Locale::fr_FR));
    }
}
