use chrono::DateTime;
use chrono_tz::Tz;

use crate::Error;

/// An immutable function object mapping one input representation onto a zoned datetime.
///
/// Implementations hold only their configuration (pattern, locale, zone, chronology),
/// never mutate their input, and may be applied concurrently without synchronization.
pub trait Converter<I> {
    /// Apply the conversion to `input`.
    fn convert(&self, input: I) -> Result<DateTime<Tz>, Error>;

    /// Consume the converter and return a plain closure applying it.
    fn into_fn(self) -> impl Fn(I) -> Result<DateTime<Tz>, Error>
    where
        Self: Sized,
    {
        move |input| self.convert(input)
    }
}
