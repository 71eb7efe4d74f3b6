//! This is the documentation for fntime
//!
//! *fntime* builds immutable, reusable function objects that convert assorted input
//! representations - strings, dates, timestamps, numeric epochs, zoned values and
//! positional field collections - into zoned [`DateTime`](chrono::DateTime) values,
//! parameterised by pattern, locale, time zone and chronology.

#[cfg(test)]
mod tests;

pub mod convert;
pub mod json;

mod error;
pub use error::Error;
