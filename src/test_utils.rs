//! Fixture constructors shared by the unit tests.

use crate::CopticDate;

/// Builds a date that the test asserts is valid.
pub(crate) fn coptic(year: i32, month: u8, day: u8) -> CopticDate {
    CopticDate::new(year, month, day).unwrap_or_else(|err| panic!("invalid fixture {year}-{month:02}-{day:02}: {err}"))
}
