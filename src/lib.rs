#[macro_use]
mod logging;

mod consts;
mod field;
mod prelude;
mod range;
mod temporal;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use field::{Field, Unit};
pub use range::ValueRange;
pub use temporal::ChronoDate;
pub use types::{Day, Era, Month, Weekday, days_in_month, days_in_year, is_leap_year};

use consts::{DAYS_IN_LEAP_CYCLE, LEAP_YEAR_CYCLE, WEEKDAY_EPOCH_OFFSET, YEAR_ESTIMATE_BIAS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for constructing, adjusting and comparing Coptic dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A date component or field value lies outside its valid range.
    #[error("Invalid value for {field}: {value} (valid values {min} - {max})")]
    InvalidDateComponent {
        field: Field,
        value: i64,
        min:   i64,
        max:   i64,
    },

    /// The field is not one of the date fields this calendar understands.
    #[error("Unsupported field: {0}")]
    UnsupportedField(Field),

    /// The unit cannot be used for arithmetic or distances on a date.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(Unit),

    /// Two dates from different calendar systems were combined.
    #[error("Unable to calculate period between two different calendar systems: {expected} and {found}")]
    MismatchedCalendar {
        expected: &'static str,
        found:    &'static str,
    },

    /// Day or year arithmetic left the representable range.
    #[error("Arithmetic overflow in {0}")]
    ArithmeticOverflow(&'static str),

    /// Text could not be parsed as a date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

/// A date in the Coptic calendar system.
///
/// Twelve months of 30 days are followed by a thirteenth month of 5 days, or
/// 6 days in a leap year. The year is stored proleptically: year 0 precedes
/// year 1 and earlier years are negative. Every value is validated on
/// construction and every adjustment yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CopticDate {
    year:  i32,
    month: Month,
    day:   Day,
}

impl CopticDate {
    /// Creates a date from a proleptic year, month and day-of-month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the month is outside 1-13
    /// or the day does not exist in that month.
    pub fn new(proleptic_year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let day = Day::new(day, proleptic_year, month)?;
        Ok(Self {
            year: proleptic_year,
            month,
            day,
        })
    }

    /// Creates a date from an era, year-of-era, month and day-of-month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the year-of-era is not
    /// positive or any component is invalid.
    pub fn of_era(era: Era, year_of_era: i64, month: u8, day: u8) -> Result<Self, DateError> {
        let year_of_era: i64 = year_of_era_range(era).check_valid_value(year_of_era, Field::YearOfEra)?;
        let year = match era {
            Era::Am => year_of_era,
            Era::BeforeAm => 1 - year_of_era,
        };
        Self::new(to_year(year)?, month, day)
    }

    /// Creates a date from a proleptic year and day-of-year
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the day-of-year is past
    /// the end of the year.
    pub fn of_year_day(proleptic_year: i32, day_of_year: u16) -> Result<Self, DateError> {
        let range = ValueRange::new(1, i64::from(days_in_year(proleptic_year)));
        let day_of_year: u16 = range.check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        let (month, day) = split_day_of_year(day_of_year - 1);
        Self::new(proleptic_year, month, day)
    }

    /// Converts an epoch day (day 0 is 1970-01-01 ISO) to a Coptic date
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the resulting year does not
    /// fit the supported year range.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        let overflow = || DateError::ArithmeticOverflow("epoch day conversion");

        // Day 0 of this count is 0001-01-01.
        let coptic_day = epoch_day.checked_add(EPOCH_DAY_DIFFERENCE).ok_or_else(overflow)?;
        let year = coptic_day
            .checked_mul(i64::from(LEAP_YEAR_CYCLE))
            .and_then(|d| d.checked_add(YEAR_ESTIMATE_BIAS))
            .ok_or_else(overflow)?
            .div_euclid(DAYS_IN_LEAP_CYCLE);
        let year = i32::try_from(year).map_err(|_| overflow())?;

        let day_of_year0 = u16::try_from(coptic_day - start_of_year(year)).map_err(|_| overflow())?;
        let (month, day) = split_day_of_year(day_of_year0);
        Self::new(year, month, day)
    }

    /// Builds a date after a field change, pulling a day past the end of
    /// month 13 back to that month's last day.
    pub(crate) fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let mut day = day;
        if month == EPAGOMENAL_MONTH && day > EPAGOMENAL_DAYS {
            let last = days_in_month(proleptic_year, month);
            if day > last {
                trace!("clamping day {day} of month {month} to {last} in year {proleptic_year}");
                day = last;
            }
        }
        Self::new(proleptic_year, month, day)
    }

    /// Validates stored components, repairing the legacy "month 13, day 6 in
    /// a common year" value to day 5.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` for anything else invalid.
    pub fn normalize_on_load(proleptic_year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let mut day = day;
        if month == EPAGOMENAL_MONTH && day == EPAGOMENAL_DAYS_LEAP && !is_leap_year(proleptic_year) {
            warn!("repairing stored date {proleptic_year}-{month:02}-{day:02}: year is not leap");
            day = EPAGOMENAL_DAYS;
        }
        Self::new(proleptic_year, month, day)
    }

    /// Returns the proleptic year
    pub const fn proleptic_year(&self) -> i32 {
        self.year
    }

    /// Returns the year counted within the era, always positive
    pub const fn year_of_era(&self) -> i64 {
        if self.year >= 1 {
            self.year as i64
        } else {
            1 - self.year as i64
        }
    }

    pub const fn era(&self) -> Era {
        Era::of_year(self.year)
    }

    /// Returns the month (1-13)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the day-of-month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the day-of-year, from 1 to 365 or 366
    pub const fn day_of_year(&self) -> u16 {
        (self.month.get() as u16 - 1) * DAYS_IN_MONTH as u16 + self.day.get() as u16
    }

    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_monday(self.to_epoch_day() + WEEKDAY_EPOCH_OFFSET)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub const fn length_of_month(&self) -> u8 {
        days_in_month(self.year, self.month.get())
    }

    pub const fn length_of_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// Months since month 1 of year 0
    pub const fn proleptic_month(&self) -> i64 {
        self.year as i64 * MONTHS_IN_YEAR + (self.month.get() as i64 - 1)
    }

    /// Converts to an epoch day (day 0 is 1970-01-01 ISO)
    pub const fn to_epoch_day(&self) -> i64 {
        start_of_year(self.year) + (self.day_of_year() as i64 - 1) - EPOCH_DAY_DIFFERENCE
    }

    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn plus_days(&self, days: i64) -> Result<Self, DateError> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self
            .to_epoch_day()
            .checked_add(days)
            .ok_or(DateError::ArithmeticOverflow("day arithmetic"))?;
        Self::from_epoch_day(epoch_day)
    }

    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        let days = weeks
            .checked_mul(DAYS_IN_WEEK)
            .ok_or(DateError::ArithmeticOverflow("week arithmetic"))?;
        self.plus_days(days)
    }

    /// Adds months, keeping the day-of-month and clamping it in month 13
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn plus_months(&self, months: i64) -> Result<Self, DateError> {
        if months == 0 {
            return Ok(*self);
        }
        let overflow = || DateError::ArithmeticOverflow("month arithmetic");
        let target = self.proleptic_month().checked_add(months).ok_or_else(overflow)?;
        let year = i32::try_from(target.div_euclid(MONTHS_IN_YEAR)).map_err(|_| overflow())?;
        let month = u8::try_from(target.rem_euclid(MONTHS_IN_YEAR) + 1).map_err(|_| overflow())?;
        Self::resolve_previous_valid(year, month, self.day())
    }

    /// Adds years, keeping month and day-of-month and clamping in month 13
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn plus_years(&self, years: i64) -> Result<Self, DateError> {
        if years == 0 {
            return Ok(*self);
        }
        let year = i64::from(self.year)
            .checked_add(years)
            .ok_or(DateError::ArithmeticOverflow("year arithmetic"))?;
        Self::resolve_previous_valid(to_year(year)?, self.month(), self.day())
    }

    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn minus_days(&self, days: i64) -> Result<Self, DateError> {
        self.plus_days(negate(days)?)
    }

    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        self.plus_weeks(negate(weeks)?)
    }

    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn minus_months(&self, months: i64) -> Result<Self, DateError> {
        self.plus_months(negate(months)?)
    }

    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the supported range.
    pub fn minus_years(&self, years: i64) -> Result<Self, DateError> {
        self.plus_years(negate(years)?)
    }

    /// Moves the date into `era`, mirroring the year around the era boundary
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the mirrored year does not fit.
    pub fn with_era(&self, era: Era) -> Result<Self, DateError> {
        self.with(Field::Era, i64::from(era.value()))
    }

    /// Sets the year-of-era, keeping the era
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the year-of-era is not positive.
    pub fn with_year(&self, year_of_era: i64) -> Result<Self, DateError> {
        self.with(Field::YearOfEra, year_of_era)
    }

    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the month is outside 1-13.
    pub fn with_month(&self, month: u8) -> Result<Self, DateError> {
        self.with(Field::MonthOfYear, i64::from(month))
    }

    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the day is outside 1-30.
    pub fn with_day_of_month(&self, day: u8) -> Result<Self, DateError> {
        self.with(Field::DayOfMonth, i64::from(day))
    }

    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the day is outside 1-366.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self, DateError> {
        self.with(Field::DayOfYear, i64::from(day_of_year))
    }
}

// --- helpers for epoch-day and year arithmetic ---

/// Day number of the first day of `year`, counted from 0001-01-01.
pub(crate) const fn start_of_year(year: i32) -> i64 {
    let year = year as i64;
    (year - 1) * DAYS_IN_YEAR as i64 + year.div_euclid(LEAP_YEAR_CYCLE as i64)
}

/// Splits a zero-based day-of-year (at most 365) into month and day.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn split_day_of_year(day_of_year0: u16) -> (u8, u8) {
    let days_in_month = DAYS_IN_MONTH as u16;
    (
        (day_of_year0 / days_in_month + 1) as u8,
        (day_of_year0 % days_in_month + 1) as u8,
    )
}

/// Valid years-of-era for an era.
pub(crate) const fn year_of_era_range(era: Era) -> ValueRange {
    match era {
        Era::Am => ValueRange::new(1, MAX_YEAR as i64),
        Era::BeforeAm => ValueRange::new(1, 1 - MIN_YEAR as i64),
    }
}

pub(crate) fn to_year(year: i64) -> Result<i32, DateError> {
    i32::try_from(year).map_err(|_| DateError::ArithmeticOverflow("proleptic year"))
}

fn negate(amount: i64) -> Result<i64, DateError> {
    amount
        .checked_neg()
        .ok_or(DateError::ArithmeticOverflow("negation"))
}

impl fmt::Display for CopticDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{CALENDAR_ID} {} {}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.era(),
            self.year_of_era(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for CopticDate {
    type Err = DateError;

    /// Parses the `Display` form, e.g. `Coptic AM 1686-04-23`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::InvalidFormat(s.to_owned());

        let mut tokens = s.split_whitespace();
        let (Some(calendar), Some(era), Some(ymd), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(invalid());
        };
        if calendar != CALENDAR_ID {
            return Err(invalid());
        }
        let era: Era = era.parse()?;

        let parts: Vec<&str> = ymd.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };
        let year = year.parse::<i64>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;

        Self::of_era(era, year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for CopticDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CopticDate> for (i32, u8, u8) {
    fn from(date: CopticDate) -> Self {
        (date.year, date.month.get(), date.day.get())
    }
}

impl Serialize for CopticDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.year, self.month.get(), self.day.get()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CopticDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (year, month, day) = <(i32, u8, u8)>::deserialize(deserializer)?;
        Self::normalize_on_load(year, month, day).map_err(serde::de::Error::custom)
    }
}
