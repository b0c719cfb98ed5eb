use crate::consts::{
    DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_YEAR, EPAGOMENAL_DAYS, EPAGOMENAL_DAYS_LEAP,
    EPAGOMENAL_MONTH, LEAP_YEAR_CYCLE, LEAP_YEAR_REMAINDER, MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use crate::{DateError, Field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=13)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidDateComponent {
            field: Field::MonthOfYear,
            value: i64::from(value),
            min: 1,
            max: i64::from(MAX_MONTH),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > MAX_MONTH {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// True for the short thirteenth month
    #[inline]
    pub const fn is_epagomenal(self) -> bool {
        self.0.get() == EPAGOMENAL_MONTH
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and fits the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month.get());
        let invalid = || DateError::InvalidDateComponent {
            field: Field::DayOfMonth,
            value: i64::from(value),
            min: i64::from(MIN_DAY),
            max: i64::from(max_day),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > max_day {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An era of the Coptic calendar.
///
/// `Am` (Anno Martyrum) holds proleptic years 1 and later, `BeforeAm` holds
/// year 0 and earlier, counted backwards from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Era {
    #[display(fmt = "BEFORE_AM")]
    BeforeAm = 0,
    #[display(fmt = "AM")]
    Am = 1,
}

impl Era {
    /// Looks up an era by its numeric value
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` for anything but 0 or 1.
    pub const fn of(value: i64) -> Result<Self, DateError> {
        match value {
            0 => Ok(Self::BeforeAm),
            1 => Ok(Self::Am),
            _ => Err(DateError::InvalidDateComponent {
                field: Field::Era,
                value,
                min: 0,
                max: 1,
            }),
        }
    }

    /// Era containing the given proleptic year
    pub const fn of_year(proleptic_year: i32) -> Self {
        if proleptic_year >= 1 { Self::Am } else { Self::BeforeAm }
    }

    /// Numeric value of the era: 0 or 1
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl FromStr for Era {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Self::Am),
            "BEFORE_AM" => Ok(Self::BeforeAm),
            _ => Err(DateError::InvalidFormat(format!("Unknown era: {s}"))),
        }
    }
}

/// Day of the week, numbered from Monday (1) to Sunday (7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Looks up a weekday by its number
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` outside `1..=7`.
    pub const fn of(value: i64) -> Result<Self, DateError> {
        match value {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(DateError::InvalidDateComponent {
                field: Field::DayOfWeek,
                value,
                min: 1,
                max: 7,
            }),
        }
    }

    /// Weekday lying `days` after a Monday, wrapping in both directions
    pub const fn from_monday(days: i64) -> Self {
        match days.rem_euclid(7) {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

// Helper functions

/// A Coptic year is leap when it immediately precedes a year divisible by 4.
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == LEAP_YEAR_REMAINDER
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month != EPAGOMENAL_MONTH {
        DAYS_IN_MONTH
    } else if is_leap_year(year) {
        EPAGOMENAL_DAYS_LEAP
    } else {
        EPAGOMENAL_DAYS
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { DAYS_IN_LEAP_YEAR } else { DAYS_IN_YEAR }
}
