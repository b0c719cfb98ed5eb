use crate::consts::{
    CALENDAR_ID, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_WEEK, EPOCH_DAY_DIFFERENCE, MAX_MONTH, MAX_YEAR,
    MIN_YEAR, MONTHS_IN_YEAR,
};
use crate::{
    CopticDate, DateError, Field, Unit, ValueRange, days_in_year, split_day_of_year, start_of_year, to_year,
    year_of_era_range,
};

/// Epoch day of the first day of `MIN_YEAR`
const MIN_EPOCH_DAY: i64 = start_of_year(MIN_YEAR) - EPOCH_DAY_DIFFERENCE;
/// Epoch day of the last day of `MAX_YEAR`
const MAX_EPOCH_DAY: i64 = start_of_year(MAX_YEAR) + days_in_year(MAX_YEAR) as i64 - 1 - EPOCH_DAY_DIFFERENCE;

/// Longest aligned week of a month (days 29 and 30)
const MAX_ALIGNED_WEEK_OF_MONTH: i64 = 5;
/// Longest aligned week of a year (days 365 and 366)
const MAX_ALIGNED_WEEK_OF_YEAR: i64 = 53;

/// The capabilities a calendar date exposes to generic date-time code:
/// field access, field adjustment, epoch-day conversion and arithmetic.
pub trait ChronoDate {
    /// Identifier of the calendar system the date belongs to
    fn calendar_id(&self) -> &'static str;

    /// Days since 1970-01-01 ISO
    fn to_epoch_day(&self) -> i64;

    fn is_supported(&self, field: Field) -> bool;

    /// Range of valid values for `field`, refined for this date where the
    /// calendar allows it.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedField` for fields the date does not have.
    fn range(&self, field: Field) -> Result<ValueRange, DateError>;

    /// # Errors
    /// Returns `DateError::UnsupportedField` for fields the date does not have.
    fn get(&self, field: Field) -> Result<i64, DateError>;

    /// Returns a copy of the date with `field` set to `value`.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedField`, `DateError::InvalidDateComponent`
    /// or `DateError::ArithmeticOverflow`.
    fn with(&self, field: Field, value: i64) -> Result<Self, DateError>
    where
        Self: Sized;

    /// # Errors
    /// Returns `DateError::UnsupportedUnit` or `DateError::ArithmeticOverflow`.
    fn plus(&self, amount: i64, unit: Unit) -> Result<Self, DateError>
    where
        Self: Sized;

    /// Whole `unit`s from this date until `end`, negative if `end` is earlier.
    ///
    /// # Errors
    /// Returns `DateError::MismatchedCalendar` if `end` uses another calendar
    /// system, or `DateError::UnsupportedUnit`.
    fn until(&self, end: &dyn ChronoDate, unit: Unit) -> Result<i64, DateError>;
}

/// Outer range of each supported field, valid for every Coptic date.
fn chronology_range(field: Field) -> Result<ValueRange, DateError> {
    let range = match field {
        Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
            ValueRange::new(1, DAYS_IN_WEEK)
        },
        Field::DayOfMonth => ValueRange::new(1, i64::from(DAYS_IN_MONTH)),
        Field::DayOfYear => ValueRange::new(1, i64::from(DAYS_IN_LEAP_YEAR)),
        Field::EpochDay => ValueRange::new(MIN_EPOCH_DAY, MAX_EPOCH_DAY),
        Field::AlignedWeekOfMonth => ValueRange::new(1, MAX_ALIGNED_WEEK_OF_MONTH),
        Field::AlignedWeekOfYear => ValueRange::new(1, MAX_ALIGNED_WEEK_OF_YEAR),
        Field::MonthOfYear => ValueRange::new(1, i64::from(MAX_MONTH)),
        Field::YearOfEra => ValueRange::new(1, 1 - i64::from(MIN_YEAR)),
        Field::Year => ValueRange::new(i64::from(MIN_YEAR), i64::from(MAX_YEAR)),
        Field::Era => ValueRange::new(0, 1),
        _ => return Err(DateError::UnsupportedField(field)),
    };
    Ok(range)
}

fn narrow<T: TryFrom<i64>>(value: i64) -> Result<T, DateError> {
    T::try_from(value).map_err(|_| DateError::ArithmeticOverflow("field value"))
}

impl CopticDate {
    /// Month distance that only counts a month once its day-of-month is reached.
    fn months_until(&self, end: &Self) -> i64 {
        // Pack the day below the month so the subtraction borrows when the
        // end day has not reached the start day.
        let packed_start = self.proleptic_month() * 32 + i64::from(self.day());
        let packed_end = end.proleptic_month() * 32 + i64::from(end.day());
        (packed_end - packed_start) / 32
    }
}

impl ChronoDate for CopticDate {
    fn calendar_id(&self) -> &'static str {
        CALENDAR_ID
    }

    fn to_epoch_day(&self) -> i64 {
        Self::to_epoch_day(self)
    }

    fn is_supported(&self, field: Field) -> bool {
        chronology_range(field).is_ok()
    }

    fn range(&self, field: Field) -> Result<ValueRange, DateError> {
        match field {
            Field::DayOfMonth => Ok(ValueRange::new(1, i64::from(self.length_of_month()))),
            Field::DayOfYear => Ok(ValueRange::new(1, i64::from(self.length_of_year()))),
            Field::AlignedWeekOfMonth => {
                let max = if self.month_typed().is_epagomenal() { 1 } else { MAX_ALIGNED_WEEK_OF_MONTH };
                Ok(ValueRange::new(1, max))
            },
            Field::YearOfEra => Ok(year_of_era_range(self.era())),
            _ => chronology_range(field),
        }
    }

    fn get(&self, field: Field) -> Result<i64, DateError> {
        let day = i64::from(self.day());
        let day_of_year = i64::from(self.day_of_year());
        let value = match field {
            Field::DayOfWeek => i64::from(self.day_of_week().number()),
            Field::AlignedDayOfWeekInMonth => (day - 1) % DAYS_IN_WEEK + 1,
            Field::AlignedDayOfWeekInYear => (day_of_year - 1) % DAYS_IN_WEEK + 1,
            Field::DayOfMonth => day,
            Field::DayOfYear => day_of_year,
            Field::EpochDay => Self::to_epoch_day(self),
            Field::AlignedWeekOfMonth => (day - 1) / DAYS_IN_WEEK + 1,
            Field::AlignedWeekOfYear => (day_of_year - 1) / DAYS_IN_WEEK + 1,
            Field::MonthOfYear => i64::from(self.month()),
            Field::YearOfEra => self.year_of_era(),
            Field::Year => i64::from(self.proleptic_year()),
            Field::Era => i64::from(self.era().value()),
            _ => return Err(DateError::UnsupportedField(field)),
        };
        Ok(value)
    }

    fn with(&self, field: Field, value: i64) -> Result<Self, DateError> {
        let value: i64 = chronology_range(field)?.check_valid_value(value, field)?;
        let year = self.proleptic_year();

        match field {
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
                self.plus_days(value - self.get(field)?)
            },
            Field::DayOfMonth => Self::resolve_previous_valid(year, self.month(), narrow(value)?),
            Field::DayOfYear => {
                let (month, day) = split_day_of_year(narrow::<u16>(value)? - 1);
                Self::resolve_previous_valid(year, month, day)
            },
            Field::EpochDay => Self::from_epoch_day(value),
            Field::AlignedWeekOfMonth | Field::AlignedWeekOfYear => self.plus_weeks(value - self.get(field)?),
            Field::MonthOfYear => Self::resolve_previous_valid(year, narrow(value)?, self.day()),
            Field::YearOfEra => {
                let year = if year >= 1 { value } else { 1 - value };
                Self::resolve_previous_valid(to_year(year)?, self.month(), self.day())
            },
            Field::Year => Self::resolve_previous_valid(to_year(value)?, self.month(), self.day()),
            Field::Era => {
                if value == i64::from(self.era().value()) {
                    return Ok(*self);
                }
                Self::resolve_previous_valid(to_year(1 - i64::from(year))?, self.month(), self.day())
            },
            _ => Err(DateError::UnsupportedField(field)),
        }
    }

    fn plus(&self, amount: i64, unit: Unit) -> Result<Self, DateError> {
        let years_times = |factor: i64| {
            amount
                .checked_mul(factor)
                .ok_or(DateError::ArithmeticOverflow("year arithmetic"))
        };

        match unit {
            Unit::Days => self.plus_days(amount),
            Unit::Weeks => self.plus_weeks(amount),
            Unit::Months => self.plus_months(amount),
            Unit::Years => self.plus_years(amount),
            Unit::Decades => self.plus_years(years_times(10)?),
            Unit::Centuries => self.plus_years(years_times(100)?),
            Unit::Millennia => self.plus_years(years_times(1000)?),
            Unit::Eras => {
                let era = self
                    .get(Field::Era)?
                    .checked_add(amount)
                    .ok_or(DateError::ArithmeticOverflow("era arithmetic"))?;
                self.with(Field::Era, era)
            },
            _ => Err(DateError::UnsupportedUnit(unit)),
        }
    }

    fn until(&self, end: &dyn ChronoDate, unit: Unit) -> Result<i64, DateError> {
        if end.calendar_id() != CALENDAR_ID {
            return Err(DateError::MismatchedCalendar {
                expected: CALENDAR_ID,
                found:    end.calendar_id(),
            });
        }
        let end = Self::from_epoch_day(end.to_epoch_day())?;
        let days = Self::to_epoch_day(&end) - Self::to_epoch_day(self);

        match unit {
            Unit::Days => Ok(days),
            Unit::Weeks => Ok(days / DAYS_IN_WEEK),
            Unit::Months => Ok(self.months_until(&end)),
            Unit::Years => Ok(self.months_until(&end) / MONTHS_IN_YEAR),
            Unit::Decades => Ok(self.months_until(&end) / (MONTHS_IN_YEAR * 10)),
            Unit::Centuries => Ok(self.months_until(&end) / (MONTHS_IN_YEAR * 100)),
            Unit::Millennia => Ok(self.months_until(&end) / (MONTHS_IN_YEAR * 1000)),
            Unit::Eras => Ok(end.get(Field::Era)? - self.get(Field::Era)?),
            _ => Err(DateError::UnsupportedUnit(unit)),
        }
    }
}
