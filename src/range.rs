use crate::{DateError, Field, prelude::*};

/// The inclusive range of values a field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min} - {max}")]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    pub(crate) const fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Returns the smallest valid value
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the largest valid value
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Checks if the value lies within the range
    pub const fn is_valid_value(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks that `value` is valid for `field` and narrows it to `T`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the value is out of range
    /// or does not fit in `T`.
    pub fn check_valid_value<T: TryFrom<i64>>(&self, value: i64, field: Field) -> Result<T, DateError> {
        if !self.is_valid_value(value) {
            return Err(self.invalid(value, field));
        }
        T::try_from(value).map_err(|_| self.invalid(value, field))
    }

    const fn invalid(&self, value: i64, field: Field) -> DateError {
        DateError::InvalidDateComponent {
            field,
            value,
            min: self.min,
            max: self.max,
        }
    }
}
