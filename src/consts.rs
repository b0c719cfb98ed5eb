/// Identifier of the Coptic calendar system
pub const CALENDAR_ID: &str = "Coptic";

/// Days from Coptic 0001-01-01 to epoch day 0 (ISO 1970-01-01).
/// 574,971 days to the Modified Julian Day epoch plus 40,587 from there.
pub const EPOCH_DAY_DIFFERENCE: i64 = 574_971 + 40_587;

/// Smallest supported proleptic year
pub const MIN_YEAR: i32 = i32::MIN;
/// Largest supported proleptic year
pub const MAX_YEAR: i32 = i32::MAX;

/// Maximum valid month (the intercalary month)
pub const MAX_MONTH: u8 = 13;
/// Month number of the short intercalary month
pub const EPAGOMENAL_MONTH: u8 = 13;
/// Number of months in every year
pub const MONTHS_IN_YEAR: i64 = 13;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Days in each of months 1 through 12
pub const DAYS_IN_MONTH: u8 = 30;
/// Days in the intercalary month of a common year
pub const EPAGOMENAL_DAYS: u8 = 5;
/// Days in the intercalary month of a leap year
pub const EPAGOMENAL_DAYS_LEAP: u8 = 6;

/// Days in a common year
pub const DAYS_IN_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Leap year occurs every 4 years...
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// ...in the year whose floored remainder is 3
pub(crate) const LEAP_YEAR_REMAINDER: i32 = 3;
/// Days in one full leap cycle: 3 * 365 + 366
pub(crate) const DAYS_IN_LEAP_CYCLE: i64 = 1461;
/// Bias that lands the year estimate on the first day of each year
pub(crate) const YEAR_ESTIMATE_BIAS: i64 = 1463;
/// Shifts epoch day 0 (a Thursday) onto Monday-based day-of-week numbering
pub(crate) const WEEKDAY_EPOCH_OFFSET: i64 = 3;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
