/// Number of bits used by the day field of a `Yemoda`
pub(crate) const DAY_BITS: u32 = 6;
/// Number of bits used by the month field of a `Yemoda` or `Yemo`
pub(crate) const MONTH_BITS: u32 = 4;
/// Number of bits used by the day-of-year field of a `Yedoy`
pub(crate) const DAY_OF_YEAR_BITS: u32 = 10;

/// Position of the month field inside a `Yemoda`
pub(crate) const MONTH_SHIFT: u32 = DAY_BITS;
/// Position of the year field inside a `Yemoda`, `Yemo` or `Yedoy`
pub(crate) const YEAR_SHIFT: u32 = MONTH_SHIFT + MONTH_BITS;

pub(crate) const DAY_MASK: i32 = (1 << DAY_BITS) - 1;
pub(crate) const MONTH_MASK: i32 = (1 << MONTH_BITS) - 1;
pub(crate) const DAY_OF_YEAR_MASK: i32 = (1 << DAY_OF_YEAR_BITS) - 1;

/// Earliest year that fits in the 22-bit year field (inclusive)
pub const MIN_YEAR: i32 = -(1 << 21) + 1;
/// Latest year that fits in the 22-bit year field (inclusive)
pub const MAX_YEAR: i32 = 1 << 21;

/// Largest month number a `Yemoda` can hold
pub const MAX_MONTH: i32 = 1 << MONTH_BITS;
/// Largest day number a `Yemoda` can hold
pub const MAX_DAY: i32 = 1 << DAY_BITS;
/// Largest day-of-year a `Yedoy` can hold
pub const MAX_DAY_OF_YEAR: i32 = 1 << DAY_OF_YEAR_BITS;

/// First month of a year, first day of a month, first day of a year
pub const MIN_MONTH: i32 = 1;
pub const MIN_DAY: i32 = 1;
pub const MIN_DAY_OF_YEAR: i32 = 1;

/// Default years supported by a schema when it has no reason to restrict them
pub const DEFAULT_MIN_SUPPORTED_YEAR: i32 = -999_998;
pub const DEFAULT_MAX_SUPPORTED_YEAR: i32 = 999_999;

/// Years of a standard scope, the range most calendars are used within
pub const STANDARD_MIN_YEAR: i32 = 1;
pub const STANDARD_MAX_YEAR: i32 = 9999;
/// Years of a proleptic scope: the standard range mirrored before the epoch
pub const PROLEPTIC_MIN_YEAR: i32 = -9998;
pub const PROLEPTIC_MAX_YEAR: i32 = 9999;

/// Days before each month of a common Gregorian or Julian year
/// (index 0 is January)
pub(crate) const DAYS_BEFORE_MONTH_COMMON: [i32; 13] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Days in each month of a common Gregorian or Julian year
/// (index 0 is unused, months are 1-indexed)
pub(crate) const DAYS_IN_MONTH_COMMON: [i32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (adjusted by the leap year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a four-year cycle of the Julian and Coptic calendars
pub(crate) const DAYS_PER_4_YEAR_CYCLE: i32 = 4 * 365 + 1;
/// Days in a 100-year Gregorian cycle starting with a common century year
pub(crate) const DAYS_PER_CENTURY: i32 = 25 * DAYS_PER_4_YEAR_CYCLE - 1;
/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEAR_CYCLE: i32 = 4 * DAYS_PER_CENTURY + 1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
