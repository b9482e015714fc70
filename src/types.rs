//! Compact date parts packed into a single 32-bit word.
//!
//! Layouts, most significant bit first:
//!
//! | Type     | Bits 31..10  | Bits 9..6   | Bits 5..0 |
//! |----------|--------------|-------------|-----------|
//! | `Yemoda` | year - 1     | month - 1   | day - 1   |
//! | `Yemo`   | year - 1     | month - 1   | 0         |
//! | `Yedoy`  | year - 1     | day of year - 1 (10 bits) |
//!
//! The year field is signed, so the packed word orders exactly like the
//! decoded tuple. That ordering is lexicographic, not calendrical: two
//! values only compare meaningfully when they belong to the same calendar.

use crate::consts::{
    DAY_MASK, DAY_OF_YEAR_MASK, MAX_DAY, MAX_DAY_OF_YEAR, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_MASK,
    MONTH_SHIFT, YEAR_SHIFT,
};
use crate::prelude::*;
use crate::{CalendarError, CalendarResult};
use serde::{Deserialize, Serialize};

fn check_year(year: i32, param: &'static str) -> CalendarResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { param, year });
    }
    Ok(())
}

fn check_month(year: i32, month: i32, param: &'static str) -> CalendarResult<()> {
    if !(1..=MAX_MONTH).contains(&month) {
        return Err(CalendarError::MonthOutOfRange { param, year, month });
    }
    Ok(())
}

/// A (year, month, day) triple packed into an `i32`.
///
/// Supports years `MIN_YEAR..=MAX_YEAR`, months `1..=16` and days `1..=64`.
/// Whether the date exists in a given calendar is the schema's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(from = "i32", into = "i32")]
#[display(fmt = "{:04}-{:02}-{:02}", "self.year()", "self.month()", "self.day()")]
pub struct Yemoda(i32);

impl Yemoda {
    /// Smallest representable value, `MIN_YEAR-01-01`
    pub const MIN: Self = Self::new_unchecked(MIN_YEAR, 1, 1);
    /// Largest representable value, `MAX_YEAR-16-64`
    pub const MAX: Self = Self::new_unchecked(MAX_YEAR, MAX_MONTH, MAX_DAY);

    /// Creates a new `Yemoda`, validating that each part fits its bit field.
    ///
    /// # Errors
    /// Returns an out-of-range error naming the first part that does not fit.
    pub fn new(year: i32, month: i32, day: i32) -> CalendarResult<Self> {
        check_year(year, "year")?;
        check_month(year, month, "month")?;
        if !(1..=MAX_DAY).contains(&day) {
            return Err(CalendarError::DayOutOfRange {
                param: "day",
                year,
                month,
                day,
            });
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Packs parts already known to fit.
    pub(crate) const fn new_unchecked(year: i32, month: i32, day: i32) -> Self {
        debug_assert!(year >= MIN_YEAR && year <= MAX_YEAR);
        debug_assert!(month >= 1 && month <= MAX_MONTH);
        debug_assert!(day >= 1 && day <= MAX_DAY);
        Self(((year - 1) << YEAR_SHIFT) | ((month - 1) << MONTH_SHIFT) | (day - 1))
    }

    /// Returns the first day of the first month of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year does not fit.
    pub fn at_start_of_year(year: i32) -> CalendarResult<Self> {
        check_year(year, "year")?;
        Ok(Self::new_unchecked(year, 1, 1))
    }

    /// Reinterprets a binary word. Every `i32` is a well-formed `Yemoda`.
    #[inline]
    pub const fn from_binary(data: i32) -> Self {
        Self(data)
    }

    /// Returns the packed representation
    #[inline]
    pub const fn to_binary(self) -> i32 {
        self.0
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        (self.0 >> YEAR_SHIFT) + 1
    }

    /// Returns the month of the year
    #[inline]
    pub const fn month(self) -> i32 {
        ((self.0 >> MONTH_SHIFT) & MONTH_MASK) + 1
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(self) -> i32 {
        (self.0 & DAY_MASK) + 1
    }

    /// Unpacks into `(year, month, day)`
    #[inline]
    pub const fn deconstruct(self) -> (i32, i32, i32) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the (year, month) pair, i.e. the first day of this month.
    #[inline]
    pub const fn yemo(self) -> Yemo {
        Yemo(self.0 & !DAY_MASK)
    }
}

/// A (year, month) pair packed into an `i32`.
///
/// Binary compatible with [`Yemoda`]: the day field is always zero, so the
/// packed word of a `Yemo` is the packed word of the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, Into)]
#[serde(try_from = "i32", into = "i32")]
#[display(fmt = "{:04}-{:02}", "self.year()", "self.month()")]
pub struct Yemo(i32);

impl Yemo {
    /// Smallest representable value
    pub const MIN: Self = Self::new_unchecked(MIN_YEAR, 1);
    /// Largest representable value
    pub const MAX: Self = Self::new_unchecked(MAX_YEAR, MAX_MONTH);

    /// Creates a new `Yemo`, validating that each part fits its bit field.
    ///
    /// # Errors
    /// Returns an out-of-range error naming the first part that does not fit.
    pub fn new(year: i32, month: i32) -> CalendarResult<Self> {
        check_year(year, "year")?;
        check_month(year, month, "month")?;
        Ok(Self::new_unchecked(year, month))
    }

    pub(crate) const fn new_unchecked(year: i32, month: i32) -> Self {
        debug_assert!(year >= MIN_YEAR && year <= MAX_YEAR);
        debug_assert!(month >= 1 && month <= MAX_MONTH);
        Self(((year - 1) << YEAR_SHIFT) | ((month - 1) << MONTH_SHIFT))
    }

    /// Returns the first month of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year does not fit.
    pub fn at_start_of_year(year: i32) -> CalendarResult<Self> {
        check_year(year, "year")?;
        Ok(Self::new_unchecked(year, 1))
    }

    /// Reads a binary word, rejecting words whose day field is not zero.
    ///
    /// # Errors
    /// Returns `CalendarError::ValueOutOfRange` for a malformed word.
    pub fn from_binary(data: i32) -> CalendarResult<Self> {
        if data & DAY_MASK != 0 {
            return Err(CalendarError::ValueOutOfRange {
                param: "data",
                value: i64::from(data),
            });
        }
        Ok(Self(data))
    }

    /// Returns the packed representation
    #[inline]
    pub const fn to_binary(self) -> i32 {
        self.0
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        (self.0 >> YEAR_SHIFT) + 1
    }

    /// Returns the month of the year
    #[inline]
    pub const fn month(self) -> i32 {
        ((self.0 >> MONTH_SHIFT) & MONTH_MASK) + 1
    }

    /// Unpacks into `(year, month)`
    #[inline]
    pub const fn deconstruct(self) -> (i32, i32) {
        (self.year(), self.month())
    }

    /// Returns the first day of this month; no recomputation is involved.
    #[inline]
    pub const fn start_of_month(self) -> Yemoda {
        Yemoda(self.0)
    }

    /// Returns the given day of this month.
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the day does not fit.
    pub fn with_day(self, day: i32) -> CalendarResult<Yemoda> {
        if !(1..=MAX_DAY).contains(&day) {
            return Err(CalendarError::DayOutOfRange {
                param: "day",
                year: self.year(),
                month: self.month(),
                day,
            });
        }
        Ok(Yemoda(self.0 | (day - 1)))
    }
}

impl TryFrom<i32> for Yemo {
    type Error = CalendarError;

    fn try_from(data: i32) -> Result<Self, Self::Error> {
        Self::from_binary(data)
    }
}

/// A (year, day of year) pair packed into an `i32`.
///
/// Supports years `MIN_YEAR..=MAX_YEAR` and days of the year `1..=1024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(from = "i32", into = "i32")]
#[display(fmt = "{:04}-{:03}", "self.year()", "self.day_of_year()")]
pub struct Yedoy(i32);

impl Yedoy {
    /// Smallest representable value
    pub const MIN: Self = Self::new_unchecked(MIN_YEAR, 1);
    /// Largest representable value
    pub const MAX: Self = Self::new_unchecked(MAX_YEAR, MAX_DAY_OF_YEAR);

    /// Creates a new `Yedoy`, validating that each part fits its bit field.
    ///
    /// # Errors
    /// Returns an out-of-range error naming the first part that does not fit.
    pub fn new(year: i32, day_of_year: i32) -> CalendarResult<Self> {
        check_year(year, "year")?;
        if !(1..=MAX_DAY_OF_YEAR).contains(&day_of_year) {
            return Err(CalendarError::DayOfYearOutOfRange {
                param: "day_of_year",
                year,
                day_of_year,
            });
        }
        Ok(Self::new_unchecked(year, day_of_year))
    }

    pub(crate) const fn new_unchecked(year: i32, day_of_year: i32) -> Self {
        debug_assert!(year >= MIN_YEAR && year <= MAX_YEAR);
        debug_assert!(day_of_year >= 1 && day_of_year <= MAX_DAY_OF_YEAR);
        Self(((year - 1) << YEAR_SHIFT) | (day_of_year - 1))
    }

    /// Returns the first day of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year does not fit.
    pub fn at_start_of_year(year: i32) -> CalendarResult<Self> {
        check_year(year, "year")?;
        Ok(Self::new_unchecked(year, 1))
    }

    /// Reinterprets a binary word. Every `i32` is a well-formed `Yedoy`.
    #[inline]
    pub const fn from_binary(data: i32) -> Self {
        Self(data)
    }

    /// Returns the packed representation
    #[inline]
    pub const fn to_binary(self) -> i32 {
        self.0
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        (self.0 >> YEAR_SHIFT) + 1
    }

    /// Returns the day of the year
    #[inline]
    pub const fn day_of_year(self) -> i32 {
        (self.0 & DAY_OF_YEAR_MASK) + 1
    }

    /// Unpacks into `(year, day_of_year)`
    #[inline]
    pub const fn deconstruct(self) -> (i32, i32) {
        (self.year(), self.day_of_year())
    }
}
