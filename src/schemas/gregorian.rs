use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH_COMMON, DAYS_IN_MONTH_COMMON, DAYS_PER_400_YEAR_CYCLE, DAYS_PER_4_YEAR_CYCLE,
    DAYS_PER_CENTURY, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};
use crate::kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
use crate::parts::MonthParts;
use crate::range::Range;
use crate::schema::{CalendricalSchema, regular};

/// The proleptic Gregorian calendar, with closed formulas throughout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GregorianSchema;

impl GregorianSchema {
    pub const MONTHS_IN_YEAR: i32 = 12;

    /// Checks if a year is a leap year in the Gregorian calendar.
    pub const fn is_leap(year: i32) -> bool {
        (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
    }

    /// Days before `month`, shared with every schema that uses the
    /// Gregorian month lengths.
    pub(crate) const fn days_before_month(month: i32, leap: bool) -> i32 {
        let days = DAYS_BEFORE_MONTH_COMMON[(month - 1) as usize];
        if leap && month > 2 { days + 1 } else { days }
    }

    pub(crate) const fn days_in_month(month: i32, leap: bool) -> i32 {
        if leap && month == 2 {
            29
        } else {
            DAYS_IN_MONTH_COMMON[month as usize]
        }
    }

    /// Month and day from a day of the year, without a table scan.
    pub(crate) const fn month_and_day(day_of_year: i32, leap: bool) -> (i32, i32) {
        let end_of_february = if leap { 60 } else { 59 };
        let correction = if day_of_year <= end_of_february {
            0
        } else if leap {
            1
        } else {
            2
        };
        let month = (12 * (day_of_year - 1 + correction) + 373) / 367;
        (month, day_of_year - Self::days_before_month(month, leap))
    }
}

impl CalendricalKernel for GregorianSchema {
    fn is_regular(&self) -> Option<i32> {
        Some(Self::MONTHS_IN_YEAR)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        Self::is_leap(year)
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 2 && day == 29
    }

    fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        Self::MONTHS_IN_YEAR
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        if Self::is_leap(year) { 366 } else { 365 }
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        Self::days_in_month(month, Self::is_leap(year))
    }
}

impl CalendricalSchema for GregorianSchema {
    fn algorithm(&self) -> CalendricalAlgorithm {
        CalendricalAlgorithm::Arithmetical
    }

    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments {
        CalendricalAdjustments::Days
    }

    fn min_days_in_year(&self) -> i32 {
        365
    }

    fn min_days_in_month(&self) -> i32 {
        28
    }

    fn supported_years_core(&self) -> Range<i32> {
        Range::new_unchecked(i32::MIN, i32::MAX)
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        Self::days_before_month(month, Self::is_leap(year))
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        regular::count_months_since_epoch(Self::MONTHS_IN_YEAR, year, month)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let cycles = days_since_epoch.div_euclid(DAYS_PER_400_YEAR_CYCLE);
        let mut rem = days_since_epoch.rem_euclid(DAYS_PER_400_YEAR_CYCLE);

        // The last century of a cycle and the last year of a four-year
        // block are one day longer
        let centuries = (rem / DAYS_PER_CENTURY).min(3);
        rem -= centuries * DAYS_PER_CENTURY;
        let blocks = rem / DAYS_PER_4_YEAR_CYCLE;
        rem -= blocks * DAYS_PER_4_YEAR_CYCLE;
        let years = (rem / 365).min(3);
        rem -= years * 365;

        let year = GREGORIAN_CYCLE * cycles + CENTURY_CYCLE * centuries + LEAP_YEAR_CYCLE * blocks + years + 1;
        (year, rem + 1)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        Self::month_and_day(day_of_year, Self::is_leap(year))
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular::get_month_parts(Self::MONTHS_IN_YEAR, months_since_epoch)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        let y = year - 1;
        365 * y + y.div_euclid(LEAP_YEAR_CYCLE) - y.div_euclid(CENTURY_CYCLE) + y.div_euclid(GREGORIAN_CYCLE)
    }

    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_start_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }

    fn get_end_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_end_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }
}
