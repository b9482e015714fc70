use crate::consts::{DAYS_PER_4_YEAR_CYCLE, LEAP_YEAR_CYCLE};
use crate::kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
use crate::parts::MonthParts;
use crate::schema::{CalendricalSchema, regular};

/// Twelve months of 30 days followed by a short thirteenth month of five
/// epagomenal days, six in a leap year.
///
/// Leap years are those just before a multiple of four (3, 7, 11, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coptic13Schema;

impl Coptic13Schema {
    pub const MONTHS_IN_YEAR: i32 = 13;
    const DAYS_IN_MONTH: i32 = 30;

    pub const fn is_leap(year: i32) -> bool {
        year.rem_euclid(LEAP_YEAR_CYCLE) == 3
    }
}

impl CalendricalKernel for Coptic13Schema {
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
        month == 13 && day == 6
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, _day: i32) -> bool {
        month == 13
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        Self::MONTHS_IN_YEAR
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        if Self::is_leap(year) { 366 } else { 365 }
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if month < 13 {
            Self::DAYS_IN_MONTH
        } else if Self::is_leap(year) {
            6
        } else {
            5
        }
    }
}

impl CalendricalSchema for Coptic13Schema {
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
        5
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: i32) -> i32 {
        Self::DAYS_IN_MONTH * (month - 1)
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        regular::count_months_since_epoch(Self::MONTHS_IN_YEAR, year, month)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        // Counted from year 0, every four-year block ends with its leap year
        let days = days_since_epoch + 365;
        let blocks = days.div_euclid(DAYS_PER_4_YEAR_CYCLE);
        let rem = days.rem_euclid(DAYS_PER_4_YEAR_CYCLE);
        let years = (rem / 365).min(3);
        (LEAP_YEAR_CYCLE * blocks + years, rem - 365 * years + 1)
    }

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let month = (day_of_year - 1) / Self::DAYS_IN_MONTH + 1;
        (month, day_of_year - Self::DAYS_IN_MONTH * (month - 1))
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular::get_month_parts(Self::MONTHS_IN_YEAR, months_since_epoch)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        365 * (year - 1) + year.div_euclid(LEAP_YEAR_CYCLE)
    }

    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_start_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }

    fn get_end_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_end_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }
}
