use crate::consts::{DAYS_PER_4_YEAR_CYCLE, LEAP_YEAR_CYCLE};
use crate::kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
use crate::parts::MonthParts;
use crate::range::Range;
use crate::schema::{CalendricalSchema, regular};
use crate::schemas::GregorianSchema;

/// The proleptic Julian calendar: Gregorian months, a leap year every four
/// years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JulianSchema;

impl JulianSchema {
    pub const MONTHS_IN_YEAR: i32 = 12;

    pub const fn is_leap(year: i32) -> bool {
        year.rem_euclid(LEAP_YEAR_CYCLE) == 0
    }
}

impl CalendricalKernel for JulianSchema {
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
        GregorianSchema::days_in_month(month, Self::is_leap(year))
    }
}

impl CalendricalSchema for JulianSchema {
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
        GregorianSchema::days_before_month(month, Self::is_leap(year))
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        regular::count_months_since_epoch(Self::MONTHS_IN_YEAR, year, month)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let year = (4 * days_since_epoch + 1464).div_euclid(DAYS_PER_4_YEAR_CYCLE);
        (year, days_since_epoch - self.get_start_of_year(year) + 1)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        GregorianSchema::month_and_day(day_of_year, Self::is_leap(year))
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular::get_month_parts(Self::MONTHS_IN_YEAR, months_since_epoch)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        let y = year - 1;
        365 * y + y.div_euclid(LEAP_YEAR_CYCLE)
    }

    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_start_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }

    fn get_end_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_end_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }
}
