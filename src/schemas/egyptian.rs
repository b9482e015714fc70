use crate::kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
use crate::parts::MonthParts;
use crate::range::Range;
use crate::schema::{CalendricalSchema, regular};

/// The wandering year: twelve months of 30 days, the five epagomenal days
/// folded into the last month. No leap years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Egyptian12Schema;

impl Egyptian12Schema {
    pub const MONTHS_IN_YEAR: i32 = 12;
    pub const DAYS_IN_YEAR: i32 = 365;
    const DAYS_IN_MONTH: i32 = 30;
}

impl CalendricalKernel for Egyptian12Schema {
    fn is_regular(&self) -> Option<i32> {
        Some(Self::MONTHS_IN_YEAR)
    }

    fn is_leap_year(&self, _year: i32) -> bool {
        false
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day > Self::DAYS_IN_MONTH
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        Self::MONTHS_IN_YEAR
    }

    fn count_days_in_year(&self, _year: i32) -> i32 {
        Self::DAYS_IN_YEAR
    }

    fn count_days_in_month(&self, _year: i32, month: i32) -> i32 {
        if month == 12 { 35 } else { Self::DAYS_IN_MONTH }
    }
}

impl CalendricalSchema for Egyptian12Schema {
    fn algorithm(&self) -> CalendricalAlgorithm {
        CalendricalAlgorithm::Arithmetical
    }

    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments {
        CalendricalAdjustments::None
    }

    fn min_days_in_year(&self) -> i32 {
        Self::DAYS_IN_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        Self::DAYS_IN_MONTH
    }

    fn supported_years_core(&self) -> Range<i32> {
        Range::new_unchecked(i32::MIN, i32::MAX)
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: i32) -> i32 {
        Self::DAYS_IN_MONTH * (month - 1)
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        regular::count_months_since_epoch(Self::MONTHS_IN_YEAR, year, month)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        (
            1 + days_since_epoch.div_euclid(Self::DAYS_IN_YEAR),
            1 + days_since_epoch.rem_euclid(Self::DAYS_IN_YEAR),
        )
    }

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let month = ((day_of_year - 1) / Self::DAYS_IN_MONTH + 1).min(Self::MONTHS_IN_YEAR);
        (month, day_of_year - Self::DAYS_IN_MONTH * (month - 1))
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular::get_month_parts(Self::MONTHS_IN_YEAR, months_since_epoch)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        Self::DAYS_IN_YEAR * (year - 1)
    }

    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_start_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }

    fn get_end_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_end_of_year_in_months(Self::MONTHS_IN_YEAR, year)
    }
}
