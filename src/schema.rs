//! The schema trait: a full conversion API derived from a kernel.
//!
//! Every provided method is a generic, loop-based algorithm that works for
//! any [`CalendricalKernel`]. Closed-form schemas override the ones they can
//! compute directly; the results must be identical either way.
//!
//! Years, months and days passed to these methods are trusted: callers are
//! expected to validate untrusted input through a scope first.

use crate::consts::{DEFAULT_MAX_SUPPORTED_YEAR, DEFAULT_MIN_SUPPORTED_YEAR};
use crate::kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
use crate::parts::{DateParts, MonthParts, OrdinalParts};
use crate::range::Range;

/// Conversions between days since the epoch, months since the epoch and
/// date parts, for one calendar family.
///
/// The epoch is the first day of the first month of year 1:
/// `count_days_since_epoch(1, 1, 1) == 0` and
/// `count_months_since_epoch(1, 1) == 0`.
pub trait CalendricalSchema: CalendricalKernel {
    fn algorithm(&self) -> CalendricalAlgorithm;

    fn family(&self) -> CalendricalFamily;

    fn periodic_adjustments(&self) -> CalendricalAdjustments;

    /// A lower bound on the length of any year; seeds the year search.
    fn min_days_in_year(&self) -> i32;

    /// A lower bound on the length of any month; seeds the month search.
    fn min_days_in_month(&self) -> i32;

    /// Years for which every conversion is exact and overflow-free.
    fn supported_years(&self) -> Range<i32> {
        Range::new_unchecked(DEFAULT_MIN_SUPPORTED_YEAR, DEFAULT_MAX_SUPPORTED_YEAR)
    }

    /// Years for which the kernel predicates are safe to call.
    fn supported_years_core(&self) -> Range<i32> {
        self.supported_years()
    }

    // Counting within a year or a month

    /// Sums the length of the months before `month`.
    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        (1..month).map(|m| self.count_days_in_month(year, m)).sum()
    }

    fn count_days_in_year_after_month(&self, year: i32, month: i32) -> i32 {
        self.count_days_in_year(year)
            - self.count_days_in_year_before_month(year, month)
            - self.count_days_in_month(year, month)
    }

    fn count_days_in_year_before(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_year_before_month(year, month) + day - 1
    }

    fn count_days_in_year_after(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_year(year) - self.get_day_of_year(year, month, day)
    }

    fn count_days_in_month_after(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_month(year, month) - day
    }

    fn get_day_of_year(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_year_before_month(year, month) + day
    }

    // Counting since the epoch

    fn count_days_since_epoch(&self, year: i32, month: i32, day: i32) -> i32 {
        self.get_start_of_year(year) + self.count_days_in_year_before_month(year, month) + day - 1
    }

    fn count_days_since_epoch_ordinal(&self, year: i32, day_of_year: i32) -> i32 {
        self.get_start_of_year(year) + day_of_year - 1
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        self.get_start_of_year_in_months(year) + month - 1
    }

    // Conversions from a count

    /// Finds the year containing `days_since_epoch`, returned with the day
    /// of the year.
    ///
    /// The search starts at `1 + days / min_days_in_year`, which lands on or
    /// very near the answer when `min_days_in_year` is close to the true
    /// year length, then walks year by year.
    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let mut year = 1 + days_since_epoch.div_euclid(self.min_days_in_year());
        let mut start_of_year = self.get_start_of_year(year);

        while days_since_epoch < start_of_year {
            year -= 1;
            start_of_year -= self.count_days_in_year(year);
        }
        loop {
            let days_in_year = self.count_days_in_year(year);
            if days_since_epoch < start_of_year + days_in_year {
                break;
            }
            start_of_year += days_in_year;
            year += 1;
        }

        (year, days_since_epoch - start_of_year + 1)
    }

    /// Finds the month containing the given day of the year, returned with
    /// the day of the month.
    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let months_in_year = self.count_months_in_year(year);
        let mut month = (1 + (day_of_year - 1) / self.min_days_in_month()).min(months_in_year);
        let mut days_before = self.count_days_in_year_before_month(year, month);

        while day_of_year <= days_before {
            month -= 1;
            days_before -= self.count_days_in_month(year, month);
        }
        loop {
            let days_in_month = self.count_days_in_month(year, month);
            if day_of_year <= days_before + days_in_month || month >= months_in_year {
                break;
            }
            days_before += days_in_month;
            month += 1;
        }

        (month, day_of_year - days_before)
    }

    fn get_date_parts(&self, days_since_epoch: i32) -> DateParts {
        let (year, day_of_year) = self.get_year(days_since_epoch);
        let (month, day) = self.get_month(year, day_of_year);
        DateParts::new(year, month, day)
    }

    fn get_ordinal_parts(&self, days_since_epoch: i32) -> OrdinalParts {
        let (year, day_of_year) = self.get_year(days_since_epoch);
        OrdinalParts::new(year, day_of_year)
    }

    fn get_date_parts_from_ordinal(&self, year: i32, day_of_year: i32) -> DateParts {
        let (month, day) = self.get_month(year, day_of_year);
        DateParts::new(year, month, day)
    }

    /// Finds the (year, month) at `months_since_epoch`.
    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        let seed = self.count_months_in_year(1);
        let mut year = 1 + months_since_epoch.div_euclid(seed);
        let mut start_of_year = self.get_start_of_year_in_months(year);

        while months_since_epoch < start_of_year {
            year -= 1;
            start_of_year -= self.count_months_in_year(year);
        }
        loop {
            let months_in_year = self.count_months_in_year(year);
            if months_since_epoch < start_of_year + months_in_year {
                break;
            }
            start_of_year += months_in_year;
            year += 1;
        }

        MonthParts::new(year, months_since_epoch - start_of_year + 1)
    }

    // Boundaries of years and months, in days or months since the epoch

    /// Accumulates year lengths from year 1 towards `year`.
    fn get_start_of_year(&self, year: i32) -> i32 {
        if year >= 1 {
            (1..year).map(|y| self.count_days_in_year(y)).sum()
        } else {
            -(year..1).map(|y| self.count_days_in_year(y)).sum::<i32>()
        }
    }

    fn get_end_of_year(&self, year: i32) -> i32 {
        self.get_start_of_year(year) + self.count_days_in_year(year) - 1
    }

    fn get_start_of_month(&self, year: i32, month: i32) -> i32 {
        self.get_start_of_year(year) + self.count_days_in_year_before_month(year, month)
    }

    fn get_end_of_month(&self, year: i32, month: i32) -> i32 {
        self.get_start_of_month(year, month) + self.count_days_in_month(year, month) - 1
    }

    /// Accumulates month counts from year 1 towards `year`.
    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        if year >= 1 {
            (1..year).map(|y| self.count_months_in_year(y)).sum()
        } else {
            -(year..1).map(|y| self.count_months_in_year(y)).sum::<i32>()
        }
    }

    fn get_end_of_year_in_months(&self, year: i32) -> i32 {
        self.get_start_of_year_in_months(year) + self.count_months_in_year(year) - 1
    }
}

/// Month arithmetic for schemas where every year has the same number of
/// months. All of it is O(1).
pub mod regular {
    use crate::parts::MonthParts;

    pub const fn count_months_since_epoch(months_in_year: i32, year: i32, month: i32) -> i32 {
        months_in_year * (year - 1) + month - 1
    }

    pub const fn get_month_parts(months_in_year: i32, months_since_epoch: i32) -> MonthParts {
        MonthParts::new(
            1 + months_since_epoch.div_euclid(months_in_year),
            1 + months_since_epoch.rem_euclid(months_in_year),
        )
    }

    pub const fn get_start_of_year_in_months(months_in_year: i32, year: i32) -> i32 {
        months_in_year * (year - 1)
    }

    pub const fn get_end_of_year_in_months(months_in_year: i32, year: i32) -> i32 {
        months_in_year * year - 1
    }

    /// Months between `(y1, m1)` and `(y2, m2)`.
    pub const fn count_months_between(months_in_year: i32, start: MonthParts, end: MonthParts) -> i32 {
        months_in_year * (end.year - start.year) + end.month - start.month
    }
}
