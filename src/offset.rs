//! Renumbering the years of a schema.

use crate::kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
use crate::parts::{DateParts, MonthParts, OrdinalParts};
use crate::range::Range;
use crate::schema::CalendricalSchema;
use crate::{CalendarError, CalendarResult};

/// A schema whose year `y` is year `y - offset` of an inner schema.
///
/// The epoch moves with the years: year 1 of the offsetted schema still
/// starts at day 0 and month 0, so every epoch identity holds. Lengths of
/// years and months are those of the inner schema.
///
/// ```
/// use calendrical::{CalendricalKernel, CalendricalSchema, GregorianSchema, OffsettedSchema};
///
/// // Year 1 here is year 1970 of the Gregorian calendar
/// let schema = OffsettedSchema::new(GregorianSchema, -1969).unwrap();
/// assert_eq!(schema.count_days_since_epoch(1, 1, 1), 0);
/// assert!(schema.is_leap_year(31)); // 2000
/// ```
#[derive(Debug, Clone)]
pub struct OffsettedSchema<S> {
    inner: S,
    offset: i32,
    /// Days since the inner epoch at the start of our year 1
    days_shift: i32,
    /// Months since the inner epoch at the start of our year 1
    months_shift: i32,
    supported_years: Range<i32>,
    supported_years_core: Range<i32>,
}

impl<S: CalendricalSchema> OffsettedSchema<S> {
    /// # Errors
    /// Returns `InvalidArgument` if the shifted years do not fit in an
    /// `i32`, or if year 1 would fall outside the years the inner schema
    /// supports.
    pub fn new(inner: S, offset: i32) -> CalendarResult<Self> {
        let invalid = || CalendarError::invalid("offset", "the shifted years are out of range");

        let epoch_year = 1_i32.checked_sub(offset).ok_or_else(invalid)?;
        let inner_years = inner.supported_years();
        if !inner_years.contains(epoch_year) {
            return Err(invalid());
        }
        let min = inner_years.min().checked_add(offset).ok_or_else(invalid)?;
        let max = inner_years.max().checked_add(offset).ok_or_else(invalid)?;

        let core = inner.supported_years_core();
        let supported_years_core =
            Range::new_unchecked(core.min().saturating_add(offset), core.max().saturating_add(offset));

        Ok(Self {
            days_shift: inner.get_start_of_year(epoch_year),
            months_shift: inner.get_start_of_year_in_months(epoch_year),
            supported_years: Range::new_unchecked(min, max),
            supported_years_core,
            inner,
            offset,
        })
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    fn inner_year(&self, year: i32) -> i32 {
        year - self.offset
    }
}

impl<S: CalendricalSchema> CalendricalKernel for OffsettedSchema<S> {
    fn is_regular(&self) -> Option<i32> {
        self.inner.is_regular()
    }

    fn is_leap_year(&self, year: i32) -> bool {
        self.inner.is_leap_year(self.inner_year(year))
    }

    fn is_intercalary_month(&self, year: i32, month: i32) -> bool {
        self.inner.is_intercalary_month(self.inner_year(year), month)
    }

    fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool {
        self.inner.is_intercalary_day(self.inner_year(year), month, day)
    }

    fn is_supplementary_day(&self, year: i32, month: i32, day: i32) -> bool {
        self.inner.is_supplementary_day(self.inner_year(year), month, day)
    }

    fn count_months_in_year(&self, year: i32) -> i32 {
        self.inner.count_months_in_year(self.inner_year(year))
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        self.inner.count_days_in_year(self.inner_year(year))
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        self.inner.count_days_in_month(self.inner_year(year), month)
    }
}

impl<S: CalendricalSchema> CalendricalSchema for OffsettedSchema<S> {
    fn algorithm(&self) -> CalendricalAlgorithm {
        self.inner.algorithm()
    }

    fn family(&self) -> CalendricalFamily {
        self.inner.family()
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments {
        self.inner.periodic_adjustments()
    }

    fn min_days_in_year(&self) -> i32 {
        self.inner.min_days_in_year()
    }

    fn min_days_in_month(&self) -> i32 {
        self.inner.min_days_in_month()
    }

    fn supported_years(&self) -> Range<i32> {
        self.supported_years
    }

    fn supported_years_core(&self) -> Range<i32> {
        self.supported_years_core
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        self.inner.count_days_in_year_before_month(self.inner_year(year), month)
    }

    fn count_days_since_epoch(&self, year: i32, month: i32, day: i32) -> i32 {
        self.inner.count_days_since_epoch(self.inner_year(year), month, day) - self.days_shift
    }

    fn count_days_since_epoch_ordinal(&self, year: i32, day_of_year: i32) -> i32 {
        self.inner.count_days_since_epoch_ordinal(self.inner_year(year), day_of_year) - self.days_shift
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        self.inner.count_months_since_epoch(self.inner_year(year), month) - self.months_shift
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let (year, day_of_year) = self.inner.get_year(days_since_epoch + self.days_shift);
        (year + self.offset, day_of_year)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        self.inner.get_month(self.inner_year(year), day_of_year)
    }

    fn get_date_parts(&self, days_since_epoch: i32) -> DateParts {
        let parts = self.inner.get_date_parts(days_since_epoch + self.days_shift);
        DateParts::new(parts.year + self.offset, parts.month, parts.day)
    }

    fn get_ordinal_parts(&self, days_since_epoch: i32) -> OrdinalParts {
        let parts = self.inner.get_ordinal_parts(days_since_epoch + self.days_shift);
        OrdinalParts::new(parts.year + self.offset, parts.day_of_year)
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        let parts = self.inner.get_month_parts(months_since_epoch + self.months_shift);
        MonthParts::new(parts.year + self.offset, parts.month)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        self.inner.get_start_of_year(self.inner_year(year)) - self.days_shift
    }

    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        self.inner.get_start_of_year_in_months(self.inner_year(year)) - self.months_shift
    }
}
