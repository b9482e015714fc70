//! Calendar scopes: a schema restricted to a segment, with validation of
//! untrusted input.
//!
//! Schemas trust their arguments. Everything coming from outside the crate
//! goes through a scope first: the `check_*` methods answer yes or no, the
//! `validate_*` methods return an error naming the offending argument.

use crate::consts::{PROLEPTIC_MAX_YEAR, PROLEPTIC_MIN_YEAR, STANDARD_MAX_YEAR, STANDARD_MIN_YEAR};
use crate::kernel::CalendricalKernel;
use crate::parts::DateParts;
use crate::range::Range;
use crate::schema::CalendricalSchema;
use crate::segment::{CalendricalSegment, CalendricalSegmentBuilder};
use crate::types::{Yedoy, Yemo, Yemoda};
use crate::{CalendarError, CalendarResult};

fn rejected(err: CalendarError) -> CalendarError {
    #[cfg(feature = "log")]
    log::trace!("Rejected input: {err}");
    err
}

/// A schema bound to the segment of dates it may produce.
pub trait CalendarScope {
    type Schema: CalendricalSchema;

    fn schema(&self) -> &Self::Schema;

    fn segment(&self) -> &CalendricalSegment;

    fn min_year(&self) -> i32 {
        self.segment().supported_years().min()
    }

    fn max_year(&self) -> i32 {
        self.segment().supported_years().max()
    }

    // Counting, restricted to the segment

    /// # Errors
    /// Returns `YearOutOfRange` if the year is not part of the scope.
    fn count_months_in_year(&self, year: i32) -> CalendarResult<i32> {
        self.validate_year(year, None)?;
        Ok(self.schema().count_months_in_year(year))
    }

    /// # Errors
    /// Returns `YearOutOfRange` if the year is not part of the scope.
    fn count_days_in_year(&self, year: i32) -> CalendarResult<i32> {
        self.validate_year(year, None)?;
        Ok(self.schema().count_days_in_year(year))
    }

    /// # Errors
    /// Returns an argument error naming `year` or `month` if the month is
    /// not part of the scope.
    fn count_days_in_month(&self, year: i32, month: i32) -> CalendarResult<i32> {
        self.validate_year_month(year, month, None)?;
        Ok(self.schema().count_days_in_month(year, month))
    }

    // Soft checks

    fn check_year(&self, year: i32) -> bool {
        self.segment().supported_years().contains(year)
    }

    fn check_year_month(&self, year: i32, month: i32) -> bool;

    fn check_year_month_day(&self, year: i32, month: i32, day: i32) -> bool;

    fn check_ordinal(&self, year: i32, day_of_year: i32) -> bool;

    fn check_days_since_epoch(&self, days_since_epoch: i32) -> bool {
        self.segment().supported_days().contains(days_since_epoch)
    }

    fn check_months_since_epoch(&self, months_since_epoch: i32) -> bool {
        self.segment().supported_months().contains(months_since_epoch)
    }

    // Hard validation. `param` defaults to the name of the first argument.

    fn validate_year(&self, year: i32, param: Option<&'static str>) -> CalendarResult<()> {
        if self.check_year(year) {
            return Ok(());
        }
        Err(rejected(CalendarError::YearOutOfRange {
            param: param.unwrap_or("year"),
            year,
        }))
    }

    fn validate_year_month(&self, year: i32, month: i32, param: Option<&'static str>) -> CalendarResult<()> {
        self.validate_year(year, param)?;
        if self.check_year_month(year, month) {
            return Ok(());
        }
        Err(rejected(CalendarError::MonthOutOfRange {
            param: param.unwrap_or("month"),
            year,
            month,
        }))
    }

    fn validate_year_month_day(
        &self,
        year: i32,
        month: i32,
        day: i32,
        param: Option<&'static str>,
    ) -> CalendarResult<()> {
        self.validate_year_month(year, month, param)?;
        if self.check_year_month_day(year, month, day) {
            return Ok(());
        }
        Err(rejected(CalendarError::DayOutOfRange {
            param: param.unwrap_or("day"),
            year,
            month,
            day,
        }))
    }

    fn validate_ordinal(&self, year: i32, day_of_year: i32, param: Option<&'static str>) -> CalendarResult<()> {
        self.validate_year(year, param)?;
        if self.check_ordinal(year, day_of_year) {
            return Ok(());
        }
        Err(rejected(CalendarError::DayOfYearOutOfRange {
            param: param.unwrap_or("day_of_year"),
            year,
            day_of_year,
        }))
    }

    fn validate_days_since_epoch(&self, days_since_epoch: i32, param: Option<&'static str>) -> CalendarResult<()> {
        if self.check_days_since_epoch(days_since_epoch) {
            return Ok(());
        }
        Err(rejected(CalendarError::ValueOutOfRange {
            param: param.unwrap_or("days_since_epoch"),
            value: i64::from(days_since_epoch),
        }))
    }

    fn validate_months_since_epoch(&self, months_since_epoch: i32, param: Option<&'static str>) -> CalendarResult<()> {
        if self.check_months_since_epoch(months_since_epoch) {
            return Ok(());
        }
        Err(rejected(CalendarError::ValueOutOfRange {
            param: param.unwrap_or("months_since_epoch"),
            value: i64::from(months_since_epoch),
        }))
    }

    /// Fails with an overflow error, rather than an argument error, when a
    /// computed year leaves the segment.
    fn check_year_overflow(&self, year: i32) -> CalendarResult<()> {
        if self.check_year(year) {
            Ok(())
        } else {
            Err(CalendarError::overflow("year"))
        }
    }

    // Validated factories

    /// # Errors
    /// Returns an argument error if the date is not part of the scope.
    fn create_yemoda(&self, year: i32, month: i32, day: i32) -> CalendarResult<Yemoda> {
        self.validate_year_month_day(year, month, day, None)?;
        Yemoda::new(year, month, day)
    }

    /// # Errors
    /// Returns an argument error if the ordinal date is not part of the scope.
    fn create_yedoy(&self, year: i32, day_of_year: i32) -> CalendarResult<Yedoy> {
        self.validate_ordinal(year, day_of_year, None)?;
        Yedoy::new(year, day_of_year)
    }

    /// # Errors
    /// Returns an argument error if the month is not part of the scope.
    fn create_yemo(&self, year: i32, month: i32) -> CalendarResult<Yemo> {
        self.validate_year_month(year, month, None)?;
        Yemo::new(year, month)
    }

    fn try_create_yemoda(&self, year: i32, month: i32, day: i32) -> Option<Yemoda> {
        if self.check_year_month_day(year, month, day) {
            Yemoda::new(year, month, day).ok()
        } else {
            None
        }
    }

    fn try_create_yedoy(&self, year: i32, day_of_year: i32) -> Option<Yedoy> {
        if self.check_ordinal(year, day_of_year) {
            Yedoy::new(year, day_of_year).ok()
        } else {
            None
        }
    }

    /// # Errors
    /// Returns `ValueOutOfRange` if the day is not part of the scope.
    fn create_yemoda_from_days(&self, days_since_epoch: i32) -> CalendarResult<Yemoda> {
        self.validate_days_since_epoch(days_since_epoch, None)?;
        self.schema().get_date_parts(days_since_epoch).try_into()
    }

    /// # Errors
    /// Returns `ValueOutOfRange` if the month is not part of the scope.
    fn create_yemo_from_months(&self, months_since_epoch: i32) -> CalendarResult<Yemo> {
        self.validate_months_since_epoch(months_since_epoch, None)?;
        self.schema().get_month_parts(months_since_epoch).try_into()
    }
}

/// A scope made of whole years.
#[derive(Debug, Clone)]
pub struct MinMaxYearScope<S> {
    schema: S,
    segment: CalendricalSegment,
}

impl<S: CalendricalSchema> MinMaxYearScope<S> {
    /// # Errors
    /// Returns `YearOutOfRange` if the years are not supported by the schema.
    pub fn new(schema: S, supported_years: Range<i32>) -> CalendarResult<Self> {
        let segment = CalendricalSegment::create(&schema, supported_years)?;
        Ok(Self::from_parts(schema, segment))
    }

    /// Years 1 to 9999.
    ///
    /// # Errors
    /// Returns `YearOutOfRange` if the schema does not support them.
    pub fn standard(schema: S) -> CalendarResult<Self> {
        Self::new(schema, Range::new_unchecked(STANDARD_MIN_YEAR, STANDARD_MAX_YEAR))
    }

    /// Years -9998 to 9999.
    ///
    /// # Errors
    /// Returns `YearOutOfRange` if the schema does not support them.
    pub fn proleptic(schema: S) -> CalendarResult<Self> {
        Self::new(schema, Range::new_unchecked(PROLEPTIC_MIN_YEAR, PROLEPTIC_MAX_YEAR))
    }

    /// From `min_year` to the last year the schema supports.
    ///
    /// # Errors
    /// Returns `YearOutOfRange` if `min_year` is not supported.
    pub fn with_min_year(schema: S, min_year: i32) -> CalendarResult<Self> {
        let mut builder = CalendricalSegmentBuilder::new(&schema);
        builder.set_min_to_start_of_year(min_year)?;
        builder.set_max_to_end_of_max_supported_year()?;
        let segment = builder.build()?;
        Ok(Self::from_parts(schema, segment))
    }

    /// From the first year the schema supports to `max_year`.
    ///
    /// # Errors
    /// Returns `YearOutOfRange` if `max_year` is not supported.
    pub fn with_max_year(schema: S, max_year: i32) -> CalendarResult<Self> {
        let mut builder = CalendricalSegmentBuilder::new(&schema);
        builder.set_min_to_start_of_min_supported_year()?;
        builder.set_max_to_end_of_year(max_year)?;
        let segment = builder.build()?;
        Ok(Self::from_parts(schema, segment))
    }

    /// The segment must have been built for `schema`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the segment does not cover whole years.
    pub fn from_segment(schema: S, segment: CalendricalSegment) -> CalendarResult<Self> {
        debug_assert!(segment.is_built_for(&schema), "segment built for another schema");
        if !segment.is_complete() {
            return Err(CalendarError::invalid("segment", "the segment does not cover whole years"));
        }
        Ok(Self::from_parts(schema, segment))
    }

    fn from_parts(schema: S, segment: CalendricalSegment) -> Self {
        #[cfg(feature = "log")]
        log::debug!("Created scope over the years {}", segment.supported_years());
        Self { schema, segment }
    }
}

impl<S: CalendricalSchema> CalendarScope for MinMaxYearScope<S> {
    type Schema = S;

    fn schema(&self) -> &S {
        &self.schema
    }

    fn segment(&self) -> &CalendricalSegment {
        &self.segment
    }

    fn check_year_month(&self, year: i32, month: i32) -> bool {
        self.check_year(year) && (1..=self.schema.count_months_in_year(year)).contains(&month)
    }

    fn check_year_month_day(&self, year: i32, month: i32, day: i32) -> bool {
        self.check_year_month(year, month) && (1..=self.schema.count_days_in_month(year, month)).contains(&day)
    }

    fn check_ordinal(&self, year: i32, day_of_year: i32) -> bool {
        self.check_year(year) && (1..=self.schema.count_days_in_year(year)).contains(&day_of_year)
    }
}

/// A scope starting in the middle of a year and running to the end of a
/// year, such as the Gregorian calendar from its adoption on 1582-10-15.
///
/// Every count and check special-cases the first year and the first month.
#[derive(Debug, Clone)]
pub struct BoundedBelowScope<S> {
    schema: S,
    segment: CalendricalSegment,
    min_date: DateParts,
    min_day_of_year: i32,
}

impl<S: CalendricalSchema> BoundedBelowScope<S> {
    /// From `min_date` to the end of `max_year`.
    ///
    /// # Errors
    /// Returns an argument error naming `year`, `month` or `day` if the
    /// minimum is not a valid date, or `year` if `max_year` is not supported.
    pub fn new(schema: S, min_date: DateParts, max_year: i32) -> CalendarResult<Self> {
        let mut builder = CalendricalSegmentBuilder::new(&schema);
        builder.set_min_date(min_date.year, min_date.month, min_date.day)?;
        builder.set_max_to_end_of_year(max_year)?;
        let segment = builder.build()?;
        Ok(Self::from_parts(schema, segment, min_date))
    }

    /// From `min_date` to the end of the last year the schema supports.
    ///
    /// # Errors
    /// Returns an argument error if the minimum is not a valid date.
    pub fn start_at(schema: S, min_date: DateParts) -> CalendarResult<Self> {
        let mut builder = CalendricalSegmentBuilder::new(&schema);
        builder.set_min_date(min_date.year, min_date.month, min_date.day)?;
        builder.set_max_to_end_of_max_supported_year()?;
        let segment = builder.build()?;
        Ok(Self::from_parts(schema, segment, min_date))
    }

    fn from_parts(schema: S, segment: CalendricalSegment, min_date: DateParts) -> Self {
        let min_day_of_year = segment.min_max_ordinal_parts().min().day_of_year();
        #[cfg(feature = "log")]
        log::debug!("Created scope from {min_date} to the end of {}", segment.supported_years().max());
        Self {
            schema,
            segment,
            min_date,
            min_day_of_year,
        }
    }

    pub fn min_date(&self) -> DateParts {
        self.min_date
    }

    pub fn count_days_in_first_year(&self) -> i32 {
        self.schema.count_days_in_year(self.min_date.year) - self.min_day_of_year + 1
    }

    pub fn count_months_in_first_year(&self) -> i32 {
        self.schema.count_months_in_year(self.min_date.year) - self.min_date.month + 1
    }

    pub fn count_days_in_first_month(&self) -> i32 {
        self.schema.count_days_in_month(self.min_date.year, self.min_date.month) - self.min_date.day + 1
    }

    fn is_first_month(&self, year: i32, month: i32) -> bool {
        year == self.min_date.year && month == self.min_date.month
    }
}

impl<S: CalendricalSchema> CalendarScope for BoundedBelowScope<S> {
    type Schema = S;

    fn schema(&self) -> &S {
        &self.schema
    }

    fn segment(&self) -> &CalendricalSegment {
        &self.segment
    }

    fn count_months_in_year(&self, year: i32) -> CalendarResult<i32> {
        self.validate_year(year, None)?;
        if year == self.min_date.year {
            Ok(self.count_months_in_first_year())
        } else {
            Ok(self.schema.count_months_in_year(year))
        }
    }

    fn count_days_in_year(&self, year: i32) -> CalendarResult<i32> {
        self.validate_year(year, None)?;
        if year == self.min_date.year {
            Ok(self.count_days_in_first_year())
        } else {
            Ok(self.schema.count_days_in_year(year))
        }
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> CalendarResult<i32> {
        self.validate_year_month(year, month, None)?;
        if self.is_first_month(year, month) {
            Ok(self.count_days_in_first_month())
        } else {
            Ok(self.schema.count_days_in_month(year, month))
        }
    }

    fn check_year_month(&self, year: i32, month: i32) -> bool {
        if !self.check_year(year) {
            return false;
        }
        let min_month = if year == self.min_date.year { self.min_date.month } else { 1 };
        (min_month..=self.schema.count_months_in_year(year)).contains(&month)
    }

    fn check_year_month_day(&self, year: i32, month: i32, day: i32) -> bool {
        if !self.check_year_month(year, month) {
            return false;
        }
        let min_day = if self.is_first_month(year, month) { self.min_date.day } else { 1 };
        (min_day..=self.schema.count_days_in_month(year, month)).contains(&day)
    }

    fn check_ordinal(&self, year: i32, day_of_year: i32) -> bool {
        if !self.check_year(year) {
            return false;
        }
        let min_day_of_year = if year == self.min_date.year { self.min_day_of_year } else { 1 };
        (min_day_of_year..=self.schema.count_days_in_year(year)).contains(&day_of_year)
    }
}
