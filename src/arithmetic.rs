//! Calendrical arithmetic on packed dates, within a segment.
//!
//! Every operation assumes its inputs are valid dates of the segment and
//! fails with an overflow error when the result would leave it. Adding
//! years or months may land on a day that does not exist; the `_with_roundoff`
//! variants truncate to the last valid day and report how many days (or
//! months) were cut off, which [`crate::DateMath`] uses to apply an
//! addition rule.

use crate::kernel::CalendricalKernel;
use crate::parts::MonthParts;
use crate::schema::{CalendricalSchema, regular};
use crate::scope::CalendarScope;
use crate::segment::CalendricalSegment;
use crate::types::{Yedoy, Yemo, Yemoda};
use crate::{CalendarError, CalendarResult};

fn overflow(operation: &'static str) -> CalendarError {
    #[cfg(feature = "log")]
    log::trace!("{operation} overflowed the segment");
    CalendarError::overflow(operation)
}

/// Arithmetic on [`Yemoda`], [`Yedoy`] and [`Yemo`] values of a segment.
pub trait CalendricalArithmetic {
    type Schema: CalendricalSchema;

    fn schema(&self) -> &Self::Schema;

    fn segment(&self) -> &CalendricalSegment;

    /// Adds years, truncating the day to the end of the target month (or
    /// the target year when it lacks the month). Returns the number of days
    /// cut off.
    fn add_years_with_roundoff(&self, ymd: Yemoda, years: i32) -> CalendarResult<(Yemoda, i32)>;

    /// Adds months, truncating the day to the end of the target month.
    /// Returns the number of days cut off.
    fn add_months_with_roundoff(&self, ymd: Yemoda, months: i32) -> CalendarResult<(Yemoda, i32)>;

    /// Adds years to a month, truncating to the last month of the target
    /// year. Returns the number of months cut off.
    fn add_years_to_month_with_roundoff(&self, ym: Yemo, years: i32) -> CalendarResult<(Yemo, i32)>;

    fn add_months_to_month(&self, ym: Yemo, months: i32) -> CalendarResult<Yemo>;

    fn count_months_between(&self, start: Yemo, end: Yemo) -> i32;

    fn add_years(&self, ymd: Yemoda, years: i32) -> CalendarResult<Yemoda> {
        Ok(self.add_years_with_roundoff(ymd, years)?.0)
    }

    fn add_months(&self, ymd: Yemoda, months: i32) -> CalendarResult<Yemoda> {
        Ok(self.add_months_with_roundoff(ymd, months)?.0)
    }

    fn add_years_to_month(&self, ym: Yemo, years: i32) -> CalendarResult<Yemo> {
        Ok(self.add_years_to_month_with_roundoff(ym, years)?.0)
    }

    fn add_days(&self, ymd: Yemoda, days: i32) -> CalendarResult<Yemoda> {
        let (y, m, d) = ymd.deconstruct();
        let schema = self.schema();

        // Fast path: the result stays within the month
        if let Some(day) = d.checked_add(days) {
            if (1..=schema.count_days_in_month(y, m)).contains(&day) {
                return self.check_date(Yemoda::new_unchecked(y, m, day), "add_days");
            }
        }

        let days_since_epoch = schema
            .count_days_since_epoch(y, m, d)
            .checked_add(days)
            .filter(|&n| self.segment().supported_days().contains(n))
            .ok_or_else(|| overflow("add_days"))?;
        schema.get_date_parts(days_since_epoch).try_into()
    }

    fn next_day(&self, ymd: Yemoda) -> CalendarResult<Yemoda> {
        if ymd >= self.segment().min_max_date_parts().max() {
            return Err(overflow("next_day"));
        }
        let (y, m, d) = ymd.deconstruct();
        let schema = self.schema();
        Ok(if d < schema.count_days_in_month(y, m) {
            Yemoda::new_unchecked(y, m, d + 1)
        } else if m < schema.count_months_in_year(y) {
            Yemoda::new_unchecked(y, m + 1, 1)
        } else {
            Yemoda::new_unchecked(y + 1, 1, 1)
        })
    }

    fn previous_day(&self, ymd: Yemoda) -> CalendarResult<Yemoda> {
        if ymd <= self.segment().min_max_date_parts().min() {
            return Err(overflow("previous_day"));
        }
        let (y, m, d) = ymd.deconstruct();
        let schema = self.schema();
        Ok(if d > 1 {
            Yemoda::new_unchecked(y, m, d - 1)
        } else if m > 1 {
            Yemoda::new_unchecked(y, m - 1, schema.count_days_in_month(y, m - 1))
        } else {
            let months_in_year = schema.count_months_in_year(y - 1);
            Yemoda::new_unchecked(
                y - 1,
                months_in_year,
                schema.count_days_in_month(y - 1, months_in_year),
            )
        })
    }

    fn count_days_between(&self, start: Yemoda, end: Yemoda) -> i32 {
        let schema = self.schema();
        let (y0, m0, d0) = start.deconstruct();
        let (y1, m1, d1) = end.deconstruct();
        if y0 == y1 && m0 == m1 {
            return d1 - d0;
        }
        schema.count_days_since_epoch(y1, m1, d1) - schema.count_days_since_epoch(y0, m0, d0)
    }

    // Ordinal dates

    fn add_days_to_ordinal(&self, ydoy: Yedoy, days: i32) -> CalendarResult<Yedoy> {
        let (y, doy) = ydoy.deconstruct();
        let schema = self.schema();

        if let Some(day_of_year) = doy.checked_add(days) {
            if (1..=schema.count_days_in_year(y)).contains(&day_of_year) {
                return self.check_ordinal(Yedoy::new_unchecked(y, day_of_year), "add_days");
            }
        }

        let days_since_epoch = schema
            .count_days_since_epoch_ordinal(y, doy)
            .checked_add(days)
            .filter(|&n| self.segment().supported_days().contains(n))
            .ok_or_else(|| overflow("add_days"))?;
        schema.get_ordinal_parts(days_since_epoch).try_into()
    }

    fn next_ordinal(&self, ydoy: Yedoy) -> CalendarResult<Yedoy> {
        if ydoy >= self.segment().min_max_ordinal_parts().max() {
            return Err(overflow("next_day"));
        }
        let (y, doy) = ydoy.deconstruct();
        Ok(if doy < self.schema().count_days_in_year(y) {
            Yedoy::new_unchecked(y, doy + 1)
        } else {
            Yedoy::new_unchecked(y + 1, 1)
        })
    }

    fn previous_ordinal(&self, ydoy: Yedoy) -> CalendarResult<Yedoy> {
        if ydoy <= self.segment().min_max_ordinal_parts().min() {
            return Err(overflow("previous_day"));
        }
        let (y, doy) = ydoy.deconstruct();
        Ok(if doy > 1 {
            Yedoy::new_unchecked(y, doy - 1)
        } else {
            Yedoy::new_unchecked(y - 1, self.schema().count_days_in_year(y - 1))
        })
    }

    /// Adds years to an ordinal date, truncating the day of the year to the
    /// length of the target year. Returns the number of days cut off.
    fn add_years_to_ordinal_with_roundoff(&self, ydoy: Yedoy, years: i32) -> CalendarResult<(Yedoy, i32)> {
        let (y, doy) = ydoy.deconstruct();
        let year = self.target_year(y, years, "add_years")?;
        let days_in_year = self.schema().count_days_in_year(year);
        let result = Yedoy::new_unchecked(year, doy.min(days_in_year));
        Ok((self.check_ordinal(result, "add_years")?, (doy - days_in_year).max(0)))
    }

    fn add_years_to_ordinal(&self, ydoy: Yedoy, years: i32) -> CalendarResult<Yedoy> {
        Ok(self.add_years_to_ordinal_with_roundoff(ydoy, years)?.0)
    }

    fn count_days_between_ordinals(&self, start: Yedoy, end: Yedoy) -> i32 {
        let (y0, doy0) = start.deconstruct();
        let (y1, doy1) = end.deconstruct();
        if y0 == y1 {
            return doy1 - doy0;
        }
        let schema = self.schema();
        schema.count_days_since_epoch_ordinal(y1, doy1) - schema.count_days_since_epoch_ordinal(y0, doy0)
    }

    // Months

    fn next_month(&self, ym: Yemo) -> CalendarResult<Yemo> {
        self.add_months_to_month(ym, 1)
    }

    fn previous_month(&self, ym: Yemo) -> CalendarResult<Yemo> {
        self.add_months_to_month(ym, -1)
    }

    // Helpers for implementations

    /// `year + years`, if it stays within the segment.
    fn target_year(&self, year: i32, years: i32, operation: &'static str) -> CalendarResult<i32> {
        year.checked_add(years)
            .filter(|&y| self.segment().supported_years().contains(y))
            .ok_or_else(|| overflow(operation))
    }

    /// Fails when a date valid in the schema falls outside a partial first
    /// or last year of the segment.
    fn check_date(&self, ymd: Yemoda, operation: &'static str) -> CalendarResult<Yemoda> {
        if self.segment().min_max_date_parts().contains(ymd) {
            Ok(ymd)
        } else {
            Err(overflow(operation))
        }
    }

    fn check_ordinal(&self, ydoy: Yedoy, operation: &'static str) -> CalendarResult<Yedoy> {
        if self.segment().min_max_ordinal_parts().contains(ydoy) {
            Ok(ydoy)
        } else {
            Err(overflow(operation))
        }
    }

    fn check_month(&self, ym: Yemo, operation: &'static str) -> CalendarResult<Yemo> {
        if self.segment().min_max_month_parts().contains(ym) {
            Ok(ym)
        } else {
            Err(overflow(operation))
        }
    }
}

/// Arithmetic for any schema, including those whose years have a varying
/// number of months.
#[derive(Debug, Clone)]
pub struct PlainArithmetic<S> {
    schema: S,
    segment: CalendricalSegment,
}

impl<S: CalendricalSchema> PlainArithmetic<S> {
    /// The segment must have been built for `schema`.
    pub fn new(schema: S, segment: CalendricalSegment) -> Self {
        debug_assert!(segment.is_built_for(&schema), "segment built for another schema");
        Self { schema, segment }
    }
}

impl<S: CalendricalSchema> CalendricalArithmetic for PlainArithmetic<S> {
    type Schema = S;

    fn schema(&self) -> &S {
        &self.schema
    }

    fn segment(&self) -> &CalendricalSegment {
        &self.segment
    }

    fn add_years_with_roundoff(&self, ymd: Yemoda, years: i32) -> CalendarResult<(Yemoda, i32)> {
        let (y, m, d) = ymd.deconstruct();
        let year = self.target_year(y, years, "add_years")?;
        let months_in_year = self.schema.count_months_in_year(year);

        let (result, roundoff) = if m <= months_in_year {
            let days_in_month = self.schema.count_days_in_month(year, m);
            (Yemoda::new_unchecked(year, m, d.min(days_in_month)), (d - days_in_month).max(0))
        } else {
            // The target year lacks the month: stop at its last day and
            // count the days of the source year past its first months
            let days_in_month = self.schema.count_days_in_month(year, months_in_year);
            let roundoff = self.schema.get_day_of_year(y, m, d)
                - self.schema.count_days_in_year_before_month(y, months_in_year + 1);
            (Yemoda::new_unchecked(year, months_in_year, days_in_month), roundoff)
        };

        Ok((self.check_date(result, "add_years")?, roundoff))
    }

    fn add_months_with_roundoff(&self, ymd: Yemoda, months: i32) -> CalendarResult<(Yemoda, i32)> {
        let (y, m, d) = ymd.deconstruct();
        let months_since_epoch = self
            .schema
            .count_months_since_epoch(y, m)
            .checked_add(months)
            .filter(|&n| self.segment.supported_months().contains(n))
            .ok_or_else(|| overflow("add_months"))?;

        let MonthParts { year, month } = self.schema.get_month_parts(months_since_epoch);
        let days_in_month = self.schema.count_days_in_month(year, month);
        let result = Yemoda::new_unchecked(year, month, d.min(days_in_month));
        Ok((self.check_date(result, "add_months")?, (d - days_in_month).max(0)))
    }

    fn add_years_to_month_with_roundoff(&self, ym: Yemo, years: i32) -> CalendarResult<(Yemo, i32)> {
        let (y, m) = ym.deconstruct();
        let year = self.target_year(y, years, "add_years")?;
        let months_in_year = self.schema.count_months_in_year(year);
        let result = Yemo::new_unchecked(year, m.min(months_in_year));
        Ok((self.check_month(result, "add_years")?, (m - months_in_year).max(0)))
    }

    fn add_months_to_month(&self, ym: Yemo, months: i32) -> CalendarResult<Yemo> {
        let (y, m) = ym.deconstruct();
        let months_since_epoch = self
            .schema
            .count_months_since_epoch(y, m)
            .checked_add(months)
            .filter(|&n| self.segment.supported_months().contains(n))
            .ok_or_else(|| overflow("add_months"))?;
        let MonthParts { year, month } = self.schema.get_month_parts(months_since_epoch);
        Ok(Yemo::new_unchecked(year, month))
    }

    fn count_months_between(&self, start: Yemo, end: Yemo) -> i32 {
        let (y0, m0) = start.deconstruct();
        let (y1, m1) = end.deconstruct();
        self.schema.count_months_since_epoch(y1, m1) - self.schema.count_months_since_epoch(y0, m0)
    }
}

/// Arithmetic for schemas whose years all have the same number of months.
/// Month operations are O(1) and never round off.
#[derive(Debug, Clone)]
pub struct RegularArithmetic<S> {
    schema: S,
    segment: CalendricalSegment,
    months_in_year: i32,
}

impl<S: CalendricalSchema> RegularArithmetic<S> {
    /// The segment must have been built for `schema`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the schema is not regular.
    pub fn new(schema: S, segment: CalendricalSegment) -> CalendarResult<Self> {
        let months_in_year = schema
            .is_regular()
            .ok_or(CalendarError::invalid("schema", "the number of months in a year varies"))?;
        debug_assert!(segment.is_built_for(&schema), "segment built for another schema");
        Ok(Self {
            schema,
            segment,
            months_in_year,
        })
    }

    pub fn months_in_year(&self) -> i32 {
        self.months_in_year
    }

    /// Splits `month - 1 + months` into whole years and a month.
    fn shift_month(&self, year: i32, month: i32, months: i32, operation: &'static str) -> CalendarResult<(i32, i32)> {
        let zero_based = (month - 1).checked_add(months).ok_or_else(|| overflow(operation))?;
        let year = self.target_year(year, zero_based.div_euclid(self.months_in_year), operation)?;
        Ok((year, 1 + zero_based.rem_euclid(self.months_in_year)))
    }
}

impl<S: CalendricalSchema> CalendricalArithmetic for RegularArithmetic<S> {
    type Schema = S;

    fn schema(&self) -> &S {
        &self.schema
    }

    fn segment(&self) -> &CalendricalSegment {
        &self.segment
    }

    fn add_years_with_roundoff(&self, ymd: Yemoda, years: i32) -> CalendarResult<(Yemoda, i32)> {
        let (y, m, d) = ymd.deconstruct();
        let year = self.target_year(y, years, "add_years")?;
        let days_in_month = self.schema.count_days_in_month(year, m);
        let result = Yemoda::new_unchecked(year, m, d.min(days_in_month));
        Ok((self.check_date(result, "add_years")?, (d - days_in_month).max(0)))
    }

    fn add_months_with_roundoff(&self, ymd: Yemoda, months: i32) -> CalendarResult<(Yemoda, i32)> {
        let (y, m, d) = ymd.deconstruct();
        let (year, month) = self.shift_month(y, m, months, "add_months")?;
        let days_in_month = self.schema.count_days_in_month(year, month);
        let result = Yemoda::new_unchecked(year, month, d.min(days_in_month));
        Ok((self.check_date(result, "add_months")?, (d - days_in_month).max(0)))
    }

    fn add_years_to_month_with_roundoff(&self, ym: Yemo, years: i32) -> CalendarResult<(Yemo, i32)> {
        let (y, m) = ym.deconstruct();
        let year = self.target_year(y, years, "add_years")?;
        Ok((self.check_month(Yemo::new_unchecked(year, m), "add_years")?, 0))
    }

    fn add_months_to_month(&self, ym: Yemo, months: i32) -> CalendarResult<Yemo> {
        let (y, m) = ym.deconstruct();
        let (year, month) = self.shift_month(y, m, months, "add_months")?;
        self.check_month(Yemo::new_unchecked(year, month), "add_months")
    }

    fn count_months_between(&self, start: Yemo, end: Yemo) -> i32 {
        regular::count_months_between(self.months_in_year, start.into(), end.into())
    }
}

/// Regular arithmetic when the schema allows it, plain arithmetic
/// otherwise.
#[derive(Debug, Clone)]
pub enum DefaultArithmetic<S> {
    Regular(RegularArithmetic<S>),
    Plain(PlainArithmetic<S>),
}

impl<S: CalendricalSchema> DefaultArithmetic<S> {
    /// The segment must have been built for `schema`.
    pub fn create(schema: S, segment: CalendricalSegment) -> Self {
        debug_assert!(segment.is_built_for(&schema), "segment built for another schema");
        match schema.is_regular() {
            Some(months_in_year) => Self::Regular(RegularArithmetic {
                schema,
                segment,
                months_in_year,
            }),
            None => Self::Plain(PlainArithmetic::new(schema, segment)),
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, Self::Regular(_))
    }
}

impl<S: CalendricalSchema + Clone> DefaultArithmetic<S> {
    pub fn from_scope<C: CalendarScope<Schema = S>>(scope: &C) -> Self {
        Self::create(scope.schema().clone(), scope.segment().clone())
    }
}

macro_rules! dispatch {
    ($self:ident, $arith:ident => $body:expr) => {
        match $self {
            DefaultArithmetic::Regular($arith) => $body,
            DefaultArithmetic::Plain($arith) => $body,
        }
    };
}

impl<S: CalendricalSchema> CalendricalArithmetic for DefaultArithmetic<S> {
    type Schema = S;

    fn schema(&self) -> &S {
        dispatch!(self, a => a.schema())
    }

    fn segment(&self) -> &CalendricalSegment {
        dispatch!(self, a => a.segment())
    }

    fn add_years_with_roundoff(&self, ymd: Yemoda, years: i32) -> CalendarResult<(Yemoda, i32)> {
        dispatch!(self, a => a.add_years_with_roundoff(ymd, years))
    }

    fn add_months_with_roundoff(&self, ymd: Yemoda, months: i32) -> CalendarResult<(Yemoda, i32)> {
        dispatch!(self, a => a.add_months_with_roundoff(ymd, months))
    }

    fn add_years_to_month_with_roundoff(&self, ym: Yemo, years: i32) -> CalendarResult<(Yemo, i32)> {
        dispatch!(self, a => a.add_years_to_month_with_roundoff(ym, years))
    }

    fn add_months_to_month(&self, ym: Yemo, months: i32) -> CalendarResult<Yemo> {
        dispatch!(self, a => a.add_months_to_month(ym, months))
    }

    fn count_months_between(&self, start: Yemo, end: Yemo) -> i32 {
        dispatch!(self, a => a.count_months_between(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::DateParts;
    use crate::prototype::PrototypalSchema;
    use crate::range::Range;
    use crate::schemas::{Coptic13Schema, GregorianSchema, PaxKernel};
    use crate::scope::{BoundedBelowScope, MinMaxYearScope};
    use crate::test_utils::{ydoy, ym, ymd};

    fn gregorian() -> DefaultArithmetic<GregorianSchema> {
        let scope = MinMaxYearScope::standard(GregorianSchema).expect("failed to create standard scope");
        DefaultArithmetic::from_scope(&scope)
    }

    fn pax() -> DefaultArithmetic<PrototypalSchema<PaxKernel>> {
        let schema = PaxKernel::schema().expect("failed to build Pax schema");
        let scope = MinMaxYearScope::new(schema, Range::new_unchecked(1990, 2020)).expect("failed to create scope");
        DefaultArithmetic::from_scope(&scope)
    }

    #[test]
    fn test_default_picks_by_regularity() {
        assert!(gregorian().is_regular());
        assert!(!pax().is_regular());
        let err = RegularArithmetic::new(
            PaxKernel::schema().expect("failed to build Pax schema"),
            gregorian().segment().clone(),
        )
        .expect_err("the Pax schema is not regular");
        assert_eq!(err.param_name(), Some("schema"));
    }

    #[test]
    fn test_add_days_cases() {
        struct TestCase {
            start:    Yemoda,
            days:     i32,
            expected: Option<Yemoda>,
        }

        let arith = gregorian();
        let cases = [
            TestCase { start: ymd(2024, 2, 28), days: 1, expected: Some(ymd(2024, 2, 29)) },
            TestCase { start: ymd(2023, 2, 28), days: 1, expected: Some(ymd(2023, 3, 1)) },
            TestCase { start: ymd(2023, 12, 31), days: 1, expected: Some(ymd(2024, 1, 1)) },
            TestCase { start: ymd(2024, 3, 1), days: -1, expected: Some(ymd(2024, 2, 29)) },
            TestCase { start: ymd(2000, 1, 1), days: 366, expected: Some(ymd(2001, 1, 1)) },
            TestCase { start: ymd(2000, 1, 1), days: -730_119, expected: Some(ymd(1, 1, 1)) },
            TestCase { start: ymd(2000, 1, 1), days: -730_120, expected: None },
            TestCase { start: ymd(9999, 12, 31), days: 1, expected: None },
            TestCase { start: ymd(1, 1, 1), days: i32::MAX, expected: None },
            TestCase { start: ymd(9999, 12, 1), days: i32::MIN, expected: None },
        ];

        for case in &cases {
            let result = arith.add_days(case.start, case.days);
            match case.expected {
                Some(expected) => assert_eq!(result, Ok(expected), "{} + {}", case.start, case.days),
                None => assert!(
                    result.is_err_and(|e| e.is_overflow()),
                    "{} + {} should overflow",
                    case.start,
                    case.days
                ),
            }
        }
    }

    #[test]
    fn test_add_days_matches_next_and_previous() {
        let arith = gregorian();
        let mut date = ymd(1999, 12, 1);
        for _ in 0..500 {
            let next = arith.next_day(date).expect("failed to get next day");
            assert_eq!(arith.add_days(date, 1), Ok(next));
            assert_eq!(arith.previous_day(next), Ok(date));
            assert_eq!(arith.count_days_between(date, next), 1);
            date = next;
        }
        assert_eq!(date, ymd(2001, 4, 14));
    }

    #[test]
    fn test_next_and_previous_at_boundaries() {
        let arith = gregorian();
        assert!(arith.next_day(ymd(9999, 12, 31)).is_err_and(|e| e.is_overflow()));
        assert!(arith.previous_day(ymd(1, 1, 1)).is_err_and(|e| e.is_overflow()));
        assert_eq!(arith.previous_day(ymd(2, 1, 1)), Ok(ymd(1, 12, 31)));
        assert!(arith.next_ordinal(ydoy(9999, 365)).is_err());
        assert!(arith.previous_ordinal(ydoy(1, 1)).is_err());
    }

    #[test]
    fn test_partial_segment_is_enforced() {
        let scope = BoundedBelowScope::new(GregorianSchema, DateParts::new(1582, 10, 15), 9999)
            .expect("failed to create bounded scope");
        let arith = DefaultArithmetic::from_scope(&scope);

        assert!(arith.previous_day(ymd(1582, 10, 15)).is_err());
        assert!(arith.add_days(ymd(1582, 10, 20), -6).is_err());
        assert_eq!(arith.add_days(ymd(1582, 10, 20), -5), Ok(ymd(1582, 10, 15)));
        assert!(arith.add_years(ymd(1583, 1, 1), -1).is_err());
        assert!(arith.add_months(ymd(1582, 11, 10), -1).is_err());
        assert_eq!(arith.add_months(ymd(1582, 11, 20), -1), Ok(ymd(1582, 10, 20)));
        assert!(arith.add_months_to_month(ym(1582, 11), -1).is_ok());
        assert!(arith.add_months_to_month(ym(1582, 10), -1).is_err());
        assert!(arith.add_days_to_ordinal(ydoy(1582, 300), -13).is_err());
    }

    #[test]
    fn test_add_years_with_roundoff_cases() {
        struct TestCase {
            start:    Yemoda,
            years:    i32,
            expected: Yemoda,
            roundoff: i32,
        }

        let arith = gregorian();
        let cases = [
            TestCase { start: ymd(2024, 2, 29), years: 1, expected: ymd(2025, 2, 28), roundoff: 1 },
            TestCase { start: ymd(2024, 2, 29), years: 4, expected: ymd(2028, 2, 29), roundoff: 0 },
            TestCase { start: ymd(2024, 2, 29), years: -124, expected: ymd(1900, 2, 28), roundoff: 1 },
            TestCase { start: ymd(2023, 7, 14), years: 10, expected: ymd(2033, 7, 14), roundoff: 0 },
        ];

        for case in &cases {
            let result = arith.add_years_with_roundoff(case.start, case.years);
            assert_eq!(result, Ok((case.expected, case.roundoff)), "{} + {}y", case.start, case.years);
        }
        assert!(arith.add_years(ymd(2024, 1, 1), 8000).is_err_and(|e| e.is_overflow()));
        assert!(arith.add_years(ymd(2024, 1, 1), i32::MAX).is_err_and(|e| e.is_overflow()));
    }

    #[test]
    fn test_add_months_with_roundoff_cases() {
        struct TestCase {
            start:    Yemoda,
            months:   i32,
            expected: Yemoda,
            roundoff: i32,
        }

        let arith = gregorian();
        let cases = [
            TestCase { start: ymd(2023, 1, 31), months: 1, expected: ymd(2023, 2, 28), roundoff: 3 },
            TestCase { start: ymd(2024, 1, 31), months: 1, expected: ymd(2024, 2, 29), roundoff: 2 },
            TestCase { start: ymd(2023, 3, 31), months: 1, expected: ymd(2023, 4, 30), roundoff: 1 },
            TestCase { start: ymd(2023, 11, 15), months: 3, expected: ymd(2024, 2, 15), roundoff: 0 },
            TestCase { start: ymd(2023, 3, 31), months: -13, expected: ymd(2022, 2, 28), roundoff: 3 },
            TestCase { start: ymd(2023, 5, 10), months: -5, expected: ymd(2022, 12, 10), roundoff: 0 },
        ];

        for case in &cases {
            let result = arith.add_months_with_roundoff(case.start, case.months);
            assert_eq!(result, Ok((case.expected, case.roundoff)), "{} + {}m", case.start, case.months);
        }
        assert!(arith.add_months(ymd(9999, 12, 1), 1).is_err());
        assert!(arith.add_months(ymd(1, 1, 1), -1).is_err());
        assert!(arith.add_months(ymd(1, 1, 1), i32::MAX).is_err());
    }

    #[test]
    fn test_overflow_at_end_of_segment() {
        struct TestCase {
            result:      fn(&DefaultArithmetic<GregorianSchema>) -> CalendarResult<Yemoda>,
            expected:    Option<Yemoda>,
            description: &'static str,
        }

        let arith = gregorian();
        let cases = [
            TestCase {
                result:      |a| a.add_years(ymd(9998, 6, 15), 1),
                expected:    Some(ymd(9999, 6, 15)),
                description: "year before the last year",
            },
            TestCase {
                result:      |a| a.add_years(ymd(9999, 6, 15), 1),
                expected:    None,
                description: "year after the last year",
            },
            TestCase {
                result:      |a| a.add_years(ymd(9998, 12, 31), 1),
                expected:    Some(ymd(9999, 12, 31)),
                description: "last day of the segment by years",
            },
            TestCase {
                result:      |a| a.add_months(ymd(9999, 11, 30), 1),
                expected:    Some(ymd(9999, 12, 30)),
                description: "last month of the segment",
            },
            TestCase {
                result:      |a| a.add_months(ymd(9999, 12, 1), 1),
                expected:    None,
                description: "month after the last month",
            },
            TestCase {
                result:      |a| a.add_months(ymd(9998, 12, 31), 12),
                expected:    Some(ymd(9999, 12, 31)),
                description: "last day of the segment by months",
            },
        ];

        for case in &cases {
            let result = (case.result)(&arith);
            match case.expected {
                Some(expected) => assert_eq!(result, Ok(expected), "{}", case.description),
                None => assert!(result.is_err_and(|e| e.is_overflow()), "{}", case.description),
            }
        }

        assert_eq!(arith.add_months_to_month(ym(9999, 11), 1), Ok(ym(9999, 12)));
        assert!(arith.add_months_to_month(ym(9999, 12), 1).is_err_and(|e| e.is_overflow()));
        assert!(arith.add_years_to_month(ym(9999, 12), 1).is_err_and(|e| e.is_overflow()));
    }

    #[test]
    fn test_exact_rule_at_end_of_segment() {
        use crate::math::{AdditionRule, AdditionRuleset, DateMath};

        struct TestCase {
            result:      fn(&DateMath<DefaultArithmetic<GregorianSchema>>) -> CalendarResult<Yemoda>,
            expected:    Option<Yemoda>,
            description: &'static str,
        }

        let math = DateMath::new(gregorian(), AdditionRuleset::uniform(AdditionRule::Exact));
        let cases = [
            TestCase {
                result:      |m| m.add_years(ymd(9996, 2, 29), 3),
                expected:    Some(ymd(9999, 3, 1)),
                description: "leap day moved into the last year",
            },
            TestCase {
                result:      |m| m.add_months(ymd(9999, 10, 31), 1),
                expected:    Some(ymd(9999, 12, 1)),
                description: "roundoff carried into the last month",
            },
            TestCase {
                result:      |m| m.add_years(ymd(9999, 12, 31), 1),
                expected:    None,
                description: "year after the maximum date",
            },
            TestCase {
                result:      |m| m.add_months(ymd(9999, 12, 31), 1),
                expected:    None,
                description: "month after the maximum date",
            },
        ];

        for case in &cases {
            let result = (case.result)(&math);
            match case.expected {
                Some(expected) => assert_eq!(result, Ok(expected), "{}", case.description),
                None => assert!(result.is_err_and(|e| e.is_overflow()), "{}", case.description),
            }
        }
    }

    #[test]
    fn test_plain_and_regular_agree() {
        let scope = MinMaxYearScope::standard(Coptic13Schema).expect("failed to create standard scope");
        let regular = RegularArithmetic::new(Coptic13Schema, scope.segment().clone())
            .expect("failed to create regular arithmetic");
        let plain = PlainArithmetic::new(Coptic13Schema, scope.segment().clone());

        for (start, n) in [(ymd(3, 13, 6), 1), (ymd(100, 5, 30), -37), (ymd(7, 13, 6), 26), (ymd(1, 1, 1), 1)] {
            assert_eq!(regular.add_years_with_roundoff(start, n), plain.add_years_with_roundoff(start, n));
            assert_eq!(regular.add_months_with_roundoff(start, n), plain.add_months_with_roundoff(start, n));
            let month = start.yemo();
            assert_eq!(regular.add_months_to_month(month, n), plain.add_months_to_month(month, n));
            assert_eq!(
                regular.add_years_to_month_with_roundoff(month, n),
                plain.add_years_to_month_with_roundoff(month, n)
            );
            if let Ok(end) = plain.add_months_to_month(month, n) {
                assert_eq!(regular.count_months_between(month, end), n);
                assert_eq!(plain.count_months_between(month, end), n);
            }
        }
    }

    #[test]
    fn test_irregular_years() {
        let arith = pax();

        // 2006 is leap: Pax (13) has 7 days, December is month 14
        assert_eq!(arith.add_years_with_roundoff(ymd(2006, 13, 5), 1), Ok((ymd(2007, 13, 5), 0)));
        assert_eq!(arith.add_years_with_roundoff(ymd(2006, 14, 10), 1), Ok((ymd(2007, 13, 28), 10)));
        assert_eq!(arith.add_years_with_roundoff(ymd(2005, 13, 28), 1), Ok((ymd(2006, 13, 7), 21)));
        assert_eq!(arith.add_years_with_roundoff(ymd(2006, 14, 28), -1), Ok((ymd(2005, 13, 28), 28)));

        assert_eq!(arith.add_years_to_month_with_roundoff(ym(2006, 14), 1), Ok((ym(2007, 13), 1)));
        assert_eq!(arith.add_years_to_month_with_roundoff(ym(2005, 13), 1), Ok((ym(2006, 13), 0)));

        assert_eq!(arith.add_months(ymd(2006, 12, 28), 2), Ok(ymd(2006, 14, 28)));
        assert_eq!(arith.add_months(ymd(2006, 14, 1), 1), Ok(ymd(2007, 1, 1)));
        assert_eq!(arith.add_months_with_roundoff(ymd(2006, 12, 28), 1), Ok((ymd(2006, 13, 7), 21)));
        assert_eq!(arith.count_months_between(ym(2005, 13), ym(2007, 1)), 15);
        assert_eq!(arith.next_month(ym(2006, 14)), Ok(ym(2007, 1)));
        assert_eq!(arith.previous_month(ym(2007, 1)), Ok(ym(2006, 14)));
    }

    #[test]
    fn test_ordinal_arithmetic() {
        let arith = gregorian();
        assert_eq!(arith.add_days_to_ordinal(ydoy(2023, 365), 1), Ok(ydoy(2024, 1)));
        assert_eq!(arith.add_days_to_ordinal(ydoy(2024, 1), -1), Ok(ydoy(2023, 365)));
        assert_eq!(arith.add_days_to_ordinal(ydoy(2024, 100), 266), Ok(ydoy(2024, 366)));
        assert_eq!(arith.next_ordinal(ydoy(2024, 366)), Ok(ydoy(2025, 1)));
        assert_eq!(arith.previous_ordinal(ydoy(2025, 1)), Ok(ydoy(2024, 366)));
        assert_eq!(arith.count_days_between_ordinals(ydoy(2023, 360), ydoy(2024, 5)), 10);

        assert_eq!(arith.add_years_to_ordinal_with_roundoff(ydoy(2024, 366), 1), Ok((ydoy(2025, 365), 1)));
        assert_eq!(arith.add_years_to_ordinal(ydoy(2023, 365), 1), Ok(ydoy(2024, 365)));
        assert!(arith.add_years_to_ordinal(ydoy(2023, 1), -2023).is_err());
    }

    #[test]
    fn test_count_days_between() {
        let arith = gregorian();
        assert_eq!(arith.count_days_between(ymd(2024, 2, 1), ymd(2024, 2, 29)), 28);
        assert_eq!(arith.count_days_between(ymd(2024, 3, 1), ymd(2023, 3, 1)), -366);
        assert_eq!(arith.count_days_between(ymd(1, 1, 1), ymd(9999, 12, 31)), 3_652_058);
    }
}
