//! Calendrical segments: the contiguous span of dates a calendar covers.
//!
//! A segment stores its two endpoints in every representation (days and
//! months since the epoch, packed date, ordinal date and month), computed
//! once by [`CalendricalSegmentBuilder`].

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::range::Range;
use crate::schema::CalendricalSchema;
use crate::types::{Yedoy, Yemo, Yemoda};
use crate::{CalendarError, CalendarResult};

/// A contiguous span of dates of one schema, with both endpoints inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendricalSegment {
    supported_days: Range<i32>,
    supported_months: Range<i32>,
    supported_years: Range<i32>,
    min_max_date_parts: Range<Yemoda>,
    min_max_ordinal_parts: Range<Yedoy>,
    min_max_month_parts: Range<Yemo>,
    is_complete: bool,
}

impl CalendricalSegment {
    /// The segment covering the whole of `supported_years`.
    ///
    /// # Errors
    /// Returns `YearOutOfRange` if the years are not supported by the schema
    /// or do not fit in the packed codecs.
    pub fn create<S: CalendricalSchema + ?Sized>(schema: &S, supported_years: Range<i32>) -> CalendarResult<Self> {
        let mut builder = CalendricalSegmentBuilder::new(schema);
        builder.set_supported_years(supported_years)?;
        builder.build()
    }

    /// The segment covering every year supported by both the schema and the
    /// packed codecs.
    ///
    /// # Errors
    /// Returns `YearOutOfRange` if there is no such year.
    pub fn create_maximal<S: CalendricalSchema + ?Sized>(schema: &S) -> CalendarResult<Self> {
        let mut builder = CalendricalSegmentBuilder::new(schema);
        builder.set_min_to_start_of_min_supported_year()?;
        builder.set_max_to_end_of_max_supported_year()?;
        builder.build()
    }

    /// Days since the epoch of the first and last days
    pub fn supported_days(&self) -> Range<i32> {
        self.supported_days
    }

    /// Months since the epoch of the first and last months
    pub fn supported_months(&self) -> Range<i32> {
        self.supported_months
    }

    pub fn supported_years(&self) -> Range<i32> {
        self.supported_years
    }

    pub fn min_max_date_parts(&self) -> Range<Yemoda> {
        self.min_max_date_parts
    }

    pub fn min_max_ordinal_parts(&self) -> Range<Yedoy> {
        self.min_max_ordinal_parts
    }

    pub fn min_max_month_parts(&self) -> Range<Yemo> {
        self.min_max_month_parts
    }

    /// Returns `true` when the segment starts on the first day of a year
    /// and ends on the last day of a year.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Returns `true` when both endpoints are valid dates of `schema` and
    /// land on the same day and month counts as recorded.
    pub(crate) fn is_built_for<S: CalendricalSchema + ?Sized>(&self, schema: &S) -> bool {
        let matches = |ymd: Yemoda, days: i32, months: i32| {
            let (y, m, d) = ymd.deconstruct();
            m <= schema.count_months_in_year(y)
                && d <= schema.count_days_in_month(y, m)
                && schema.count_days_since_epoch(y, m, d) == days
                && schema.count_months_since_epoch(y, m) == months
        };
        let (min, max) = self.min_max_date_parts.endpoints();
        matches(min, self.supported_days.min(), self.supported_months.min())
            && matches(max, self.supported_days.max(), self.supported_months.max())
    }
}

/// One end of a segment, in every representation.
#[derive(Debug, Clone, Copy)]
struct Endpoint {
    days_since_epoch: i32,
    months_since_epoch: i32,
    date_parts: Yemoda,
    ordinal_parts: Yedoy,
    month_parts: Yemo,
    at_start_of_year: bool,
    at_end_of_year: bool,
}

/// Builds a [`CalendricalSegment`] for a schema.
///
/// Both endpoints must be set before [`build`](Self::build). Every setter
/// validates its input against the schema and the packed codecs.
///
/// ```
/// use calendrical::{CalendricalSegmentBuilder, GregorianSchema};
///
/// let mut builder = CalendricalSegmentBuilder::new(&GregorianSchema);
/// builder.set_min_date(1582, 10, 15).unwrap();
/// builder.set_max_to_end_of_year(9999).unwrap();
/// let segment = builder.build().unwrap();
/// assert!(!segment.is_complete());
/// ```
#[derive(Debug)]
pub struct CalendricalSegmentBuilder<'a, S: ?Sized> {
    schema: &'a S,
    /// Years of the schema that fit in the codecs
    supported_years: Option<Range<i32>>,
    min: Option<Endpoint>,
    max: Option<Endpoint>,
}

impl<'a, S: CalendricalSchema + ?Sized> CalendricalSegmentBuilder<'a, S> {
    pub fn new(schema: &'a S) -> Self {
        let codec_years = Range::new_unchecked(MIN_YEAR, MAX_YEAR);
        Self {
            schema,
            supported_years: schema.supported_years().intersect(&codec_years),
            min: None,
            max: None,
        }
    }

    pub fn has_min(&self) -> bool {
        self.min.is_some()
    }

    pub fn has_max(&self) -> bool {
        self.max.is_some()
    }

    pub fn set_min_to_start_of_year(&mut self, year: i32) -> CalendarResult<()> {
        self.validate_year(year, "year")?;
        self.min = Some(self.endpoint(year, 1, 1)?);
        Ok(())
    }

    pub fn set_max_to_end_of_year(&mut self, year: i32) -> CalendarResult<()> {
        self.validate_year(year, "year")?;
        let month = self.schema.count_months_in_year(year);
        let day = self.schema.count_days_in_month(year, month);
        self.max = Some(self.endpoint(year, month, day)?);
        Ok(())
    }

    pub fn set_min_to_start_of_min_supported_year(&mut self) -> CalendarResult<()> {
        let years = self.supported_years()?;
        self.set_min_to_start_of_year(years.min())
    }

    pub fn set_max_to_end_of_max_supported_year(&mut self) -> CalendarResult<()> {
        let years = self.supported_years()?;
        self.set_max_to_end_of_year(years.max())
    }

    /// Sets both endpoints to cover whole years.
    pub fn set_supported_years(&mut self, years: Range<i32>) -> CalendarResult<()> {
        self.set_min_to_start_of_year(years.min())?;
        self.set_max_to_end_of_year(years.max())
    }

    pub fn set_min_date(&mut self, year: i32, month: i32, day: i32) -> CalendarResult<()> {
        self.validate_date(year, month, day)?;
        self.min = Some(self.endpoint(year, month, day)?);
        Ok(())
    }

    pub fn set_max_date(&mut self, year: i32, month: i32, day: i32) -> CalendarResult<()> {
        self.validate_date(year, month, day)?;
        self.max = Some(self.endpoint(year, month, day)?);
        Ok(())
    }

    pub fn set_min_ordinal(&mut self, year: i32, day_of_year: i32) -> CalendarResult<()> {
        self.validate_ordinal(year, day_of_year)?;
        let (month, day) = self.schema.get_month(year, day_of_year);
        self.min = Some(self.endpoint(year, month, day)?);
        Ok(())
    }

    pub fn set_max_ordinal(&mut self, year: i32, day_of_year: i32) -> CalendarResult<()> {
        self.validate_ordinal(year, day_of_year)?;
        let (month, day) = self.schema.get_month(year, day_of_year);
        self.max = Some(self.endpoint(year, month, day)?);
        Ok(())
    }

    /// # Errors
    /// Returns `InvalidArgument` if an endpoint is missing and
    /// `InvalidRange` if the minimum comes after the maximum.
    pub fn build(&self) -> CalendarResult<CalendricalSegment> {
        let min = self.min.ok_or(CalendarError::invalid("min", "the start of the segment is not set"))?;
        let max = self.max.ok_or(CalendarError::invalid("max", "the end of the segment is not set"))?;

        let segment = CalendricalSegment {
            supported_days: Range::new(min.days_since_epoch, max.days_since_epoch)?,
            supported_months: Range::new_unchecked(min.months_since_epoch, max.months_since_epoch),
            supported_years: Range::new_unchecked(min.date_parts.year(), max.date_parts.year()),
            min_max_date_parts: Range::new_unchecked(min.date_parts, max.date_parts),
            min_max_ordinal_parts: Range::new_unchecked(min.ordinal_parts, max.ordinal_parts),
            min_max_month_parts: Range::new_unchecked(min.month_parts, max.month_parts),
            is_complete: min.at_start_of_year && max.at_end_of_year,
        };

        #[cfg(feature = "log")]
        log::debug!(
            "Built segment {} (days {}, complete: {})",
            segment.min_max_date_parts,
            segment.supported_days,
            segment.is_complete
        );

        Ok(segment)
    }

    fn supported_years(&self) -> CalendarResult<Range<i32>> {
        self.supported_years.ok_or(CalendarError::YearOutOfRange {
            param: "year",
            year: self.schema.supported_years().min(),
        })
    }

    fn validate_year(&self, year: i32, param: &'static str) -> CalendarResult<()> {
        if self.supported_years()?.contains(year) {
            Ok(())
        } else {
            Err(CalendarError::YearOutOfRange { param, year })
        }
    }

    fn validate_date(&self, year: i32, month: i32, day: i32) -> CalendarResult<()> {
        self.validate_year(year, "year")?;
        if !(1..=self.schema.count_months_in_year(year)).contains(&month) {
            return Err(CalendarError::MonthOutOfRange {
                param: "month",
                year,
                month,
            });
        }
        if !(1..=self.schema.count_days_in_month(year, month)).contains(&day) {
            return Err(CalendarError::DayOutOfRange {
                param: "day",
                year,
                month,
                day,
            });
        }
        Ok(())
    }

    fn validate_ordinal(&self, year: i32, day_of_year: i32) -> CalendarResult<()> {
        self.validate_year(year, "year")?;
        if !(1..=self.schema.count_days_in_year(year)).contains(&day_of_year) {
            return Err(CalendarError::DayOfYearOutOfRange {
                param: "day_of_year",
                year,
                day_of_year,
            });
        }
        Ok(())
    }

    /// Computes every representation of a date already validated against
    /// the schema.
    fn endpoint(&self, year: i32, month: i32, day: i32) -> CalendarResult<Endpoint> {
        let schema = self.schema;
        let day_of_year = schema.get_day_of_year(year, month, day);
        let months_in_year = schema.count_months_in_year(year);

        Ok(Endpoint {
            days_since_epoch: schema.count_days_since_epoch(year, month, day),
            months_since_epoch: schema.count_months_since_epoch(year, month),
            date_parts: Yemoda::new(year, month, day)?,
            ordinal_parts: Yedoy::new(year, day_of_year)?,
            month_parts: Yemo::new(year, month)?,
            at_start_of_year: month == 1 && day == 1,
            at_end_of_year: month == months_in_year && day == schema.count_days_in_month(year, month),
        })
    }
}
