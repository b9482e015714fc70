//! Conversions to parts at notable positions (start or end of a year or a
//! month), for any schema.

use crate::parts::{DateParts, MonthParts, OrdinalParts};
use crate::schema::CalendricalSchema;
use crate::types::{Yedoy, Yemo, Yemoda};
use crate::CalendarResult;

/// Borrows a schema to build [`DateParts`], [`OrdinalParts`] and
/// [`MonthParts`], and their packed forms.
///
/// No input is validated. The packed variants fail only when the result
/// does not fit in the codec.
#[derive(Debug, Clone, Copy)]
pub struct PartsAdapter<'a, S: ?Sized> {
    schema: &'a S,
}

impl<'a, S: CalendricalSchema + ?Sized> PartsAdapter<'a, S> {
    pub const fn new(schema: &'a S) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'a S {
        self.schema
    }

    pub fn get_date_parts(&self, days_since_epoch: i32) -> DateParts {
        self.schema.get_date_parts(days_since_epoch)
    }

    pub fn get_ordinal_parts(&self, days_since_epoch: i32) -> OrdinalParts {
        self.schema.get_ordinal_parts(days_since_epoch)
    }

    pub fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        self.schema.get_month_parts(months_since_epoch)
    }

    /// Converts an ordinal date to a date
    pub fn get_date_parts_from_ordinal(&self, year: i32, day_of_year: i32) -> DateParts {
        self.schema.get_date_parts_from_ordinal(year, day_of_year)
    }

    /// Converts a date to an ordinal date
    pub fn get_ordinal_parts_from_date(&self, year: i32, month: i32, day: i32) -> OrdinalParts {
        OrdinalParts::new(year, self.schema.get_day_of_year(year, month, day))
    }

    pub fn get_date_parts_at_start_of_year(&self, year: i32) -> DateParts {
        DateParts::at_start_of_year(year)
    }

    pub fn get_date_parts_at_end_of_year(&self, year: i32) -> DateParts {
        let month = self.schema.count_months_in_year(year);
        DateParts::new(year, month, self.schema.count_days_in_month(year, month))
    }

    pub fn get_ordinal_parts_at_start_of_year(&self, year: i32) -> OrdinalParts {
        OrdinalParts::at_start_of_year(year)
    }

    pub fn get_ordinal_parts_at_end_of_year(&self, year: i32) -> OrdinalParts {
        OrdinalParts::new(year, self.schema.count_days_in_year(year))
    }

    pub fn get_month_parts_at_start_of_year(&self, year: i32) -> MonthParts {
        MonthParts::at_start_of_year(year)
    }

    pub fn get_month_parts_at_end_of_year(&self, year: i32) -> MonthParts {
        MonthParts::new(year, self.schema.count_months_in_year(year))
    }

    pub fn get_date_parts_at_start_of_month(&self, year: i32, month: i32) -> DateParts {
        DateParts::new(year, month, 1)
    }

    pub fn get_date_parts_at_end_of_month(&self, year: i32, month: i32) -> DateParts {
        DateParts::new(year, month, self.schema.count_days_in_month(year, month))
    }

    /// # Errors
    /// Returns an argument error if the date does not fit in a `Yemoda`.
    pub fn get_yemoda(&self, days_since_epoch: i32) -> CalendarResult<Yemoda> {
        self.get_date_parts(days_since_epoch).try_into()
    }

    /// # Errors
    /// Returns an argument error if the date does not fit in a `Yedoy`.
    pub fn get_yedoy(&self, days_since_epoch: i32) -> CalendarResult<Yedoy> {
        self.get_ordinal_parts(days_since_epoch).try_into()
    }

    /// # Errors
    /// Returns an argument error if the month does not fit in a `Yemo`.
    pub fn get_yemo(&self, months_since_epoch: i32) -> CalendarResult<Yemo> {
        self.get_month_parts(months_since_epoch).try_into()
    }

    /// # Errors
    /// Returns an argument error if the date does not fit in a `Yemoda`.
    pub fn get_yemoda_at_end_of_year(&self, year: i32) -> CalendarResult<Yemoda> {
        self.get_date_parts_at_end_of_year(year).try_into()
    }

    /// # Errors
    /// Returns an argument error if the date does not fit in a `Yedoy`.
    pub fn get_yedoy_at_end_of_year(&self, year: i32) -> CalendarResult<Yedoy> {
        self.get_ordinal_parts_at_end_of_year(year).try_into()
    }
}
