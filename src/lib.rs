//! Calendrical schemas and date arithmetic for arithmetical calendars.
//!
//! The crate is layered:
//!
//! - a [`CalendricalKernel`] states the basic facts of a calendar (leap
//!   years, month lengths);
//! - a [`CalendricalSchema`] derives every conversion between dates, ordinal
//!   dates, months and day counts from a kernel;
//! - a [`CalendricalSegment`] and a [`CalendarScope`] restrict a schema to a
//!   range of dates and validate untrusted input;
//! - [`CalendricalArithmetic`] and [`DateMath`] add days, months and years
//!   to the packed [`Yemoda`], [`Yedoy`] and [`Yemo`] values.
//!
//! ```
//! use calendrical::{CalendarScope, CalendricalArithmetic, DefaultArithmetic, GregorianSchema, MinMaxYearScope};
//!
//! let scope = MinMaxYearScope::standard(GregorianSchema).unwrap();
//! let date = scope.create_yemoda(2024, 2, 29).unwrap();
//! let arithmetic = DefaultArithmetic::from_scope(&scope);
//! assert_eq!(arithmetic.add_years(date, 1).unwrap().to_string(), "2025-02-28");
//! ```

mod adapter;
mod arithmetic;
mod consts;
mod error;
mod kernel;
mod math;
mod offset;
mod parts;
mod prelude;
mod prototype;
mod range;
mod schema;
mod schemas;
mod scope;
mod segment;
mod types;

pub use adapter::PartsAdapter;
pub use arithmetic::{CalendricalArithmetic, DefaultArithmetic, PlainArithmetic, RegularArithmetic};
pub use consts::{
    DEFAULT_MAX_SUPPORTED_YEAR, DEFAULT_MIN_SUPPORTED_YEAR, MAX_DAY, MAX_DAY_OF_YEAR, MAX_MONTH, MAX_YEAR, MIN_DAY,
    MIN_DAY_OF_YEAR, MIN_MONTH, MIN_YEAR, PROLEPTIC_MAX_YEAR, PROLEPTIC_MIN_YEAR, STANDARD_MAX_YEAR,
    STANDARD_MIN_YEAR,
};
pub use error::{CalendarError, CalendarResult, ErrorKind};
pub use kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
pub use math::{AdditionRule, AdditionRuleset, DateMath, ParseAdditionRuleError};
pub use offset::OffsettedSchema;
pub use parts::{DateParts, MonthParts, OrdinalParts};
pub use prototype::{PrototypalSchema, RegularSchemaPrototype, SchemaProfile};
pub use range::Range;
pub use schema::{CalendricalSchema, regular};
pub use schemas::{Coptic13Schema, Egyptian12Schema, GregorianSchema, JulianSchema, PaxKernel};
pub use scope::{BoundedBelowScope, CalendarScope, MinMaxYearScope};
pub use segment::{CalendricalSegment, CalendricalSegmentBuilder};
pub use types::{Yedoy, Yemo, Yemoda};

#[cfg(test)]
pub(crate) mod test_utils {
    use std::ops::RangeInclusive;

    use crate::{CalendricalSchema, DateParts, MonthParts, OrdinalParts, Yedoy, Yemo, Yemoda};

    pub fn ymd(year: i32, month: i32, day: i32) -> Yemoda {
        Yemoda::new(year, month, day).expect("failed to create test date")
    }

    pub fn ym(year: i32, month: i32) -> Yemo {
        Yemo::new(year, month).expect("failed to create test month")
    }

    pub fn ydoy(year: i32, day_of_year: i32) -> Yedoy {
        Yedoy::new(year, day_of_year).expect("failed to create test ordinal date")
    }

    /// Walks every day of `years` and checks that all conversions of the
    /// schema agree with each other and leave no gap between years.
    pub fn assert_schema_invariants<S: CalendricalSchema + ?Sized>(schema: &S, years: RangeInclusive<i32>) {
        let first = *years.start();
        let mut days = schema.get_start_of_year(first);
        let mut months = schema.get_start_of_year_in_months(first);

        if years.contains(&1) {
            assert_eq!(schema.count_days_since_epoch(1, 1, 1), 0, "epoch in days");
            assert_eq!(schema.count_months_since_epoch(1, 1), 0, "epoch in months");
        }

        for year in years {
            let days_in_year = schema.count_days_in_year(year);
            let months_in_year = schema.count_months_in_year(year);

            assert_eq!(schema.get_start_of_year(year), days, "start of {year}");
            assert_eq!(schema.get_end_of_year(year), days + days_in_year - 1, "end of {year}");
            assert_eq!(schema.get_year(days), (year, 1), "year at start of {year}");
            assert_eq!(schema.get_start_of_year_in_months(year), months, "start of {year} in months");
            assert_eq!(
                schema.get_end_of_year_in_months(year),
                months + months_in_year - 1,
                "end of {year} in months"
            );

            let mut day_of_year = 0;
            for month in 1..=months_in_year {
                let days_in_month = schema.count_days_in_month(year, month);
                let month_parts = MonthParts::new(year, month);

                assert_eq!(schema.count_months_since_epoch(year, month), months, "{month_parts}");
                assert_eq!(schema.get_month_parts(months), month_parts, "months since epoch {months}");
                assert_eq!(schema.count_days_in_year_before_month(year, month), day_of_year, "{month_parts}");
                assert_eq!(
                    schema.count_days_in_year_after_month(year, month),
                    days_in_year - day_of_year - days_in_month,
                    "{month_parts}"
                );
                assert_eq!(schema.get_start_of_month(year, month), days, "{month_parts}");
                assert_eq!(schema.get_end_of_month(year, month), days + days_in_month - 1, "{month_parts}");

                for day in 1..=days_in_month {
                    day_of_year += 1;
                    let date = DateParts::new(year, month, day);

                    assert_eq!(schema.count_days_since_epoch(year, month, day), days, "{date}");
                    assert_eq!(schema.count_days_since_epoch_ordinal(year, day_of_year), days, "{date}");
                    assert_eq!(schema.get_date_parts(days), date, "days since epoch {days}");
                    assert_eq!(
                        schema.get_ordinal_parts(days),
                        OrdinalParts::new(year, day_of_year),
                        "days since epoch {days}"
                    );
                    assert_eq!(schema.get_date_parts_from_ordinal(year, day_of_year), date, "{date}");
                    assert_eq!(schema.get_day_of_year(year, month, day), day_of_year, "{date}");
                    assert_eq!(schema.count_days_in_year_before(year, month, day), day_of_year - 1, "{date}");
                    assert_eq!(
                        schema.count_days_in_year_after(year, month, day),
                        days_in_year - day_of_year,
                        "{date}"
                    );
                    assert_eq!(
                        schema.count_days_in_month_after(year, month, day),
                        days_in_month - day,
                        "{date}"
                    );
                    days += 1;
                }
                months += 1;
            }

            assert_eq!(day_of_year, days_in_year, "length of {year}");
        }
    }
}
