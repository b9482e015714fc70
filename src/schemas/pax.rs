use crate::kernel::{CalendricalAdjustments, CalendricalFamily, CalendricalKernel};
use crate::prototype::{PrototypalSchema, SchemaProfile};
use crate::range::Range;
use crate::CalendarResult;

/// The Pax calendar: thirteen months of 28 days, plus a leap week named Pax
/// inserted as month 13 of some years, making December month 14.
///
/// There is no closed formula for the number of months before a year, so
/// the schema is a [`PrototypalSchema`] over this kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PaxKernel;

impl PaxKernel {
    const DAYS_IN_MONTH: i32 = 28;
    const DAYS_IN_PAX_MONTH: i32 = 7;
    const PAX_MONTH: i32 = 13;

    /// A year is a leap year when its last two digits are a multiple of six
    /// or are 99, except for century years divisible by 400.
    pub const fn is_leap(year: i32) -> bool {
        let yy = year.rem_euclid(100);
        (yy % 6 == 0 || yy == 99) && !(yy == 0 && year.rem_euclid(400) == 0)
    }

    pub fn profile() -> SchemaProfile {
        SchemaProfile::new(364, Self::DAYS_IN_PAX_MONTH)
            .with_family(CalendricalFamily::Solar)
            .with_periodic_adjustments(CalendricalAdjustments::Months)
    }

    /// The Pax schema over the default supported years.
    ///
    /// # Errors
    /// Never fails for the built-in profile; the `Result` comes from
    /// [`PrototypalSchema::new`].
    pub fn schema() -> CalendarResult<PrototypalSchema<Self>> {
        PrototypalSchema::new(Self, Self::profile())
    }

    /// The Pax schema over the given years.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the profile does not fit the kernel.
    pub fn schema_with_years(supported_years: Range<i32>) -> CalendarResult<PrototypalSchema<Self>> {
        PrototypalSchema::new(Self, Self::profile().with_supported_years(supported_years))
    }
}

impl CalendricalKernel for PaxKernel {
    fn is_regular(&self) -> Option<i32> {
        None
    }

    fn is_leap_year(&self, year: i32) -> bool {
        Self::is_leap(year)
    }

    fn is_intercalary_month(&self, year: i32, month: i32) -> bool {
        month == Self::PAX_MONTH && Self::is_leap(year)
    }

    fn is_intercalary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, year: i32) -> i32 {
        if Self::is_leap(year) { 14 } else { 13 }
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        if Self::is_leap(year) { 371 } else { 364 }
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if self.is_intercalary_month(year, month) {
            Self::DAYS_IN_PAX_MONTH
        } else {
            Self::DAYS_IN_MONTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CalendricalSchema;
    use crate::test_utils::assert_schema_invariants;

    #[test]
    fn test_is_leap_cases() {
        struct TestCase {
            year:     i32,
            expected: bool,
        }

        let cases = [
            TestCase { year: 2006, expected: true },
            TestCase { year: 2012, expected: true },
            TestCase { year: 2013, expected: false },
            TestCase { year: 1999, expected: true },
            TestCase { year: 1900, expected: true },
            TestCase { year: 2000, expected: false },
            TestCase { year: 0, expected: false },
            TestCase { year: -94, expected: true },
            TestCase { year: -1, expected: true },
        ];

        for case in &cases {
            assert_eq!(PaxKernel.is_leap_year(case.year), case.expected, "year {}", case.year);
        }
    }

    #[test]
    fn test_month_structure() {
        assert_eq!(PaxKernel.count_months_in_year(2006), 14);
        assert_eq!(PaxKernel.count_days_in_month(2006, 13), 7);
        assert_eq!(PaxKernel.count_days_in_month(2006, 14), 28);
        assert_eq!(PaxKernel.count_months_in_year(2007), 13);
        assert_eq!(PaxKernel.count_days_in_month(2007, 13), 28);
        assert!(PaxKernel.is_intercalary_month(2006, 13));
        assert!(!PaxKernel.is_intercalary_month(2007, 13));
    }

    #[test]
    fn test_schema_months_since_epoch() {
        let schema = PaxKernel::schema().expect("failed to build Pax schema");
        // Years 1..=5 are common, year 6 is leap
        assert_eq!(schema.get_start_of_year_in_months(6), 65);
        assert_eq!(schema.get_start_of_year_in_months(7), 79);
        assert_eq!(schema.get_month_parts(78).deconstruct(), (6, 14));
        assert_eq!(schema.get_month_parts(79).deconstruct(), (7, 1));
        // Year 0 is common, year -1 ends in 99
        assert_eq!(schema.get_start_of_year_in_months(0), -13);
        assert_eq!(schema.get_start_of_year_in_months(-1), -27);
        assert_eq!(schema.get_month_parts(-14).deconstruct(), (-1, 14));
    }

    #[test]
    fn test_invariants() {
        let schema = PaxKernel::schema().expect("failed to build Pax schema");
        assert_schema_invariants(&schema, -13..=13);
        assert_schema_invariants(&schema, 1995..=2001);
    }
}
