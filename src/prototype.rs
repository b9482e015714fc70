//! Schemas built from nothing but a kernel.
//!
//! [`PrototypalSchema`] runs the generic algorithms of
//! [`CalendricalSchema`] unchanged. It is the reference every closed-form
//! schema is tested against, and the only way to get a schema for a
//! calendar without closed formulas. [`RegularSchemaPrototype`] adds the
//! O(1) month arithmetic available when every year has the same number of
//! months.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_SUPPORTED_YEAR, DEFAULT_MIN_SUPPORTED_YEAR};
use crate::kernel::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalKernel};
use crate::parts::MonthParts;
use crate::range::Range;
use crate::schema::{CalendricalSchema, regular};
use crate::{CalendarError, CalendarResult};

/// The properties a kernel does not know about itself.
///
/// ```
/// use calendrical::{CalendricalFamily, SchemaProfile};
///
/// let profile = SchemaProfile::new(364, 7).with_family(CalendricalFamily::Solar);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProfile {
    pub min_days_in_year: i32,
    pub min_days_in_month: i32,
    pub algorithm: CalendricalAlgorithm,
    pub family: CalendricalFamily,
    pub periodic_adjustments: CalendricalAdjustments,
    pub supported_years: Range<i32>,
}

impl SchemaProfile {
    /// An arithmetical profile with no periodic adjustments and the default
    /// supported years.
    pub fn new(min_days_in_year: i32, min_days_in_month: i32) -> Self {
        Self {
            min_days_in_year,
            min_days_in_month,
            algorithm: CalendricalAlgorithm::Arithmetical,
            family: CalendricalFamily::Other,
            periodic_adjustments: CalendricalAdjustments::None,
            supported_years: Range::new_unchecked(DEFAULT_MIN_SUPPORTED_YEAR, DEFAULT_MAX_SUPPORTED_YEAR),
        }
    }

    pub fn with_algorithm(mut self, algorithm: CalendricalAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_family(mut self, family: CalendricalFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_periodic_adjustments(mut self, adjustments: CalendricalAdjustments) -> Self {
        self.periodic_adjustments = adjustments;
        self
    }

    pub fn with_supported_years(mut self, supported_years: Range<i32>) -> Self {
        self.supported_years = supported_years;
        self
    }

    /// Checks the profile on its own, without a kernel.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a minimum length is not positive or a
    /// month could be longer than a year.
    pub fn validate(&self) -> CalendarResult<()> {
        if self.min_days_in_year <= 0 {
            return Err(CalendarError::invalid("min_days_in_year", "must be positive"));
        }
        if self.min_days_in_month <= 0 {
            return Err(CalendarError::invalid("min_days_in_month", "must be positive"));
        }
        if self.min_days_in_month > self.min_days_in_year {
            return Err(CalendarError::invalid(
                "min_days_in_month",
                "must not exceed the minimum number of days in a year",
            ));
        }
        Ok(())
    }

    /// Checks the profile against the kernel it will drive. The minimum
    /// lengths seed the searches, so they must really be minimums.
    fn validate_for<K: CalendricalKernel>(&self, kernel: &K) -> CalendarResult<()> {
        self.validate()?;
        let year = self.supported_years.min().max(1).min(self.supported_years.max());
        if kernel.count_days_in_year(year) < self.min_days_in_year {
            return Err(CalendarError::invalid(
                "min_days_in_year",
                "is greater than the length of a year of the kernel",
            ));
        }
        let shortest_month = (1..=kernel.count_months_in_year(year))
            .map(|m| kernel.count_days_in_month(year, m))
            .min()
            .unwrap_or(0);
        if shortest_month < self.min_days_in_month {
            return Err(CalendarError::invalid(
                "min_days_in_month",
                "is greater than the length of a month of the kernel",
            ));
        }
        Ok(())
    }
}

/// A schema driven entirely by the generic algorithms.
///
/// Year lookups are O(|year|), so this is meant for calendars without
/// closed formulas and as a reference implementation in tests.
#[derive(Debug, Clone)]
pub struct PrototypalSchema<K> {
    kernel: K,
    profile: SchemaProfile,
}

impl<K: CalendricalKernel> PrototypalSchema<K> {
    /// # Errors
    /// Returns `InvalidArgument` if the profile does not fit the kernel.
    pub fn new(kernel: K, profile: SchemaProfile) -> CalendarResult<Self> {
        profile.validate_for(&kernel)?;
        Ok(Self { kernel, profile })
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn profile(&self) -> &SchemaProfile {
        &self.profile
    }
}

/// Same as [`PrototypalSchema`], plus O(1) month arithmetic for kernels
/// whose years all have the same number of months.
#[derive(Debug, Clone)]
pub struct RegularSchemaPrototype<K> {
    kernel: K,
    profile: SchemaProfile,
    months_in_year: i32,
}

impl<K: CalendricalKernel> RegularSchemaPrototype<K> {
    /// # Errors
    /// Returns `InvalidArgument` if the kernel is not regular or the profile
    /// does not fit it.
    pub fn new(kernel: K, profile: SchemaProfile) -> CalendarResult<Self> {
        let months_in_year = kernel
            .is_regular()
            .ok_or(CalendarError::invalid("kernel", "the number of months in a year varies"))?;
        profile.validate_for(&kernel)?;
        Ok(Self {
            kernel,
            profile,
            months_in_year,
        })
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn profile(&self) -> &SchemaProfile {
        &self.profile
    }

    pub fn months_in_year(&self) -> i32 {
        self.months_in_year
    }
}

macro_rules! delegate_kernel {
    ($schema:ident) => {
        impl<K: CalendricalKernel> CalendricalKernel for $schema<K> {
            fn is_regular(&self) -> Option<i32> {
                self.kernel.is_regular()
            }
            fn is_leap_year(&self, year: i32) -> bool {
                self.kernel.is_leap_year(year)
            }
            fn is_intercalary_month(&self, year: i32, month: i32) -> bool {
                self.kernel.is_intercalary_month(year, month)
            }
            fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool {
                self.kernel.is_intercalary_day(year, month, day)
            }
            fn is_supplementary_day(&self, year: i32, month: i32, day: i32) -> bool {
                self.kernel.is_supplementary_day(year, month, day)
            }
            fn count_months_in_year(&self, year: i32) -> i32 {
                self.kernel.count_months_in_year(year)
            }
            fn count_days_in_year(&self, year: i32) -> i32 {
                self.kernel.count_days_in_year(year)
            }
            fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
                self.kernel.count_days_in_month(year, month)
            }
        }
    };
}

delegate_kernel!(PrototypalSchema);
delegate_kernel!(RegularSchemaPrototype);

macro_rules! profile_properties {
    () => {
        fn algorithm(&self) -> CalendricalAlgorithm {
            self.profile.algorithm
        }
        fn family(&self) -> CalendricalFamily {
            self.profile.family
        }
        fn periodic_adjustments(&self) -> CalendricalAdjustments {
            self.profile.periodic_adjustments
        }
        fn min_days_in_year(&self) -> i32 {
            self.profile.min_days_in_year
        }
        fn min_days_in_month(&self) -> i32 {
            self.profile.min_days_in_month
        }
        fn supported_years(&self) -> Range<i32> {
            self.profile.supported_years
        }
    };
}

impl<K: CalendricalKernel> CalendricalSchema for PrototypalSchema<K> {
    profile_properties!();
}

impl<K: CalendricalKernel> CalendricalSchema for RegularSchemaPrototype<K> {
    profile_properties!();

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        regular::count_months_since_epoch(self.months_in_year, year, month)
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular::get_month_parts(self.months_in_year, months_since_epoch)
    }

    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_start_of_year_in_months(self.months_in_year, year)
    }

    fn get_end_of_year_in_months(&self, year: i32) -> i32 {
        regular::get_end_of_year_in_months(self.months_in_year, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{GregorianSchema, PaxKernel};
    use crate::test_utils::assert_schema_invariants;

    fn gregorian_profile() -> SchemaProfile {
        SchemaProfile::new(365, 28)
            .with_family(CalendricalFamily::Solar)
            .with_periodic_adjustments(CalendricalAdjustments::Days)
    }

    #[test]
    fn test_profile_validation_cases() {
        struct TestCase {
            profile:        SchemaProfile,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                profile:        SchemaProfile::new(365, 28),
                should_succeed: true,
                description:    "plausible minimums",
            },
            TestCase {
                profile:        SchemaProfile::new(0, 28),
                should_succeed: false,
                description:    "zero days in a year",
            },
            TestCase {
                profile:        SchemaProfile::new(365, -1),
                should_succeed: false,
                description:    "negative days in a month",
            },
            TestCase {
                profile:        SchemaProfile::new(30, 31),
                should_succeed: false,
                description:    "month longer than a year",
            },
        ];

        for case in &cases {
            let result = case.profile.validate();
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_profile_must_fit_kernel() {
        let err = PrototypalSchema::new(GregorianSchema, SchemaProfile::new(366, 28))
            .expect_err("366 is not a minimum for the Gregorian calendar");
        assert_eq!(err.param_name(), Some("min_days_in_year"));

        let err = PrototypalSchema::new(GregorianSchema, SchemaProfile::new(365, 29))
            .expect_err("29 is not a minimum for the Gregorian calendar");
        assert_eq!(err.param_name(), Some("min_days_in_month"));
    }

    #[test]
    fn test_regular_prototype_rejects_irregular_kernel() {
        let err = RegularSchemaPrototype::new(PaxKernel, PaxKernel::profile())
            .expect_err("the Pax calendar has 13 or 14 months");
        assert_eq!(err.param_name(), Some("kernel"));
    }

    #[test]
    fn test_prototype_matches_closed_forms() {
        let prototype = PrototypalSchema::new(GregorianSchema, gregorian_profile())
            .expect("failed to build Gregorian prototype");
        let regular = RegularSchemaPrototype::new(GregorianSchema, gregorian_profile())
            .expect("failed to build regular Gregorian prototype");

        for days in (-800_000..800_000).step_by(997) {
            let expected = GregorianSchema.get_date_parts(days);
            assert_eq!(prototype.get_date_parts(days), expected, "days since epoch {days}");
            assert_eq!(regular.get_date_parts(days), expected, "days since epoch {days}");
        }
        for year in [-2000, -401, -1, 0, 1, 4, 100, 1582, 2000, 2024] {
            let expected = GregorianSchema.get_start_of_year(year);
            assert_eq!(prototype.get_start_of_year(year), expected, "year {year}");
            assert_eq!(
                prototype.get_start_of_year_in_months(year),
                regular.get_start_of_year_in_months(year),
                "year {year}"
            );
        }
        for months in (-30_000..30_000).step_by(101) {
            assert_eq!(prototype.get_month_parts(months), regular.get_month_parts(months));
        }
    }

    #[test]
    fn test_prototype_properties() {
        let schema = PrototypalSchema::new(PaxKernel, PaxKernel::profile()).expect("failed to build Pax schema");
        assert_eq!(schema.family(), CalendricalFamily::Solar);
        assert_eq!(schema.periodic_adjustments(), CalendricalAdjustments::Months);
        assert_eq!(schema.min_days_in_month(), 7);
        assert_eq!(schema.supported_years(), schema.supported_years_core());
    }

    #[test]
    fn test_regular_prototype_invariants() {
        let regular = RegularSchemaPrototype::new(GregorianSchema, gregorian_profile())
            .expect("failed to build regular Gregorian prototype");
        assert_eq!(regular.months_in_year(), 12);
        assert_schema_invariants(&regular, -5..=5);
    }

    #[test]
    fn test_profile_serde() {
        let profile = gregorian_profile();
        let json = serde_json::to_string(&profile).expect("failed to serialize profile");
        let parsed: SchemaProfile = serde_json::from_str(&json).expect("failed to deserialize profile");
        assert_eq!(profile, parsed);
    }
}
