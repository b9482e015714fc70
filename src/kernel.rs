//! The calendrical kernel: the only facts a calendar must supply.
//!
//! Every conversion is derived from a kernel by
//! [`crate::CalendricalSchema`].

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// How the calendar is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CalendricalAlgorithm {
    #[display(fmt = "unknown")]
    Unknown,
    /// Pure arithmetic on integers
    #[display(fmt = "arithmetical")]
    Arithmetical,
    /// Driven by astronomical observation or computation
    #[display(fmt = "astronomical")]
    Astronomical,
}

/// What the year and months of the calendar follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CalendricalFamily {
    #[display(fmt = "other")]
    Other,
    #[display(fmt = "solar")]
    Solar,
    #[display(fmt = "lunar")]
    Lunar,
    #[display(fmt = "lunisolar")]
    Lunisolar,
}

/// Which periodic adjustments keep the calendar in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CalendricalAdjustments {
    /// Every year has the same length
    #[display(fmt = "none")]
    None,
    /// Intercalary days
    #[display(fmt = "days")]
    Days,
    /// Intercalary months (or weeks)
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "days and months")]
    DaysAndMonths,
}

impl CalendricalAdjustments {
    pub const fn has_intercalary_days(self) -> bool {
        matches!(self, Self::Days | Self::DaysAndMonths)
    }

    pub const fn has_intercalary_months(self) -> bool {
        matches!(self, Self::Months | Self::DaysAndMonths)
    }
}

/// Calendar-specific facts every schema is built from.
///
/// Implementations must not panic for any year of the schema's core range;
/// beyond it integer overflow is the caller's problem. Months and days are
/// assumed valid: passing a month the year does not have is unspecified.
pub trait CalendricalKernel {
    /// Returns `Some(n)` when every year has exactly `n` months.
    fn is_regular(&self) -> Option<i32>;

    fn is_leap_year(&self, year: i32) -> bool;

    /// Returns `true` for a month inserted in some years only.
    fn is_intercalary_month(&self, year: i32, month: i32) -> bool;

    /// Returns `true` for a day inserted in some years only (e.g. February 29).
    fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool;

    /// Returns `true` for a day outside the regular month structure
    /// (epagomenal or blank days).
    fn is_supplementary_day(&self, year: i32, month: i32, day: i32) -> bool;

    fn count_months_in_year(&self, year: i32) -> i32;

    fn count_days_in_year(&self, year: i32) -> i32;

    fn count_days_in_month(&self, year: i32, month: i32) -> i32;
}
