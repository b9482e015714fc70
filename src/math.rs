//! Date math with a configurable rule for ambiguous results.
//!
//! Adding one month to January 31 or one year to February 29 lands on a day
//! that does not exist. [`AdditionRule`] decides what happens then, and
//! [`DateMath`] applies it on top of a [`CalendricalArithmetic`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::arithmetic::CalendricalArithmetic;
use crate::types::{Yedoy, Yemo, Yemoda};
use crate::CalendarResult;

/// What to do with a result that falls past the end of its month or year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdditionRule {
    /// Keep the last valid day: January 31 plus one month is February 28.
    #[default]
    Truncate,
    /// Move to the first day after the truncated one: January 31 plus one
    /// month is March 1.
    Overspill,
    /// Carry the days cut off into the next period: January 31 plus one
    /// month is March 3 in a common year.
    Exact,
}

/// Error returned when parsing an [`AdditionRule`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("provided string was not a valid addition rule")]
pub struct ParseAdditionRuleError;

impl FromStr for AdditionRule {
    type Err = ParseAdditionRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(Self::Truncate),
            "overspill" => Ok(Self::Overspill),
            "exact" => Ok(Self::Exact),
            _ => Err(ParseAdditionRuleError),
        }
    }
}

impl fmt::Display for AdditionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Truncate => "truncate",
            Self::Overspill => "overspill",
            Self::Exact => "exact",
        })
    }
}

/// The rules applied by a [`DateMath`], one per kind of value.
///
/// Missing fields deserialize to [`AdditionRule::Truncate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionRuleset {
    /// Rule for dates (`Yemoda`)
    pub date_rule: AdditionRule,
    /// Rule for ordinal dates (`Yedoy`)
    pub ordinal_rule: AdditionRule,
    /// Rule for months (`Yemo`)
    pub month_rule: AdditionRule,
}

impl AdditionRuleset {
    /// Truncates everything.
    pub const fn new() -> Self {
        Self::uniform(AdditionRule::Truncate)
    }

    /// The same rule for every kind of value.
    pub const fn uniform(rule: AdditionRule) -> Self {
        Self {
            date_rule: rule,
            ordinal_rule: rule,
            month_rule: rule,
        }
    }

    pub const fn with_date_rule(mut self, rule: AdditionRule) -> Self {
        self.date_rule = rule;
        self
    }

    pub const fn with_ordinal_rule(mut self, rule: AdditionRule) -> Self {
        self.ordinal_rule = rule;
        self
    }

    pub const fn with_month_rule(mut self, rule: AdditionRule) -> Self {
        self.month_rule = rule;
        self
    }
}

/// Adds years and months with a fixed [`AdditionRuleset`], and counts the
/// whole years or months between two values consistently with it.
///
/// ```
/// use calendrical::{
///     AdditionRule, AdditionRuleset, DateMath, DefaultArithmetic, GregorianSchema, MinMaxYearScope, Yemoda,
/// };
///
/// let scope = MinMaxYearScope::standard(GregorianSchema).unwrap();
/// let math = DateMath::new(
///     DefaultArithmetic::from_scope(&scope),
///     AdditionRuleset::uniform(AdditionRule::Overspill),
/// );
/// let date = Yemoda::new(2023, 1, 31).unwrap();
/// assert_eq!(math.add_months(date, 1).unwrap(), Yemoda::new(2023, 3, 1).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DateMath<A> {
    arithmetic: A,
    rules: AdditionRuleset,
}

impl<A: CalendricalArithmetic> DateMath<A> {
    pub fn new(arithmetic: A, rules: AdditionRuleset) -> Self {
        Self { arithmetic, rules }
    }

    pub fn arithmetic(&self) -> &A {
        &self.arithmetic
    }

    pub fn rules(&self) -> AdditionRuleset {
        self.rules
    }

    // Dates

    pub fn add_years(&self, ymd: Yemoda, years: i32) -> CalendarResult<Yemoda> {
        let (result, roundoff) = self.arithmetic.add_years_with_roundoff(ymd, years)?;
        self.resolve_date(result, roundoff)
    }

    pub fn add_months(&self, ymd: Yemoda, months: i32) -> CalendarResult<Yemoda> {
        let (result, roundoff) = self.arithmetic.add_months_with_roundoff(ymd, months)?;
        self.resolve_date(result, roundoff)
    }

    /// Whole years from `start` to `end`: the largest `n` (towards zero)
    /// such that adding `n` years to `start` does not pass `end`.
    pub fn count_years_between(&self, start: Yemoda, end: Yemoda) -> CalendarResult<i32> {
        count_between(start, end, end.year() - start.year(), |n| self.add_years(start, n))
    }

    /// Whole months from `start` to `end`, in the same sense as
    /// [`count_years_between`](Self::count_years_between).
    pub fn count_months_between(&self, start: Yemoda, end: Yemoda) -> CalendarResult<i32> {
        let months = self.arithmetic.count_months_between(start.yemo(), end.yemo());
        count_between(start, end, months, |n| self.add_months(start, n))
    }

    // Ordinal dates

    pub fn add_years_to_ordinal(&self, ydoy: Yedoy, years: i32) -> CalendarResult<Yedoy> {
        let (result, roundoff) = self.arithmetic.add_years_to_ordinal_with_roundoff(ydoy, years)?;
        if roundoff == 0 {
            return Ok(result);
        }
        match self.rules.ordinal_rule {
            AdditionRule::Truncate => Ok(result),
            AdditionRule::Overspill => self.arithmetic.next_ordinal(result),
            AdditionRule::Exact => self.arithmetic.add_days_to_ordinal(result, roundoff),
        }
    }

    pub fn count_years_between_ordinals(&self, start: Yedoy, end: Yedoy) -> CalendarResult<i32> {
        count_between(start, end, end.year() - start.year(), |n| {
            self.add_years_to_ordinal(start, n)
        })
    }

    // Months

    pub fn add_years_to_month(&self, ym: Yemo, years: i32) -> CalendarResult<Yemo> {
        let (result, roundoff) = self.arithmetic.add_years_to_month_with_roundoff(ym, years)?;
        if roundoff == 0 {
            return Ok(result);
        }
        match self.rules.month_rule {
            AdditionRule::Truncate => Ok(result),
            AdditionRule::Overspill => self.arithmetic.add_months_to_month(result, 1),
            AdditionRule::Exact => self.arithmetic.add_months_to_month(result, roundoff),
        }
    }

    pub fn count_years_between_months(&self, start: Yemo, end: Yemo) -> CalendarResult<i32> {
        count_between(start, end, end.year() - start.year(), |n| {
            self.add_years_to_month(start, n)
        })
    }

    fn resolve_date(&self, result: Yemoda, roundoff: i32) -> CalendarResult<Yemoda> {
        if roundoff == 0 {
            return Ok(result);
        }
        match self.rules.date_rule {
            AdditionRule::Truncate => Ok(result),
            AdditionRule::Overspill => self.arithmetic.next_day(result),
            AdditionRule::Exact => self.arithmetic.add_days(result, roundoff),
        }
    }
}

/// Starts from an estimate and steps towards zero until adding the count to
/// `start` no longer passes `end`. A result that overflows the segment has
/// passed `end` too.
fn count_between<T, F>(start: T, end: T, estimate: i32, add: F) -> CalendarResult<i32>
where
    T: Ord + Copy,
    F: Fn(i32) -> CalendarResult<T>,
{
    let passes = |n: i32| -> CalendarResult<bool> {
        match add(n) {
            Ok(value) => Ok(if start <= end { value > end } else { value < end }),
            Err(err) if err.is_overflow() => Ok(true),
            Err(err) => Err(err),
        }
    };

    let step = if start <= end { -1 } else { 1 };
    let mut count = estimate;
    while count != 0 && passes(count)? {
        count += step;
    }
    Ok(count)
}
