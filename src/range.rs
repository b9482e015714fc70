use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CalendarError, CalendarResult};

/// Represents an inclusive range between two values.
/// The minimum must be less than or equal to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<T> {
    min: T,
    max: T,
}

#[derive(Deserialize)]
struct RawRange<T> {
    min: T,
    max: T,
}

impl<T: Copy + Ord + fmt::Display> Range<T> {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if min > max.
    pub fn new(min: T, max: T) -> CalendarResult<Self> {
        if min > max {
            return Err(CalendarError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// Creates a range containing exactly one value.
    pub const fn singleton(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Creates a range from endpoints the caller already knows to be ordered.
    pub(crate) fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Returns the lower end of the range
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper end of the range
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns both ends as a tuple
    pub fn endpoints(&self) -> (T, T) {
        (self.min, self.max)
    }

    /// Checks if the range contains a given value
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks if this range is completely contained within another range
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.min <= self.min && self.max <= other.max
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Returns the values common to both ranges, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }
}

impl Range<i32> {
    /// Returns the number of integers in the range.
    pub const fn count(&self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.min, self.max)
    }
}

impl<'de, T> Deserialize<'de> for Range<T>
where
    T: Deserialize<'de> + Copy + Ord + fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawRange::<T>::deserialize(deserializer)?;
        Self::new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            min:            i32,
            max:            i32,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                min:            1990,
                max:            2000,
                should_succeed: true,
                description:    "valid range (min < max)",
            },
            TestCase {
                min:            2000,
                max:            1990,
                should_succeed: false,
                description:    "invalid range (min > max)",
            },
            TestCase {
                min:            2000,
                max:            2000,
                should_succeed: true,
                description:    "equal ends (min == max)",
            },
            TestCase {
                min:            i32::MIN,
                max:            i32::MAX,
                should_succeed: true,
                description:    "full i32 range",
            },
        ];

        for case in &cases {
            let range = Range::new(case.min, case.max);

            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(range.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_invalid_range_error() {
        let err = Range::new(5, 1).expect_err("expected error for reversed range");
        assert_eq!(
            err,
            CalendarError::InvalidRange {
                min: "5".to_owned(),
                max: "1".to_owned()
            }
        );
    }

    #[test]
    fn test_accessors() {
        let range = Range::new(-10, 10).expect("failed to construct range for accessor test");

        assert_eq!(range.min(), -10);
        assert_eq!(range.max(), 10);
        assert_eq!(range.endpoints(), (-10, 10));
        assert_eq!(range.count(), 21);
        assert_eq!(Range::singleton(7).count(), 1);
    }

    #[test]
    fn test_count_does_not_overflow() {
        let range = Range::new(i32::MIN, i32::MAX).expect("failed to construct full range");
        assert_eq!(range.count(), 1_i64 << 32);
    }

    #[test]
    fn test_contains() {
        let range = Range::new(1990, 2000).expect("failed to construct range for contains test");

        assert!(range.contains(1990));
        assert!(range.contains(2000));
        assert!(range.contains(1995));
        assert!(!range.contains(1989));
        assert!(!range.contains(2001));
    }

    #[test]
    fn test_overlaps_and_intersect() {
        let range1 = Range::new(1990, 2000).expect("failed to construct first range");
        let range2 = Range::new(1995, 2005).expect("failed to construct overlapping range");
        let range3 = Range::new(2010, 2020).expect("failed to construct disjoint range");

        assert!(range1.overlaps(&range2));
        assert!(range2.overlaps(&range1));
        assert!(!range1.overlaps(&range3));

        assert_eq!(range1.intersect(&range2), Some(Range::new_unchecked(1995, 2000)));
        assert_eq!(range1.intersect(&range3), None);
    }

    #[test]
    fn test_is_subset_of() {
        let outer = Range::new(1990, 2000).expect("failed to construct outer range");
        let inner = Range::new(1995, 1998).expect("failed to construct inner range");

        assert!(inner.is_subset_of(&outer));
        assert!(!outer.is_subset_of(&inner));
        assert!(outer.is_subset_of(&outer));
    }

    #[test]
    fn test_display() {
        let range = Range::new(-9998, 9999).expect("failed to construct range for display test");
        assert_eq!(range.to_string(), "[-9998..9999]");
    }

    #[test]
    fn test_serde() {
        let range = Range::new(1, 9999).expect("failed to construct range for serde test");
        let json = serde_json::to_string(&range).expect("failed to serialize range");
        assert_eq!(json, r#"{"min":1,"max":9999}"#);

        let parsed: Range<i32> = serde_json::from_str(&json).expect("failed to deserialize range");
        assert_eq!(range, parsed);
    }

    #[test]
    fn test_serde_rejects_reversed_range() {
        let result: Result<Range<i32>, _> = serde_json::from_str(r#"{"min":10,"max":1}"#);
        assert!(result.is_err());
    }
}
