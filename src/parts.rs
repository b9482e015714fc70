//! Plain, unbounded date parts returned by schemas.
//!
//! Unlike the packed codecs in [`crate::types`], these records accept any
//! `i32` year. They carry no calendar: a `DateParts` only means something
//! next to the schema that produced it.

use crate::prelude::*;
use crate::types::{Yedoy, Yemo, Yemoda};
use crate::CalendarError;
use serde::{Deserialize, Serialize};

/// A (year, month, day) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct DateParts {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// A (year, month) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{year:04}-{month:02}")]
pub struct MonthParts {
    pub year: i32,
    pub month: i32,
}

/// A (year, day of year) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{year:04}-{day_of_year:03}")]
pub struct OrdinalParts {
    pub year: i32,
    pub day_of_year: i32,
}

impl DateParts {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The first day of `year`
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1, 1)
    }

    pub const fn deconstruct(self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    pub const fn month_parts(self) -> MonthParts {
        MonthParts::new(self.year, self.month)
    }
}

impl MonthParts {
    pub const fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// The first month of `year`
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1)
    }

    pub const fn deconstruct(self) -> (i32, i32) {
        (self.year, self.month)
    }
}

impl OrdinalParts {
    pub const fn new(year: i32, day_of_year: i32) -> Self {
        Self { year, day_of_year }
    }

    /// The first day of `year`
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1)
    }

    pub const fn deconstruct(self) -> (i32, i32) {
        (self.year, self.day_of_year)
    }
}

impl From<(i32, i32, i32)> for DateParts {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<Yemoda> for DateParts {
    fn from(ymd: Yemoda) -> Self {
        ymd.deconstruct().into()
    }
}

impl TryFrom<DateParts> for Yemoda {
    type Error = CalendarError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl From<Yemo> for MonthParts {
    fn from(ym: Yemo) -> Self {
        Self::new(ym.year(), ym.month())
    }
}

impl TryFrom<MonthParts> for Yemo {
    type Error = CalendarError;

    fn try_from(parts: MonthParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month)
    }
}

impl From<Yedoy> for OrdinalParts {
    fn from(ydoy: Yedoy) -> Self {
        Self::new(ydoy.year(), ydoy.day_of_year())
    }
}

impl TryFrom<OrdinalParts> for Yedoy {
    type Error = CalendarError;

    fn try_from(parts: OrdinalParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.day_of_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_YEAR;

    #[test]
    fn test_display() {
        assert_eq!(DateParts::new(1582, 10, 15).to_string(), "1582-10-15");
        assert_eq!(MonthParts::new(1582, 10).to_string(), "1582-10");
        assert_eq!(OrdinalParts::new(1582, 288).to_string(), "1582-288");
    }

    #[test]
    fn test_ordering() {
        let a = DateParts::new(1999, 12, 31);
        let b = DateParts::new(2000, 1, 1);
        assert!(a < b);
        assert!(OrdinalParts::new(2000, 2) > OrdinalParts::new(2000, 1));
    }

    #[test]
    fn test_codec_conversions() {
        let parts = DateParts::new(2024, 2, 29);
        let ymd = Yemoda::try_from(parts).expect("failed to pack date parts");
        assert_eq!(DateParts::from(ymd), parts);

        let parts = MonthParts::new(2024, 13);
        let ym = Yemo::try_from(parts).expect("failed to pack month parts");
        assert_eq!(MonthParts::from(ym), parts);

        let parts = OrdinalParts::new(2024, 366);
        let ydoy = Yedoy::try_from(parts).expect("failed to pack ordinal parts");
        assert_eq!(OrdinalParts::from(ydoy), parts);
    }

    #[test]
    fn test_codec_conversion_out_of_range() {
        assert!(Yemoda::try_from(DateParts::new(MAX_YEAR + 1, 1, 1)).is_err());
        assert!(Yemo::try_from(MonthParts::new(1, 17)).is_err());
        assert!(Yedoy::try_from(OrdinalParts::new(1, 1025)).is_err());
    }

    #[test]
    fn test_serde() {
        let parts = DateParts::new(1, 1, 1);
        let json = serde_json::to_string(&parts).expect("failed to serialize date parts");
        assert_eq!(json, r#"{"year":1,"month":1,"day":1}"#);

        let parsed: DateParts = serde_json::from_str(&json).expect("failed to deserialize date parts");
        assert_eq!(parts, parsed);
    }
}
