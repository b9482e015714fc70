//! Error types for the calendrical crate.

/// Broad classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input value was malformed or outside of its valid range.
    Argument,
    /// Every input was valid but the result is not representable.
    Overflow,
}

/// Error type for all fallible operations in the calendrical crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year is outside of the supported range.
    #[error("{param}: the year {year} is outside the supported range")]
    YearOutOfRange {
        /// Name of the offending argument.
        param: &'static str,
        year: i32,
    },

    /// A month does not exist in the given year.
    #[error("{param}: the month {month} is not valid for the year {year}")]
    MonthOutOfRange {
        /// Name of the offending argument.
        param: &'static str,
        year: i32,
        month: i32,
    },

    /// A day does not exist in the given month.
    #[error("{param}: the day {day} is not valid for the month {year}-{month:02}")]
    DayOutOfRange {
        /// Name of the offending argument.
        param: &'static str,
        year: i32,
        month: i32,
        day: i32,
    },

    /// A day of the year does not exist in the given year.
    #[error("{param}: the day of the year {day_of_year} is not valid for the year {year}")]
    DayOfYearOutOfRange {
        /// Name of the offending argument.
        param: &'static str,
        year: i32,
        day_of_year: i32,
    },

    /// A count (days or months since the epoch, a binary word, ...) is out of range.
    #[error("{param}: the value {value} is outside the supported range")]
    ValueOutOfRange {
        /// Name of the offending argument.
        param: &'static str,
        value: i64,
    },

    /// An argument is invalid for a reason other than its range.
    #[error("{param}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        param: &'static str,
        reason: &'static str,
    },

    /// The lower end of a range is greater than its upper end.
    #[error("Invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: String, max: String },

    /// The result of a computation falls outside of the supported range.
    #[error("The operation {operation} would overflow the calendar boundaries")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },
}

/// The calendrical result type
pub type CalendarResult<T> = Result<T, CalendarError>;

impl CalendarError {
    pub(crate) const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub(crate) const fn invalid(param: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { param, reason }
    }

    /// Returns the classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::YearOutOfRange { .. }
            | Self::MonthOutOfRange { .. }
            | Self::DayOutOfRange { .. }
            | Self::DayOfYearOutOfRange { .. }
            | Self::ValueOutOfRange { .. }
            | Self::InvalidArgument { .. }
            | Self::InvalidRange { .. } => ErrorKind::Argument,
        }
    }

    /// Returns `true` if the error signals an unrepresentable result.
    pub const fn is_overflow(&self) -> bool {
        matches!(self.kind(), ErrorKind::Overflow)
    }

    /// Returns the name of the argument the error is attributed to, if any.
    pub const fn param_name(&self) -> Option<&'static str> {
        match self {
            Self::YearOutOfRange { param, .. }
            | Self::MonthOutOfRange { param, .. }
            | Self::DayOutOfRange { param, .. }
            | Self::DayOfYearOutOfRange { param, .. }
            | Self::ValueOutOfRange { param, .. }
            | Self::InvalidArgument { param, .. } => Some(*param),
            Self::InvalidRange { .. } | Self::Overflow { .. } => None,
        }
    }
}
