//! Error types for the antikythera-jd crate.

use crate::date::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible operations in the antikythera-jd crate.
///
/// Covers validation failures for civil dates and Julian Day Numbers, plus
/// the one conversion the design deliberately leaves unimplemented.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JdError {
    /// Returned when a year is outside the supported historical range.
    #[error("year {year} out of supported range {MIN_YEAR}..={MAX_YEAR}")]
    YearOutOfRange {
        /// The out-of-range year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a Julian Day Number falls outside the supported range.
    #[error("julian day {jd} outside supported range")]
    JdOutOfRange {
        /// The out-of-range Julian Day Number.
        jd: i64,
    },

    /// Returned by [`jd_to_julian`](crate::jd_to_julian), which is
    /// deliberately unsupported: no consumer needs the inverse, and the
    /// design preserves the explicit failure rather than guessing one.
    #[error("conversion of julian day {jd} to a julian civil date is not supported")]
    JdToJulianUnsupported {
        /// The Julian Day Number the caller tried to convert.
        jd: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_year_out_of_range() {
        let err = JdError::YearOutOfRange { year: 0 };
        assert_eq!(
            err.to_string(),
            "year 0 out of supported range 1..=9999"
        );
    }

    #[test]
    fn error_invalid_day() {
        let err = JdError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<JdError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<JdError>();
    }
}
