//! Error types for the antikythera-computus crate.

use antikythera_hebrew::HebrewError;
use antikythera_jd::JdError;

/// Error type for all fallible operations in the antikythera-computus crate.
///
/// The scan variants signal calendar-data inconsistencies: a bounded search
/// over the year table ran out of entries before finding a marker that a
/// correct table always contains.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputusError {
    /// Returned when a (month, day) pair is missing from a year table.
    #[error("day {month}/{day} not found in year table")]
    DayNotFound {
        /// Month of the missing day.
        month: u8,
        /// Day of the missing day.
        day: u8,
    },

    /// Returned when no new-moon day exists at or after the scan start.
    #[error("no new moon found at or after {month}/{day}")]
    NewMoonNotFound {
        /// Month the scan started from.
        month: u8,
        /// Day the scan started from.
        day: u8,
    },

    /// Returned when no Sunday exists at or after the paschal full moon.
    #[error("no sunday found at or after the full moon of the lunation beginning {month}/{day}")]
    SundayNotFound {
        /// Month of the paschal new moon.
        month: u8,
        /// Day of the paschal new moon.
        day: u8,
    },

    /// A date or day-number conversion failed.
    #[error(transparent)]
    Jd(#[from] JdError),

    /// The Hebrew calculator rejected the Passover lookup.
    #[error(transparent)]
    Hebrew(#[from] HebrewError),
}
