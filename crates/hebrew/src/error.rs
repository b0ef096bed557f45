//! Error types for the antikythera-hebrew crate.

use crate::molad::{MAX_AM_YEAR, MIN_AM_YEAR};

/// Error type for all fallible operations in the antikythera-hebrew crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HebrewError {
    /// Returned when an Anno Mundi year is outside the supported range.
    #[error("anno mundi year {year} out of supported range {MIN_AM_YEAR}..={MAX_AM_YEAR}")]
    YearOutOfRange {
        /// The out-of-range year that was provided.
        year: i32,
    },
}
