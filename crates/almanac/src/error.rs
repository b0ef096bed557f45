//! Error types for the antikythera-almanac crate.

use antikythera_computus::ComputusError;
use antikythera_hebrew::HebrewError;
use antikythera_jd::JdError;

/// Error type for all fallible operations in the antikythera-almanac crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlmanacError {
    /// A computus computation failed.
    #[error(transparent)]
    Computus(#[from] ComputusError),

    /// A Hebrew calendar computation failed.
    #[error(transparent)]
    Hebrew(#[from] HebrewError),

    /// A date or day-number conversion failed.
    #[error(transparent)]
    Jd(#[from] JdError),

    /// Returned when a day table has no entry for an absolute day the
    /// interleaver needs — the tables failed to overlap the requested
    /// window.
    #[error("no calendar entry aligned with julian day {jd}")]
    AlignmentFailed {
        /// The absolute day that no table entry matched.
        jd: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_message() {
        let err = AlmanacError::AlignmentFailed { jd: 2_460_371 };
        assert_eq!(
            err.to_string(),
            "no calendar entry aligned with julian day 2460371"
        );
    }

    #[test]
    fn computus_error_converts() {
        let err: AlmanacError = ComputusError::DayNotFound { month: 3, day: 1 }.into();
        assert!(matches!(err, AlmanacError::Computus(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AlmanacError>();
    }
}
