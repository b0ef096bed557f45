//! Molad arithmetic: counting months from the epoch to a year's Tishrei.

use crate::error::HebrewError;
use crate::units::{Molad, dhh_to_halakhim};

/// First supported Anno Mundi year.
pub const MIN_AM_YEAR: i32 = 1;
/// Last supported Anno Mundi year.
pub const MAX_AM_YEAR: i32 = 15_000;

/// Mean length of a lunar month: 29 days, 12 hours, 793 halakhim.
pub const MONTH_LENGTH: i64 = dhh_to_halakhim(29, 12, 793);

/// The first reckoned moon, the molad of Tishrei in year 1: day 2, 5 hours,
/// 204 halakhim.
pub const FIRST_MOON: i64 = dhh_to_halakhim(2, 5, 204);

/// Cumulative months before each position in the 19-year cycle.
///
/// Positions 0, 3, 6, 8, 11, 14, and 17 open a 13-month leap year, which is
/// why consecutive differences are 12 or 13.
const MONTHS_BEFORE_CYCLE_YEAR: [i64; 19] = [
    0, 12, 24, 37, 49, 61, 74, 86, 99, 111, 123, 136, 148, 160, 173, 185, 197, 210, 222,
];

pub(crate) fn check_year(year: i32) -> Result<(), HebrewError> {
    if !(MIN_AM_YEAR..=MAX_AM_YEAR).contains(&year) {
        return Err(HebrewError::YearOutOfRange { year });
    }
    Ok(())
}

/// Returns true when the Anno Mundi year carries the intercalary month.
pub fn is_leap_year(year: i32) -> bool {
    matches!(year.rem_euclid(19), 0 | 3 | 6 | 8 | 11 | 14 | 17)
}

/// Number of lunar months elapsed from the epoch to the start of `year`.
///
/// 235 months per complete 19-year cycle plus the cumulative table for the
/// position within the current cycle.
pub fn months_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y.div_euclid(19) * 235 + MONTHS_BEFORE_CYCLE_YEAR[y.rem_euclid(19) as usize]
}

/// The molad of Tishrei for an Anno Mundi year.
///
/// # Errors
///
/// Returns [`HebrewError::YearOutOfRange`] outside the supported range.
pub fn molad_tishrei(year: i32) -> Result<Molad, HebrewError> {
    check_year(year)?;
    Ok(Molad::new(FIRST_MOON + months_before_year(year) * MONTH_LENGTH))
}
