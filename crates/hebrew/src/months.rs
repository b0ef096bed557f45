//! Month boundaries from Shevat through Sivan, and Passover.

use antikythera_jd::JulianDay;
use tracing::debug;

use crate::error::HebrewError;
use crate::molad::is_leap_year;
use crate::new_year::rosh_hashanah;

/// Days in Tishrei, Heshvan, Kislev, and Tevet in a regular year.
const FOUR_MONTH_OFFSET: i64 = 30 + 29 + 30 + 29;
const LENGTH_SHEVAT: i64 = 30;
const LENGTH_ADAR_I: i64 = 30;
const LENGTH_ADAR: i64 = 29;
const LENGTH_NISAN: i64 = 30;
const LENGTH_IYAR: i64 = 29;

/// First days of the spring months of an Anno Mundi year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBoundaries {
    /// First day of Shevat.
    pub shevat: JulianDay,
    /// First day of Adar I; present only in leap years.
    pub adar_i: Option<JulianDay>,
    /// First day of Adar (Adar II in leap years).
    pub adar: JulianDay,
    /// First day of Nisan.
    pub nisan: JulianDay,
    /// First day of Iyar.
    pub iyar: JulianDay,
    /// First day of Sivan.
    pub sivan: JulianDay,
}

/// Computes the spring month boundaries for an Anno Mundi year.
///
/// Between 1 Tishrei and the spring there are three possible intercalations:
/// a missing day in deficient years, an extra day in excessive years, and
/// the leap month of Adar I. The deficient/excessive adjustment is measured
/// rather than derived: next year's Rosh Hashanah tells how far this year's
/// length strays from the nominal 354 (+30 if leap) days, and that excess
/// lands in the months before Shevat.
///
/// # Errors
///
/// Returns [`HebrewError::YearOutOfRange`] if `year` or `year + 1` is
/// outside the supported range.
pub fn month_boundaries(year: i32) -> Result<MonthBoundaries, HebrewError> {
    let rh = rosh_hashanah(year)?;
    let next_rh = rosh_hashanah(year + 1)?;
    let leap = is_leap_year(year);
    let adar_i = if leap { LENGTH_ADAR_I } else { 0 };
    let excess = next_rh.days_since(rh) - (354 + adar_i);
    debug!(year, leap, excess, "measured year length excess");

    let shevat = rh.plus_days(FOUR_MONTH_OFFSET + excess);
    let adar = shevat.plus_days(LENGTH_SHEVAT + adar_i);
    let nisan = adar.plus_days(LENGTH_ADAR);
    Ok(MonthBoundaries {
        shevat,
        adar_i: leap.then(|| shevat.plus_days(LENGTH_SHEVAT)),
        adar,
        nisan,
        iyar: nisan.plus_days(LENGTH_NISAN),
        sivan: nisan.plus_days(LENGTH_NISAN + LENGTH_IYAR),
    })
}

/// The Julian Day Number on which Passover begins: 15 Nisan.
///
/// # Errors
///
/// Returns [`HebrewError::YearOutOfRange`] outside the supported range.
pub fn pesach(year: i32) -> Result<JulianDay, HebrewError> {
    Ok(month_boundaries(year)?.nisan.plus_days(14))
}

/// Converts an Anno Domini year to the Anno Mundi year containing its
/// spring Passover.
///
/// This punts the question of the differing New Year's days by being pegged
/// to Passover: it is valid only for locating the spring Passover/Easter
/// window, never as a general calendar converter.
pub fn am_at_pesach(ad_year: i32) -> i32 {
    ad_year + 3760
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pesach_5783() {
        // Gregorian 2023-04-06.
        assert_eq!(pesach(5783).unwrap().get(), 2_460_041);
    }

    #[test]
    fn pesach_5784() {
        // Gregorian 2024-04-23, a leap year with Adar I.
        assert_eq!(pesach(5784).unwrap().get(), 2_460_424);
    }

    #[test]
    fn adar_i_only_in_leap_years() {
        assert!(month_boundaries(5784).unwrap().adar_i.is_some());
        assert!(month_boundaries(5783).unwrap().adar_i.is_none());
    }

    #[test]
    fn month_ladder_is_contiguous() {
        for year in [5783, 5784, 5785] {
            let b = month_boundaries(year).unwrap();
            if let Some(adar_i) = b.adar_i {
                assert_eq!(adar_i, b.shevat.plus_days(30));
                assert_eq!(b.adar, adar_i.plus_days(30));
            } else {
                assert_eq!(b.adar, b.shevat.plus_days(30));
            }
            assert_eq!(b.nisan, b.adar.plus_days(29));
            assert_eq!(b.iyar, b.nisan.plus_days(30));
            assert_eq!(b.sivan, b.iyar.plus_days(29));
        }
    }

    #[test]
    fn excess_is_bounded() {
        for year in 5600..5800 {
            let b = month_boundaries(year).unwrap();
            let rh = rosh_hashanah(year).unwrap();
            let excess = b.shevat.days_since(rh) - FOUR_MONTH_OFFSET;
            assert!(
                (-1..=1).contains(&excess),
                "year {year} has excess {excess}"
            );
        }
    }

    #[test]
    fn am_at_pesach_offset() {
        assert_eq!(am_at_pesach(2023), 5783);
        assert_eq!(am_at_pesach(2024), 5784);
    }

    #[test]
    fn boundaries_near_range_end_fail_cleanly() {
        // month_boundaries needs next year's Rosh Hashanah.
        assert!(month_boundaries(15_000).is_err());
    }
}
