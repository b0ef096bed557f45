//! The date of Easter under both reckonings.

use antikythera_hebrew::{am_at_pesach, pesach};
use antikythera_jd::{
    CalendarSystem, CivilDate, JulianDay, gregorian_to_jd, jd_to_gregorian, julian_to_jd,
};
use tracing::debug;

use crate::error::ComputusError;
use crate::year::{YearDayEntry, find_day, find_new_moon_at_or_after, year_table};

/// Days from the start of the paschal lunation to its 14th-day full moon.
const FULL_MOON_OFFSET: usize = 14;

/// The Gregorian Easter computation for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianEaster {
    /// The ecclesiastical vernal equinox, March 21.
    pub equinox: JulianDay,
    /// The paschal full moon.
    pub full_moon: JulianDay,
    /// Easter Sunday.
    pub easter: JulianDay,
    /// Easter Sunday as a Gregorian civil date.
    pub date: CivilDate,
}

/// The Julian Easter computation for one year, with the intermediate values
/// of the Passover correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JulianEaster {
    /// The ecclesiastical vernal equinox, Julian March 21.
    pub equinox: JulianDay,
    /// The paschal full moon.
    pub full_moon: JulianDay,
    /// Easter Sunday before the Passover correction.
    pub presumptive: JulianDay,
    /// The start of Passover in the corresponding Anno Mundi year.
    pub passover: JulianDay,
    /// Easter Sunday after the correction.
    pub easter: JulianDay,
    /// Easter Sunday reported as a Gregorian-equivalent civil date.
    pub gregorian_date: CivilDate,
}

/// Scans a year table for the paschal full moon and the following Sunday.
///
/// The new-moon scan starts at March 8, the earliest possible paschal new
/// moon — 13 days before the equinox, so the 14th day of the lunation lands
/// on or after March 21. The Sunday scan includes the full-moon day itself.
///
/// Returns (full-moon index, Easter index).
fn paschal_scan(table: &[YearDayEntry]) -> Result<(usize, usize), ComputusError> {
    let start = find_day(table, 3, 8)?;
    let new_moon = find_new_moon_at_or_after(table, start)?;
    let nm = table[new_moon];
    let full_moon = new_moon + FULL_MOON_OFFSET;
    let easter = table
        .get(full_moon..)
        .unwrap_or(&[])
        .iter()
        .position(|e| e.weekday == 0)
        .map(|i| full_moon + i)
        .ok_or(ComputusError::SundayNotFound {
            month: nm.month,
            day: nm.day,
        })?;
    Ok((full_moon, easter))
}

/// Computes Easter for a Gregorian year.
///
/// # Errors
///
/// Returns [`ComputusError`] on out-of-range years or on a calendar-data
/// inconsistency in the table scans.
pub fn gregorian_easter(year: i32) -> Result<GregorianEaster, ComputusError> {
    let table = year_table(CalendarSystem::Gregorian, year)?;
    let (full_idx, easter_idx) = paschal_scan(&table)?;
    let full = table[full_idx];
    let sunday = table[easter_idx];
    let date = CivilDate::new(year, sunday.month, sunday.day)?;
    let easter = gregorian_to_jd(date)?;
    debug!(year, jd = easter.get(), "gregorian easter");
    Ok(GregorianEaster {
        equinox: gregorian_to_jd(CivilDate::new(year, 3, 21)?)?,
        full_moon: gregorian_to_jd(CivilDate::new(year, full.month, full.day)?)?,
        easter,
        date,
    })
}

/// Computes Easter for a Julian year.
///
/// The table scan is the same as the Gregorian one; on top of it the Julian
/// reckoning keeps the rule that Easter may not precede Passover, so the
/// presumptive date is pushed back a week at a time until it holds. The
/// result is reported as a Gregorian-equivalent date.
///
/// # Errors
///
/// Returns [`ComputusError`] on out-of-range years or on a calendar-data
/// inconsistency in the table scans.
pub fn julian_easter(year: i32) -> Result<JulianEaster, ComputusError> {
    let table = year_table(CalendarSystem::Julian, year)?;
    let (full_idx, easter_idx) = paschal_scan(&table)?;
    let full = table[full_idx];
    let sunday = table[easter_idx];
    let presumptive = julian_to_jd(CivilDate::new(year, sunday.month, sunday.day)?)?;
    let passover = pesach(am_at_pesach(year))?;

    let mut easter = presumptive;
    while passover > easter {
        easter = easter.plus_days(7);
    }
    debug!(
        year,
        presumptive = presumptive.get(),
        passover = passover.get(),
        easter = easter.get(),
        "julian easter"
    );

    Ok(JulianEaster {
        equinox: julian_to_jd(CivilDate::new(year, 3, 21)?)?,
        full_moon: julian_to_jd(CivilDate::new(year, full.month, full.day)?)?,
        presumptive,
        passover,
        easter,
        gregorian_date: jd_to_gregorian(easter)?,
    })
}

/// The date of Easter in the given reckoning.
///
/// Gregorian years report in their own calendar; Julian years report the
/// Gregorian-equivalent date.
///
/// # Errors
///
/// Returns [`ComputusError`] on out-of-range years or on a calendar-data
/// inconsistency in the table scans.
pub fn easter(system: CalendarSystem, year: i32) -> Result<CivilDate, ComputusError> {
    match system {
        CalendarSystem::Gregorian => Ok(gregorian_easter(year)?.date),
        CalendarSystem::Julian => Ok(julian_easter(year)?.gregorian_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(date: CivilDate) -> (i32, u8, u8) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn gregorian_2023() {
        let result = gregorian_easter(2023).unwrap();
        assert_eq!(ymd(result.date), (2023, 4, 9));
    }

    #[test]
    fn gregorian_2024() {
        assert_eq!(
            ymd(gregorian_easter(2024).unwrap().date),
            (2024, 3, 31)
        );
    }

    #[test]
    fn gregorian_2000_exercises_shared_label() {
        // Epact 24: the paschal new moon is the April 5 duplicate where the
        // labels 24 and 25 share a day.
        assert_eq!(ymd(gregorian_easter(2000).unwrap().date), (2000, 4, 23));
    }

    #[test]
    fn gregorian_1900_full_moon_on_sunday() {
        // The 14th day of the lunation was itself a Sunday.
        assert_eq!(ymd(gregorian_easter(1900).unwrap().date), (1900, 4, 15));
    }

    #[test]
    fn gregorian_2011_tie_break_governs() {
        // Epact 25 with golden number 17: the tie-break mark governs.
        assert_eq!(ymd(gregorian_easter(2011).unwrap().date), (2011, 4, 24));
    }

    #[test]
    fn gregorian_1715_epact_25_low_golden() {
        // Epact 25 with golden number 6: the plain age governs.
        assert_eq!(ymd(gregorian_easter(1715).unwrap().date), (1715, 4, 21));
    }

    #[test]
    fn gregorian_full_moon_precedes_easter() {
        for year in [1999, 2000, 2023, 2024, 2025] {
            let result = gregorian_easter(year).unwrap();
            assert!(result.full_moon <= result.easter);
            assert!(result.equinox <= result.full_moon);
        }
    }

    #[test]
    fn julian_2023_as_gregorian() {
        let result = julian_easter(2023).unwrap();
        assert_eq!(ymd(result.gregorian_date), (2023, 4, 16));
        assert_eq!(result.easter, result.presumptive);
    }

    #[test]
    fn julian_2024_as_gregorian() {
        assert_eq!(
            ymd(julian_easter(2024).unwrap().gregorian_date),
            (2024, 5, 5)
        );
    }

    #[test]
    fn julian_2025_coincides_with_gregorian() {
        assert_eq!(
            ymd(julian_easter(2025).unwrap().gregorian_date),
            (2025, 4, 20)
        );
        assert_eq!(ymd(gregorian_easter(2025).unwrap().date), (2025, 4, 20));
    }

    #[test]
    fn julian_easter_never_precedes_passover() {
        for year in 1900..2100 {
            let result = julian_easter(year).unwrap();
            assert!(
                result.easter >= result.passover,
                "julian easter of {year} precedes passover"
            );
        }
    }

    #[test]
    fn facade_dispatch() {
        assert_eq!(
            ymd(easter(CalendarSystem::Gregorian, 2023).unwrap()),
            (2023, 4, 9)
        );
        assert_eq!(
            ymd(easter(CalendarSystem::Julian, 2023).unwrap()),
            (2023, 4, 16)
        );
    }

    #[test]
    fn out_of_range_year() {
        assert!(gregorian_easter(0).is_err());
        assert!(julian_easter(10_000).is_err());
    }
}
