//! Closed-form conversions between civil dates and Julian Day Numbers.

use crate::date::{CalendarSystem, CivilDate, DAYS_PER_MONTH, MAX_YEAR, MIN_YEAR};
use crate::day::JulianDay;
use crate::error::JdError;

/// Smallest Julian Day Number the inverse conversion accepts
/// (Gregorian 1-01-01).
pub const MIN_JD: i64 = 1_721_426;
/// Largest Julian Day Number the inverse conversion accepts
/// (Gregorian 9999-12-31).
pub const MAX_JD: i64 = 5_373_484;

fn check_date(system: CalendarSystem, date: CivilDate) -> Result<(), JdError> {
    let year = date.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(JdError::YearOutOfRange { year });
    }
    if date.month() == 2 && date.day() == 29 && !system.is_leap_year(year) {
        return Err(JdError::InvalidDay {
            day: 29,
            month: 2,
            max_day: DAYS_PER_MONTH[2],
        });
    }
    Ok(())
}

/// Converts a Gregorian civil date to its Julian Day Number.
///
/// Fliegel–Van Flandern closed form; truncating integer division throughout,
/// no iteration. Valid across the whole supported year range.
///
/// # Errors
///
/// Returns [`JdError`] if the year is out of range or the date names a
/// February 29 the Gregorian reckoning does not have.
pub fn gregorian_to_jd(date: CivilDate) -> Result<JulianDay, JdError> {
    check_date(CalendarSystem::Gregorian, date)?;
    let y = i64::from(date.year());
    let m = i64::from(date.month());
    let d = i64::from(date.day());
    let a = (m - 14) / 12;
    let jd = (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075;
    Ok(JulianDay::new(jd))
}

/// Converts a Julian civil date to its Julian Day Number.
///
/// # Errors
///
/// Returns [`JdError`] if the year is out of range or the date names a
/// February 29 the Julian reckoning does not have.
pub fn julian_to_jd(date: CivilDate) -> Result<JulianDay, JdError> {
    check_date(CalendarSystem::Julian, date)?;
    let y = i64::from(date.year());
    let m = i64::from(date.month());
    let d = i64::from(date.day());
    let jd = 367 * y - (7 * (y + 5001 + (m - 9) / 7)) / 4 + (275 * m) / 9 + d + 1_729_777;
    Ok(JulianDay::new(jd))
}

/// Converts a Julian Day Number back to a Gregorian civil date.
///
/// Richards' closed-form inverse of [`gregorian_to_jd`].
///
/// # Errors
///
/// Returns [`JdError::JdOutOfRange`] outside [`MIN_JD`]..=[`MAX_JD`].
pub fn jd_to_gregorian(jd: JulianDay) -> Result<CivilDate, JdError> {
    let j = jd.get();
    if !(MIN_JD..=MAX_JD).contains(&j) {
        return Err(JdError::JdOutOfRange { jd: j });
    }
    let f = j + 1401 + (((4 * j + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    Ok(CivilDate::from_ymd_unchecked(
        year as i32,
        month as u8,
        day as u8,
    ))
}

/// Converting a Julian Day Number to a Julian civil date is not supported.
///
/// Nothing in the system needs this inverse: the Julian side only ever
/// converts *to* day numbers, and final reporting is Gregorian. The explicit
/// failure is preserved so a future caller cannot receive a silently wrong
/// date.
///
/// # Errors
///
/// Always returns [`JdError::JdToJulianUnsupported`].
pub fn jd_to_julian(jd: JulianDay) -> Result<CivilDate, JdError> {
    Err(JdError::JdToJulianUnsupported { jd: jd.get() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_epoch_2000() {
        let date = CivilDate::new(2000, 1, 1).unwrap();
        assert_eq!(gregorian_to_jd(date).unwrap().get(), 2_451_545);
    }

    #[test]
    fn gregorian_unix_epoch() {
        let date = CivilDate::new(1970, 1, 1).unwrap();
        assert_eq!(gregorian_to_jd(date).unwrap().get(), 2_440_588);
    }

    #[test]
    fn julian_thirteen_day_offset() {
        // In the 1900..2100 era the Julian calendar runs 13 days behind:
        // Julian 2023-03-28 is Gregorian 2023-04-10.
        let julian = CivilDate::new(2023, 3, 28).unwrap();
        let gregorian = CivilDate::new(2023, 4, 10).unwrap();
        assert_eq!(
            julian_to_jd(julian).unwrap(),
            gregorian_to_jd(gregorian).unwrap()
        );
    }

    #[test]
    fn inverse_of_epoch() {
        let date = jd_to_gregorian(JulianDay::new(2_451_545)).unwrap();
        assert_eq!(date.year(), 2000);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn round_trip_sampled() {
        let mut jd = MIN_JD;
        while jd <= MAX_JD {
            let date = jd_to_gregorian(JulianDay::new(jd)).unwrap();
            let back = gregorian_to_jd(date).unwrap();
            assert_eq!(back.get(), jd, "round trip failed at jd {jd}");
            jd += 997; // prime stride, covers month and year boundaries
        }
    }

    #[test]
    fn feb_29_rejected_in_non_leap_year() {
        let date = CivilDate::new(2023, 2, 29).unwrap();
        assert_eq!(
            gregorian_to_jd(date).unwrap_err(),
            JdError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn feb_29_accepted_in_leap_year() {
        let date = CivilDate::new(2024, 2, 29).unwrap();
        let jd = gregorian_to_jd(date).unwrap();
        let next = jd_to_gregorian(jd.plus_days(1)).unwrap();
        assert_eq!((next.month(), next.day()), (3, 1));
    }

    #[test]
    fn julian_feb_29_1900() {
        // 1900 is leap in the Julian reckoning but not the Gregorian.
        let date = CivilDate::new(1900, 2, 29).unwrap();
        assert!(julian_to_jd(date).is_ok());
        assert!(gregorian_to_jd(date).is_err());
    }

    #[test]
    fn jd_out_of_range() {
        assert_eq!(
            jd_to_gregorian(JulianDay::new(MIN_JD - 1)).unwrap_err(),
            JdError::JdOutOfRange { jd: MIN_JD - 1 }
        );
    }

    #[test]
    fn jd_to_julian_unsupported() {
        assert_eq!(
            jd_to_julian(JulianDay::new(2_451_545)).unwrap_err(),
            JdError::JdToJulianUnsupported { jd: 2_451_545 }
        );
    }

    #[test]
    fn range_extremes_round_trip() {
        for jd in [MIN_JD, MAX_JD] {
            let date = jd_to_gregorian(JulianDay::new(jd)).unwrap();
            assert_eq!(gregorian_to_jd(date).unwrap().get(), jd);
        }
    }
}
