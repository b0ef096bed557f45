//! Rosh Hashanah and the postponement rules.

use antikythera_jd::JulianDay;
use tracing::debug;

use crate::error::HebrewError;
use crate::molad::{is_leap_year, molad_tishrei};

/// Day count from the week-based epoch reckoning to the Julian Day Number.
const AM_EPOCH_OFFSET: i64 = 347_996;

/// The Julian Day Number on which an Anno Mundi year begins.
///
/// Starts from the molad of Tishrei and applies the four postponement rules
/// in strict sequence; each may act on an already-postponed value and each
/// adds exactly one day:
///
/// 1. The molad falls at or after hour 18 of its day.
/// 2. The year is not leap and the molad falls on day 3 at or after
///    9h 204ḥ.
/// 3. The year immediately follows a leap year and the molad falls on day 2
///    at or after 15h 589ḥ.
/// 4. The resulting day of the week is 1, 4, or 6 — days on which the year
///    may not begin, lest festivals later in the year land on forbidden
///    weekdays.
///
/// Day numbers use the epoch-relative encoding (0 = Shabbat, 1 = Sunday).
///
/// # Errors
///
/// Returns [`HebrewError::YearOutOfRange`] outside the supported range.
pub fn rosh_hashanah(year: i32) -> Result<JulianDay, HebrewError> {
    let mut molad = molad_tishrei(year)?;

    if molad.parts().hours >= 18 {
        molad = molad.plus_days(1);
    }
    let p = molad.parts();
    if !is_leap_year(year) && p.days == 3 && (p.hours > 9 || (p.hours == 9 && p.halakhim >= 204)) {
        molad = molad.plus_days(1);
    }
    let p = molad.parts();
    if is_leap_year(year - 1)
        && p.days == 2
        && (p.hours > 15 || (p.hours == 15 && p.halakhim >= 589))
    {
        molad = molad.plus_days(1);
    }
    let p = molad.parts();
    if matches!(p.days, 1 | 4 | 6) {
        molad = molad.plus_days(1);
    }

    let parts = molad.parts();
    let jd = JulianDay::new(parts.weeks * 7 + i64::from(parts.days) + AM_EPOCH_OFFSET);
    debug!(year, jd = jd.get(), day_of_week = parts.days, "rosh hashanah");
    Ok(jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rosh_hashanah_5784() {
        // Gregorian 2023-09-16, a Saturday; the molad lands on day 6 and
        // rule 4 postpones it.
        assert_eq!(rosh_hashanah(5784).unwrap().get(), 2_460_204);
    }

    #[test]
    fn rosh_hashanah_5783() {
        // Gregorian 2022-09-26; no rule fires.
        assert_eq!(rosh_hashanah(5783).unwrap().get(), 2_459_849);
    }

    #[test]
    fn rosh_hashanah_5785() {
        // Gregorian 2024-10-03.
        assert_eq!(rosh_hashanah(5785).unwrap().get(), 2_460_587);
    }

    #[test]
    fn weekday_never_forbidden() {
        // Rule 4 bars day 1, 4, and 6; in Julian-Day weekday terms
        // (0 = Sunday) that is Sunday, Wednesday, and Friday.
        for year in 5500..5800 {
            let weekday = rosh_hashanah(year).unwrap().weekday();
            assert!(
                !matches!(weekday, 0 | 3 | 5),
                "rosh hashanah of {year} fell on forbidden weekday {weekday}"
            );
        }
    }

    #[test]
    fn year_lengths_are_canonical() {
        // Deficient, regular, or excessive; plus 30 for leap years.
        for year in 5000..5300 {
            let len = rosh_hashanah(year + 1)
                .unwrap()
                .days_since(rosh_hashanah(year).unwrap());
            let expected: &[i64] = if is_leap_year(year) {
                &[383, 384, 385]
            } else {
                &[353, 354, 355]
            };
            assert!(
                expected.contains(&len),
                "year {year} has impossible length {len}"
            );
        }
    }

    #[test]
    fn out_of_range_year() {
        assert!(rosh_hashanah(0).is_err());
    }
}
