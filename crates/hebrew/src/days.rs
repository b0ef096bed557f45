//! Day-table generation for the spring months.

use antikythera_jd::JulianDay;

use crate::error::HebrewError;
use crate::months::month_boundaries;

/// The spring months covered by the day table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HebrewMonth {
    /// Shevat, 30 days.
    Shevat = 0,
    /// Adar I, 30 days; leap years only.
    AdarI = 1,
    /// Adar (Adar II in leap years), 29 days.
    Adar = 2,
    /// Nisan, 30 days.
    Nisan = 3,
    /// Iyar, 29 days.
    Iyar = 4,
    /// Sivan, 30 days.
    Sivan = 5,
}

impl HebrewMonth {
    /// Human-readable month name.
    pub fn name(self) -> &'static str {
        match self {
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
        }
    }
}

/// One day of the Hebrew calendar, aligned to the absolute day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewDayEntry {
    /// Absolute day index.
    pub jd: JulianDay,
    /// Month this day belongs to.
    pub month: HebrewMonth,
    /// Day within the month (1..=30).
    pub day: u8,
    /// Weekday (0 = Sunday).
    pub weekday: u8,
}

/// Generates the contiguous day table from 1 Shevat through 30 Sivan.
///
/// The window brackets the Gregorian March–May interleaving span in every
/// supported year. Month lengths are fixed (30/30/29/30/29/30); all length
/// variation of the Hebrew year lives before Shevat and is absorbed by the
/// boundary computation.
///
/// # Errors
///
/// Returns [`HebrewError::YearOutOfRange`] outside the supported range.
pub fn year_days(year: i32) -> Result<Vec<HebrewDayEntry>, HebrewError> {
    let bounds = month_boundaries(year)?;
    let mut months: Vec<(JulianDay, HebrewMonth, u8)> = Vec::with_capacity(6);
    months.push((bounds.shevat, HebrewMonth::Shevat, 30));
    if let Some(adar_i) = bounds.adar_i {
        months.push((adar_i, HebrewMonth::AdarI, 30));
    }
    months.push((bounds.adar, HebrewMonth::Adar, 29));
    months.push((bounds.nisan, HebrewMonth::Nisan, 30));
    months.push((bounds.iyar, HebrewMonth::Iyar, 29));
    months.push((bounds.sivan, HebrewMonth::Sivan, 30));

    let mut days = Vec::with_capacity(178);
    for (start, month, length) in months {
        for offset in 0..length {
            let jd = start.plus_days(i64::from(offset));
            days.push(HebrewDayEntry {
                jd,
                month,
                day: offset + 1,
                weekday: jd.weekday(),
            });
        }
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names() {
        assert_eq!(HebrewMonth::Shevat.name(), "Shevat");
        assert_eq!(HebrewMonth::AdarI.name(), "Adar I");
    }

    #[test]
    fn table_length_regular_year() {
        // 30 + 29 + 30 + 29 + 30 without Adar I.
        assert_eq!(year_days(5783).unwrap().len(), 148);
    }

    #[test]
    fn table_length_leap_year() {
        assert_eq!(year_days(5784).unwrap().len(), 178);
    }

    #[test]
    fn table_is_jd_contiguous() {
        let days = year_days(5784).unwrap();
        for pair in days.windows(2) {
            assert_eq!(
                pair[1].jd.days_since(pair[0].jd),
                1,
                "gap after {} {}",
                pair[0].month.name(),
                pair[0].day
            );
        }
    }

    #[test]
    fn passover_is_nisan_15() {
        let days = year_days(5783).unwrap();
        let pesach = crate::months::pesach(5783).unwrap();
        let entry = days.iter().find(|d| d.jd == pesach).unwrap();
        assert_eq!(entry.month, HebrewMonth::Nisan);
        assert_eq!(entry.day, 15);
    }

    #[test]
    fn weekdays_cycle() {
        let days = year_days(5783).unwrap();
        for pair in days.windows(2) {
            assert_eq!(pair[1].weekday, (pair[0].weekday + 1) % 7);
        }
    }
}
