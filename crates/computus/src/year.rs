//! Per-year day tables: weekday from the dominical letter, new moons from
//! the governing epact.

use antikythera_jd::{CalendarSystem, CivilDate};

use crate::calendarium::{EpactLabel, calendarium};
use crate::epact::{golden_number, gregorian_epact, julian_epact};
use crate::error::ComputusError;

/// Dominical number of March 1 in the nominal table: day-of-year 60,
/// ((60 - 1) mod 7) + 1.
const MARCH_1_DOMINICAL: u8 = 4;

/// One day of a civil year, as seen by the Easter computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearDayEntry {
    /// Month (1..=12).
    pub month: u8,
    /// Day within the month.
    pub day: u8,
    /// Weekday (0 = Sunday).
    pub weekday: u8,
    /// True when a new moon of the governing lunation falls on this day.
    pub new_moon: bool,
}

/// The dominical letter of a year, as a number in 1..=7.
///
/// Derived rather than tabulated: the letter is whichever dominical number
/// falls on the year's Sundays, so it reads off the real weekday of any
/// anchor day. March 1 is the anchor because it sits past the bissextile
/// day, giving the letter that governs the Easter season in leap years too.
///
/// # Errors
///
/// Returns [`ComputusError`] if the year is outside the supported range.
pub fn dominical_letter(system: CalendarSystem, year: i32) -> Result<u8, ComputusError> {
    let jd = system.to_jd(CivilDate::new(year, 3, 1)?)?;
    let letter = (i32::from(MARCH_1_DOMINICAL) - i32::from(jd.weekday())).rem_euclid(7);
    Ok(if letter == 0 { 7 } else { letter as u8 })
}

/// Builds the 365-entry day table for a civil year.
///
/// Scans the calendarium, collapsing duplicate correction entries onto the
/// day they annotate. A day carries a new moon when any of its entries
/// matches the year's governing epact — the plain age normally, the
/// tie-break duplicates instead when the year has epact 25 with golden
/// number above 11 (which keeps the same lunar date from recurring in
/// consecutive years of the cycle).
///
/// # Errors
///
/// Returns [`ComputusError`] if the year is outside the supported range.
pub fn year_table(system: CalendarSystem, year: i32) -> Result<Vec<YearDayEntry>, ComputusError> {
    let letter = dominical_letter(system, year)?;
    let (epact, golden) = match system {
        CalendarSystem::Gregorian => (gregorian_epact(year), golden_number(year)),
        CalendarSystem::Julian => (julian_epact(year), golden_number(year - 2)),
    };
    let tie_break_governs = epact == 25 && golden > 11;

    let mut days: Vec<YearDayEntry> = Vec::with_capacity(365);
    for entry in calendarium() {
        let matches = match entry.epact {
            EpactLabel::Age(age) => !tie_break_governs && age == epact,
            EpactLabel::TieBreak => tie_break_governs,
        };
        if let Some(prev) = days.last_mut() {
            if prev.month == entry.month && prev.day == entry.day {
                // Duplicate correction entry: fold it onto its day.
                prev.new_moon |= matches;
                continue;
            }
        }
        days.push(YearDayEntry {
            month: entry.month,
            day: entry.day,
            weekday: (entry.dominical + 7 - letter) % 7,
            new_moon: matches,
        });
    }
    Ok(days)
}

/// Index of a (month, day) pair in a year table.
///
/// # Errors
///
/// Returns [`ComputusError::DayNotFound`] when the pair is absent — a
/// calendar-data inconsistency, since every table covers the full year.
pub fn find_day(table: &[YearDayEntry], month: u8, day: u8) -> Result<usize, ComputusError> {
    table
        .iter()
        .position(|e| e.month == month && e.day == day)
        .ok_or(ComputusError::DayNotFound { month, day })
}

/// Index of the first new-moon day at or after `start`.
///
/// # Errors
///
/// Returns [`ComputusError::NewMoonNotFound`] if the bounded scan exhausts
/// the table.
pub fn find_new_moon_at_or_after(
    table: &[YearDayEntry],
    start: usize,
) -> Result<usize, ComputusError> {
    let (month, day) = table
        .get(start)
        .or_else(|| table.last())
        .map_or((0, 0), |e| (e.month, e.day));
    table
        .get(start..)
        .unwrap_or(&[])
        .iter()
        .position(|e| e.new_moon)
        .map(|i| start + i)
        .ok_or(ComputusError::NewMoonNotFound { month, day })
}
