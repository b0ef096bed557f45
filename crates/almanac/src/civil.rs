//! Civil-calendar day sequences with weekday and moon phase.

use antikythera_computus::{find_day, find_new_moon_at_or_after, year_table};
use antikythera_jd::{CalendarSystem, CivilDate, JulianDay};
use tracing::debug;

use crate::error::AlmanacError;
use crate::moon::{MoonPhase, PhaseTracker};

/// One day of a civil calendar, aligned to the absolute day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDayEntry {
    /// Absolute day index.
    pub jd: JulianDay,
    /// Month (1..=12).
    pub month: u8,
    /// Day within the month.
    pub day: u8,
    /// Weekday (0 = Sunday).
    pub weekday: u8,
    /// Moon phase on this day.
    pub phase: MoonPhase,
}

/// Generates the February 1 – June 1 day sequence for a civil year.
///
/// Weekdays come from the year table; moon phase is tracked continuously,
/// seeded from the new moon nearest January 3 and re-anchored on every
/// tabulated new moon.
///
/// In leap years the intercalary day is the doubled February 24, not an
/// inserted February 29: weekdays up to February 23 shift back one, and
/// February 24 is emitted twice — first the extra copy with the doubled
/// shift, then the normal copy — with the moon phase carried through
/// unchanged.
///
/// # Errors
///
/// Returns [`AlmanacError`] on out-of-range years or on a calendar-data
/// inconsistency in the underlying table.
pub fn civil_calendar(
    system: CalendarSystem,
    year: i32,
) -> Result<Vec<CivilDayEntry>, AlmanacError> {
    let table = year_table(system, year)?;
    let leap = system.is_leap_year(year);

    let i_january_3 = find_day(&table, 1, 3)?;
    let i_february_1 = find_day(&table, 2, 1)?;
    let i_june_1 = find_day(&table, 6, 1)?;
    let i_new_moon = find_new_moon_at_or_after(&table, i_january_3)?;

    let mut tracker = PhaseTracker::seed(table[i_new_moon].day);
    let mut jd = system.to_jd(CivilDate::new(year, 2, 1)?)?;
    debug!(
        system = system.name(),
        year,
        leap,
        start_jd = jd.get(),
        "generating civil calendar"
    );

    let mut days = Vec::with_capacity(i_june_1 - i_february_1 + 1);
    for entry in &table[i_february_1..i_june_1] {
        if entry.new_moon {
            tracker.reset();
        }
        let mut weekday = entry.weekday;
        if leap {
            if entry.month < 2 || (entry.month == 2 && entry.day < 24) {
                weekday = (weekday + 6) % 7;
            }
            if entry.month == 2 && entry.day == 24 {
                days.push(CivilDayEntry {
                    jd,
                    month: entry.month,
                    day: entry.day,
                    weekday: (weekday + 6) % 7,
                    phase: tracker.phase(),
                });
                jd = jd.plus_days(1);
            }
        }
        days.push(CivilDayEntry {
            jd,
            month: entry.month,
            day: entry.day,
            weekday,
            phase: tracker.phase(),
        });
        tracker.advance();
        jd = jd.plus_days(1);
    }
    Ok(days)
}
