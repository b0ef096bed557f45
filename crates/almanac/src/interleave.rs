//! Aligning the three calendars by absolute day.

use antikythera_hebrew::{HebrewDayEntry, am_at_pesach, year_days};
use antikythera_jd::{CalendarSystem, CivilDate, JulianDay, gregorian_to_jd};
use tracing::debug;

use crate::civil::{CivilDayEntry, civil_calendar};
use crate::compendium::{Event, compendium, consult};
use crate::error::AlmanacError;

/// One day of the interleaved calendar: the same absolute day as each
/// reckoning sees it, plus any events falling on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedDay {
    /// Absolute day index.
    pub jd: JulianDay,
    /// The day in the Julian reckoning.
    pub julian: CivilDayEntry,
    /// The day in the Gregorian reckoning.
    pub gregorian: CivilDayEntry,
    /// The day in the Hebrew reckoning.
    pub hebrew: HebrewDayEntry,
    /// Events falling on this day.
    pub events: Vec<Event>,
}

fn aligned_index<T>(
    table: &[T],
    jd_of: impl Fn(&T) -> JulianDay,
    target: JulianDay,
) -> Result<usize, AlmanacError> {
    table
        .iter()
        .position(|entry| jd_of(entry) == target)
        .ok_or(AlmanacError::AlignmentFailed { jd: target.get() })
}

/// Walks March 1 through May 31 of a Gregorian year, reading the aligned
/// entry from all three calendars at each step.
///
/// Each table is located once by the absolute day of Gregorian March 1;
/// from there the tables advance in lockstep, one entry per day. The
/// Hebrew year is the one containing the spring Passover.
///
/// # Errors
///
/// Returns [`AlmanacError::AlignmentFailed`] when a table does not cover
/// the window, or any underlying computation error.
pub fn interleave(year: i32) -> Result<Vec<AlignedDay>, AlmanacError> {
    let start = gregorian_to_jd(CivilDate::new(year, 3, 1)?)?;
    let end = gregorian_to_jd(CivilDate::new(year, 5, 31)?)?;

    let julian = civil_calendar(CalendarSystem::Julian, year)?;
    let gregorian = civil_calendar(CalendarSystem::Gregorian, year)?;
    let hebrew = year_days(am_at_pesach(year))?;
    let events = compendium(year)?;

    let i_julian = aligned_index(&julian, |e| e.jd, start)?;
    let i_gregorian = aligned_index(&gregorian, |e| e.jd, start)?;
    let i_hebrew = aligned_index(&hebrew, |e| e.jd, start)?;
    debug!(
        year,
        start = start.get(),
        end = end.get(),
        julian_offset = i_julian as i64 - i_gregorian as i64,
        hebrew_offset = i_hebrew as i64 - i_gregorian as i64,
        "aligned calendars"
    );

    let span = end.days_since(start) as usize;
    let mut days = Vec::with_capacity(span + 1);
    for step in 0..=span {
        let jd = start.plus_days(step as i64);
        let julian_entry = julian
            .get(i_julian + step)
            .ok_or(AlmanacError::AlignmentFailed { jd: jd.get() })?;
        let gregorian_entry = gregorian
            .get(i_gregorian + step)
            .ok_or(AlmanacError::AlignmentFailed { jd: jd.get() })?;
        let hebrew_entry = hebrew
            .get(i_hebrew + step)
            .ok_or(AlmanacError::AlignmentFailed { jd: jd.get() })?;
        days.push(AlignedDay {
            jd,
            julian: *julian_entry,
            gregorian: *gregorian_entry,
            hebrew: *hebrew_entry,
            events: consult(&events, jd),
        });
    }
    Ok(days)
}
