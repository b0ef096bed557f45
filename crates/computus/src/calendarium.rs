//! The calendarium: the immutable liturgical lookup table.
//!
//! One pass over a generic non-leap year assigns every day a dominical
//! letter (cycling 1..=7) and an epact label (counting down 29..=0,
//! wrapping). The epact labels mark where a year's new moons fall: a year
//! governed by epact e has its new moons on the days labelled e.

use std::sync::LazyLock;

/// An epact label on a calendarium day.
///
/// The classical table writes most labels as plain moon ages, but the
/// 24/25 conflict days carry a distinct mark (the "25" written in Arabic
/// numerals beside the Roman xxv). The mark gets its own variant so no
/// consumer can mistake it for a real age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpactLabel {
    /// A plain epact value in 0..=29.
    Age(u8),
    /// The tie-break mark distinguishing two new moons eight years apart
    /// in the 19-year cycle that would otherwise share a label.
    TieBreak,
}

/// One entry of the calendarium.
///
/// The table carries duplicate entries for correction days, so a (month,
/// day) pair may appear more than once and entries must be scanned, never
/// indexed by ordinal day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendariumEntry {
    /// Month (1..=12).
    pub month: u8,
    /// Day within the month.
    pub day: u8,
    /// Dominical letter as a number (1..=7, cycling from January 1 = 1).
    pub dominical: u8,
    /// Epact label for this day.
    pub epact: EpactLabel,
}

/// Days in each month of the generic non-leap liturgical year.
fn month_length(month: u8) -> u8 {
    match month {
        2 => 28,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 30,
    }
}

static CALENDARIUM: LazyLock<Vec<CalendariumEntry>> = LazyLock::new(build_calendarium);

/// The calendarium, built once per process and never mutated.
pub fn calendarium() -> &'static [CalendariumEntry] {
    &CALENDARIUM
}

fn build_calendarium() -> Vec<CalendariumEntry> {
    let mut table = Vec::with_capacity(400);
    let mut month: u8 = 1;
    let mut day: u8 = 1;
    let mut dominical: u8 = 1;
    let mut epact: u8 = 0;
    let mut odd_lunation = true;

    for _ in 0..365 {
        table.push(CalendariumEntry {
            month,
            day,
            dominical,
            epact: EpactLabel::Age(epact),
        });

        // 24/25 conflict resolution: the tie-break mark lands on 25 in odd
        // lunations and on 26 in even ones.
        if (odd_lunation && epact == 25) || (!odd_lunation && epact == 26) {
            table.push(CalendariumEntry {
                month,
                day,
                dominical,
                epact: EpactLabel::TieBreak,
            });
        }

        // In even (hollow) lunations 24 and 25 share a day: drop the
        // counter and label the same day again.
        if !odd_lunation && epact == 25 {
            epact -= 1;
            table.push(CalendariumEntry {
                month,
                day,
                dominical,
                epact: EpactLabel::Age(epact),
            });
        }

        day += 1;
        if day > month_length(month) {
            day = 1;
            month += 1;
            odd_lunation = !odd_lunation;
        }

        dominical += 1;
        if dominical == 8 {
            dominical = 1;
        }

        epact = if epact == 0 { 29 } else { epact - 1 };
    }

    table
}
