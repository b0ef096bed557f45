//! Civil dates and the two supported calendar systems.

use crate::error::JdError;

/// First supported year, both calendar systems.
pub const MIN_YEAR: i32 = 1;
/// Last supported year, both calendar systems.
pub const MAX_YEAR: i32 = 9999;

/// Number of days in each month of a non-leap year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The two civil calendar reckonings the system computes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    /// The Julian reckoning: every fourth year is leap.
    Julian,
    /// The Gregorian reckoning: century years are leap only when divisible
    /// by 400.
    Gregorian,
}

impl CalendarSystem {
    /// Returns true when `year` is a leap year under this reckoning.
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            CalendarSystem::Julian => year % 4 == 0,
            CalendarSystem::Gregorian => {
                if year % 100 == 0 {
                    year % 400 == 0
                } else {
                    year % 4 == 0
                }
            }
        }
    }

    /// Converts a civil date in this reckoning to its Julian Day Number.
    ///
    /// # Errors
    ///
    /// Returns [`JdError`] if the date is invalid or out of range.
    pub fn to_jd(self, date: CivilDate) -> Result<crate::JulianDay, JdError> {
        match self {
            CalendarSystem::Julian => crate::julian_to_jd(date),
            CalendarSystem::Gregorian => crate::gregorian_to_jd(date),
        }
    }

    /// Human-readable name of the reckoning.
    pub fn name(self) -> &'static str {
        match self {
            CalendarSystem::Julian => "Julian",
            CalendarSystem::Gregorian => "Gregorian",
        }
    }
}

/// A (year, month, day) triple in some named calendar system.
///
/// The system is not part of the value; dates from different systems are
/// only comparable after conversion to a [`JulianDay`](crate::JulianDay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// February 29 is accepted here; whether it exists in a given year is a
    /// property of the calendar system and is checked at conversion time.
    ///
    /// # Errors
    ///
    /// Returns [`JdError`] if the year is out of the supported range, the
    /// month is not in 1..=12, or the day is impossible for the month in
    /// any year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, JdError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(JdError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(JdError::InvalidMonth { month });
        }
        let max_day = if month == 2 {
            29
        } else {
            DAYS_PER_MONTH[month as usize]
        };
        if !(1..=max_day).contains(&day) {
            return Err(JdError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Constructs without validation. Callers guarantee the fields came from
    /// a validated source (the closed-form inverse only produces real dates).
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }
}
