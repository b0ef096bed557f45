//! Halakhim time units and conversions.
//!
//! The Hebrew calendar reckons time in halakhim, 1/1080 of an hour. A molad
//! instant can equivalently be read as total halakhim since the epoch or as
//! (weeks, days, hours, halakhim); the week form is the useful one because
//! the remaining days component reads off the day of the week directly.

/// Halakhim per hour.
pub const HALAKHIM_PER_HOUR: i64 = 1080;
/// Hours per day.
pub const HOURS_PER_DAY: i64 = 24;
/// Halakhim per day (25920).
pub const HALAKHIM_PER_DAY: i64 = HALAKHIM_PER_HOUR * HOURS_PER_DAY;

/// Converts a (days, hours, halakhim) triple to total halakhim.
pub const fn dhh_to_halakhim(days: i64, hours: i64, halakhim: i64) -> i64 {
    halakhim + HALAKHIM_PER_HOUR * (hours + HOURS_PER_DAY * days)
}

/// A mean lunar conjunction instant: halakhim elapsed since the Hebrew epoch.
///
/// The epoch falls a day and a half before the first reckoned moon; only the
/// moons matter here, never the epoch itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Molad(i64);

impl Molad {
    /// Wraps a total-halakhim count.
    pub fn new(halakhim: i64) -> Self {
        Self(halakhim)
    }

    /// Returns the total-halakhim count.
    pub fn halakhim(self) -> i64 {
        self.0
    }

    /// Returns the instant `days` whole days later.
    pub fn plus_days(self, days: i64) -> Self {
        Self(self.0 + days * HALAKHIM_PER_DAY)
    }

    /// Decomposes into (weeks, days, hours, halakhim).
    pub fn parts(self) -> MoladParts {
        let total_hours = self.0 / HALAKHIM_PER_HOUR;
        let halakhim = (self.0 % HALAKHIM_PER_HOUR) as u16;
        let total_days = total_hours / HOURS_PER_DAY;
        let hours = (total_hours % HOURS_PER_DAY) as u8;
        let weeks = total_days / 7;
        let days = (total_days % 7) as u8;
        MoladParts {
            weeks,
            days,
            hours,
            halakhim,
        }
    }
}

/// A molad instant decomposed into weeks, days, hours, and halakhim.
///
/// `days` is the day of the week in the epoch-relative encoding: the first
/// reckoned moon fell on day 2, a Monday, so 0 = Shabbat, 1 = Sunday, and
/// so on through 6 = Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoladParts {
    /// Whole weeks since the epoch.
    pub weeks: i64,
    /// Day of the week (0..=6, epoch-relative encoding).
    pub days: u8,
    /// Hour of the day (0..=23).
    pub hours: u8,
    /// Halakhim within the hour (0..=1079).
    pub halakhim: u16,
}
