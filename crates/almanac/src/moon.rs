//! Moon phases and the continuous phase tracker.

/// The eight phases of the moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoonPhase {
    /// New moon.
    New = 0,
    /// Waxing crescent.
    WaxingCrescent = 1,
    /// First quarter.
    FirstQuarter = 2,
    /// Waxing gibbous.
    WaxingGibbous = 3,
    /// Full moon.
    Full = 4,
    /// Waning gibbous.
    WaningGibbous = 5,
    /// Last quarter.
    LastQuarter = 6,
    /// Waning crescent.
    WaningCrescent = 7,
}

impl MoonPhase {
    /// All eight phases in cycle order.
    pub const ALL: [MoonPhase; 8] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Zero-based index of this phase (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Phase for an index, taken mod 8.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 8)]
    }

    /// The next phase in the cycle, wrapping after the waning crescent.
    pub fn next(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    /// Human-readable phase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

/// Continuous moon-phase state across a day sequence.
///
/// Phases alternate four- and five-day durations through the counter; every
/// tabulated new moon overrides the running state, pulling the cycle back
/// into sync with the ecclesiastical moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTracker {
    phase: MoonPhase,
    day_of_phase: u8,
}

impl PhaseTracker {
    /// Seeds the tracker from the day-of-month of the January new moon
    /// nearest the year's start.
    ///
    /// The age of the moon at month's end is `32 - day`; the rest is the
    /// coarse 3.5-days-per-phase split of the source, kept in exact integer
    /// form (`2x / 7` and `(2x mod 7) / 2`).
    pub fn seed(new_moon_day: u8) -> Self {
        let day_of_lunation = 32 - i32::from(new_moon_day);
        let x = 2 * (day_of_lunation + 4);
        let index = x / 7;
        let phase = if index >= 8 {
            MoonPhase::New
        } else {
            MoonPhase::from_index(index as u8)
        };
        Self {
            phase,
            day_of_phase: ((x % 7) / 2 + 1) as u8,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> MoonPhase {
        self.phase
    }

    /// Forces the state back to a new moon.
    pub fn reset(&mut self) {
        self.phase = MoonPhase::New;
        self.day_of_phase = 1;
    }

    /// Advances one day; the rollover threshold `5 - (phase mod 2)`
    /// alternates the phase lengths.
    pub fn advance(&mut self) {
        self.day_of_phase += 1;
        if usize::from(self.day_of_phase) == 5 - self.phase.as_index() % 2 {
            self.day_of_phase = 1;
            self.phase = self.phase.next();
        }
    }
}
