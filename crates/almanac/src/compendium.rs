//! The event compendium: named occurrences of one Gregorian year.

use std::collections::BTreeMap;

use antikythera_computus::{gregorian_easter, julian_easter};
use antikythera_jd::JulianDay;

use crate::error::AlmanacError;

/// A named calendar occurrence, per reckoning where applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Event {
    /// The ecclesiastical vernal equinox, Gregorian March 21.
    GregorianEquinox,
    /// The Gregorian paschal full moon.
    GregorianFullMoon,
    /// Gregorian Easter Sunday.
    GregorianEaster,
    /// The ecclesiastical vernal equinox, Julian March 21.
    JulianEquinox,
    /// The Julian paschal full moon.
    JulianFullMoon,
    /// Julian Easter Sunday.
    JulianEaster,
    /// Passover Eve, 14 Nisan.
    PassoverEve,
    /// The start of Passover, 15 Nisan.
    Passover,
}

impl Event {
    /// Annotation label for renderers.
    pub fn label(self) -> &'static str {
        match self {
            Event::GregorianEquinox => "Gregorian Equinox",
            Event::GregorianFullMoon => "Gregorian Full Moon",
            Event::GregorianEaster => "Gregorian Easter",
            Event::JulianEquinox => "Julian Equinox",
            Event::JulianFullMoon => "Julian Full Moon",
            Event::JulianEaster => "Julian Easter",
            Event::PassoverEve => "Passover Eve",
            Event::Passover => "Passover",
        }
    }
}

/// The compendium: every event of a Gregorian year's spring, keyed by name.
pub type Compendium = BTreeMap<Event, JulianDay>;

/// Assembles the compendium for a Gregorian year.
///
/// Both Easter computations run once; the Passover entries fall out of the
/// Julian one, which already consults the Hebrew calculator.
///
/// # Errors
///
/// Returns [`AlmanacError`] on out-of-range years or on a calendar-data
/// inconsistency in the underlying scans.
pub fn compendium(year: i32) -> Result<Compendium, AlmanacError> {
    let gregorian = gregorian_easter(year)?;
    let julian = julian_easter(year)?;
    let mut events = BTreeMap::new();
    events.insert(Event::GregorianEquinox, gregorian.equinox);
    events.insert(Event::GregorianFullMoon, gregorian.full_moon);
    events.insert(Event::GregorianEaster, gregorian.easter);
    events.insert(Event::JulianEquinox, julian.equinox);
    events.insert(Event::JulianFullMoon, julian.full_moon);
    events.insert(Event::JulianEaster, julian.easter);
    events.insert(Event::PassoverEve, julian.passover.plus_days(-1));
    events.insert(Event::Passover, julian.passover);
    Ok(events)
}

/// Every event falling on the given absolute day.
pub fn consult(compendium: &Compendium, jd: JulianDay) -> Vec<Event> {
    compendium
        .iter()
        .filter(|(_, &day)| day == jd)
        .map(|(&event, _)| event)
        .collect()
}
