//! # antikythera-computus
//!
//! The traditional Easter computation for the Julian and Gregorian
//! reckonings: the calendarium lookup table, the Metonic-cycle epact
//! machinery, per-year day tables, and the paschal scans.
//!
//! The flow is a pipeline of small steps:
//!
//! ```text
//!  ┌─────────────┐    ┌──────────────┐    ┌─────────────┐    ┌──────────┐
//!  │ calendarium  │───▶│ epact/golden │───▶│ year table  │───▶│  easter  │
//!  │ (built once) │    │  equations   │    │ (weekday,   │    │  scans   │
//!  └─────────────┘    └──────────────┘    │  new moons)  │    └──────────┘
//!                                          └─────────────┘
//! ```
//!
//! The Julian variant additionally floors its result at Passover, computed
//! by the `antikythera-hebrew` crate.
//!
//! ## Quick start
//!
//! ```ignore
//! use antikythera_computus::easter;
//! use antikythera_jd::CalendarSystem;
//!
//! let date = easter(CalendarSystem::Gregorian, 2023)?;
//! assert_eq!((date.month(), date.day()), (4, 9));
//! ```

mod calendarium;
mod easter;
mod epact;
mod error;
mod year;

pub use calendarium::{CalendariumEntry, EpactLabel, calendarium};
pub use easter::{GregorianEaster, JulianEaster, easter, gregorian_easter, julian_easter};
pub use epact::{
    golden_number, gregorian_epact, julian_epact, lunar_equation, metonic_epact, solar_equation,
};
pub use error::ComputusError;
pub use year::{
    YearDayEntry, dominical_letter, find_day, find_new_moon_at_or_after, year_table,
};
