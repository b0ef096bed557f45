//! # antikythera-hebrew
//!
//! The Hebrew Anno Mundi lunisolar calendar: molad arithmetic, Rosh
//! Hashanah with its postponement rules, the spring month boundaries, and
//! Passover.
//!
//! Time is reckoned in halakhim (1/1080 of an hour) since the epoch; the
//! first reckoned moon fell on day 2 at 5h 204ḥ, and every later molad is a
//! fixed month length (29d 12h 793ḥ) after the previous one. Everything
//! else — postponements, deficient and excessive years, the leap month —
//! is bookkeeping on top of that single multiplication.
//!
//! ## Quick Start
//!
//! ```ignore
//! use antikythera_hebrew::{am_at_pesach, pesach, rosh_hashanah};
//!
//! let am = am_at_pesach(2023); // 5783, valid for the spring window only
//! let start = pesach(am)?;     // JDN of 15 Nisan
//! let new_year = rosh_hashanah(am)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `units` | Halakhim units and the `Molad` instant |
//! | `molad` | Month counting and the molad of Tishrei |
//! | `new_year` | Rosh Hashanah and the postponement rules |
//! | `months` | Spring month boundaries and Passover |
//! | `days` | Day-table generation |
//! | `error` | Error types |

mod days;
mod error;
mod molad;
mod months;
mod new_year;
mod units;

pub use days::{HebrewDayEntry, HebrewMonth, year_days};
pub use error::HebrewError;
pub use molad::{
    FIRST_MOON, MAX_AM_YEAR, MIN_AM_YEAR, MONTH_LENGTH, is_leap_year, molad_tishrei,
    months_before_year,
};
pub use months::{MonthBoundaries, am_at_pesach, month_boundaries, pesach};
pub use new_year::rosh_hashanah;
pub use units::{HALAKHIM_PER_DAY, HALAKHIM_PER_HOUR, Molad, MoladParts, dhh_to_halakhim};
