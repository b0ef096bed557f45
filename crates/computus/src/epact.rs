//! Golden numbers, the Metonic cycle, and the epact equations.

/// The Metonic cycle of epacts, counting by 11 mod 30 but looping back
/// after 19 entries rather than the expected 30.
///
/// Classically the cycle is 1-based; the final entry is transposed to the
/// head so the table indexes directly by golden number mod 19.
const METONIC_CYCLE: [u8; 19] = [
    18, 0, 11, 22, 3, 14, 25, 6, 17, 28, 9, 20, 1, 12, 23, 4, 15, 26, 7,
];

/// A year's position in the 19-year Metonic cycle (1..=19).
pub fn golden_number(year: i32) -> u8 {
    let r = (year + 1).rem_euclid(19);
    if r == 0 { 19 } else { r as u8 }
}

/// The uncorrected Metonic epact for a golden number.
pub fn metonic_epact(golden: u8) -> u8 {
    METONIC_CYCLE[usize::from(golden % 19)]
}

/// Correction for the Metonic cycle's built-in inaccuracy: the ratio of a
/// lunar to a solar year is not actually rational. One day per 300 years
/// since 1500, with an extra bump to 8 per complete 2500-year block.
pub fn lunar_equation(year: i32) -> i64 {
    let y = i64::from(year) - 1500;
    8 * y.div_euclid(2500) + y.rem_euclid(2500) / 300
}

/// Correction for the leap years the Gregorian reform removed: one day per
/// omitted century leap year, three per 400-year block, from 1600 on.
pub fn solar_equation(year: i32) -> i64 {
    if year < 1600 {
        return 0;
    }
    let y = i64::from(year) - 1600;
    -3 * (y / 400) - (y % 400) / 100
}

/// The epact governing a Gregorian year.
///
/// By the time of the Gregorian reform the epacts had already slipped by
/// one day, hence the constant correction alongside the two equations.
pub fn gregorian_epact(year: i32) -> u8 {
    let raw = i64::from(metonic_epact(golden_number(year)))
        + 1
        + lunar_equation(year)
        + solar_equation(year);
    raw.rem_euclid(30) as u8
}

/// The epact governing a Julian year: the raw Metonic value at a two-year
/// offset, with no lunar or solar correction.
///
/// The offset is not derived here; it is validated against known Orthodox
/// Easter dates in the crate's tests.
pub fn julian_epact(year: i32) -> u8 {
    metonic_epact(golden_number(year - 2))
}
