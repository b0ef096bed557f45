use antikythera_computus::{easter, golden_number, gregorian_easter, julian_easter};
use antikythera_jd::CalendarSystem;

#[test]
fn known_gregorian_easters() {
    // Western Easter dates, own calendar.
    let cases: &[(i32, u8, u8)] = &[
        (1818, 3, 22), // earliest possible
        (1886, 4, 25), // latest possible
        (1900, 4, 15),
        (1999, 4, 4),
        (2000, 4, 23),
        (2011, 4, 24),
        (2023, 4, 9),
        (2024, 3, 31),
        (2025, 4, 20),
        (2038, 4, 25),
    ];
    for &(year, month, day) in cases {
        let date = easter(CalendarSystem::Gregorian, year).unwrap();
        assert_eq!(
            (date.month(), date.day()),
            (month, day),
            "wrong gregorian easter for {year}"
        );
    }
}

#[test]
fn known_julian_easters_as_gregorian() {
    // Orthodox Easter dates expressed in the Gregorian calendar.
    let cases: &[(i32, u8, u8)] = &[
        (2021, 5, 2),
        (2022, 4, 24),
        (2023, 4, 16),
        (2024, 5, 5),
        (2025, 4, 20),
    ];
    for &(year, month, day) in cases {
        let date = easter(CalendarSystem::Julian, year).unwrap();
        assert_eq!(
            (date.month(), date.day()),
            (month, day),
            "wrong julian easter for {year}"
        );
    }
}

#[test]
fn gregorian_easter_bounds() {
    // March 22 through April 25, inclusive, across the whole era.
    for year in 1583..3000 {
        let date = gregorian_easter(year).unwrap().date;
        let in_bounds = match date.month() {
            3 => date.day() >= 22,
            4 => date.day() <= 25,
            _ => false,
        };
        assert!(
            in_bounds,
            "easter of {year} out of bounds: {}-{}",
            date.month(),
            date.day()
        );
    }
}

#[test]
fn easter_falls_on_sunday() {
    // Both reckonings calibrate their weekday-0 days from the absolute day
    // count, so Easter is a real-world Sunday in each.
    for year in [1700, 1900, 2023, 2024, 2100] {
        assert_eq!(gregorian_easter(year).unwrap().easter.weekday(), 0);
        let julian = julian_easter(year).unwrap();
        assert_eq!(julian.presumptive.weekday(), 0);
        assert_eq!(julian.easter.weekday(), 0);
    }
}

#[test]
fn julian_easter_at_or_after_passover() {
    for year in 1583..2200 {
        let result = julian_easter(year).unwrap();
        assert!(
            result.easter >= result.passover,
            "julian easter of {year} precedes passover start"
        );
        assert_eq!(result.easter.days_since(result.presumptive) % 7, 0);
    }
}

#[test]
fn golden_number_cycle() {
    assert_eq!(golden_number(1), 2);
    assert_eq!(golden_number(19), 1);
    for year in 1..100 {
        assert_eq!(golden_number(year + 19), golden_number(year));
    }
}

#[test]
fn julian_easter_never_before_gregorian() {
    // From 1583 on the Julian reckoning's Easter, as an absolute day, is
    // never earlier than the Gregorian one for the same spring.
    for year in 1583..2100 {
        let julian = julian_easter(year).unwrap().easter;
        let gregorian = gregorian_easter(year).unwrap().easter;
        assert!(
            julian >= gregorian,
            "julian easter of {year} before gregorian"
        );
    }
}
