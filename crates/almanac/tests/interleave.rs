use antikythera_almanac::{Event, MoonPhase, civil_calendar, compendium, interleave};
use antikythera_jd::CalendarSystem;

#[test]
fn alignment_succeeds_across_years() {
    // Leap and non-leap, in both civil calendars, with the Hebrew table's
    // own leap month in 5784 (spring of 2024).
    for year in 2020..2030 {
        let days = interleave(year).unwrap();
        assert_eq!(days.len(), 92, "wrong window length for {year}");
        for day in &days {
            assert_eq!(day.julian.jd, day.jd);
            assert_eq!(day.gregorian.jd, day.jd);
            assert_eq!(day.hebrew.jd, day.jd);
        }
    }
}

#[test]
fn march_first_2024_aligns_exactly_once() {
    let days = interleave(2024).unwrap();
    let matches = days
        .iter()
        .filter(|d| (d.gregorian.month, d.gregorian.day) == (3, 1))
        .count();
    assert_eq!(matches, 1);
    assert_eq!(days[0].jd.get(), 2_460_371);
}

#[test]
fn phases_stay_in_cycle_and_reset_on_new_moons() {
    for year in [2023, 2024] {
        for system in [CalendarSystem::Julian, CalendarSystem::Gregorian] {
            let days = civil_calendar(system, year).unwrap();
            for day in &days {
                assert!(day.phase.as_index() < 8);
            }
            // At least one new moon resets the cycle inside the window.
            assert!(
                days.iter().any(|d| d.phase == MoonPhase::New),
                "no new moon in {year} {}",
                system.name()
            );
        }
    }
}

#[test]
fn passover_annotations_2024() {
    let days = interleave(2024).unwrap();
    let passover = days
        .iter()
        .find(|d| d.events.contains(&Event::Passover))
        .expect("passover missing from window");
    // Pesach 5784 began on Gregorian 2024-04-23.
    assert_eq!((passover.gregorian.month, passover.gregorian.day), (4, 23));
    let eve = days
        .iter()
        .find(|d| d.events.contains(&Event::PassoverEve))
        .expect("passover eve missing from window");
    assert_eq!(eve.jd.plus_days(1), passover.jd);
}

#[test]
fn hebrew_dates_in_spring_2024() {
    // 2024-03-01 fell in Adar I of the leap year 5784.
    let days = interleave(2024).unwrap();
    let first = &days[0];
    assert_eq!(first.hebrew.month.name(), "Adar I");
    assert_eq!(first.hebrew.day, 21);
}

#[test]
fn compendium_and_interleave_agree() {
    for year in [2023, 2024, 2025] {
        let events = compendium(year).unwrap();
        let days = interleave(year).unwrap();
        for day in &days {
            for event in &day.events {
                assert_eq!(events[event], day.jd, "{event:?} misplaced in {year}");
            }
        }
    }
}

#[test]
fn easter_sunday_annotated_on_a_sunday() {
    for year in [2023, 2024, 2025] {
        let days = interleave(year).unwrap();
        for day in &days {
            if day.events.contains(&Event::GregorianEaster) {
                assert_eq!(day.gregorian.weekday, 0, "easter not sunday in {year}");
            }
            if day.events.contains(&Event::JulianEaster) {
                assert_eq!(day.julian.weekday, 0, "julian easter not sunday in {year}");
            }
        }
    }
}
