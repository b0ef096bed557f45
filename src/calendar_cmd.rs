use anyhow::{Context, Result};
use antikythera_almanac::civil_calendar;
use antikythera_jd::CalendarSystem;
use tracing::info;

use crate::cli::{CalendarArgs, SystemArg};
use crate::config::AntikytheraConfig;
use crate::render::{month_name, weekday_name};

/// Run the `calendar` subcommand.
pub fn run(args: &CalendarArgs, config: &AntikytheraConfig) -> Result<()> {
    let system = config.system(args.system)?;
    if matches!(system, SystemArg::Gregorian | SystemArg::Both) {
        print_calendar(CalendarSystem::Gregorian, args.year, config)?;
    }
    if matches!(system, SystemArg::Julian | SystemArg::Both) {
        print_calendar(CalendarSystem::Julian, args.year, config)?;
    }
    Ok(())
}

fn print_calendar(system: CalendarSystem, year: i32, config: &AntikytheraConfig) -> Result<()> {
    let long = config.long_weekdays()?;
    info!(system = system.name(), year, "tabulating civil calendar");
    let days = civil_calendar(system, year)
        .with_context(|| format!("{} calendar of {year} failed", system.name()))?;
    println!("{} {year}", system.name());
    for day in days {
        println!(
            "{} {} {:2}  {}",
            weekday_name(day.weekday, long),
            &month_name(day.month)[..3],
            day.day,
            day.phase.name()
        );
    }
    Ok(())
}
