use anyhow::{Context, Result};
use antikythera_almanac::{AlignedDay, interleave};
use tracing::info;

use crate::cli::InterleaveArgs;
use crate::config::AntikytheraConfig;
use crate::render::{month_name, weekday_name};

/// Run the `interleave` subcommand.
pub fn run(args: &InterleaveArgs, config: &AntikytheraConfig) -> Result<()> {
    let long = config.long_weekdays()?;
    info!(year = args.year, "interleaving calendars");
    let days =
        interleave(args.year).with_context(|| format!("interleaving {} failed", args.year))?;
    info!(n_days = days.len(), "calendars aligned");
    for day in days {
        print_day(&day, long, config.output.annotations);
    }
    Ok(())
}

fn print_day(day: &AlignedDay, long: bool, annotations: bool) {
    println!("Day {}", day.jd.get());
    println!(
        "J {} {} {:2}  {}",
        weekday_name(day.julian.weekday, long),
        &month_name(day.julian.month)[..3],
        day.julian.day,
        day.julian.phase.name()
    );
    println!(
        "G {} {} {:2}  {}",
        weekday_name(day.gregorian.weekday, long),
        &month_name(day.gregorian.month)[..3],
        day.gregorian.day,
        day.gregorian.phase.name()
    );
    println!(
        "H {} {} {:2}",
        weekday_name(day.hebrew.weekday, long),
        day.hebrew.month.name(),
        day.hebrew.day
    );
    if annotations {
        for event in &day.events {
            println!("{}!", event.label());
        }
    }
    println!();
}
