use anyhow::{Context, Result};
use antikythera_computus::{gregorian_easter, julian_easter};
use antikythera_jd::jd_to_gregorian;

use crate::cli::{EasterArgs, SystemArg};
use crate::config::AntikytheraConfig;
use crate::render::format_date;

/// Run the `easter` subcommand.
pub fn run(args: &EasterArgs, config: &AntikytheraConfig) -> Result<()> {
    let system = config.system(args.system)?;
    if matches!(system, SystemArg::Gregorian | SystemArg::Both) {
        print_gregorian(args.year)?;
    }
    if matches!(system, SystemArg::Julian | SystemArg::Both) {
        print_julian(args.year)?;
    }
    Ok(())
}

fn print_gregorian(year: i32) -> Result<()> {
    let result =
        gregorian_easter(year).with_context(|| format!("gregorian easter of {year} failed"))?;
    let full_moon = jd_to_gregorian(result.full_moon)?;
    println!("Gregorian Easter: {}", format_date(result.date));
    println!("  paschal full moon {}", format_date(full_moon));
    Ok(())
}

fn print_julian(year: i32) -> Result<()> {
    let result = julian_easter(year).with_context(|| format!("julian easter of {year} failed"))?;
    println!(
        "Julian Easter: {} (Gregorian)",
        format_date(result.gregorian_date)
    );
    println!(
        "  paschal full moon {}",
        format_date(jd_to_gregorian(result.full_moon)?)
    );
    println!(
        "  passover begins {}",
        format_date(jd_to_gregorian(result.passover)?)
    );
    if result.easter != result.presumptive {
        let weeks = result.easter.days_since(result.presumptive) / 7;
        println!(
            "  deferred {weeks} week(s) past the presumptive {}",
            format_date(jd_to_gregorian(result.presumptive)?)
        );
    }
    Ok(())
}
