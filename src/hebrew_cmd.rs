use anyhow::{Context, Result};
use antikythera_hebrew::{
    am_at_pesach, is_leap_year, month_boundaries, pesach, rosh_hashanah, year_days,
};
use antikythera_jd::{JulianDay, jd_to_gregorian};

use crate::cli::HebrewArgs;
use crate::config::AntikytheraConfig;
use crate::render::{format_date, weekday_name};

/// Run the `hebrew` subcommand.
pub fn run(args: &HebrewArgs, config: &AntikytheraConfig) -> Result<()> {
    let year = if args.am {
        args.year
    } else {
        am_at_pesach(args.year)
    };

    let bounds =
        month_boundaries(year).with_context(|| format!("month boundaries of AM {year} failed"))?;
    println!(
        "Anno Mundi {year}{}",
        if is_leap_year(year) { " (leap)" } else { "" }
    );
    print_boundary("Rosh Hashanah", rosh_hashanah(year)?)?;
    print_boundary("1 Shevat", bounds.shevat)?;
    if let Some(adar_i) = bounds.adar_i {
        print_boundary("1 Adar I", adar_i)?;
    }
    print_boundary("1 Adar", bounds.adar)?;
    print_boundary("1 Nisan", bounds.nisan)?;
    print_boundary("1 Iyar", bounds.iyar)?;
    print_boundary("1 Sivan", bounds.sivan)?;
    print_boundary("Passover", pesach(year)?)?;

    if args.table {
        let long = config.long_weekdays()?;
        println!();
        for day in year_days(year)? {
            println!(
                "{} {} {:2}",
                weekday_name(day.weekday, long),
                day.month.name(),
                day.day
            );
        }
    }
    Ok(())
}

fn print_boundary(label: &str, jd: JulianDay) -> Result<()> {
    println!("{label:14} {}", format_date(jd_to_gregorian(jd)?));
    Ok(())
}
