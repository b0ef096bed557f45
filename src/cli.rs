use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Antikythera historical calendar calculator.
#[derive(Parser)]
#[command(
    name = "antikythera",
    version,
    about = "Calendars, computus, and the date of Easter"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the date of Easter.
    Easter(EasterArgs),
    /// Print a civil calendar, February through May.
    Calendar(CalendarArgs),
    /// Print Hebrew month boundaries and Passover.
    Hebrew(HebrewArgs),
    /// Print the three calendars interleaved, March through May.
    Interleave(InterleaveArgs),
    /// Print the liturgical calendarium table.
    Calendarium,
}

/// Which reckoning(s) to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemArg {
    /// The Gregorian reckoning.
    Gregorian,
    /// The Julian reckoning.
    Julian,
    /// Both reckonings.
    Both,
}

/// Arguments for the `easter` subcommand.
#[derive(clap::Args)]
pub struct EasterArgs {
    /// Year to compute (interpreted in each requested reckoning).
    pub year: i32,

    /// Reckoning to compute; overrides the config default.
    #[arg(short, long, value_enum)]
    pub system: Option<SystemArg>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Year to tabulate.
    pub year: i32,

    /// Reckoning to tabulate; overrides the config default.
    #[arg(short, long, value_enum)]
    pub system: Option<SystemArg>,
}

/// Arguments for the `hebrew` subcommand.
#[derive(clap::Args)]
pub struct HebrewArgs {
    /// Year to compute (Anno Domini unless --am is given).
    pub year: i32,

    /// Interpret the year as Anno Mundi instead of Anno Domini.
    #[arg(long)]
    pub am: bool,

    /// Also print the day table from Shevat through Sivan.
    #[arg(short, long)]
    pub table: bool,
}

/// Arguments for the `interleave` subcommand.
#[derive(clap::Args)]
pub struct InterleaveArgs {
    /// Gregorian year to interleave.
    pub year: i32,
}
