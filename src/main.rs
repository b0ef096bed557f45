mod calendar_cmd;
mod calendarium_cmd;
mod cli;
mod config;
mod easter_cmd;
mod hebrew_cmd;
mod interleave_cmd;
mod logging;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Easter(args) => easter_cmd::run(&args, &config),
        Command::Calendar(args) => calendar_cmd::run(&args, &config),
        Command::Hebrew(args) => hebrew_cmd::run(&args, &config),
        Command::Interleave(args) => interleave_cmd::run(&args, &config),
        Command::Calendarium => calendarium_cmd::run(),
    }
}
