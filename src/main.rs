mod cli;
mod config;
mod convert;
mod interesting_cmd;
mod lifepath_cmd;
mod logging;
mod timeline_cmd;
mod zodiac_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Lifepath(args) => lifepath_cmd::run(&args),
        Command::PersonalYear(args) => lifepath_cmd::run_personal_year(&args),
        Command::Zodiac(args) => zodiac_cmd::run(&args),
        Command::Timeline(args) => timeline_cmd::run(&args),
        Command::Interesting(args) => interesting_cmd::run(&args),
    }
}
