use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Numerology lifepath and Chinese zodiac calculator.
#[derive(Parser)]
#[command(
    name = "lifepath",
    version,
    about = "Numerology lifepath and Chinese zodiac calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calculate the lifepath number for a birth date.
    Lifepath(LifepathArgs),
    /// Calculate the personal-year number for a birth date and target year.
    PersonalYear(PersonalYearArgs),
    /// Map a birth date to its Chinese zodiac year and animal.
    Zodiac(ZodiacArgs),
    /// Show a Chinese New Year timeline around a year.
    Timeline(TimelineArgs),
    /// Scan a year for interesting dates.
    Interesting(InterestingArgs),
}

/// Arguments for the `lifepath` subcommand.
#[derive(clap::Args)]
pub struct LifepathArgs {
    /// Birth date as YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Path to TOML configuration file (defaults to lifepath.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `personal-year` subcommand.
#[derive(clap::Args)]
pub struct PersonalYearArgs {
    /// Birth date as YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Target year for the personal-year calculation.
    #[arg(short, long)]
    pub year: i32,

    /// Path to TOML configuration file (defaults to lifepath.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `zodiac` subcommand.
#[derive(clap::Args)]
pub struct ZodiacArgs {
    /// Birth date as YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Reference year to evaluate compatibility against.
    #[arg(short, long)]
    pub against: Option<i32>,

    /// Path to TOML configuration file (defaults to lifepath.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Which side of the base year a timeline covers.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    /// Years before the base year.
    Prior,
    /// Years after the base year.
    Future,
}

/// Arguments for the `timeline` subcommand.
#[derive(clap::Args)]
pub struct TimelineArgs {
    /// Base year the timeline is anchored to.
    #[arg(short, long)]
    pub year: i32,

    /// Number of years to include.
    #[arg(long, default_value_t = 10)]
    pub count: u32,

    /// Timeline direction relative to the base year.
    #[arg(long, value_enum, default_value_t = DirectionArg::Future)]
    pub direction: DirectionArg,

    /// Path to TOML configuration file (defaults to lifepath.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `interesting` subcommand.
#[derive(clap::Args)]
pub struct InterestingArgs {
    /// Year to scan.
    #[arg(short, long)]
    pub year: i32,

    /// Path to TOML configuration file (defaults to lifepath.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}
