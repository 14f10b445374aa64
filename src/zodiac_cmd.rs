use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use lifepath_calendar::GregorianDate;
use lifepath_zodiac::{Animal, ZodiacAssignment, ZodiacEngine};

use crate::cli::ZodiacArgs;
use crate::config::AppConfig;
use crate::convert;

/// JSON report for the `zodiac` subcommand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ZodiacReport {
    #[serde(flatten)]
    assignment: ZodiacAssignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    against: Option<AgainstReport>,
}

/// Compatibility verdict against a reference year.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AgainstReport {
    year: i32,
    animal_key: Animal,
    enemy: bool,
    friendly: bool,
}

/// Run the `zodiac` subcommand.
pub fn run(args: &ZodiacArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let engine = convert::build_zodiac_engine(&config)?;

    let date = GregorianDate::parse_iso(&args.date)
        .with_context(|| format!("invalid birth date '{}'", args.date))?;
    let assignment = engine
        .calculate_zodiac(date.year(), date.month(), date.day())
        .context("zodiac calculation failed")?;
    info!(
        chinese_year = assignment.chinese_year,
        animal = %assignment.animal_key,
        "zodiac assigned"
    );

    let against = args.against.map(|year| against_report(&engine, &assignment, year));

    if args.json {
        let report = ZodiacReport { assignment, against };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} (Chinese year {})",
        assignment.animal.emoji, assignment.animal.name, assignment.chinese_year
    );
    if let Some(against) = against {
        let verdict = if against.enemy {
            "enemy year"
        } else if against.friendly {
            "friendly year"
        } else {
            "neutral year"
        };
        println!(
            "Against {} ({}): {verdict}",
            against.year,
            against.animal_key
        );
    }
    Ok(())
}

fn against_report(
    engine: &ZodiacEngine,
    assignment: &ZodiacAssignment,
    year: i32,
) -> AgainstReport {
    let other = engine.animal_for_year(year);
    AgainstReport {
        year,
        animal_key: other,
        enemy: engine.is_enemy_year(assignment.animal_key, other),
        friendly: engine.is_friendly_year(assignment.animal_key, other),
    }
}
