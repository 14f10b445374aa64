use anyhow::{Context, Result};
use tracing::info;

use lifepath_numerology::{calculate_lifepath, calculate_personal_year};

use crate::cli::{LifepathArgs, PersonalYearArgs};
use crate::config::AppConfig;
use crate::convert;

/// Run the `lifepath` subcommand.
pub fn run(args: &LifepathArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let numerology = convert::build_numerology_config(&config.numerology);

    let result = calculate_lifepath(&args.date, &numerology)
        .with_context(|| format!("failed to calculate lifepath for '{}'", args.date))?;
    info!(number = result.number, total = result.total, "lifepath calculated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Birth date:  {}", result.birth_date);
    println!("Calculation: {} = {}", join_tokens(&result.calculation), result.total);
    for step in &result.reduction_steps {
        println!("             {step}");
    }
    println!("Lifepath:    {}", result.number);
    Ok(())
}

/// Run the `personal-year` subcommand.
pub fn run_personal_year(args: &PersonalYearArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let numerology = convert::build_numerology_config(&config.numerology);

    let result = calculate_personal_year(&args.date, args.year, &numerology).with_context(|| {
        format!(
            "failed to calculate personal year {} for '{}'",
            args.year, args.date
        )
    })?;
    info!(number = result.number, total = result.total, "personal year calculated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Target year:   {}", result.target_year);
    println!("Calculation:   {} = {}", join_tokens(&result.calculation), result.total);
    for step in &result.reduction_steps {
        println!("               {step}");
    }
    println!("Personal year: {}", result.number);
    Ok(())
}

fn join_tokens(tokens: &[u32]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}
