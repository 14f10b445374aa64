use anyhow::{Context, Result};
use tracing::info;

use lifepath_calendar::GregorianDate;
use lifepath_numerology::{find_interesting_dates, InterestingDate};

use crate::cli::InterestingArgs;
use crate::config::AppConfig;
use crate::convert;

/// Run the `interesting` subcommand.
pub fn run(args: &InterestingArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let numerology = convert::build_numerology_config(&config.numerology);
    let criteria = convert::build_criteria(&config.interesting);

    let dates: Vec<InterestingDate> = find_interesting_dates(args.year, &criteria, &numerology)
        .with_context(|| format!("cannot scan year {}", args.year))?
        .collect();
    info!(year = args.year, n_dates = dates.len(), "interesting dates found");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dates)?);
        return Ok(());
    }

    for hit in &dates {
        // The scan only yields real calendar dates.
        let date = GregorianDate::new(hit.year, hit.month, hit.day)
            .expect("scan yields valid dates");
        println!(
            "{}  lifepath {:<2} — {}",
            date.format_short(),
            hit.lifepath,
            hit.reasons.join("; ")
        );
    }
    println!("{} interesting dates in {}", dates.len(), args.year);
    Ok(())
}
