use anyhow::Result;
use tracing::info;

use lifepath_zodiac::Direction;

use crate::cli::{DirectionArg, TimelineArgs};
use crate::config::AppConfig;
use crate::convert;

/// Run the `timeline` subcommand.
pub fn run(args: &TimelineArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let engine = convert::build_zodiac_engine(&config)?;

    let direction = match args.direction {
        DirectionArg::Prior => Direction::Prior,
        DirectionArg::Future => Direction::Future,
    };
    let spans = engine.timeline(args.year, args.count as i32, direction);
    info!(n_spans = spans.len(), "timeline generated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
        return Ok(());
    }

    for span in &spans {
        println!(
            "{}  {} {:<8} {} – {}",
            span.year, span.zodiac.emoji, span.zodiac.name, span.start_date, span.end_date
        );
    }
    Ok(())
}
