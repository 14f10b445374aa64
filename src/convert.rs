//! Translation from TOML configuration to engine configs and loaders.

use anyhow::{bail, Context, Result};
use tracing::info;

use lifepath_data::{DatasetLoader, EmbeddedLoader, JsonFileLoader};
use lifepath_numerology::{InterestingCriteria, NumerologyConfig};
use lifepath_zodiac::{ZodiacConfig, ZodiacEngine};

use crate::config::{AppConfig, InterestingToml, NumerologyToml, ZodiacToml};

pub fn build_numerology_config(toml: &NumerologyToml) -> NumerologyConfig {
    NumerologyConfig::new()
        .with_master_numbers(toml.master_numbers.iter().copied())
        .with_special_numbers(toml.special_numbers.iter().copied())
}

pub fn build_zodiac_config(toml: &ZodiacToml) -> ZodiacConfig {
    ZodiacConfig::new().with_base_year(toml.base_year)
}

pub fn build_criteria(toml: &InterestingToml) -> InterestingCriteria {
    InterestingCriteria::new()
        .with_lifepath_numbers(toml.lifepath_numbers.iter().copied())
        .with_special_days(toml.special_days.iter().copied())
}

/// Builds the zodiac engine, loading the dataset from the configured JSON
/// documents when all three paths are set, or from the embedded constants
/// otherwise.
pub fn build_zodiac_engine(config: &AppConfig) -> Result<ZodiacEngine> {
    let data = &config.data;
    let dataset = match (&data.new_year, &data.animals, &data.compatibility) {
        (Some(new_year), Some(animals), Some(compatibility)) => {
            info!(
                new_year = %new_year.display(),
                animals = %animals.display(),
                compatibility = %compatibility.display(),
                "loading dataset from JSON documents"
            );
            JsonFileLoader::new(new_year, animals, compatibility)
                .load()
                .context("failed to load dataset from JSON documents")?
        }
        (None, None, None) => {
            info!("using embedded dataset");
            EmbeddedLoader
                .load()
                .context("failed to load embedded dataset")?
        }
        _ => bail!("set all three [data] paths (new_year, animals, compatibility) or none"),
    };
    info!(
        n_new_year_dates = dataset.new_year_dates.len(),
        "dataset loaded"
    );

    let engine = ZodiacEngine::with_config(dataset, build_zodiac_config(&config.zodiac))
        .context("dataset failed validation")?;
    Ok(engine)
}
