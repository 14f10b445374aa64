use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default config path probed when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "lifepath.toml";

/// Top-level application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Numerology settings.
    #[serde(default)]
    pub numerology: NumerologyToml,

    /// Zodiac settings.
    #[serde(default)]
    pub zodiac: ZodiacToml,

    /// Dataset file paths.
    #[serde(default)]
    pub data: DataToml,

    /// Interesting-date scan criteria.
    #[serde(default)]
    pub interesting: InterestingToml,
}

impl AppConfig {
    /// Loads configuration from `path`, or from `lifepath.toml` in the
    /// working directory if present, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumerologyToml {
    #[serde(default = "default_master_numbers")]
    pub master_numbers: Vec<u32>,
    #[serde(default = "default_special_numbers")]
    pub special_numbers: Vec<u32>,
}

impl Default for NumerologyToml {
    fn default() -> Self {
        Self {
            master_numbers: default_master_numbers(),
            special_numbers: default_special_numbers(),
        }
    }
}

fn default_master_numbers() -> Vec<u32> {
    vec![11, 22, 33]
}
fn default_special_numbers() -> Vec<u32> {
    vec![28]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZodiacToml {
    #[serde(default = "default_base_year")]
    pub base_year: i32,
}

impl Default for ZodiacToml {
    fn default() -> Self {
        Self {
            base_year: default_base_year(),
        }
    }
}

fn default_base_year() -> i32 {
    1900
}

/// Paths to the three dataset JSON documents. Set all three to load from
/// disk; leave them unset to use the embedded dataset.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    pub new_year: Option<PathBuf>,
    pub animals: Option<PathBuf>,
    pub compatibility: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterestingToml {
    #[serde(default = "default_lifepath_numbers")]
    pub lifepath_numbers: Vec<u32>,
    #[serde(default = "default_special_days")]
    pub special_days: Vec<u8>,
}

impl Default for InterestingToml {
    fn default() -> Self {
        Self {
            lifepath_numbers: default_lifepath_numbers(),
            special_days: default_special_days(),
        }
    }
}

fn default_lifepath_numbers() -> Vec<u32> {
    vec![11, 22, 33, 28]
}
fn default_special_days() -> Vec<u8> {
    vec![11, 22, 28]
}
