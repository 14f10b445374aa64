//! The zodiac engine: year→animal mapping, New Year lookup, compatibility.

use serde::Serialize;

use lifepath_calendar::GregorianDate;

use crate::animal::{Animal, ANIMAL_CYCLE};
use crate::dataset::{AnimalInfo, CompatibilityDataset};
use crate::error::{DatasetError, ZodiacError};
use crate::estimate::estimate_new_year;

/// Engine configuration.
///
/// The cycle length is fixed by the 12-animal table; only the reference
/// year is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacConfig {
    /// The Gregorian year the cycle is anchored to (a Rat year).
    base_year: i32,
}

impl Default for ZodiacConfig {
    fn default() -> Self {
        Self { base_year: 1900 }
    }
}

impl ZodiacConfig {
    /// Creates the default configuration (base year 1900).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cycle's reference year. Must be a Rat year for standard
    /// results.
    pub fn with_base_year(mut self, base_year: i32) -> Self {
        self.base_year = base_year;
        self
    }

    /// Returns the cycle's reference year.
    pub fn base_year(&self) -> i32 {
        self.base_year
    }
}

/// Result of mapping a birth date to a Chinese zodiac year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacAssignment {
    /// The Gregorian year whose zodiac cycle the birth date falls in
    /// (one less than the birth year when the date precedes that year's
    /// Chinese New Year).
    pub chinese_year: i32,
    /// The canonical animal, serialized as its lowercase key.
    pub animal_key: Animal,
    /// Display metadata for the animal.
    pub animal: AnimalInfo,
}

/// Chinese zodiac lookups over a validated, read-only
/// [`CompatibilityDataset`].
///
/// Constructed with its dataset up front; all lookups afterwards are pure.
#[derive(Debug, Clone)]
pub struct ZodiacEngine {
    dataset: CompatibilityDataset,
    config: ZodiacConfig,
}

impl ZodiacEngine {
    /// Creates an engine with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the dataset fails validation.
    pub fn new(dataset: CompatibilityDataset) -> Result<Self, DatasetError> {
        Self::with_config(dataset, ZodiacConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the dataset fails validation.
    pub fn with_config(
        dataset: CompatibilityDataset,
        config: ZodiacConfig,
    ) -> Result<Self, DatasetError> {
        dataset.validate()?;
        Ok(Self { dataset, config })
    }

    /// Returns the dataset the engine was configured with.
    pub fn dataset(&self) -> &CompatibilityDataset {
        &self.dataset
    }

    /// Returns the zodiac animal of a Gregorian year.
    ///
    /// Uses a non-negative modulo, so years before the base year resolve
    /// correctly (1899 → Pig).
    pub fn animal_for_year(&self, year: i32) -> Animal {
        let offset = i64::from(year) - i64::from(self.config.base_year);
        let index = offset.rem_euclid(ANIMAL_CYCLE.len() as i64) as usize;
        ANIMAL_CYCLE[index]
    }

    /// Returns the display metadata for an animal.
    pub fn animal_info(&self, animal: Animal) -> &AnimalInfo {
        // Validation guarantees all 12 animals are present.
        self.dataset
            .animals
            .get(&animal)
            .expect("validated dataset covers all 12 animals")
    }

    /// Returns the Chinese New Year date for a Gregorian year and whether
    /// it was estimated (`true`) or looked up from the table (`false`).
    pub fn new_year_for(&self, year: i32) -> (GregorianDate, bool) {
        match self.dataset.new_year_dates.get(&year) {
            Some(&date) => (date, false),
            None => (estimate_new_year(year), true),
        }
    }

    /// Maps a birth date to its zodiac year and animal.
    ///
    /// A birth date earlier than that year's Chinese New Year belongs to
    /// the previous year's cycle.
    ///
    /// # Errors
    ///
    /// Returns [`ZodiacError::InvalidDate`] if the triple is not a real
    /// calendar date.
    pub fn calculate_zodiac(
        &self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<ZodiacAssignment, ZodiacError> {
        let birth_date = GregorianDate::new(year, month, day)?;
        let (new_year, _estimated) = self.new_year_for(year);
        let chinese_year = if birth_date < new_year { year - 1 } else { year };
        let animal_key = self.animal_for_year(chinese_year);
        Ok(ZodiacAssignment {
            chinese_year,
            animal_key,
            animal: self.animal_info(animal_key).clone(),
        })
    }

    /// Returns `true` if the two animals are enemies.
    ///
    /// The relation is symmetric by dataset invariant; both directions are
    /// checked anyway so an unexpected map still answers consistently for
    /// either argument order.
    pub fn is_enemy_year(&self, a: Animal, b: Animal) -> bool {
        self.dataset.enemies.get(&a) == Some(&b) || self.dataset.enemies.get(&b) == Some(&a)
    }

    /// Returns `true` if the two animals are friendly: the same animal,
    /// members of the same trinity, or listed under each other's optional
    /// excellent/good affinities (checked in both directions — the
    /// affinity map may be asymmetric).
    pub fn is_friendly_year(&self, a: Animal, b: Animal) -> bool {
        if a == b {
            return true;
        }
        if self
            .dataset
            .friend_groups
            .iter()
            .any(|group| group.contains(&a) && group.contains(&b))
        {
            return true;
        }
        let Some(affinities) = &self.dataset.affinities else {
            return false;
        };
        let lists_other = |from: Animal, to: Animal| {
            affinities
                .get(&from)
                .is_some_and(|lists| lists.excellent.contains(&to) || lists.good.contains(&to))
        };
        lists_other(a, b) || lists_other(b, a)
    }
}
