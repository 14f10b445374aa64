//! The dataset loader abstraction and the JSON-file implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use lifepath_zodiac::CompatibilityDataset;

use crate::error::DataError;
use crate::schema::{build_dataset, AnimalsDoc, CompatibilityDoc, NewYearDoc};

/// A strategy for producing a validated [`CompatibilityDataset`].
///
/// The host application picks an implementation at startup and hands the
/// loaded dataset to the zodiac engine; the engine itself never performs
/// I/O.
pub trait DatasetLoader {
    /// Loads and validates the dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] if the source cannot be read, parsed, or
    /// fails invariant validation.
    fn load(&self) -> Result<CompatibilityDataset, DataError>;
}

/// Loads the dataset from the three JSON documents on disk.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    new_year_path: PathBuf,
    animals_path: PathBuf,
    compatibility_path: PathBuf,
}

impl JsonFileLoader {
    /// Creates a loader reading from the given document paths.
    pub fn new(
        new_year_path: impl Into<PathBuf>,
        animals_path: impl Into<PathBuf>,
        compatibility_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            new_year_path: new_year_path.into(),
            animals_path: animals_path.into(),
            compatibility_path: compatibility_path.into(),
        }
    }

    fn read_doc<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DatasetLoader for JsonFileLoader {
    fn load(&self) -> Result<CompatibilityDataset, DataError> {
        let new_year: NewYearDoc = Self::read_doc(&self.new_year_path)?;
        let animals: AnimalsDoc = Self::read_doc(&self.animals_path)?;
        let compatibility: CompatibilityDoc = Self::read_doc(&self.compatibility_path)?;
        build_dataset(new_year, animals, compatibility)
    }
}
