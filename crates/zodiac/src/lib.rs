//! # lifepath-zodiac
//!
//! Chinese zodiac calculations: mapping Gregorian birth dates to zodiac
//! years and animals, enemy/friendly compatibility between animals, and
//! Chinese New Year timelines.
//!
//! The engine is constructed with a [`CompatibilityDataset`] (Chinese New
//! Year dates, animal metadata, compatibility relations) that is validated
//! up front and held read-only afterwards. Years missing from the New Year
//! table fall back to a Metonic-cycle estimator — a documented precision
//! boundary, not an error.
//!
//! # Quick start
//!
//! ```
//! use lifepath_calendar::GregorianDate;
//! use lifepath_zodiac::{Animal, CompatibilityDataset, ZodiacEngine};
//!
//! let mut dataset = CompatibilityDataset::traditional();
//! dataset
//!     .new_year_dates
//!     .insert(2024, GregorianDate::parse_iso("2024-02-10").unwrap());
//!
//! let engine = ZodiacEngine::new(dataset).unwrap();
//!
//! assert_eq!(engine.animal_for_year(1900), Animal::Rat);
//! assert_eq!(engine.animal_for_year(1899), Animal::Pig);
//!
//! // Jan 1, 2024 precedes that year's Chinese New Year (Feb 10).
//! let assignment = engine.calculate_zodiac(2024, 1, 1).unwrap();
//! assert_eq!(assignment.chinese_year, 2023);
//! assert_eq!(assignment.animal_key, Animal::Rabbit);
//!
//! assert!(engine.is_enemy_year(Animal::Rat, Animal::Horse));
//! assert!(engine.is_friendly_year(Animal::Rat, Animal::Dragon));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ZodiacEngine::new(dataset)
//!   └─ dataset.validate()        (dataset.rs — 12 animals, enemy
//!                                 involution, trinity partition)
//! engine.calculate_zodiac()
//!   ├─ new_year_for()            table lookup or estimate (estimate.rs)
//!   └─ animal_for_year()         (year - base) mod 12, rem_euclid
//! engine.timeline()              ascending YearSpans (timeline.rs)
//! ```

pub mod animal;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod timeline;

pub use animal::{Animal, ANIMAL_CYCLE};
pub use dataset::{AffinityLists, AnimalInfo, CompatibilityDataset};
pub use engine::{ZodiacAssignment, ZodiacConfig, ZodiacEngine};
pub use error::{DatasetError, ZodiacError};
pub use estimate::estimate_new_year;
pub use timeline::{Direction, YearSpan};
