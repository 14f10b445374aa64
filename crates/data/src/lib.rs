//! # lifepath-data
//!
//! Loaders producing the [`CompatibilityDataset`] a
//! [`ZodiacEngine`](lifepath_zodiac::ZodiacEngine) is configured with.
//!
//! Two strategies implement the [`DatasetLoader`] trait, selected by the
//! host application:
//!
//! - [`JsonFileLoader`] — reads the three JSON documents (New Year dates,
//!   animals, compatibility) from disk;
//! - [`EmbeddedLoader`] — compiled-in constants, no I/O.
//!
//! Both validate the dataset before handing it over, so an engine built
//! from a loaded dataset never sees broken invariants.
//!
//! # Quick start
//!
//! ```
//! use lifepath_data::{DatasetLoader, EmbeddedLoader};
//! use lifepath_zodiac::ZodiacEngine;
//!
//! let dataset = EmbeddedLoader.load().unwrap();
//! assert!(dataset.new_year_dates.contains_key(&2024));
//!
//! let engine = ZodiacEngine::new(dataset).unwrap();
//! ```
//!
//! [`CompatibilityDataset`]: lifepath_zodiac::CompatibilityDataset

pub mod embedded;
pub mod error;
pub mod loader;
pub mod schema;

pub use embedded::EmbeddedLoader;
pub use error::DataError;
pub use loader::{DatasetLoader, JsonFileLoader};
