//! Zodiac error types.

use lifepath_calendar::CalendarError;

/// Errors that can occur during zodiac lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZodiacError {
    /// The birth date failed calendar validation.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] CalendarError),
}

/// Validation failures for a [`CompatibilityDataset`].
///
/// [`CompatibilityDataset`]: crate::CompatibilityDataset
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// An animal has no entry in the animals map.
    #[error("animal '{key}' is missing from the animals map")]
    MissingAnimal {
        /// The animal's canonical key.
        key: String,
    },

    /// An animal has no entry in the enemies map.
    #[error("animal '{key}' has no enemy entry")]
    MissingEnemy {
        /// The animal's canonical key.
        key: String,
    },

    /// An animal is listed as its own enemy.
    #[error("animal '{key}' is marked as its own enemy")]
    SelfEnemy {
        /// The animal's canonical key.
        key: String,
    },

    /// The enemy relation is not a perfect involution.
    #[error("enemy relation is not symmetric: '{key}' → '{enemy}' but not back")]
    AsymmetricEnemy {
        /// The animal whose enemy entry is unreciprocated.
        key: String,
        /// Its claimed enemy.
        enemy: String,
    },

    /// An animal belongs to zero or multiple friend trinities.
    #[error("animal '{key}' appears in {count} friend groups (must be exactly 1)")]
    TrinityMembership {
        /// The animal's canonical key.
        key: String,
        /// How many trinities it appears in.
        count: usize,
    },
}
