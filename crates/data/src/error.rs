//! Error types for lifepath-data.

use std::path::PathBuf;

use lifepath_zodiac::DatasetError;

/// Error type for all fallible operations in the lifepath-data crate.
///
/// This enum covers file I/O failures, JSON parse errors, and conversion
/// problems turning raw documents into a validated dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A dataset file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A dataset file is not valid JSON or does not match the schema.
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        /// Path that failed to parse.
        path: PathBuf,
        /// The underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// A document referenced an animal key outside the 12-animal cycle.
    #[error("unknown animal key '{key}'")]
    UnknownAnimal {
        /// The unrecognized key.
        key: String,
    },

    /// A New Year table key is not a year number.
    #[error("invalid year key '{key}' in New Year table")]
    InvalidYearKey {
        /// The unrecognized key.
        key: String,
    },

    /// A New Year date string failed to parse.
    #[error("invalid New Year date for year {year}: {reason}")]
    InvalidNewYearDate {
        /// The year whose date is malformed.
        year: i32,
        /// What was wrong with it.
        reason: String,
    },

    /// A friend group does not have exactly three members.
    #[error("friend group has {len} members (must be 3)")]
    MalformedFriendGroup {
        /// The actual group size.
        len: usize,
    },

    /// The assembled dataset failed invariant validation.
    #[error("invalid dataset: {0}")]
    Invalid(#[from] DatasetError),
}
