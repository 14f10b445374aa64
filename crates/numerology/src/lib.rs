//! # lifepath-numerology
//!
//! Digit-sum reduction arithmetic over birth dates: lifepath numbers,
//! personal-year numbers, and interesting-date scans.
//!
//! A number is repeatedly replaced by the sum of its decimal digits until
//! it is a single digit — unless it is one of the configured *master*
//! numbers (default 11, 22, 33) or *special* numbers (default 28), which
//! stop the reduction early.
//!
//! # Quick start
//!
//! ```
//! use lifepath_numerology::{calculate_lifepath, NumerologyConfig};
//!
//! let config = NumerologyConfig::new();
//! let result = calculate_lifepath("1990-01-01", &config).unwrap();
//!
//! assert_eq!(result.number, 3);
//! assert_eq!(result.total, 21);
//! assert_eq!(result.birth_date, "01/01/1990");
//! ```
//!
//! # Architecture
//!
//! ```text
//! calculate_lifepath() / calculate_personal_year()
//!   ├─ parse & validate date       (lifepath-calendar)
//!   ├─ tokenize_and_sum()          (tokenize.rs) — per month/day/year-half,
//!   │                              master-number short-circuit
//!   └─ reduce_to_single_digit()    (reduce.rs) — on the grand total only
//!
//! find_interesting_dates()
//!   └─ lazy scan over every real calendar day of a year (interesting.rs)
//! ```

pub mod config;
pub mod error;
pub mod interesting;
pub mod lifepath;
pub mod reduce;
pub mod tokenize;

pub use config::NumerologyConfig;
pub use error::NumerologyError;
pub use interesting::{
    find_interesting_dates, ordinal_suffix, InterestingCriteria, InterestingDate,
    InterestingDates,
};
pub use lifepath::{
    calculate_date_lifepath, calculate_lifepath, calculate_personal_year, LifepathResult,
    PersonalYearResult,
};
pub use reduce::{reduce_to_single_digit, DigitReduction};
pub use tokenize::{tokenize_and_sum, TokenSum};
