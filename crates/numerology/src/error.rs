//! Numerology error types.

use lifepath_calendar::CalendarError;

/// Errors that can occur during numerology calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumerologyError {
    /// The date string or date fields failed calendar validation.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] CalendarError),

    /// A tokenizer input was not an unsigned decimal number.
    #[error("'{input}' is not an unsigned decimal number")]
    NotNumeric {
        /// The offending input.
        input: String,
    },

    /// The year cannot be split into two 2-digit halves.
    #[error("year {year} is outside the supported range 0..=9999")]
    YearOutOfRange {
        /// The out-of-range year.
        year: i32,
    },
}
