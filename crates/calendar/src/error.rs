//! Error types for the lifepath-calendar crate.

/// Error type for all fallible operations in the lifepath-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values (leap-year aware), and malformed `YYYY-MM-DD` date strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year (February's maximum depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date string cannot be parsed as `YYYY-MM-DD`.
    #[error("invalid date string '{input}': {reason}")]
    InvalidDateString {
        /// The input that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}
