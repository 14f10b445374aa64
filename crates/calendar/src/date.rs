//! Validated Gregorian date with ordering, parsing, and formatting.

use crate::error::CalendarError;
use crate::month::{days_in_month, MONTH_ABBREV};

/// A validated date in the Gregorian calendar.
///
/// Ordering is chronological: `(year, month, day)` lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for the given
    /// month and year (February 29 is only valid in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Parses a date from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateString`] if the string does not
    /// have three `-`-separated numeric segments, or [`CalendarError`]
    /// validation errors if the parsed fields are out of range.
    pub fn parse_iso(input: &str) -> Result<Self, CalendarError> {
        let malformed = |reason: &str| CalendarError::InvalidDateString {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = input.split('-').collect();
        if parts.len() != 3 {
            return Err(malformed("expected 3 '-'-separated segments"));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| malformed("year is not a number"))?;
        let month: u8 = parts[1]
            .parse()
            .map_err(|_| malformed("month is not a number"))?;
        let day: u8 = parts[2]
            .parse()
            .map_err(|_| malformed("day is not a number"))?;
        Self::new(year, month, day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the date one day earlier, crossing month and year
    /// boundaries as needed (Jan 1 wraps to Dec 31 of the previous year).
    pub fn previous_day(self) -> Self {
        if self.day > 1 {
            return Self {
                day: self.day - 1,
                ..self
            };
        }
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        // days_in_month only fails for month outside 1..=12.
        let day = days_in_month(year, month).expect("month is always 1..=12 here");
        Self { year, month, day }
    }

    /// Formats the date as `YYYY-MM-DD` (year zero-padded to 4 digits).
    pub fn format_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Formats the date as `MM/DD/YYYY`.
    pub fn format_us(self) -> String {
        format!("{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }

    /// Formats the date as `"Feb 10, 2024"` for display.
    pub fn format_short(self) -> String {
        format!(
            "{} {}, {}",
            MONTH_ABBREV[self.month as usize],
            self.day,
            self.year
        )
    }
}
