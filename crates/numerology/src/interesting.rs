//! Lazy scan for interesting dates in a calendar year.

use std::collections::BTreeSet;

use serde::Serialize;

use lifepath_calendar::days_in_month;

use crate::config::NumerologyConfig;
use crate::error::NumerologyError;
use crate::lifepath::calculate_date_lifepath;

/// Criteria for the interesting-date scan.
///
/// A date matches if its reduced lifepath number is in `lifepath_numbers`
/// or its day-of-month is in `special_days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestingCriteria {
    lifepath_numbers: BTreeSet<u32>,
    special_days: BTreeSet<u8>,
}

impl Default for InterestingCriteria {
    /// The traditional criteria: master and special lifepath numbers
    /// {11, 22, 33, 28}, and the 11th, 22nd, and 28th of each month.
    fn default() -> Self {
        Self {
            lifepath_numbers: BTreeSet::from([11, 22, 33, 28]),
            special_days: BTreeSet::from([11, 22, 28]),
        }
    }
}

impl InterestingCriteria {
    /// Creates the default criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set of matching lifepath numbers.
    pub fn with_lifepath_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.lifepath_numbers = numbers.into_iter().collect();
        self
    }

    /// Replaces the set of matching days-of-month.
    pub fn with_special_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.special_days = days.into_iter().collect();
        self
    }

    /// Returns the set of matching lifepath numbers.
    pub fn lifepath_numbers(&self) -> &BTreeSet<u32> {
        &self.lifepath_numbers
    }

    /// Returns the set of matching days-of-month.
    pub fn special_days(&self) -> &BTreeSet<u8> {
        &self.special_days
    }
}

/// One date matched by the interesting-date scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestingDate {
    /// Year of the matched date.
    pub year: i32,
    /// Month of the matched date (1..=12).
    pub month: u8,
    /// Day of the matched date (1..=31).
    pub day: u8,
    /// The date's reduced lifepath number.
    pub lifepath: u32,
    /// Tokens summed for the lifepath calculation.
    pub calculation: Vec<u32>,
    /// Token sum before reduction.
    pub total: u32,
    /// Reduction trace for the total.
    pub reduction_steps: Vec<String>,
    /// One line per matched criterion; lifepath reason first.
    pub reasons: Vec<String>,
}

/// Returns the English ordinal suffix for a day number (1 → "st",
/// 2 → "nd", 11..=13 → "th", ...).
pub fn ordinal_suffix(day: u8) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Scans every real calendar day of `year` (leap-aware) and yields the
/// dates matching `criteria`.
///
/// The returned iterator is lazy and restartable: it is a pure function
/// of its inputs, so calling this again with the same arguments yields
/// the same sequence.
///
/// # Errors
///
/// Returns [`NumerologyError::YearOutOfRange`] if `year` is outside
/// 0..=9999 (lifepath arithmetic needs a 4-digit year).
pub fn find_interesting_dates<'a>(
    year: i32,
    criteria: &'a InterestingCriteria,
    config: &'a NumerologyConfig,
) -> Result<InterestingDates<'a>, NumerologyError> {
    if !(0..=9999).contains(&year) {
        return Err(NumerologyError::YearOutOfRange { year });
    }
    Ok(InterestingDates {
        year,
        month: 1,
        day: 1,
        criteria,
        config,
    })
}

/// Lazy iterator over the interesting dates of one year.
///
/// Created by [`find_interesting_dates`].
#[derive(Debug, Clone)]
pub struct InterestingDates<'a> {
    year: i32,
    month: u8,
    day: u8,
    criteria: &'a InterestingCriteria,
    config: &'a NumerologyConfig,
}

impl InterestingDates<'_> {
    fn evaluate(&self, month: u8, day: u8) -> Option<InterestingDate> {
        // The cursor only produces days that exist in the month, and the
        // year was range-checked at construction.
        let result = calculate_date_lifepath(self.year, month, day, self.config)
            .expect("scan cursor only visits valid dates");

        let mut reasons = Vec::new();
        if self.criteria.lifepath_numbers.contains(&result.number) {
            let label = if self.config.is_master(result.number) {
                format!("Lifepath = {} (Master Number)", result.number)
            } else if self.config.is_special(result.number) {
                format!("Lifepath = {} (Special Number)", result.number)
            } else {
                format!("Lifepath = {}", result.number)
            };
            reasons.push(label);
        }
        if self.criteria.special_days.contains(&day) {
            reasons.push(format!(
                "Special day: {day}{} of the month",
                ordinal_suffix(day)
            ));
        }

        if reasons.is_empty() {
            return None;
        }
        Some(InterestingDate {
            year: self.year,
            month,
            day,
            lifepath: result.number,
            calculation: result.calculation,
            total: result.total,
            reduction_steps: result.reduction_steps,
            reasons,
        })
    }
}

impl Iterator for InterestingDates<'_> {
    type Item = InterestingDate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.month <= 12 {
            // Month is 1..=12 here, so days_in_month cannot fail.
            let max_day = days_in_month(self.year, self.month)
                .expect("scan cursor month is always 1..=12");
            if self.day > max_day {
                self.month += 1;
                self.day = 1;
                continue;
            }
            let (month, day) = (self.month, self.day);
            self.day += 1;
            if let Some(hit) = self.evaluate(month, day) {
                return Some(hit);
            }
        }
        None
    }
}
