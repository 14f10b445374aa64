//! Lifepath and personal-year calculation.

use serde::Serialize;

use lifepath_calendar::GregorianDate;

use crate::config::NumerologyConfig;
use crate::error::NumerologyError;
use crate::reduce::reduce_to_single_digit;
use crate::tokenize::tokenize_and_sum;

/// Lifepath calculation result for a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifepathResult {
    /// The reduced lifepath number (1..=9, master, or special).
    pub number: u32,
    /// All tokens summed, in order: month, day, year-half-1, year-half-2.
    /// Master-number parts appear as one whole token.
    pub calculation: Vec<u32>,
    /// Sum of all tokens before reduction.
    pub total: u32,
    /// Human-readable trace of each reduction pass on the total.
    pub reduction_steps: Vec<String>,
    /// The input date echoed as `MM/DD/YYYY`.
    pub birth_date: String,
}

/// Personal-year calculation result: the lifepath-style number a birth
/// month/day produces when the year is replaced by a target year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalYearResult {
    /// The reduced personal-year number.
    pub number: u32,
    /// All tokens summed, in order: month, day, target-year halves.
    pub calculation: Vec<u32>,
    /// Sum of all tokens before reduction.
    pub total: u32,
    /// Human-readable trace of each reduction pass on the total.
    pub reduction_steps: Vec<String>,
    /// The target year the calculation was made for.
    pub target_year: i32,
}

/// Splits a year into its two 2-digit halves, zero-padded ("1990" →
/// ("19", "90")).
fn year_halves(year: i32) -> Result<(String, String), NumerologyError> {
    if !(0..=9999).contains(&year) {
        return Err(NumerologyError::YearOutOfRange { year });
    }
    let year_str = format!("{year:04}");
    Ok((year_str[..2].to_string(), year_str[2..].to_string()))
}

/// Tokenizes the four date parts and reduces the grand total.
///
/// Reduction happens exactly once, on the total. A 2-digit part is never
/// reduced at the part level, only tokenized.
fn digit_sum_of_parts(
    month: u8,
    day: u8,
    year: i32,
    config: &NumerologyConfig,
) -> Result<(Vec<u32>, u32, Vec<String>, u32), NumerologyError> {
    let (half1, half2) = year_halves(year)?;
    let parts = [format!("{month:02}"), format!("{day:02}"), half1, half2];

    let mut calculation = Vec::new();
    let mut total = 0;
    for part in &parts {
        let tokenized = tokenize_and_sum(part, config)?;
        calculation.extend(tokenized.tokens);
        total += tokenized.sum;
    }

    let reduction = reduce_to_single_digit(total, config);
    Ok((calculation, total, reduction.steps, reduction.final_value))
}

/// Calculates the lifepath number for a `YYYY-MM-DD` birth date.
///
/// Month and day are zero-padded to 2 digits and the year is split into
/// two 2-digit halves; each part is tokenized with the master-number
/// short-circuit, and the grand total is reduced.
///
/// # Errors
///
/// Returns [`NumerologyError::InvalidDate`] for malformed or impossible
/// dates, or [`NumerologyError::YearOutOfRange`] for years outside
/// 0..=9999.
///
/// # Example
///
/// ```
/// use lifepath_numerology::{calculate_lifepath, NumerologyConfig};
///
/// let config = NumerologyConfig::new();
/// let result = calculate_lifepath("1977-11-22", &config).unwrap();
///
/// // Month 11 and day 22 are master numbers: whole tokens, not digits.
/// assert_eq!(result.calculation, vec![11, 22, 1, 9, 7, 7]);
/// ```
pub fn calculate_lifepath(
    birth_date: &str,
    config: &NumerologyConfig,
) -> Result<LifepathResult, NumerologyError> {
    let date = GregorianDate::parse_iso(birth_date)?;
    lifepath_of(date, config)
}

/// Calculates the lifepath number for a numeric `(year, month, day)`
/// triple. Same algorithm as [`calculate_lifepath`].
///
/// # Errors
///
/// Returns [`NumerologyError::InvalidDate`] if the triple is not a real
/// calendar date, or [`NumerologyError::YearOutOfRange`] for years
/// outside 0..=9999.
pub fn calculate_date_lifepath(
    year: i32,
    month: u8,
    day: u8,
    config: &NumerologyConfig,
) -> Result<LifepathResult, NumerologyError> {
    let date = GregorianDate::new(year, month, day)?;
    lifepath_of(date, config)
}

pub(crate) fn lifepath_of(
    date: GregorianDate,
    config: &NumerologyConfig,
) -> Result<LifepathResult, NumerologyError> {
    let (calculation, total, reduction_steps, number) =
        digit_sum_of_parts(date.month(), date.day(), date.year(), config)?;
    Ok(LifepathResult {
        number,
        calculation,
        total,
        reduction_steps,
        birth_date: date.format_us(),
    })
}

/// Calculates the personal-year number: the birth month and day combined
/// with `target_year` instead of the birth year.
///
/// # Errors
///
/// Returns [`NumerologyError::InvalidDate`] for malformed birth dates, or
/// [`NumerologyError::YearOutOfRange`] if `target_year` is outside
/// 0..=9999.
pub fn calculate_personal_year(
    birth_date: &str,
    target_year: i32,
    config: &NumerologyConfig,
) -> Result<PersonalYearResult, NumerologyError> {
    let date = GregorianDate::parse_iso(birth_date)?;
    let (calculation, total, reduction_steps, number) =
        digit_sum_of_parts(date.month(), date.day(), target_year, config)?;
    Ok(PersonalYearResult {
        number,
        calculation,
        total,
        reduction_steps,
        target_year,
    })
}
