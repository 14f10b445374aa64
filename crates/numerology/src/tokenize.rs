//! Tokenization of zero-padded date parts.

use crate::config::NumerologyConfig;
use crate::error::NumerologyError;

/// Tokens and partial sum for one date part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSum {
    /// The emitted tokens: either one whole master-number token, or one
    /// token per decimal digit.
    pub tokens: Vec<u32>,
    /// Sum of the tokens.
    pub sum: u32,
}

/// Tokenizes one zero-padded date part (month, day, or 2-digit year half).
///
/// If the part's numeric value is a master number it is emitted as a
/// single whole token; otherwise each decimal digit becomes its own
/// token. Leading zeros are preserved as zero tokens (`"07"` → `[0, 7]`).
///
/// The short-circuit applies only per part. The grand total of all parts
/// is never short-circuited here; it goes through
/// [`reduce_to_single_digit`](crate::reduce_to_single_digit).
///
/// # Errors
///
/// Returns [`NumerologyError::NotNumeric`] if `part` is empty or contains
/// a non-digit character.
pub fn tokenize_and_sum(part: &str, config: &NumerologyConfig) -> Result<TokenSum, NumerologyError> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(NumerologyError::NotNumeric {
            input: part.to_string(),
        });
    }
    let value: u32 = part.parse().map_err(|_| NumerologyError::NotNumeric {
        input: part.to_string(),
    })?;

    if config.is_master(value) {
        return Ok(TokenSum {
            tokens: vec![value],
            sum: value,
        });
    }

    let tokens: Vec<u32> = part
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    let sum = tokens.iter().sum();
    Ok(TokenSum { tokens, sum })
}
