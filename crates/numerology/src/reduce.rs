//! Digit-sum reduction with a human-readable trace.

use serde::Serialize;

use crate::config::NumerologyConfig;

/// Result of reducing a number to a single digit, master number, or
/// special number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitReduction {
    /// The input value before any reduction.
    pub total: u32,
    /// One line per reduction pass, e.g. `"29 → 2 + 9 = 11"`.
    /// Empty if the input was already terminal.
    pub steps: Vec<String>,
    /// The terminal value: 1..=9, a master number, or a special number.
    #[serde(rename = "final")]
    pub final_value: u32,
}

/// Splits a non-negative number into its decimal digits, most significant
/// first. Zero yields `[0]`.
pub(crate) fn decimal_digits(mut n: u32) -> Vec<u32> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(n % 10);
        n /= 10;
    }
    digits.reverse();
    digits
}

/// Reduces `n` by repeated digit summing until the running value is a
/// single digit, a master number, or a special number.
///
/// Each pass is recorded as a step string `"{n} → d1 + d2 + ... = {sum}"`.
/// Inputs that are already terminal produce no steps.
///
/// # Example
///
/// ```
/// use lifepath_numerology::{reduce_to_single_digit, NumerologyConfig};
///
/// let config = NumerologyConfig::new();
/// // 29 → 11, and 11 is a master number, so reduction stops there.
/// let reduction = reduce_to_single_digit(29, &config);
/// assert_eq!(reduction.final_value, 11);
/// assert_eq!(reduction.steps, vec!["29 → 2 + 9 = 11".to_string()]);
/// ```
pub fn reduce_to_single_digit(n: u32, config: &NumerologyConfig) -> DigitReduction {
    let mut current = n;
    let mut steps = Vec::new();

    while !config.is_terminal(current) {
        let digits = decimal_digits(current);
        let sum: u32 = digits.iter().sum();
        let joined = digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        steps.push(format!("{current} → {joined} = {sum}"));
        current = sum;
    }

    DigitReduction {
        total: n,
        steps,
        final_value: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits_are_fixed_points() {
        let config = NumerologyConfig::new();
        for n in 1..=9 {
            let reduction = reduce_to_single_digit(n, &config);
            assert_eq!(reduction.final_value, n);
            assert_eq!(reduction.total, n);
            assert!(reduction.steps.is_empty());
        }
    }

    #[test]
    fn zero_is_terminal() {
        let config = NumerologyConfig::new();
        let reduction = reduce_to_single_digit(0, &config);
        assert_eq!(reduction.final_value, 0);
        assert!(reduction.steps.is_empty());
    }

    #[test]
    fn stops_at_master_number() {
        let config = NumerologyConfig::new();
        let reduction = reduce_to_single_digit(29, &config);
        assert_eq!(reduction.final_value, 11);
        assert_eq!(reduction.steps, vec!["29 → 2 + 9 = 11".to_string()]);
    }

    #[test]
    fn stops_at_special_number() {
        let config = NumerologyConfig::new();
        let reduction = reduce_to_single_digit(28, &config);
        assert_eq!(reduction.final_value, 28);
        assert!(reduction.steps.is_empty());
    }

    #[test]
    fn multi_pass_reduction() {
        let config = NumerologyConfig::new();
        // 57 → 12 → 3 (neither 57 nor 12 is master/special)
        let reduction = reduce_to_single_digit(57, &config);
        assert_eq!(reduction.final_value, 3);
        assert_eq!(
            reduction.steps,
            vec!["57 → 5 + 7 = 12".to_string(), "12 → 1 + 2 = 3".to_string()]
        );
    }

    #[test]
    fn master_exemption_is_configurable() {
        // Without 11 as a master number, 29 reduces all the way to 2.
        let config = NumerologyConfig::new().with_master_numbers([22, 33]);
        let reduction = reduce_to_single_digit(29, &config);
        assert_eq!(reduction.final_value, 2);
        assert_eq!(reduction.steps.len(), 2);
    }

    #[test]
    fn final_value_is_terminal_invariant() {
        let config = NumerologyConfig::new();
        for n in 0..=2000 {
            let reduction = reduce_to_single_digit(n, &config);
            assert!(
                config.is_terminal(reduction.final_value),
                "{n} reduced to non-terminal {}",
                reduction.final_value
            );
        }
    }

    #[test]
    fn decimal_digits_basic() {
        assert_eq!(decimal_digits(0), vec![0]);
        assert_eq!(decimal_digits(7), vec![7]);
        assert_eq!(decimal_digits(29), vec![2, 9]);
        assert_eq!(decimal_digits(1905), vec![1, 9, 0, 5]);
    }
}
