//! Configuration for numerology calculations.

use std::collections::BTreeSet;

/// Configuration for numerology calculations.
///
/// Master numbers and special numbers are exempt from digit reduction:
/// reduction stops as soon as the running value is one of them. Master
/// numbers additionally short-circuit tokenization — a 2-digit date part
/// equal to a master number contributes a single whole token instead of
/// two digit tokens.
///
/// # Example
///
/// ```
/// use lifepath_numerology::NumerologyConfig;
///
/// let config = NumerologyConfig::new()
///     .with_master_numbers([11, 22, 33, 44])
///     .with_special_numbers([28]);
///
/// assert!(config.is_master(44));
/// assert!(config.is_special(28));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerologyConfig {
    /// Values exempt from reduction and tokenization splitting.
    master_numbers: BTreeSet<u32>,
    /// Values exempt from reduction only.
    special_numbers: BTreeSet<u32>,
}

impl Default for NumerologyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NumerologyConfig {
    /// Creates a configuration with the traditional defaults:
    /// master numbers {11, 22, 33}, special numbers {28}.
    pub fn new() -> Self {
        Self {
            master_numbers: BTreeSet::from([11, 22, 33]),
            special_numbers: BTreeSet::from([28]),
        }
    }

    /// Replaces the set of master numbers.
    pub fn with_master_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.master_numbers = numbers.into_iter().collect();
        self
    }

    /// Replaces the set of special numbers.
    pub fn with_special_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.special_numbers = numbers.into_iter().collect();
        self
    }

    /// Returns the set of master numbers.
    pub fn master_numbers(&self) -> &BTreeSet<u32> {
        &self.master_numbers
    }

    /// Returns the set of special numbers.
    pub fn special_numbers(&self) -> &BTreeSet<u32> {
        &self.special_numbers
    }

    /// Returns `true` if `n` is a master number.
    pub fn is_master(&self, n: u32) -> bool {
        self.master_numbers.contains(&n)
    }

    /// Returns `true` if `n` is a special number.
    pub fn is_special(&self, n: u32) -> bool {
        self.special_numbers.contains(&n)
    }

    /// Returns `true` if `n` is already fully reduced: a single digit,
    /// a master number, or a special number.
    pub fn is_terminal(&self, n: u32) -> bool {
        n <= 9 || self.is_master(n) || self.is_special(n)
    }
}
