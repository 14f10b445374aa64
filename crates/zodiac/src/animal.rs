//! The twelve zodiac animals and their fixed cycle order.

use serde::{Deserialize, Serialize};

/// One of the twelve Chinese zodiac animals.
///
/// Serializes as its lowercase key (`"rat"`, `"ox"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// The fixed 12-year cycle order, starting from the animal of the base
/// year (1900 was a Rat year).
pub const ANIMAL_CYCLE: [Animal; 12] = [
    Animal::Rat,
    Animal::Ox,
    Animal::Tiger,
    Animal::Rabbit,
    Animal::Dragon,
    Animal::Snake,
    Animal::Horse,
    Animal::Goat,
    Animal::Monkey,
    Animal::Rooster,
    Animal::Dog,
    Animal::Pig,
];

impl Animal {
    /// Returns the canonical lowercase key for this animal.
    pub fn key(self) -> &'static str {
        match self {
            Animal::Rat => "rat",
            Animal::Ox => "ox",
            Animal::Tiger => "tiger",
            Animal::Rabbit => "rabbit",
            Animal::Dragon => "dragon",
            Animal::Snake => "snake",
            Animal::Horse => "horse",
            Animal::Goat => "goat",
            Animal::Monkey => "monkey",
            Animal::Rooster => "rooster",
            Animal::Dog => "dog",
            Animal::Pig => "pig",
        }
    }

    /// Looks up an animal by key, case-insensitively.
    ///
    /// Returns `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        let lowered = key.to_ascii_lowercase();
        ANIMAL_CYCLE.iter().copied().find(|a| a.key() == lowered)
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
