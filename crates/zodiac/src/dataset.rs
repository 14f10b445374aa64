//! The compatibility dataset the engine is configured with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lifepath_calendar::GregorianDate;

use crate::animal::{Animal, ANIMAL_CYCLE};
use crate::error::DatasetError;

/// Display metadata for one animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalInfo {
    /// Capitalized English name, e.g. `"Rat"`.
    pub name: String,
    /// The animal's emoji.
    pub emoji: String,
}

/// Optional per-animal affinity lists beyond the minimal dataset.
///
/// These may be asymmetric in practice; compatibility checks consult both
/// directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityLists {
    /// Animals this one pairs excellently with.
    #[serde(default)]
    pub excellent: Vec<Animal>,
    /// Animals this one pairs well with.
    #[serde(default)]
    pub good: Vec<Animal>,
}

/// The dataset a [`ZodiacEngine`] is configured with: Chinese New Year
/// dates, animal metadata, and compatibility relations.
///
/// Held read-only by the engine after validation. `new_year_dates` may be
/// sparse — missing years fall back to the estimator.
///
/// [`ZodiacEngine`]: crate::ZodiacEngine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityDataset {
    /// Chinese New Year start date per Gregorian year (sparse).
    pub new_year_dates: BTreeMap<i32, GregorianDate>,
    /// Display metadata; must cover all 12 animals.
    pub animals: BTreeMap<Animal, AnimalInfo>,
    /// Symmetric pairwise enemy relation (6 pairs covering all 12).
    pub enemies: BTreeMap<Animal, Animal>,
    /// Friend trinities; each animal belongs to exactly one group of 3.
    pub friend_groups: Vec<[Animal; 3]>,
    /// Optional richer excellent/good affinity lists.
    pub affinities: Option<BTreeMap<Animal, AffinityLists>>,
}

impl CompatibilityDataset {
    /// Builds the traditional relations: the 12 animals with their usual
    /// emoji, the 6 enemy pairs, and the 4 friend trinities. The New Year
    /// table starts empty (every lookup estimates) and `affinities` is
    /// unset; callers populate both as needed.
    pub fn traditional() -> Self {
        let animals = [
            (Animal::Rat, "Rat", "🐭"),
            (Animal::Ox, "Ox", "🐂"),
            (Animal::Tiger, "Tiger", "🐅"),
            (Animal::Rabbit, "Rabbit", "🐰"),
            (Animal::Dragon, "Dragon", "🐉"),
            (Animal::Snake, "Snake", "🐍"),
            (Animal::Horse, "Horse", "🐎"),
            (Animal::Goat, "Goat", "🐐"),
            (Animal::Monkey, "Monkey", "🐵"),
            (Animal::Rooster, "Rooster", "🐓"),
            (Animal::Dog, "Dog", "🐕"),
            (Animal::Pig, "Pig", "🐷"),
        ]
        .into_iter()
        .map(|(animal, name, emoji)| {
            (
                animal,
                AnimalInfo {
                    name: name.to_string(),
                    emoji: emoji.to_string(),
                },
            )
        })
        .collect();

        let enemy_pairs = [
            (Animal::Rat, Animal::Horse),
            (Animal::Ox, Animal::Goat),
            (Animal::Tiger, Animal::Monkey),
            (Animal::Rabbit, Animal::Rooster),
            (Animal::Dragon, Animal::Dog),
            (Animal::Snake, Animal::Pig),
        ];
        let mut enemies = BTreeMap::new();
        for (a, b) in enemy_pairs {
            enemies.insert(a, b);
            enemies.insert(b, a);
        }

        let friend_groups = vec![
            [Animal::Rat, Animal::Dragon, Animal::Monkey],
            [Animal::Ox, Animal::Snake, Animal::Rooster],
            [Animal::Tiger, Animal::Horse, Animal::Dog],
            [Animal::Rabbit, Animal::Goat, Animal::Pig],
        ];

        Self {
            new_year_dates: BTreeMap::new(),
            animals,
            enemies,
            friend_groups,
            affinities: None,
        }
    }

    /// Validates the dataset invariants:
    ///
    /// - every animal has an entry in `animals`;
    /// - the enemy relation covers all 12 animals and is a perfect
    ///   involution with no self-enemies;
    /// - every animal belongs to exactly one friend trinity.
    ///
    /// # Errors
    ///
    /// Returns the first [`DatasetError`] found.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for animal in ANIMAL_CYCLE {
            if !self.animals.contains_key(&animal) {
                return Err(DatasetError::MissingAnimal {
                    key: animal.key().to_string(),
                });
            }
        }

        for animal in ANIMAL_CYCLE {
            let enemy = *self
                .enemies
                .get(&animal)
                .ok_or_else(|| DatasetError::MissingEnemy {
                    key: animal.key().to_string(),
                })?;
            if enemy == animal {
                return Err(DatasetError::SelfEnemy {
                    key: animal.key().to_string(),
                });
            }
            if self.enemies.get(&enemy) != Some(&animal) {
                return Err(DatasetError::AsymmetricEnemy {
                    key: animal.key().to_string(),
                    enemy: enemy.key().to_string(),
                });
            }
        }

        for animal in ANIMAL_CYCLE {
            let count = self
                .friend_groups
                .iter()
                .filter(|group| group.contains(&animal))
                .count();
            if count != 1 {
                return Err(DatasetError::TrinityMembership {
                    key: animal.key().to_string(),
                    count,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traditional_dataset_is_valid() {
        assert_eq!(CompatibilityDataset::traditional().validate(), Ok(()));
    }

    #[test]
    fn rejects_missing_animal() {
        let mut dataset = CompatibilityDataset::traditional();
        dataset.animals.remove(&Animal::Pig);
        assert_eq!(
            dataset.validate(),
            Err(DatasetError::MissingAnimal {
                key: "pig".to_string()
            })
        );
    }

    #[test]
    fn rejects_self_enemy() {
        let mut dataset = CompatibilityDataset::traditional();
        dataset.enemies.insert(Animal::Rat, Animal::Rat);
        assert_eq!(
            dataset.validate(),
            Err(DatasetError::SelfEnemy {
                key: "rat".to_string()
            })
        );
    }

    #[test]
    fn rejects_asymmetric_enemies() {
        let mut dataset = CompatibilityDataset::traditional();
        // rat → ox, but ox still → goat.
        dataset.enemies.insert(Animal::Rat, Animal::Ox);
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::AsymmetricEnemy { .. })
        ));
    }

    #[test]
    fn rejects_animal_in_two_trinities() {
        let mut dataset = CompatibilityDataset::traditional();
        dataset.friend_groups[1] = [Animal::Rat, Animal::Snake, Animal::Rooster];
        // Rat now appears twice, Ox zero times; first failure reported is Rat's.
        assert_eq!(
            dataset.validate(),
            Err(DatasetError::TrinityMembership {
                key: "rat".to_string(),
                count: 2
            })
        );
    }

    #[test]
    fn rejects_missing_enemy_entry() {
        let mut dataset = CompatibilityDataset::traditional();
        dataset.enemies.remove(&Animal::Dog);
        // Dragon's enemy entry (→ dog) is checked before dog's missing one.
        assert!(dataset.validate().is_err());
    }
}
