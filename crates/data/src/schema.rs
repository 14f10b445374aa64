//! Raw JSON document schemas and their conversion into a validated
//! dataset.
//!
//! The document shapes match the `data/*.json` files the original
//! deployment served: per-year New Year entries are either a bare ISO
//! string or an object with a `date` field, and friend groups are either
//! bare arrays or objects with an `animals` field.

use std::collections::BTreeMap;

use serde::Deserialize;

use lifepath_calendar::GregorianDate;
use lifepath_zodiac::{AffinityLists, Animal, AnimalInfo, CompatibilityDataset};

use crate::error::DataError;

/// The New Year dates document: `{"dates": {"2024": "2024-02-10", ...}}`.
#[derive(Debug, Deserialize)]
pub struct NewYearDoc {
    /// Year (as string) → New Year entry.
    pub dates: BTreeMap<String, NewYearEntry>,
}

/// One per-year entry: a bare ISO date string, or an object carrying it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NewYearEntry {
    /// `"2024-02-10"`
    Plain(String),
    /// `{"date": "2024-02-10", ...}` (extra fields ignored)
    Detailed {
        /// The ISO date string.
        date: String,
    },
}

impl NewYearEntry {
    fn date_str(&self) -> &str {
        match self {
            NewYearEntry::Plain(s) => s,
            NewYearEntry::Detailed { date } => date,
        }
    }
}

/// The animals document: `{"animals": {"rat": {"name": ..., "emoji": ...}}}`.
#[derive(Debug, Deserialize)]
pub struct AnimalsDoc {
    /// Animal key → display metadata.
    pub animals: BTreeMap<String, AnimalInfo>,
}

/// The compatibility document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityDoc {
    /// Animal key → enemy animal key.
    pub enemies: BTreeMap<String, String>,
    /// Friend trinities.
    pub friend_groups: Vec<FriendGroupEntry>,
    /// Optional richer excellent/good lists.
    #[serde(default)]
    pub compatibility: Option<BTreeMap<String, AffinityDoc>>,
}

/// One friend group: a bare array of keys, or an object carrying it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FriendGroupEntry {
    /// `["rat", "dragon", "monkey"]`
    Plain(Vec<String>),
    /// `{"animals": ["rat", "dragon", "monkey"], ...}` (extra fields ignored)
    Detailed {
        /// The member keys.
        animals: Vec<String>,
    },
}

impl FriendGroupEntry {
    fn keys(&self) -> &[String] {
        match self {
            FriendGroupEntry::Plain(keys) => keys,
            FriendGroupEntry::Detailed { animals } => animals,
        }
    }
}

/// Per-animal affinity lists as they appear in the document.
#[derive(Debug, Default, Deserialize)]
pub struct AffinityDoc {
    /// Keys of excellently matched animals.
    #[serde(default)]
    pub excellent: Vec<String>,
    /// Keys of well matched animals.
    #[serde(default)]
    pub good: Vec<String>,
}

fn parse_animal(key: &str) -> Result<Animal, DataError> {
    Animal::from_key(key).ok_or_else(|| DataError::UnknownAnimal {
        key: key.to_string(),
    })
}

fn parse_animal_list(keys: &[String]) -> Result<Vec<Animal>, DataError> {
    keys.iter().map(|k| parse_animal(k)).collect()
}

/// Assembles the three raw documents into a validated
/// [`CompatibilityDataset`].
///
/// # Errors
///
/// Returns a [`DataError`] for unknown animal keys, malformed years or
/// dates, wrong-sized friend groups, or invariant violations in the
/// assembled dataset.
pub fn build_dataset(
    new_year: NewYearDoc,
    animals: AnimalsDoc,
    compatibility: CompatibilityDoc,
) -> Result<CompatibilityDataset, DataError> {
    let mut new_year_dates = BTreeMap::new();
    for (key, entry) in &new_year.dates {
        let year: i32 = key.parse().map_err(|_| DataError::InvalidYearKey {
            key: key.clone(),
        })?;
        let date = GregorianDate::parse_iso(entry.date_str()).map_err(|e| {
            DataError::InvalidNewYearDate {
                year,
                reason: e.to_string(),
            }
        })?;
        new_year_dates.insert(year, date);
    }

    let mut animal_map = BTreeMap::new();
    for (key, info) in animals.animals {
        animal_map.insert(parse_animal(&key)?, info);
    }

    let mut enemies = BTreeMap::new();
    for (key, enemy_key) in &compatibility.enemies {
        enemies.insert(parse_animal(key)?, parse_animal(enemy_key)?);
    }

    let mut friend_groups = Vec::with_capacity(compatibility.friend_groups.len());
    for entry in &compatibility.friend_groups {
        let members = parse_animal_list(entry.keys())?;
        let group: [Animal; 3] = members
            .try_into()
            .map_err(|members: Vec<Animal>| DataError::MalformedFriendGroup {
                len: members.len(),
            })?;
        friend_groups.push(group);
    }

    let affinities = match compatibility.compatibility {
        None => None,
        Some(raw) => {
            let mut map = BTreeMap::new();
            for (key, lists) in &raw {
                map.insert(
                    parse_animal(key)?,
                    AffinityLists {
                        excellent: parse_animal_list(&lists.excellent)?,
                        good: parse_animal_list(&lists.good)?,
                    },
                );
            }
            Some(map)
        }
    };

    let dataset = CompatibilityDataset {
        new_year_dates,
        animals: animal_map,
        enemies,
        friend_groups,
        affinities,
    };
    dataset.validate()?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_docs() -> (NewYearDoc, AnimalsDoc, CompatibilityDoc) {
        let reference = CompatibilityDataset::traditional();
        let animals = AnimalsDoc {
            animals: reference
                .animals
                .iter()
                .map(|(a, info)| (a.key().to_string(), info.clone()))
                .collect(),
        };
        let compatibility = CompatibilityDoc {
            enemies: reference
                .enemies
                .iter()
                .map(|(a, b)| (a.key().to_string(), b.key().to_string()))
                .collect(),
            friend_groups: reference
                .friend_groups
                .iter()
                .map(|g| FriendGroupEntry::Plain(g.iter().map(|a| a.key().to_string()).collect()))
                .collect(),
            compatibility: None,
        };
        let new_year = NewYearDoc {
            dates: BTreeMap::from([(
                "2024".to_string(),
                NewYearEntry::Plain("2024-02-10".to_string()),
            )]),
        };
        (new_year, animals, compatibility)
    }

    #[test]
    fn builds_from_minimal_docs() {
        let (new_year, animals, compatibility) = minimal_docs();
        let dataset = build_dataset(new_year, animals, compatibility).unwrap();
        assert_eq!(dataset.new_year_dates.len(), 1);
        assert_eq!(dataset.animals.len(), 12);
        assert!(dataset.affinities.is_none());
    }

    #[test]
    fn detailed_new_year_entries_are_accepted() {
        let (mut new_year, animals, compatibility) = minimal_docs();
        new_year.dates.insert(
            "2025".to_string(),
            NewYearEntry::Detailed {
                date: "2025-01-29".to_string(),
            },
        );
        let dataset = build_dataset(new_year, animals, compatibility).unwrap();
        assert_eq!(
            dataset.new_year_dates.get(&2025),
            Some(&GregorianDate::parse_iso("2025-01-29").unwrap())
        );
    }

    #[test]
    fn rejects_unknown_animal_key() {
        let (new_year, mut animals, compatibility) = minimal_docs();
        let info = animals.animals.get("rat").unwrap().clone();
        animals.animals.insert("unicorn".to_string(), info);
        let err = build_dataset(new_year, animals, compatibility).unwrap_err();
        assert!(matches!(err, DataError::UnknownAnimal { .. }));
    }

    #[test]
    fn rejects_bad_year_key() {
        let (mut new_year, animals, compatibility) = minimal_docs();
        new_year.dates.insert(
            "twenty-four".to_string(),
            NewYearEntry::Plain("2024-02-10".to_string()),
        );
        let err = build_dataset(new_year, animals, compatibility).unwrap_err();
        assert!(matches!(err, DataError::InvalidYearKey { .. }));
    }

    #[test]
    fn rejects_wrong_sized_friend_group() {
        let (new_year, animals, mut compatibility) = minimal_docs();
        compatibility.friend_groups[0] =
            FriendGroupEntry::Plain(vec!["rat".to_string(), "dragon".to_string()]);
        let err = build_dataset(new_year, animals, compatibility).unwrap_err();
        assert!(matches!(err, DataError::MalformedFriendGroup { len: 2 }));
    }

    #[test]
    fn rejects_invariant_violations() {
        let (new_year, animals, mut compatibility) = minimal_docs();
        compatibility
            .enemies
            .insert("rat".to_string(), "rat".to_string());
        let err = build_dataset(new_year, animals, compatibility).unwrap_err();
        assert!(matches!(err, DataError::Invalid(_)));
    }
}
