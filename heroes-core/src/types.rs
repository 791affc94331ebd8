//! Core types for hero records

use crate::error::StoreError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

/// Numeric power ratings of a hero
///
/// The source data uses `null` for unknown ratings; those load as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerStats {
    /// Intelligence rating
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub intelligence: i32,

    /// Strength rating
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub strength: i32,

    /// Speed rating
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub speed: i32,

    /// Durability rating
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub durability: i32,

    /// Power rating
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub power: i32,

    /// Combat rating
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub combat: i32,
}

fn stat_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

/// Physical description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Appearance {
    /// Gender
    pub gender: String,
    /// Race or species
    pub race: String,
    /// Height in imperial and metric units
    pub height: Vec<String>,
    /// Weight in imperial and metric units
    pub weight: Vec<String>,
    /// Eye color
    pub eye_color: String,
    /// Hair color
    pub hair_color: String,
}

/// Publication history and identities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Biography {
    /// Civilian name
    pub full_name: String,
    /// Alternate personas
    pub alter_egos: String,
    /// Known aliases
    pub aliases: Vec<String>,
    /// Place of birth
    pub place_of_birth: String,
    /// First comic appearance
    pub first_appearance: String,
    /// Publisher
    pub publisher: String,
    /// good / bad / neutral
    pub alignment: String,
}

/// Occupation and base of operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Work {
    /// Occupation
    pub occupation: String,
    /// Base of operations
    pub base: String,
}

/// Teams and family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Connections {
    /// Team memberships
    pub group_affiliation: String,
    /// Relatives
    pub relatives: String,
}

/// Portrait URLs by size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Extra small
    pub xs: String,
    /// Small
    pub sm: String,
    /// Medium
    pub md: String,
    /// Large
    pub lg: String,
}

/// A single hero record
///
/// Only `id` and `name` are required in a document; the descriptive
/// sub-structs are reporting data and default when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Identifier assigned by the data source
    pub id: u32,

    /// Display name, used as the lookup key (not unique)
    pub name: String,

    /// Power ratings
    #[serde(default)]
    pub powerstats: PowerStats,

    /// Physical description
    #[serde(default)]
    pub appearance: Appearance,

    /// Identities and publication history
    #[serde(default)]
    pub biography: Biography,

    /// Occupation
    #[serde(default)]
    pub work: Work,

    /// Teams and relatives
    #[serde(default)]
    pub connections: Connections,

    /// Portraits
    #[serde(default)]
    pub images: Images,
}

impl Hero {
    /// Create a hero with the given identity and default descriptive data
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace the power ratings
    pub fn with_powerstats(mut self, powerstats: PowerStats) -> Self {
        self.powerstats = powerstats;
        self
    }

    /// Read one power rating
    pub fn stat(&self, key: StatKey) -> i32 {
        key.value(&self.powerstats)
    }
}

/// Selects one of the six power ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    /// `powerstats.intelligence`
    Intelligence,
    /// `powerstats.strength`
    Strength,
    /// `powerstats.speed`
    Speed,
    /// `powerstats.durability`
    Durability,
    /// `powerstats.power`
    Power,
    /// `powerstats.combat`
    Combat,
}

impl StatKey {
    /// Every key, in menu order
    pub const ALL: [StatKey; 6] = [
        StatKey::Intelligence,
        StatKey::Strength,
        StatKey::Speed,
        StatKey::Durability,
        StatKey::Power,
        StatKey::Combat,
    ];

    /// Extract the selected rating
    pub const fn value(&self, stats: &PowerStats) -> i32 {
        match self {
            StatKey::Intelligence => stats.intelligence,
            StatKey::Strength => stats.strength,
            StatKey::Speed => stats.speed,
            StatKey::Durability => stats.durability,
            StatKey::Power => stats.power,
            StatKey::Combat => stats.combat,
        }
    }

    /// Human readable name
    pub const fn name(&self) -> &'static str {
        match self {
            StatKey::Intelligence => "Intelligence",
            StatKey::Strength => "Strength",
            StatKey::Speed => "Speed",
            StatKey::Durability => "Durability",
            StatKey::Power => "Power",
            StatKey::Combat => "Combat",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StatKey::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StoreError::UnknownStat(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_stats_load_as_zero() {
        let hero: Hero = serde_json::from_str(
            r#"{"id": 7, "name": "Blank", "powerstats": {"intelligence": null, "speed": 33}}"#,
        )
        .unwrap();

        assert_eq!(hero.powerstats.intelligence, 0);
        assert_eq!(hero.powerstats.speed, 33);
        assert_eq!(hero.powerstats.combat, 0);
    }

    #[test]
    fn kebab_case_fields_deserialize() {
        let hero: Hero = serde_json::from_str(
            r#"{
                "id": 70,
                "name": "Batman",
                "appearance": {"eye-color": "blue", "height": ["6'2", "188 cm"]},
                "biography": {"full-name": "Bruce Wayne", "aliases": ["Matches Malone"]},
                "connections": {"group-affiliation": "Justice League"}
            }"#,
        )
        .unwrap();

        assert_eq!(hero.appearance.eye_color, "blue");
        assert_eq!(hero.appearance.height.len(), 2);
        assert_eq!(hero.biography.full_name, "Bruce Wayne");
        assert_eq!(hero.connections.group_affiliation, "Justice League");
        assert!(hero.work.base.is_empty());
    }

    #[test]
    fn stat_key_parses_case_insensitively() {
        assert_eq!("speed".parse::<StatKey>().unwrap(), StatKey::Speed);
        assert_eq!(" COMBAT ".parse::<StatKey>().unwrap(), StatKey::Combat);
        assert_eq!(
            "luck".parse::<StatKey>(),
            Err(StoreError::UnknownStat("luck".to_string()))
        );
    }

    #[test]
    fn stat_reads_selected_field() {
        let hero = Hero::new(1, "A").with_powerstats(PowerStats {
            intelligence: 1,
            strength: 2,
            speed: 3,
            durability: 4,
            power: 5,
            combat: 6,
        });

        let values: Vec<i32> = StatKey::ALL.iter().map(|k| hero.stat(*k)).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }
}
