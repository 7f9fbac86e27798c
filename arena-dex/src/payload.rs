//! Raw payload as served by the creature API, and its normalization

use arena_core::{Fighter, Stat};
use serde::{Deserialize, Serialize};

/// `{ "name": ... }` reference object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedRef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawType {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Creature payload; unknown fields are ignored
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawFighter {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub types: Vec<RawType>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl RawFighter {
    /// Minimal payload with the four battle stats
    pub fn new(id: u64, name: &str, hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        let stats = [
            (Stat::Hp, hp),
            (Stat::Attack, attack),
            (Stat::Defense, defense),
            (Stat::Speed, speed),
        ]
        .into_iter()
        .map(|(stat, value)| RawStat {
            base_stat: value,
            stat: NamedRef {
                name: stat.api_name().to_string(),
            },
        })
        .collect();

        Self {
            id,
            name: name.to_string(),
            height: 0,
            weight: 0,
            stats,
            types: Vec::new(),
            sprites: Sprites::default(),
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types
            .iter()
            .map(|t| RawType {
                kind: NamedRef { name: t.to_string() },
            })
            .collect();
        self
    }

    /// Base value of the first stat entry whose name matches exactly, or 0
    pub fn base_stat(&self, stat: Stat) -> u32 {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat.api_name())
            .map(|s| s.base_stat)
            .unwrap_or(0)
    }

    pub fn into_fighter(self) -> Fighter {
        Fighter {
            hp: self.base_stat(Stat::Hp),
            attack: self.base_stat(Stat::Attack),
            defense: self.base_stat(Stat::Defense),
            speed: self.base_stat(Stat::Speed),
            id: self.id,
            types: self.types.into_iter().map(|t| t.kind.name).collect(),
            name: self.name,
        }
    }
}

impl From<RawFighter> for Fighter {
    fn from(raw: RawFighter) -> Self {
        raw.into_fighter()
    }
}
