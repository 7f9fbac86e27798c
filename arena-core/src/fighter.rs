//! Fighter records and identifiers

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier used to look a fighter up at the source.
///
/// Numeric and textual identifiers are distinct keys: `Numeric(1)` and
/// `Name("1")` never collide in a cache.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FighterId {
    Numeric(u64),
    Name(String),
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FighterId::Numeric(n) => write!(f, "{}", n),
            FighterId::Name(s) => f.write_str(s),
        }
    }
}

impl From<u64> for FighterId {
    fn from(n: u64) -> Self {
        FighterId::Numeric(n)
    }
}

impl From<&str> for FighterId {
    fn from(s: &str) -> Self {
        FighterId::Name(s.to_string())
    }
}

impl From<String> for FighterId {
    fn from(s: String) -> Self {
        FighterId::Name(s)
    }
}

/// Parses command-line style input: all-digit strings become `Numeric`,
/// everything else is kept verbatim as `Name`.
impl FromStr for FighterId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = s.parse::<u64>() {
                return Ok(FighterId::Numeric(n));
            }
        }
        Ok(FighterId::Name(s.to_string()))
    }
}

/// One of the four battle stats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    Speed,
}

/// All stats in source order
pub const ALL_STATS: [Stat; 4] = [Stat::Hp, Stat::Attack, Stat::Defense, Stat::Speed];

impl Stat {
    /// Stat name as reported by the source payload (case-sensitive)
    pub fn api_name(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
        }
    }

    /// Look a stat up by its source name
    pub fn from_api_name(name: &str) -> Option<Stat> {
        ALL_STATS.into_iter().find(|s| s.api_name() == name)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::from_api_name(s).ok_or_else(|| format!("unknown stat: {}", s))
    }
}

/// Normalized creature stats used in battle resolution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: u64,
    pub name: String,
    /// Health capacity
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    /// Category tags
    pub types: Vec<String>,
}

impl Fighter {
    /// Create a fighter with no category tags
    pub fn new(id: u64, name: &str, hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            hp,
            attack,
            defense,
            speed,
            types: Vec::new(),
        }
    }

    /// Set category tags
    pub fn with_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Read one stat
    pub fn stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
        }
    }
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_numeric_and_name_ids_are_distinct() {
        let mut keys = HashSet::new();
        keys.insert(FighterId::Numeric(1));
        keys.insert(FighterId::Name("1".to_string()));
        assert_eq!(keys.len(), 2);
        assert_ne!(FighterId::from(1), FighterId::from("1"));
    }

    #[test]
    fn test_id_display_is_bare_value() {
        assert_eq!(FighterId::Numeric(25).to_string(), "25");
        assert_eq!(FighterId::from("pikachu").to_string(), "pikachu");
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!("130".parse::<FighterId>().unwrap(), FighterId::Numeric(130));
        assert_eq!(
            "mr-mime".parse::<FighterId>().unwrap(),
            FighterId::Name("mr-mime".to_string())
        );
        assert_eq!(
            "Gengar".parse::<FighterId>().unwrap(),
            FighterId::Name("Gengar".to_string())
        );
        // Too large for u64 stays textual
        let huge = "99999999999999999999999";
        assert_eq!(huge.parse::<FighterId>().unwrap(), FighterId::Name(huge.to_string()));
    }

    #[test]
    fn test_id_serde_untagged() {
        let ids: Vec<FighterId> = serde_json::from_str(r#"[1, "eevee"]"#).unwrap();
        assert_eq!(ids, vec![FighterId::Numeric(1), FighterId::from("eevee")]);
    }

    #[test]
    fn test_stat_names() {
        for stat in ALL_STATS {
            assert_eq!(Stat::from_api_name(stat.api_name()), Some(stat));
        }
        assert_eq!(Stat::from_api_name("HP"), None);
        assert_eq!(Stat::from_api_name("special-attack"), None);
        assert!("speed".parse::<Stat>().is_ok());
        assert!("luck".parse::<Stat>().is_err());
    }

    #[test]
    fn test_fighter_stat_accessor() {
        let f = Fighter::new(6, "charizard", 78, 84, 78, 100).with_types(["fire", "flying"]);
        assert_eq!(f.stat(Stat::Hp), 78);
        assert_eq!(f.stat(Stat::Attack), 84);
        assert_eq!(f.stat(Stat::Defense), 78);
        assert_eq!(f.stat(Stat::Speed), 100);
        assert_eq!(f.types, vec!["fire", "flying"]);
        assert_eq!(f.to_string(), "charizard");
    }
}
