//! Base stat spreads, bar rendering, and battle role suggestions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The highest base stat any species has; bars are scaled against it.
pub const MAX_BASE_STAT: u16 = 255;

/// The six base stats in Pokédex order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

/// All stats in display order
pub const ALL_STATS: [Stat; 6] = [
    Stat::Hp,
    Stat::Attack,
    Stat::Defense,
    Stat::SpecialAttack,
    Stat::SpecialDefense,
    Stat::Speed,
];

impl Stat {
    /// The PokeAPI identifier for this stat
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
            Stat::Speed => "Speed",
        }
    }

    /// Emoji used when rendering stat blocks
    pub fn emoji(self) -> &'static str {
        match self {
            Stat::Hp => "❤️",
            Stat::Attack => "⚔️",
            Stat::Defense => "🛡️",
            Stat::SpecialAttack => "🔮",
            Stat::SpecialDefense => "🔰",
            Stat::Speed => "⚡",
        }
    }

    /// Parse a PokeAPI stat identifier
    pub fn from_api_name(name: &str) -> Option<Self> {
        ALL_STATS.iter().find(|s| s.as_str() == name).copied()
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A species' six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatSpread {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatSpread {
    /// Value of a single stat
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set a single stat by its PokeAPI identifier; unknown names are ignored
    pub fn set_by_api_name(&mut self, name: &str, value: u16) {
        if let Some(stat) = Stat::from_api_name(name) {
            match stat {
                Stat::Hp => self.hp = value,
                Stat::Attack => self.attack = value,
                Stat::Defense => self.defense = value,
                Stat::SpecialAttack => self.special_attack = value,
                Stat::SpecialDefense => self.special_defense = value,
                Stat::Speed => self.speed = value,
            }
        }
    }

    /// Iterate stats in display order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        ALL_STATS.iter().map(move |&s| (s, self.get(s)))
    }

    /// Base stat total
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| u32::from(v)).sum()
    }

    /// The highest stat and its value; ties resolve to the first in
    /// display order
    pub fn highest(&self) -> (Stat, u16) {
        let mut best = (ALL_STATS[0], self.get(ALL_STATS[0]));
        for (stat, value) in self.iter().skip(1) {
            if value > best.1 {
                best = (stat, value);
            }
        }
        best
    }
}

/// Suggested competitive role, derived from the highest base stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleRole {
    Tank,
    PhysicalAttacker,
    PhysicalWall,
    SpecialAttacker,
    SpecialWall,
    FastSweeper,
}

impl BattleRole {
    /// Role suggested by a stat being the spread's highest
    pub fn from_stat(stat: Stat) -> Self {
        match stat {
            Stat::Hp => BattleRole::Tank,
            Stat::Attack => BattleRole::PhysicalAttacker,
            Stat::Defense => BattleRole::PhysicalWall,
            Stat::SpecialAttack => BattleRole::SpecialAttacker,
            Stat::SpecialDefense => BattleRole::SpecialWall,
            Stat::Speed => BattleRole::FastSweeper,
        }
    }

    /// Role suggested for a full spread
    pub fn for_spread(spread: &StatSpread) -> Self {
        Self::from_stat(spread.highest().0)
    }

    /// Human-readable role name
    pub fn display_name(self) -> &'static str {
        match self {
            BattleRole::Tank => "Tank/Wall",
            BattleRole::PhysicalAttacker => "Physical Attacker",
            BattleRole::PhysicalWall => "Physical Wall",
            BattleRole::SpecialAttacker => "Special Attacker",
            BattleRole::SpecialWall => "Special Wall",
            BattleRole::FastSweeper => "Fast Sweeper",
        }
    }

    /// Whether this role is defensive
    pub fn is_defensive(self) -> bool {
        matches!(
            self,
            BattleRole::Tank | BattleRole::PhysicalWall | BattleRole::SpecialWall
        )
    }

    /// Whether this role is offensive
    pub fn is_offensive(self) -> bool {
        matches!(
            self,
            BattleRole::PhysicalAttacker | BattleRole::SpecialAttacker
        )
    }
}

impl fmt::Display for BattleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Render a fixed-width text bar (`███░░░░░░░`) for a base stat value.
pub fn stat_bar(value: u16, width: usize) -> String {
    let filled = (usize::from(value.min(MAX_BASE_STAT)) * width) / usize::from(MAX_BASE_STAT);
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}
