//! The 18 Pokémon types with their defensive effectiveness chart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown type name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a Pokémon type")]
pub struct TypeParseError(pub String);

/// One of the 18 Pokémon types.
///
/// The chart methods describe the type *defensively*: what hits it for
/// double damage, what it resists, and what cannot touch it at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PokeType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

use PokeType::*;

/// All types in canonical chart order
pub const ALL_TYPES: [PokeType; 18] = [
    Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground, Flying, Psychic, Bug,
    Rock, Ghost, Dragon, Dark, Steel, Fairy,
];

impl PokeType {
    /// The lowercase API slug for this type
    pub fn as_str(self) -> &'static str {
        match self {
            Normal => "normal",
            Fire => "fire",
            Water => "water",
            Electric => "electric",
            Grass => "grass",
            Ice => "ice",
            Fighting => "fighting",
            Poison => "poison",
            Ground => "ground",
            Flying => "flying",
            Psychic => "psychic",
            Bug => "bug",
            Rock => "rock",
            Ghost => "ghost",
            Dragon => "dragon",
            Dark => "dark",
            Steel => "steel",
            Fairy => "fairy",
        }
    }

    /// Capitalized display name
    pub fn display_name(self) -> &'static str {
        match self {
            Normal => "Normal",
            Fire => "Fire",
            Water => "Water",
            Electric => "Electric",
            Grass => "Grass",
            Ice => "Ice",
            Fighting => "Fighting",
            Poison => "Poison",
            Ground => "Ground",
            Flying => "Flying",
            Psychic => "Psychic",
            Bug => "Bug",
            Rock => "Rock",
            Ghost => "Ghost",
            Dragon => "Dragon",
            Dark => "Dark",
            Steel => "Steel",
            Fairy => "Fairy",
        }
    }

    /// The traditional embed color for this type
    pub fn color(self) -> u32 {
        match self {
            Normal => 0xA8A878,
            Fire => 0xF08030,
            Water => 0x6890F0,
            Electric => 0xF8D030,
            Grass => 0x78C850,
            Ice => 0x98D8D8,
            Fighting => 0xC03028,
            Poison => 0xA040A0,
            Ground => 0xE0C068,
            Flying => 0xA890F0,
            Psychic => 0xF85888,
            Bug => 0xA8B820,
            Rock => 0xB8A038,
            Ghost => 0x705898,
            Dragon => 0x7038F8,
            Dark => 0x705848,
            Steel => 0xB8B8D0,
            Fairy => 0xEE99AC,
        }
    }

    /// A single emoji used when rendering type lines
    pub fn emoji(self) -> &'static str {
        match self {
            Normal => "⚪",
            Fire => "🔥",
            Water => "💧",
            Electric => "⚡",
            Grass => "🌿",
            Ice => "❄️",
            Fighting => "👊",
            Poison => "☠️",
            Ground => "🌍",
            Flying => "🦅",
            Psychic => "🧠",
            Bug => "🪲",
            Rock => "🪨",
            Ghost => "👻",
            Dragon => "🐉",
            Dark => "🌑",
            Steel => "⚔️",
            Fairy => "🎀",
        }
    }

    /// Types that deal double damage to this type
    pub fn weak_to(self) -> &'static [PokeType] {
        match self {
            Normal => &[Fighting],
            Fire => &[Water, Ground, Rock],
            Water => &[Electric, Grass],
            Electric => &[Ground],
            Grass => &[Fire, Ice, Poison, Flying, Bug],
            Ice => &[Fire, Fighting, Rock, Steel],
            Fighting => &[Flying, Psychic, Fairy],
            Poison => &[Ground, Psychic],
            Ground => &[Water, Grass, Ice],
            Flying => &[Electric, Ice, Rock],
            Psychic => &[Bug, Ghost, Dark],
            Bug => &[Fire, Flying, Rock],
            Rock => &[Water, Grass, Fighting, Ground, Steel],
            Ghost => &[Ghost, Dark],
            Dragon => &[Ice, Dragon, Fairy],
            Dark => &[Fighting, Bug, Fairy],
            Steel => &[Fire, Fighting, Ground],
            Fairy => &[Poison, Steel],
        }
    }

    /// Types this type takes half damage from
    pub fn resists(self) -> &'static [PokeType] {
        match self {
            Normal => &[],
            Fire => &[Fire, Grass, Ice, Bug, Steel, Fairy],
            Water => &[Fire, Water, Ice, Steel],
            Electric => &[Electric, Flying, Steel],
            Grass => &[Water, Electric, Grass, Ground],
            Ice => &[Ice],
            Fighting => &[Bug, Rock, Dark],
            Poison => &[Grass, Fighting, Poison, Bug, Fairy],
            Ground => &[Poison, Rock],
            Flying => &[Grass, Fighting, Bug],
            Psychic => &[Fighting, Psychic],
            Bug => &[Grass, Fighting, Ground],
            Rock => &[Normal, Fire, Poison, Flying],
            Ghost => &[Poison, Bug],
            Dragon => &[Fire, Water, Electric, Grass],
            Dark => &[Ghost, Dark],
            Steel => &[
                Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy,
            ],
            Fairy => &[Fighting, Bug, Dark],
        }
    }

    /// Types that cannot damage this type at all
    pub fn immune_to(self) -> &'static [PokeType] {
        match self {
            Normal => &[Ghost],
            Ground => &[Electric],
            Flying => &[Ground],
            Ghost => &[Normal, Fighting],
            Dark => &[Psychic],
            Steel => &[Poison],
            Fairy => &[Dragon],
            _ => &[],
        }
    }
}

impl FromStr for PokeType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        ALL_TYPES
            .iter()
            .find(|t| t.as_str() == slug)
            .copied()
            .ok_or_else(|| TypeParseError(s.to_string()))
    }
}

impl fmt::Display for PokeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
