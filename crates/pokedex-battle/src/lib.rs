//! Pure battle domain logic for the Pokédex bot.
//!
//! Everything in this crate is synchronous and I/O-free: the 18-type
//! effectiveness chart, combined defensive matchups, base stat spreads
//! with bar rendering, battle role suggestions, and team analysis.

pub mod matchup;
pub mod stats;
pub mod team;
pub mod typing;

pub use matchup::TypeMatchup;
pub use stats::{stat_bar, BattleRole, Stat, StatSpread, ALL_STATS, MAX_BASE_STAT};
pub use team::{TeamReport, TeamSlot, MAX_TEAM_SIZE};
pub use typing::{PokeType, TypeParseError, ALL_TYPES};
