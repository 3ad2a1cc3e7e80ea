//! # Pokédex Bot
//!
//! Discord bot serving Pokédex lookups, type matchups, and team analysis
//! backed by PokeAPI.
//!
//! This is the main binary crate that wires configuration, the cached
//! data provider, and the Poise command framework together.

pub mod bot;
pub mod error;

pub use bot::PokedexBot;
pub use error::{BotError, BotResult};
