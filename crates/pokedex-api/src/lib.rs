//! PokeAPI client, response models, and the cached data provider.
//!
//! The [`PokeApiClient`] talks HTTP; [`record`] turns raw responses into
//! the domain views the commands render; [`DexProvider`] adds caching and
//! name normalization on top.

pub mod client;
pub mod models;
pub mod provider;
pub mod record;

pub use client::{PokeApiClient, PokeApiConfig};
pub use provider::DexProvider;
pub use record::{
    walk_chain, AbilityInfo, AbilitySlot, EvolutionStage, MoveSummary, PokemonRecord, SpeciesInfo,
};
