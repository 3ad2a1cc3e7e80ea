//! Configuration management for the Pokédex bot.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{CacheSettings, Config, DiscordSettings, LoggingSettings, PokeApiSettings};
