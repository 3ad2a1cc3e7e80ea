//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use pokedex_api::{DexProvider, PokeApiClient, PokeApiConfig};
use pokedex_commands::create_framework;
use pokedex_config::Config;
use poise::serenity_prelude as serenity;
use std::{sync::Arc, time::Duration};
use tracing::info;

/// Main bot structure.
pub struct PokedexBot {
    config: Arc<Config>,
}

impl PokedexBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build the cached PokeAPI provider from the configuration.
    fn build_provider(&self) -> BotResult<DexProvider> {
        let api_config = PokeApiConfig::new(&self.config.pokeapi.url)
            .with_timeout(self.config.pokeapi.timeout_seconds)
            .with_pool_size(self.config.pokeapi.max_idle_per_host as usize)
            .with_rate_limit(self.config.pokeapi.rate_limit_per_sec)
            .with_max_retries(self.config.pokeapi.max_retries as usize);

        let client = PokeApiClient::new(api_config)?;
        Ok(DexProvider::new(
            client,
            self.config.cache.capacity,
            Duration::from_secs(self.config.cache.ttl_seconds),
        ))
    }

    /// Starts the bot and blocks until the gateway connection ends.
    pub async fn start(&self) -> BotResult<()> {
        let provider = self.build_provider()?;
        let framework = create_framework(self.config.clone(), provider);

        // Prefix commands require the message content intent
        let intents =
            serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

        info!(
            "Connecting to Discord with prefix '{}'",
            self.config.discord.prefix
        );

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents)
            .framework(framework)
            .await
            .map_err(|e| BotError::Framework(format!("{e:?}")))?;

        client
            .start()
            .await
            .map_err(|e| BotError::Framework(format!("{e:?}")))?;
        Ok(())
    }
}
