//! Main entry point for the Pokédex bot.

use pokedex_bot::{BotError, BotResult, PokedexBot};
use pokedex_common::{init_logging, LoggingConfig};
use pokedex_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    // Load configuration first so logging follows its settings
    let config = ConfigLoader::load()?;
    init_logging(LoggingConfig::from(&config.logging))
        .map_err(|e| BotError::Framework(format!("Failed to initialize logging: {e}")))?;

    info!("Starting Pokédex bot");

    let bot = PokedexBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {}", e);
        return Err(e);
    }

    Ok(())
}
