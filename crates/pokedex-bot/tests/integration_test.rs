//! Integration tests for the bot application layer.

use pokedex_bot::PokedexBot;
use pokedex_config::Config;
use std::time::Duration;
use tokio::time::timeout;

#[test]
fn test_bot_construction_from_default_config() {
    // Construction never touches the network; only start() does
    let _bot = PokedexBot::new(Config::default());
}

#[tokio::test]
async fn test_async_runtime_functionality() {
    let result = timeout(Duration::from_secs(1), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        42
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}
