//! Integration tests for configuration loading and validation.

use pokedex_config::{Config, ConfigLoader};
use std::io::Write;
use tempfile::NamedTempFile;

const TEST_TOKEN: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA.AbCdEf.GhIjKlMnOpQrStUvWxYz123456";

#[test]
fn default_config_has_sane_pokeapi_settings() {
    let config = Config::default();
    assert!(config.pokeapi.url.starts_with("https://pokeapi.co"));
    assert!(config.pokeapi.rate_limit_per_sec >= 1);
    assert!(config.cache.ttl_seconds >= 60);
}

#[test]
fn yaml_roundtrip_preserves_settings() {
    let mut config = Config::default();
    config.discord.token = TEST_TOKEN.to_string();
    config.discord.prefix = "?".to_string();
    config.cache.capacity = 128;

    let yaml = serde_yaml::to_string(&config).expect("serialize");
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write");

    let loaded = ConfigLoader::load_config(file.path()).expect("load");
    assert_eq!(loaded.discord.prefix, "?");
    assert_eq!(loaded.cache.capacity, 128);
}
