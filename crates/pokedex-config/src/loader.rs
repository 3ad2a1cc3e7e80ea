//! Configuration loading utilities

use crate::Config;
use pokedex_common::Result as DexResult;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for pokedex_common::DexError {
    fn from(err: ConfigError) -> Self {
        pokedex_common::DexError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables and files.
    ///
    /// Resolution order: `POKEDEX_CONFIG_PATH`, then `config.yaml` /
    /// `config.yml` in the working directory, then pure defaults plus
    /// environment overrides.
    pub fn load() -> DexResult<Config> {
        let config = if let Ok(config_path) = env::var("POKEDEX_CONFIG_PATH") {
            info!("Loading configuration from {}", config_path);
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            debug!("No config file found, using defaults with env overrides");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config).map_err(pokedex_common::DexError::from)?;
            config
                .validate_all()
                .map_err(|e| pokedex_common::DexError::config(e.to_string()))?;
            config
        };

        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        // Discord configuration overrides
        if let Ok(token) = env::var("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Ok(prefix) = env::var("COMMAND_PREFIX") {
            config.discord.prefix = prefix;
        }

        if let Ok(timeout) = env::var("DISCORD_TIMEOUT") {
            config.discord.request_timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "DISCORD_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        // PokeAPI configuration overrides
        if let Ok(url) = env::var("POKEAPI_URL") {
            config.pokeapi.url = url;
        }

        if let Ok(timeout) = env::var("POKEAPI_TIMEOUT") {
            config.pokeapi.timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "POKEAPI_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(retries) = env::var("POKEAPI_MAX_RETRIES") {
            config.pokeapi.max_retries =
                retries.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "POKEAPI_MAX_RETRIES".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(rate) = env::var("POKEAPI_RATE_LIMIT") {
            config.pokeapi.rate_limit_per_sec =
                rate.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "POKEAPI_RATE_LIMIT".to_string(),
                    source: Box::new(e),
                })?;
        }

        // Cache configuration overrides
        if let Ok(capacity) = env::var("CACHE_CAPACITY") {
            config.cache.capacity = capacity.parse().map_err(|e| ConfigError::EnvParseError {
                var: "CACHE_CAPACITY".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(ttl) = env::var("CACHE_TTL_SECONDS") {
            config.cache.ttl_seconds = ttl.parse().map_err(|e| ConfigError::EnvParseError {
                var: "CACHE_TTL_SECONDS".to_string(),
                source: Box::new(e),
            })?;
        }

        // Logging configuration overrides
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TEST_TOKEN: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA.AbCdEf.GhIjKlMnOpQrStUvWxYz123456";

    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn clear_env() {
        for var in [
            "DISCORD_TOKEN",
            "COMMAND_PREFIX",
            "DISCORD_TIMEOUT",
            "POKEAPI_URL",
            "POKEAPI_TIMEOUT",
            "POKEAPI_MAX_RETRIES",
            "POKEAPI_RATE_LIMIT",
            "CACHE_CAPACITY",
            "CACHE_TTL_SECONDS",
            "LOG_LEVEL",
            "LOG_FILE",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_valid_yaml_config() {
        clear_env();

        let yaml_content = format!(
            "discord:\n  token: \"{}\"\n  prefix: \"!\"\n  request_timeout_seconds: 30\npokeapi:\n  url: \"https://pokeapi.co/api/v2\"\n  timeout_seconds: 20\n  max_retries: 2\ncache:\n  capacity: 512\n  ttl_seconds: 3600\nlogging:\n  level: \"debug\"",
            TEST_TOKEN
        );

        let temp_file = create_test_config_file(&yaml_content);
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        assert_eq!(config.discord.token, TEST_TOKEN);
        assert_eq!(config.pokeapi.timeout_seconds, 20);
        assert_eq!(config.pokeapi.max_retries, 2);
        assert_eq!(config.cache.capacity, 512);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        clear_env();

        let yaml_content = format!("discord:\n  token: \"{}\"", TEST_TOKEN);
        let temp_file = create_test_config_file(&yaml_content);
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        assert_eq!(config.discord.prefix, "!");
        assert_eq!(config.pokeapi.url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache.capacity, 2048);
    }

    #[test]
    fn test_invalid_yaml() {
        let invalid_yaml = "discord:\n  token: \"valid_token\"\n  bad: [unclosed array";
        let temp_file = create_test_config_file(invalid_yaml);
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        clear_env();

        let yaml_content = "discord:\n  token: \"too_short\"";
        let temp_file = create_test_config_file(yaml_content);
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config("/nonexistent/path/config.yaml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }
}
