//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Discord-related configuration
    pub discord: DiscordSettings,

    /// PokeAPI-related configuration
    pub pokeapi: PokeApiSettings,

    /// Pokémon record cache configuration
    pub cache: CacheSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

impl Config {
    /// Validate every section of the configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.discord.validate()?;
        self.pokeapi.validate()?;
        self.cache.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Discord bot configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DiscordSettings {
    /// Discord bot token
    #[validate(length(min = 1, message = "Discord token cannot be empty"))]
    #[validate(custom(
        function = "crate::validation::validate_discord_token",
        message = "Invalid Discord token format"
    ))]
    pub token: String,

    /// Command prefix for text commands
    #[validate(length(min = 1, max = 4, message = "Prefix must be 1-4 characters"))]
    pub prefix: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub request_timeout_seconds: u64,
}

impl Default for DiscordSettings {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: "!".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

/// PokeAPI client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PokeApiSettings {
    /// PokeAPI base URL
    #[validate(url(message = "PokeAPI URL must be a valid URL"))]
    pub url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,

    /// Maximum number of retries for failed requests
    #[validate(range(max = 10, message = "Max retries cannot exceed 10"))]
    pub max_retries: u32,

    /// Rate limit: requests per second
    #[validate(range(min = 1, max = 100, message = "Rate limit must be between 1 and 100"))]
    pub rate_limit_per_sec: u32,

    /// Connection pool max idle connections per host
    #[validate(range(min = 1, max = 100, message = "Pool size must be between 1 and 100"))]
    pub max_idle_per_host: u32,
}

impl Default for PokeApiSettings {
    fn default() -> Self {
        Self {
            url: "https://pokeapi.co/api/v2".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            rate_limit_per_sec: 10,
            max_idle_per_host: 10,
        }
    }
}

/// Pokémon record cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CacheSettings {
    /// Maximum number of cached Pokémon records
    #[validate(range(min = 1, max = 100000, message = "Capacity must be between 1 and 100000"))]
    pub capacity: u64,

    /// Time-to-live for cached entries in seconds
    #[validate(range(min = 1, message = "TTL must be at least 1 second"))]
    pub ttl_seconds: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: 2048,
            // Reference data barely changes; a day is conservative
            ttl_seconds: 24 * 60 * 60,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (e.g., "info", "debug")
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Whether to use pretty terminal formatting
    pub pretty: bool,

    /// Whether to use compact formatting
    pub compact: bool,

    /// Whether to include spans in the output
    pub include_spans: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            pretty: true,
            compact: false,
            include_spans: false,
        }
    }
}

impl From<&LoggingSettings> for pokedex_common::LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            compact_format: settings.compact,
            pretty_format: settings.pretty,
            file_path: settings.file.clone(),
            include_spans: settings.include_spans,
            include_targets: true,
        }
    }
}
