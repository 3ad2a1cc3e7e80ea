//! PokeAPI HTTP client with connection pooling and rate limiting
//!
//! This module provides a robust HTTP client for the public PokeAPI,
//! including rate limiting, retry logic, and comprehensive error handling.
//! Unknown resources (404) are surfaced as [`DexError::NotFound`] and are
//! never retried.

use crate::models::{AbilityData, EvolutionChain, MoveData, Pokemon, Species};
use governor::{DefaultDirectRateLimiter, Quota};
use pokedex_common::{DexError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::{num::NonZeroU32, sync::Arc, time::Duration};
use tokio_retry::{strategy::ExponentialBackoff, RetryIf};
use tracing::{debug, error, info, instrument, warn};

/// Configuration for the PokeAPI client
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// Base URL of the API (e.g., "https://pokeapi.co/api/v2")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connection pool max idle connections per host (default: 10)
    pub max_idle_per_host: usize,
    /// Rate limit: requests per second (default: 10)
    pub rate_limit_per_sec: u32,
    /// Maximum number of retry attempts (default: 3)
    pub max_retries: usize,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            timeout_secs: 30,
            max_idle_per_host: 10,
            rate_limit_per_sec: 10,
            max_retries: 3,
        }
    }
}

impl PokeApiConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the connection pool size
    pub fn with_pool_size(mut self, max_idle_per_host: usize) -> Self {
        self.max_idle_per_host = max_idle_per_host;
        self
    }

    /// Set the rate limit
    pub fn with_rate_limit(mut self, rate_limit_per_sec: u32) -> Self {
        self.rate_limit_per_sec = rate_limit_per_sec;
        self
    }

    /// Set the maximum retry attempts
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// PokeAPI client with connection pooling and rate limiting
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    config: PokeApiConfig,
    rate_limiter: Arc<DefaultDirectRateLimiter>,
}

impl PokeApiClient {
    /// Create a new PokeAPI client with the given configuration
    pub fn new(config: PokeApiConfig) -> Result<Self> {
        // Build the HTTP client with connection pooling and timeouts
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| DexError::network_with_source("Failed to create HTTP client", e))?;

        // Create rate limiter
        let quota = Quota::per_second(
            NonZeroU32::new(config.rate_limit_per_sec)
                .ok_or_else(|| DexError::config("Rate limit must be greater than 0"))?,
        );
        let rate_limiter = Arc::new(DefaultDirectRateLimiter::direct(quota));

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Create a new client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(PokeApiConfig::default())
    }

    /// Build a full request URL for an API path like "pokemon/pikachu"
    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Whether a failed request is worth retrying.
    ///
    /// Unknown resources and other client errors are final; only network
    /// failures and server errors go through the backoff loop.
    fn is_retryable(err: &DexError) -> bool {
        match err {
            DexError::NotFound { .. } => false,
            DexError::PokeApi { status_code, .. } => {
                !matches!(status_code, Some(code) if (400..500).contains(code))
            }
            DexError::Network { .. } => true,
            _ => false,
        }
    }

    /// Fetch a URL and deserialize the JSON body, with retry and rate limiting
    #[instrument(skip(self), fields(url = %url, resource = %resource))]
    async fn fetch_json<T>(&self, url: &str, resource: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        debug!("Making request to: {}", url);

        // Retry logic with exponential backoff; 404 and other client
        // errors break out of the loop immediately
        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(10))
            .take(self.config.max_retries);

        let response = RetryIf::spawn(
            retry_strategy,
            || async {
                match self.client.get(url).send().await {
                    Ok(response) => {
                        let status = response.status();
                        if status.is_success() {
                            debug!("Request successful: {}", status);
                            Ok(response)
                        } else if status == StatusCode::NOT_FOUND {
                            debug!("Resource not found: {}", resource);
                            Err(DexError::not_found(resource))
                        } else if status.is_client_error() {
                            error!("Client error: {}", status);
                            Err(DexError::pokeapi_with_status(
                                format!("API returned client error: {status}"),
                                status.as_u16(),
                            ))
                        } else {
                            warn!("Server error, will retry: {}", status);
                            Err(DexError::pokeapi_with_status(
                                format!("API returned server error: {status}"),
                                status.as_u16(),
                            ))
                        }
                    }
                    Err(e) if e.is_timeout() => {
                        warn!("Request timeout, will retry: {}", e);
                        Err(DexError::network_with_source("Request timeout", e))
                    }
                    Err(e) if e.is_connect() => {
                        warn!("Connection error, will retry: {}", e);
                        Err(DexError::network_with_source("Connection error", e))
                    }
                    Err(e) => {
                        error!("Request failed: {}", e);
                        Err(DexError::network_with_source("Request failed", e))
                    }
                }
            },
            Self::is_retryable,
        )
        .await?;

        let text = response
            .text()
            .await
            .map_err(|e| DexError::network_with_source("Failed to read response body", e))?;

        serde_json::from_str(&text).map_err(DexError::from)
    }

    /// Fetch an API path relative to the configured base URL
    async fn get_json<T>(&self, path: &str, resource: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path);
        self.fetch_json(&url, resource).await
    }

    // ============================================================================
    // Public API Methods
    // ============================================================================

    /// Get a Pokémon by name or National Dex number
    ///
    /// The identifier should already be normalized to a lowercase slug
    /// (e.g., "mr-mime").
    #[instrument(skip(self))]
    pub async fn get_pokemon(&self, slug: &str) -> Result<Pokemon> {
        info!("Fetching Pokémon {}", slug);
        self.get_json(&format!("pokemon/{slug}"), slug).await
    }

    /// Get species data (dex entries, genus, evolution chain pointer)
    #[instrument(skip(self))]
    pub async fn get_species(&self, slug: &str) -> Result<Species> {
        info!("Fetching species {}", slug);
        self.get_json(&format!("pokemon-species/{slug}"), slug)
            .await
    }

    /// Get an evolution chain by the absolute URL found in species data
    #[instrument(skip(self))]
    pub async fn get_evolution_chain(&self, url: &str) -> Result<EvolutionChain> {
        info!("Fetching evolution chain from {}", url);
        self.fetch_json(url, "evolution chain").await
    }

    /// Get a move by slug
    #[instrument(skip(self))]
    pub async fn get_move(&self, slug: &str) -> Result<MoveData> {
        debug!("Fetching move {}", slug);
        self.get_json(&format!("move/{slug}"), slug).await
    }

    /// Get an ability by slug
    #[instrument(skip(self))]
    pub async fn get_ability(&self, slug: &str) -> Result<AbilityData> {
        debug!("Fetching ability {}", slug);
        self.get_json(&format!("ability/{slug}"), slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = PokeApiConfig::new("https://pokeapi.co/api/v2");
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.timeout_secs, 30); // default
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_config_builder() {
        let config = PokeApiConfig::new("https://pokeapi.co/api/v2")
            .with_timeout(60)
            .with_pool_size(20)
            .with_rate_limit(5)
            .with_max_retries(5);

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_idle_per_host, 20);
        assert_eq!(config.rate_limit_per_sec, 5);
        assert_eq!(config.max_retries, 5);
    }

    #[test]
    fn test_endpoint_url_building() {
        let config = PokeApiConfig::new("https://pokeapi.co/api/v2/");
        let client = PokeApiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint_url("pokemon/pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
        assert_eq!(
            client.endpoint_url("/pokemon-species/eevee"),
            "https://pokeapi.co/api/v2/pokemon-species/eevee"
        );
    }

    #[tokio::test]
    async fn test_client_creation() {
        let result = PokeApiClient::with_defaults();
        assert!(result.is_ok());
    }

    #[test]
    fn test_rate_limit_validation() {
        let config = PokeApiConfig::default().with_rate_limit(0);
        let result = PokeApiClient::new(config);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_rate_limiter_integration() {
        let config = PokeApiConfig::default().with_rate_limit(10);
        let client = PokeApiClient::new(config).unwrap();

        // First calls should pass through without blocking noticeably
        client.rate_limiter.until_ready().await;
        client.rate_limiter.until_ready().await;
    }

    #[test]
    fn test_not_found_is_not_retryable() {
        assert!(!PokeApiClient::is_retryable(&DexError::not_found(
            "missingno"
        )));
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        let err = DexError::pokeapi_with_status("client error", 400);
        assert!(!PokeApiClient::is_retryable(&err));
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let err = DexError::pokeapi_with_status("server error", 503);
        assert!(PokeApiClient::is_retryable(&err));

        let err = DexError::network("connection reset");
        assert!(PokeApiClient::is_retryable(&err));
    }
}
