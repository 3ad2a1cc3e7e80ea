//! Error types and utilities for the Pokédex bot

use thiserror::Error;

/// Result type alias for Pokédex bot operations
pub type Result<T> = std::result::Result<T, DexError>;

/// Main error type for Pokédex bot operations
#[derive(Error, Debug)]
pub enum DexError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network related errors (HTTP requests, etc.)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Discord API related errors
    #[error("Discord API error: {message}")]
    Discord {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// PokeAPI related errors
    #[error("PokeAPI error: {message}")]
    PokeApi {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A Pokémon, move, or ability that PokeAPI does not know
    #[error("No Pokédex data found for '{name}'")]
    NotFound { name: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DexError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Discord API error
    pub fn discord(msg: impl Into<String>) -> Self {
        Self::Discord {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new PokeAPI error
    pub fn pokeapi(msg: impl Into<String>) -> Self {
        Self::PokeApi {
            message: msg.into(),
            status_code: None,
            source: None,
        }
    }

    /// Create a new PokeAPI error with HTTP status code
    pub fn pokeapi_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::PokeApi {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a not-found error for an unknown Pokémon/move/ability name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error means the looked-up name does not exist.
    ///
    /// Command handlers turn these into a friendly "couldn't find" reply
    /// instead of a generic error message.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to DexError
impl From<reqwest::Error> for DexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else if err.is_status() {
            let status_code = err.status().map(|s| s.as_u16()).unwrap_or(0);
            Self::network_with_source(format!("HTTP error: {}", status_code), err)
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = DexError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = DexError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let api_error = DexError::pokeapi_with_status("Server error", 500);
        assert!(api_error.to_string().contains("PokeAPI error"));
        assert!(api_error.to_string().contains("Server error"));

        let validation_error = DexError::validation_field("Invalid input", "token");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_not_found() {
        let error = DexError::not_found("missingno");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("missingno"));

        assert!(!DexError::pokeapi("boom").is_not_found());
        assert!(!DexError::new("boom").is_not_found());
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = DexError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());

        let config_source_error = DexError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(config_source_error.to_string().contains("Configuration error"));
        assert!(config_source_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let dex_error: DexError = io_error.into();

        assert!(dex_error.to_string().contains("I/O error"));
        assert!(dex_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let dex_error: DexError = serde_error.into();

        assert!(dex_error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(DexError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = DexError::config_with_source("Middle layer", root_error);
        let top_error = DexError::with_source("Top layer", middle_error);

        assert!(top_error.to_string().contains("Top layer"));

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert!(error_count >= 1);
    }
}
