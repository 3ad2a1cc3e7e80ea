//! Common error types, logging, and utilities shared across the Pokédex bot.

pub mod error;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use error::{DexError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use utils::{capitalize, display_name, normalize_name};
