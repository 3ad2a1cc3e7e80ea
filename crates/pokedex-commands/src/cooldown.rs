//! Cooldown system for rate limiting command usage

use dashmap::DashMap;
use poise::serenity_prelude::UserId;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Default per-user cooldown between commands
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);

/// The type chart reply is large, so it gets a longer cooldown
pub const TYPECHART_COOLDOWN: Duration = Duration::from_secs(10);

/// Errors that can occur during cooldown checks
#[derive(Error, Debug)]
pub enum CooldownError {
    #[error("User {user_id} is on cooldown for command '{command}' (remaining: {remaining_seconds}s)")]
    UserOnCooldown {
        user_id: u64,
        command: String,
        remaining_seconds: u64,
    },
}

impl CooldownError {
    /// Seconds until the command may be used again, rounded up
    pub fn remaining_seconds(&self) -> u64 {
        match self {
            Self::UserOnCooldown {
                remaining_seconds, ..
            } => *remaining_seconds,
        }
    }
}

/// Per-user cooldown key: (command_name, user_id)
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CooldownKey(String, u64);

/// The cooldown applied to a command for each user
pub fn cooldown_for(command: &str) -> Duration {
    match command {
        "typechart" => TYPECHART_COOLDOWN,
        _ => DEFAULT_COOLDOWN,
    }
}

/// Manager for per-user command cooldowns
#[derive(Debug, Default)]
pub struct CooldownManager {
    cooldowns: DashMap<CooldownKey, Instant>,
}

impl CooldownManager {
    /// Create a new cooldown manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a user may run a command right now
    pub fn check_cooldown(&self, command: &str, user_id: UserId) -> Result<(), CooldownError> {
        let duration = cooldown_for(command);
        let key = CooldownKey(command.to_string(), user_id.get());

        if let Some(last_used) = self.cooldowns.get(&key) {
            let elapsed = Instant::now().duration_since(*last_used);
            if elapsed < duration {
                let remaining = duration - elapsed;
                return Err(CooldownError::UserOnCooldown {
                    user_id: user_id.get(),
                    command: command.to_string(),
                    // Round up so "0s remaining" never shows
                    remaining_seconds: remaining.as_secs_f64().ceil() as u64,
                });
            }
        }

        Ok(())
    }

    /// Record a command use, starting the user's cooldown
    pub fn apply_cooldown(&self, command: &str, user_id: UserId) {
        debug!(
            "Applying cooldown for command '{}' (user: {})",
            command, user_id
        );
        let key = CooldownKey(command.to_string(), user_id.get());
        self.cooldowns.insert(key, Instant::now());
    }

    /// Clear all cooldowns for a specific user
    pub fn clear_user_cooldowns(&self, user_id: UserId) {
        self.cooldowns.retain(|key, _| key.1 != user_id.get());
        debug!("Cleared all cooldowns for user {}", user_id);
    }

    /// Get the number of active cooldown entries
    pub fn active_cooldowns(&self) -> usize {
        self.cooldowns.len()
    }

    /// Drop entries old enough that no command's cooldown still covers them
    pub fn cleanup_expired(&self) {
        let now = Instant::now();
        let horizon = TYPECHART_COOLDOWN.max(DEFAULT_COOLDOWN);
        self.cooldowns
            .retain(|_, last_used| now.duration_since(*last_used) <= horizon);
        debug!("Cleaned up expired cooldowns");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_passes() {
        let manager = CooldownManager::new();
        assert!(manager
            .check_cooldown("pokedex", UserId::new(1))
            .is_ok());
    }

    #[test]
    fn test_second_use_within_window_is_blocked() {
        let manager = CooldownManager::new();
        manager.apply_cooldown("pokedex", UserId::new(1));

        let err = manager
            .check_cooldown("pokedex", UserId::new(1))
            .unwrap_err();
        assert!(err.remaining_seconds() >= 1);
        assert!(err.remaining_seconds() <= DEFAULT_COOLDOWN.as_secs());
    }

    #[test]
    fn test_remaining_seconds_rounds_up() {
        let manager = CooldownManager::new();
        manager.apply_cooldown("pokedex", UserId::new(1));

        // Checked immediately after applying, almost the full window is
        // left (e.g. 4.999s of 5s). Rounding up must report the full
        // window, not truncate down to 4.
        let err = manager
            .check_cooldown("pokedex", UserId::new(1))
            .unwrap_err();
        assert_eq!(err.remaining_seconds(), DEFAULT_COOLDOWN.as_secs());
    }

    #[test]
    fn test_cooldowns_are_per_user() {
        let manager = CooldownManager::new();
        manager.apply_cooldown("pokedex", UserId::new(1));

        assert!(manager.check_cooldown("pokedex", UserId::new(2)).is_ok());
    }

    #[test]
    fn test_cooldowns_are_per_command() {
        let manager = CooldownManager::new();
        manager.apply_cooldown("pokedex", UserId::new(1));

        assert!(manager.check_cooldown("stats", UserId::new(1)).is_ok());
    }

    #[test]
    fn test_typechart_has_longer_cooldown() {
        assert_eq!(cooldown_for("typechart"), TYPECHART_COOLDOWN);
        assert_eq!(cooldown_for("pokedex"), DEFAULT_COOLDOWN);
        assert!(TYPECHART_COOLDOWN > DEFAULT_COOLDOWN);
    }

    #[test]
    fn test_clear_user_cooldowns() {
        let manager = CooldownManager::new();
        manager.apply_cooldown("pokedex", UserId::new(1));
        manager.apply_cooldown("stats", UserId::new(1));
        manager.apply_cooldown("pokedex", UserId::new(2));
        assert_eq!(manager.active_cooldowns(), 3);

        manager.clear_user_cooldowns(UserId::new(1));
        assert_eq!(manager.active_cooldowns(), 1);
        assert!(manager.check_cooldown("pokedex", UserId::new(1)).is_ok());
    }

    #[test]
    fn test_cleanup_keeps_fresh_entries() {
        let manager = CooldownManager::new();
        manager.apply_cooldown("pokedex", UserId::new(1));
        manager.cleanup_expired();
        assert_eq!(manager.active_cooldowns(), 1);
    }
}
