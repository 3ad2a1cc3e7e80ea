//! Discord command implementations for the Pokédex bot.
//!
//! Commands are plain Poise handlers; the shared [`framework`] module
//! wires them together with per-user cooldowns and central error
//! handling, and [`embeds`] keeps their replies visually consistent.

pub mod cooldown;
pub mod embeds;
pub mod framework;

pub mod ability;
pub mod compare;
pub mod evolve;
pub mod help;
pub mod moveset;
pub mod pokedex;
pub mod shiny;
pub mod stats;
pub mod strategy;
pub mod team;
pub mod typechart;
pub mod weakness;

pub use cooldown::{CooldownError, CooldownManager};
pub use framework::{command_list, create_framework, Context, Data, Error};
