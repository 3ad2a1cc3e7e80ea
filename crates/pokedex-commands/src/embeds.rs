//! Shared embed building blocks
//!
//! Every command renders through these helpers so colors, type badges,
//! and matchup sections look the same everywhere. Set-valued sections
//! come out alphabetically ordered, so repeated invocations produce
//! byte-identical embeds.

use pokedex_battle::{stat_bar, PokeType, StatSpread, TypeMatchup};
use poise::serenity_prelude as serenity;

/// Footer attached to every embed
pub const EMBED_FOOTER: &str = "Data from PokeAPI";

/// Bar width used in stat blocks
pub const STAT_BAR_WIDTH: usize = 10;

/// Fallback accent color when no type is known
pub const NEUTRAL_COLOR: u32 = 0x00AE86;

/// Base embed with the shared footer and an accent color
pub fn base_embed(color: u32) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .color(color)
        .footer(serenity::CreateEmbedFooter::new(EMBED_FOOTER))
}

/// "🔥 Fire / 🦅 Flying" badge line for a type combination
pub fn type_badge_line(types: &[PokeType]) -> String {
    if types.is_empty() {
        return "Unknown".to_string();
    }
    types
        .iter()
        .map(|t| format!("{} {}", t.emoji(), t.display_name()))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Multi-line stat block with bars, one line per stat, plus the total
pub fn stat_block(stats: &StatSpread) -> String {
    let mut lines: Vec<String> = stats
        .iter()
        .map(|(stat, value)| {
            format!(
                "{} **{}**: `{}` {}",
                stat.emoji(),
                stat.display_name(),
                stat_bar(value, STAT_BAR_WIDTH),
                value
            )
        })
        .collect();
    lines.push(format!("**Total**: {}", stats.total()));
    lines.join("\n")
}

/// A matchup set as field text; empty sets render as "None"
pub fn matchup_value(set: &std::collections::BTreeSet<PokeType>) -> String {
    if set.is_empty() {
        "None".to_string()
    } else {
        TypeMatchup::format_set(set)
    }
}

/// The three standard matchup fields: weaknesses, resistances, immunities
pub fn matchup_fields(matchup: &TypeMatchup) -> [(&'static str, String, bool); 3] {
    [
        (
            "Weak to (2x)",
            matchup_value(&matchup.weaknesses),
            false,
        ),
        (
            "Resists (½x)",
            matchup_value(&matchup.resistances),
            false,
        ),
        (
            "Immune to (0x)",
            matchup_value(&matchup.immunities),
            false,
        ),
    ]
}

/// Add the standard matchup fields to an embed
pub fn with_matchup_fields(
    embed: serenity::CreateEmbed,
    matchup: &TypeMatchup,
) -> serenity::CreateEmbed {
    matchup_fields(matchup)
        .into_iter()
        .fold(embed, |embed, (name, value, inline)| {
            embed.field(name, value, inline)
        })
}
