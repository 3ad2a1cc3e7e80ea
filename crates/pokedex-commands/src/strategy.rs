//! Battle strategy suggestion command.

use crate::embeds::{base_embed, matchup_value, type_badge_line};
use crate::framework::{Context, Error};
use pokedex_battle::{BattleRole, TypeMatchup};

/// Role-specific advice shown under the suggestion
fn role_tip(role: BattleRole) -> &'static str {
    match role {
        BattleRole::Tank => "Soak hits and wear opponents down with residual damage.",
        BattleRole::PhysicalAttacker => "Lead with strong physical moves and keep the pressure up.",
        BattleRole::PhysicalWall => "Switch in on physical attackers and stall them out.",
        BattleRole::SpecialAttacker => "Fire off special moves before the opponent can set up.",
        BattleRole::SpecialWall => "Absorb special hits and recover between them.",
        BattleRole::FastSweeper => "Strike first, pick off weakened targets, avoid direct trades.",
    }
}

/// Suggest a battle strategy for a Pokémon.
#[poise::command(prefix_command, slash_command)]
pub async fn strategy(
    ctx: Context<'_>,
    #[description = "Pokémon name"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let record = ctx.data().dex.pokemon(&name).await?;

    let (stat, value) = record.stats.highest();
    let role = BattleRole::for_spread(&record.stats);
    let matchup = TypeMatchup::for_types(&record.types);

    let abilities = record
        .abilities
        .iter()
        .map(|a| {
            let name = pokedex_common::display_name(&a.slug);
            if a.hidden {
                format!("{name} (hidden)")
            } else {
                name
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut embed = base_embed(record.color())
        .title(format!("Strategy: {}", record.name))
        .description(role_tip(role))
        .field("Type", type_badge_line(&record.types), true)
        .field("Suggested Role", role.display_name(), true)
        .field(
            "Key Stat",
            format!("{} ({})", stat.display_name(), value),
            true,
        )
        .field("Watch Out For", matchup_value(&matchup.weaknesses), false);

    if !abilities.is_empty() {
        embed = embed.field("Abilities", abilities, false);
    }

    if let Some(sprite) = &record.sprite {
        embed = embed.thumbnail(sprite.clone());
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
