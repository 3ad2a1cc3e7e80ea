//! Base stat command with bar rendering.

use crate::embeds::{base_embed, stat_block, type_badge_line};
use crate::framework::{Context, Error};
use pokedex_battle::BattleRole;

/// Show a Pokémon's base stats as bars.
#[poise::command(prefix_command, slash_command)]
pub async fn stats(
    ctx: Context<'_>,
    #[description = "Pokémon name"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let record = ctx.data().dex.pokemon(&name).await?;

    let (highest_stat, highest_value) = record.stats.highest();
    let role = BattleRole::for_spread(&record.stats);

    let mut embed = base_embed(record.color())
        .title(format!("Base Stats: {}", record.name))
        .description(stat_block(&record.stats))
        .field("Type", type_badge_line(&record.types), true)
        .field(
            "Strongest Stat",
            format!("{} ({})", highest_stat.display_name(), highest_value),
            true,
        )
        .field("Suggested Role", role.display_name(), true);

    if let Some(sprite) = &record.sprite {
        embed = embed.thumbnail(sprite.clone());
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
