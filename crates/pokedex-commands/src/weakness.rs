//! Defensive matchup command for a single Pokémon.

use crate::embeds::{base_embed, type_badge_line, with_matchup_fields};
use crate::framework::{Context, Error};
use pokedex_battle::TypeMatchup;

/// Show what a Pokémon is weak and resistant to.
#[poise::command(prefix_command, slash_command)]
pub async fn weakness(
    ctx: Context<'_>,
    #[description = "Pokémon name"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let record = ctx.data().dex.pokemon(&name).await?;

    let matchup = TypeMatchup::for_types(&record.types);

    let mut embed = base_embed(record.color())
        .title(format!("Type Matchups: {}", record.name))
        .description(format!("Type: {}", type_badge_line(&record.types)));
    embed = with_matchup_fields(embed, &matchup);

    if let Some(sprite) = &record.sprite {
        embed = embed.thumbnail(sprite.clone());
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
