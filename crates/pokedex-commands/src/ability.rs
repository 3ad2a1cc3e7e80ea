//! Ability listing command.

use crate::embeds::base_embed;
use crate::framework::{Context, Error};

/// Show a Pokémon's abilities and what they do.
#[poise::command(prefix_command, slash_command)]
pub async fn ability(
    ctx: Context<'_>,
    #[description = "Pokémon name"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let record = data.dex.pokemon(&name).await?;
    let abilities = data.dex.abilities(&record).await?;

    let mut embed = base_embed(record.color()).title(format!("Abilities: {}", record.name));

    if abilities.is_empty() {
        embed = embed.description(format!("No ability data available for **{}**.", record.name));
    } else {
        for info in &abilities {
            let title = if info.hidden {
                format!("{} (hidden)", info.name)
            } else {
                info.name.clone()
            };
            let effect = info
                .effect
                .clone()
                .unwrap_or_else(|| "No effect description available.".to_string());
            embed = embed.field(title, effect, false);
        }
    }

    if let Some(sprite) = &record.sprite {
        embed = embed.thumbnail(sprite.clone());
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
