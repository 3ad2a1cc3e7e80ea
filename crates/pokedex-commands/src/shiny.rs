//! Shiny sprite command.

use crate::embeds::base_embed;
use crate::framework::{Context, Error};

/// Show a Pokémon's shiny sprite.
#[poise::command(prefix_command, slash_command)]
pub async fn shiny(
    ctx: Context<'_>,
    #[description = "Pokémon name"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let record = ctx.data().dex.pokemon(&name).await?;

    let mut embed = match &record.shiny_sprite {
        Some(url) => base_embed(record.color())
            .title(format!("✨ Shiny {}", record.name))
            .image(url.clone()),
        None => base_embed(record.color())
            .title(format!("Shiny {}", record.name))
            .description(format!(
                "No shiny sprite is available for **{}**.",
                record.name
            )),
    };

    // Normal sprite alongside for comparison
    if let Some(sprite) = &record.sprite {
        embed = embed.thumbnail(sprite.clone());
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
