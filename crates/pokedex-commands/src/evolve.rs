//! Evolution line command.

use crate::embeds::base_embed;
use crate::framework::{Context, Error};

/// Show a Pokémon's evolution line.
#[poise::command(prefix_command, slash_command)]
pub async fn evolve(
    ctx: Context<'_>,
    #[description = "Pokémon name"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    // Resolve the record first so the title uses the proper display name
    // and typos surface as a single not-found reply
    let record = data.dex.pokemon(&name).await?;
    let stages = data.dex.evolution_line(&record.slug).await?;

    let mut embed = base_embed(record.color()).title(format!("Evolution Line: {}", record.name));

    if stages.len() <= 1 {
        embed = embed.description(format!("**{}** does not evolve.", record.name));
        if let Some(sprite) = &record.sprite {
            embed = embed.thumbnail(sprite.clone());
        }
    } else {
        for (index, stage) in stages.iter().enumerate() {
            let requirement = stage
                .requirement
                .clone()
                .unwrap_or_else(|| "Base form".to_string());
            embed = embed.field(format!("{}. {}", index + 1, stage.name), requirement, true);
        }

        if let Some(sprite) = &record.sprite {
            embed = embed.thumbnail(sprite.clone());
        }
        // Show where the line ends up; best effort, the chain still
        // renders if the final form lookup fails
        if let Some(last) = stages.last() {
            if let Ok(final_record) = data.dex.pokemon(&last.name).await {
                if let Some(sprite) = &final_record.sprite {
                    embed = embed.image(sprite.clone());
                }
            }
        }
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
