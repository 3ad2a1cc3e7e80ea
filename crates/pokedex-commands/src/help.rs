//! Command listing.

use crate::embeds::{base_embed, NEUTRAL_COLOR};
use crate::framework::{Context, Error};

/// List every available command.
#[poise::command(prefix_command, slash_command)]
pub async fn commands(ctx: Context<'_>) -> Result<(), Error> {
    let prefix = ctx.data().config.discord.prefix.clone();

    let lines = ctx
        .framework()
        .options()
        .commands
        .iter()
        .map(|command| {
            let description = command.description.as_deref().unwrap_or("No description");
            format!("`{}{}` — {}", prefix, command.name, description)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let embed = base_embed(NEUTRAL_COLOR)
        .title("Pokédex Commands")
        .description(lines);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
