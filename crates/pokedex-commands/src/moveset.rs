//! Moveset listing command.

use crate::embeds::base_embed;
use crate::framework::{Context, Error};
use pokedex_api::MoveSummary;

/// How many moves one reply shows; full movesets run into the hundreds
pub const MOVE_LIMIT: usize = 20;

/// Moves grouped per embed field
pub const MOVES_PER_FIELD: usize = 5;

/// Group move summaries into (field name, field value) chunks
fn move_fields(summaries: &[MoveSummary]) -> Vec<(String, String)> {
    summaries
        .chunks(MOVES_PER_FIELD)
        .enumerate()
        .map(|(index, chunk)| {
            let start = index * MOVES_PER_FIELD + 1;
            let end = start + chunk.len() - 1;
            let value = chunk
                .iter()
                .map(|m| format!("**{}** · {}", m.name, m.detail_line()))
                .collect::<Vec<_>>()
                .join("\n");
            (format!("Moves {start}–{end}"), value)
        })
        .collect()
}

/// List moves a Pokémon can learn.
#[poise::command(prefix_command, slash_command)]
pub async fn moveset(
    ctx: Context<'_>,
    #[description = "Pokémon name"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let record = data.dex.pokemon(&name).await?;
    let summaries = data.dex.move_summaries(&record, MOVE_LIMIT).await?;

    let mut embed = base_embed(record.color()).title(format!("Moveset: {}", record.name));

    if summaries.is_empty() {
        embed = embed.description(format!("No move data available for **{}**.", record.name));
    } else {
        for (field_name, value) in move_fields(&summaries) {
            embed = embed.field(field_name, value, false);
        }
        if record.moves.len() > MOVE_LIMIT {
            embed = embed.description(format!(
                "Showing the first {} of {} learnable moves.",
                summaries.len(),
                record.moves.len()
            ));
        }
    }

    if let Some(sprite) = &record.sprite {
        embed = embed.thumbnail(sprite.clone());
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
