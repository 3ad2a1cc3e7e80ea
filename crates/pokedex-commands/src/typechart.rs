//! Type chart command: defensive profiles for every type.

use crate::embeds::{base_embed, matchup_value, NEUTRAL_COLOR};
use crate::framework::{Context, Error};
use pokedex_battle::{PokeType, TypeMatchup, ALL_TYPES};

/// One chart entry: the defensive profile of a single type
fn type_entry(ty: PokeType) -> String {
    let matchup = TypeMatchup::for_types(&[ty]);
    format!(
        "2x: {}\n½x: {}\n0x: {}",
        matchup_value(&matchup.weaknesses),
        matchup_value(&matchup.resistances),
        matchup_value(&matchup.immunities),
    )
}

/// Show the full defensive type chart.
#[poise::command(prefix_command, slash_command)]
pub async fn typechart(ctx: Context<'_>) -> Result<(), Error> {
    // Fixed iteration order keeps the reply byte-identical between calls
    let mut embed = base_embed(NEUTRAL_COLOR)
        .title("Type Chart")
        .description("How each type takes damage, defensively.");

    for ty in ALL_TYPES {
        embed = embed.field(
            format!("{} {}", ty.emoji(), ty.display_name()),
            type_entry(ty),
            true,
        );
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
