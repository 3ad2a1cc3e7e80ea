//! Pokédex entry command: summary card for a single Pokémon.

use crate::embeds::{base_embed, stat_block, type_badge_line};
use crate::framework::{Context, Error};

/// Look up a Pokémon's Pokédex entry.
#[poise::command(prefix_command, slash_command)]
pub async fn pokedex(
    ctx: Context<'_>,
    #[description = "Pokémon name or National Dex number"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let record = data.dex.pokemon(&name).await?;
    // Species data is missing for some alternate forms; the entry still
    // renders without it
    let species = data.dex.species(&record.slug).await.ok();

    let marker = match species.as_deref() {
        Some(s) if s.is_mythical => " ✨",
        Some(s) if s.is_legendary => " ⭐",
        _ => "",
    };

    let mut embed = base_embed(record.color())
        .title(format!(
            "#{:03} {}{}",
            record.dex_number, record.name, marker
        ))
        .field("Type", type_badge_line(&record.types), true);

    if let Some(sprite) = &record.sprite {
        embed = embed.thumbnail(sprite.clone());
    }

    if let Some(species) = species.as_deref() {
        if let Some(genus) = &species.genus {
            embed = embed.field("Genus", genus.clone(), true);
        }
        if let Some(generation) = &species.generation {
            embed = embed.field("Generation", generation.clone(), true);
        }
        if let Some(habitat) = &species.habitat {
            embed = embed.field("Habitat", habitat.clone(), true);
        }
        if let Some(entry) = &species.dex_entry {
            embed = embed.description(entry.clone());
        }
    }

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
    if !abilities.is_empty() {
        embed = embed.field("Abilities", abilities, true);
    }

    embed = embed.field("Base Stats", stat_block(&record.stats), false);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
