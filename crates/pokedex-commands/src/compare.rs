//! Side-by-side comparison of two Pokémon.

use crate::embeds::{base_embed, stat_block, type_badge_line};
use crate::framework::{Context, Error};
use pokedex_api::PokemonRecord;
use pokedex_battle::{BattleRole, ALL_STATS};

/// One comparison line per stat, plus the total.
///
/// The layout is symmetric: swapping the two records swaps the values
/// but keeps the same lines, so `!compare a b` and `!compare b a` agree.
fn comparison_lines(a: &PokemonRecord, b: &PokemonRecord) -> Vec<String> {
    let mut lines: Vec<String> = ALL_STATS
        .iter()
        .map(|&stat| {
            let (va, vb) = (a.stats.get(stat), b.stats.get(stat));
            format!(
                "{} **{}**: {} vs {} → {}",
                stat.emoji(),
                stat.display_name(),
                va,
                vb,
                verdict(va.into(), vb.into(), &a.name, &b.name)
            )
        })
        .collect();

    let (ta, tb) = (a.stats.total(), b.stats.total());
    lines.push(format!(
        "**Total**: {} vs {} → {}",
        ta,
        tb,
        verdict(ta, tb, &a.name, &b.name)
    ));
    lines
}

fn verdict(a: u32, b: u32, name_a: &str, name_b: &str) -> String {
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => name_a.to_string(),
        std::cmp::Ordering::Less => name_b.to_string(),
        std::cmp::Ordering::Equal => "Tie".to_string(),
    }
}

/// A short profile field, identical in shape for both sides
fn profile(record: &PokemonRecord) -> String {
    format!(
        "{}\nRole: {}\n{}",
        type_badge_line(&record.types),
        BattleRole::for_spread(&record.stats).display_name(),
        stat_block(&record.stats)
    )
}

/// Compare the base stats of two Pokémon.
#[poise::command(prefix_command, slash_command)]
pub async fn compare(
    ctx: Context<'_>,
    #[description = "First Pokémon"] first: String,
    #[description = "Second Pokémon"]
    #[rest]
    second: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let a = data.dex.pokemon(&first).await?;
    let b = data.dex.pokemon(&second).await?;

    let embed = base_embed(a.color())
        .title(format!("{} vs {}", a.name, b.name))
        .description(comparison_lines(&a, &b).join("\n"))
        .field(a.name.clone(), profile(&a), true)
        .field(b.name.clone(), profile(&b), true);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
