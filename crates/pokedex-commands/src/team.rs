//! Team analysis command for up to six Pokémon.

use crate::embeds::{base_embed, with_matchup_fields, NEUTRAL_COLOR};
use crate::framework::{Context, Error};
use pokedex_battle::{TeamReport, TeamSlot, TypeMatchup, MAX_TEAM_SIZE};

/// Split user input into candidate names; commas and whitespace both work
fn split_names(input: &str) -> Vec<&str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Analyze a team of up to six Pokémon.
#[poise::command(prefix_command, slash_command)]
pub async fn team(
    ctx: Context<'_>,
    #[description = "Up to six Pokémon names, separated by spaces"]
    #[rest]
    names: String,
) -> Result<(), Error> {
    let names = split_names(&names);
    if names.is_empty() || names.len() > MAX_TEAM_SIZE {
        ctx.say(format!(
            "Give me between 1 and {MAX_TEAM_SIZE} Pokémon names, e.g. \
             `team charizard blastoise venusaur`."
        ))
        .await?;
        return Ok(());
    }

    ctx.defer().await?;
    let data = ctx.data();

    let mut slots = Vec::with_capacity(names.len());
    for name in &names {
        let record = data.dex.pokemon(name).await?;
        slots.push(TeamSlot {
            name: record.name.clone(),
            types: record.types.clone(),
            stats: record.stats,
        });
    }

    // Slot count was validated above, so analysis always succeeds
    let Some(report) = TeamReport::analyze(&slots) else {
        return Ok(());
    };

    let members = report
        .members
        .iter()
        .map(|(name, types, role)| {
            let type_names = types
                .iter()
                .map(|t| t.display_name())
                .collect::<Vec<_>>()
                .join("/");
            format!("**{}** ({}) — {}", name, type_names, role.display_name())
        })
        .collect::<Vec<_>>()
        .join("\n");

    let color = slots
        .first()
        .and_then(|s| s.types.first())
        .map(|t| t.color())
        .unwrap_or(NEUTRAL_COLOR);

    let mut embed = base_embed(color)
        .title("Team Analysis")
        .description(members)
        .field(
            "Type Coverage",
            TypeMatchup::format_set(&report.coverage),
            false,
        );
    embed = with_matchup_fields(embed, &report.matchup);

    let roles = report
        .role_distribution
        .iter()
        .map(|(role, count)| format!("{role}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    embed = embed.field("Roles", roles, true);

    if !report.tips.is_empty() {
        let tips = report
            .tips
            .iter()
            .map(|t| format!("• {t}"))
            .collect::<Vec<_>>()
            .join("\n");
        embed = embed.field("Tips", tips, false);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
