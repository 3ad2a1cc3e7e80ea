//! Poise framework setup, command registration, and error handling.

use crate::cooldown::CooldownManager;
use pokedex_api::DexProvider;
use pokedex_common::DexError;
use pokedex_config::Config;
use std::sync::Arc;
use tracing::{error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Cached Pokédex data access.
    pub dex: DexProvider,
    /// Per-user command cooldowns.
    pub cooldowns: CooldownManager,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot exposes.
pub fn command_list() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::pokedex::pokedex(),
        crate::stats::stats(),
        crate::evolve::evolve(),
        crate::moveset::moveset(),
        crate::shiny::shiny(),
        crate::weakness::weakness(),
        crate::typechart::typechart(),
        crate::strategy::strategy(),
        crate::ability::ability(),
        crate::compare::compare(),
        crate::team::team(),
        crate::help::commands(),
    ]
}

/// Creates a new Poise framework wired to the given config and provider.
pub fn create_framework(config: Arc<Config>, dex: DexProvider) -> poise::Framework<Data, Error> {
    let prefix = config.discord.prefix.clone();

    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command_list(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            command_check: Some(|ctx| Box::pin(cooldown_gate(ctx))),
            on_error: |err| Box::pin(on_error(err)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(Data {
                    config,
                    dex,
                    cooldowns: CooldownManager::new(),
                })
            })
        })
        .build()
}

/// Global check: reject commands while the user is on cooldown.
async fn cooldown_gate(ctx: Context<'_>) -> Result<bool, Error> {
    let command = ctx.command().name.clone();
    let user_id = ctx.author().id;

    match ctx.data().cooldowns.check_cooldown(&command, user_id) {
        Ok(()) => {
            ctx.data().cooldowns.apply_cooldown(&command, user_id);
            Ok(true)
        }
        Err(err) => {
            warn!("Cooldown hit: {}", err);
            ctx.send(
                poise::CreateReply::default()
                    .content(format!(
                        "⏳ Slow down! You can use `{}` again in {}s.",
                        command,
                        err.remaining_seconds()
                    ))
                    .ephemeral(true),
            )
            .await?;
            Ok(false)
        }
    }
}

/// A one-line usage hint like "!compare <first> <second>".
fn usage_hint(ctx: &Context<'_>) -> String {
    let command = ctx.command();
    let params: Vec<&str> = command.parameters.iter().map(|p| p.name.as_str()).collect();
    usage_line(ctx.prefix(), &command.qualified_name, &params)
}

/// A concrete invocation like "!compare pikachu charizard".
fn example_hint(ctx: &Context<'_>) -> String {
    let command = ctx.command();
    example_line(ctx.prefix(), &command.qualified_name, command.parameters.len())
}

fn usage_line(prefix: &str, name: &str, params: &[&str]) -> String {
    let params: Vec<String> = params.iter().map(|p| format!("<{p}>")).collect();
    format!("{}{} {}", prefix, name, params.join(" "))
        .trim_end()
        .to_string()
}

fn example_line(prefix: &str, name: &str, param_count: usize) -> String {
    const SAMPLES: [&str; 2] = ["pikachu", "charizard"];
    let args: Vec<&str> = (0..param_count).map(|i| SAMPLES[i % SAMPLES.len()]).collect();
    format!("{}{} {}", prefix, name, args.join(" "))
        .trim_end()
        .to_string()
}

/// Central error handler: unknown names get a friendly reply, bad
/// arguments get a usage hint, everything else is logged.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let reply = match error.downcast_ref::<DexError>() {
                Some(DexError::NotFound { name }) => format!(
                    "Sorry, I couldn't find **{name}** in the Pokédex. \
                     Check the spelling and try again!"
                ),
                Some(DexError::Validation { message, .. }) => {
                    format!("{}. Usage: `{}`", message, usage_hint(&ctx))
                }
                _ => {
                    error!(
                        "Command '{}' failed: {}",
                        ctx.command().qualified_name,
                        error
                    );
                    "Something went wrong talking to the Pokédex. Please try again later."
                        .to_string()
                }
            };
            if let Err(e) = ctx.say(reply).await {
                error!("Failed to send error reply: {}", e);
            }
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let reply = match input {
                Some(input) => format!(
                    "I didn't understand `{input}`. Usage: `{}`",
                    usage_hint(&ctx)
                ),
                None => format!("Please specify a Pokémon! Example: `{}`", example_hint(&ctx)),
            };
            if let Err(e) = ctx.say(reply).await {
                error!("Failed to send usage hint: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
