//! Domain views built from raw PokeAPI responses
//!
//! Everything here is a pure conversion so it can be tested without a
//! network. The conversions normalize names, parse types into the battle
//! model, and flatten PokeAPI's nested structures into what the commands
//! actually render.

use crate::models::{
    AbilityData, ChainLink, EvolutionChain, EvolutionDetail, MoveData, Pokemon, Species,
};
use pokedex_battle::{PokeType, StatSpread};
use pokedex_common::{display_name, DexError, Result};

/// One of a Pokémon's abilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySlot {
    /// Lowercase slug (e.g., "lightning-rod")
    pub slug: String,
    /// Whether this is the hidden ability
    pub hidden: bool,
}

/// A Pokémon as the bot presents it: display name, types, base stats,
/// abilities, learnable moves, and sprites
#[derive(Debug, Clone)]
pub struct PokemonRecord {
    /// National Dex number
    pub dex_number: u32,
    /// Lowercase slug used for lookups
    pub slug: String,
    /// Human-readable name (e.g., "Mr Mime")
    pub name: String,
    /// Types in slot order, one or two
    pub types: Vec<PokeType>,
    /// Base stat spread
    pub stats: StatSpread,
    /// Abilities in API order
    pub abilities: Vec<AbilitySlot>,
    /// Learnable move slugs in API order
    pub moves: Vec<String>,
    /// Default front sprite URL
    pub sprite: Option<String>,
    /// Shiny front sprite URL
    pub shiny_sprite: Option<String>,
}

impl PokemonRecord {
    /// A "Type1/Type2" line for embeds
    pub fn type_line(&self) -> String {
        self.types
            .iter()
            .map(|t| t.display_name())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Embed accent color taken from the primary type
    pub fn color(&self) -> u32 {
        self.types.first().map(|t| t.color()).unwrap_or(0x00AE86)
    }
}

impl TryFrom<Pokemon> for PokemonRecord {
    type Error = DexError;

    fn try_from(pokemon: Pokemon) -> Result<Self> {
        let mut types = Vec::with_capacity(pokemon.types.len());
        let mut slots = pokemon.types;
        slots.sort_by_key(|s| s.slot);
        for slot in &slots {
            let parsed: PokeType = slot.type_.name.parse().map_err(|_| {
                DexError::pokeapi(format!("Unknown type '{}' in API data", slot.type_.name))
            })?;
            types.push(parsed);
        }

        let mut stats = StatSpread::default();
        for entry in &pokemon.stats {
            stats.set_by_api_name(&entry.stat.name, entry.base_stat);
        }

        let abilities = pokemon
            .abilities
            .into_iter()
            .map(|slot| AbilitySlot {
                slug: slot.ability.name,
                hidden: slot.is_hidden,
            })
            .collect();

        let moves = pokemon.moves.into_iter().map(|m| m.move_.name).collect();

        Ok(Self {
            dex_number: pokemon.id,
            name: display_name(&pokemon.name),
            slug: pokemon.name,
            types,
            stats,
            abilities,
            moves,
            sprite: pokemon.sprites.front_default,
            shiny_sprite: pokemon.sprites.front_shiny,
        })
    }
}

/// Species-level data: dex entry, genus, generation, habitat
#[derive(Debug, Clone, Default)]
pub struct SpeciesInfo {
    /// Pokédex flavor text, cleaned of control characters
    pub dex_entry: Option<String>,
    /// Genus text (e.g., "Mouse Pokémon")
    pub genus: Option<String>,
    /// Display name of the generation (e.g., "Generation I")
    pub generation: Option<String>,
    /// Display name of the habitat
    pub habitat: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    /// Absolute URL of this species' evolution chain
    pub evolution_chain_url: Option<String>,
}

impl From<Species> for SpeciesInfo {
    fn from(species: Species) -> Self {
        // Take the most recent English entry; PokeAPI lists them oldest
        // game first
        let dex_entry = species
            .flavor_text_entries
            .iter()
            .rev()
            .find(|entry| entry.language.name == "en")
            .map(|entry| clean_flavor_text(&entry.flavor_text));

        let genus = species
            .genera
            .iter()
            .find(|g| g.language.name == "en")
            .map(|g| g.genus.clone());

        Self {
            dex_entry,
            genus,
            generation: species.generation.map(|g| display_name(&g.name)),
            habitat: species.habitat.map(|h| display_name(&h.name)),
            is_legendary: species.is_legendary,
            is_mythical: species.is_mythical,
            evolution_chain_url: species.evolution_chain.map(|c| c.url),
        }
    }
}

/// Flavor text from the games carries form feeds and hard line breaks
fn clean_flavor_text(raw: &str) -> String {
    raw.replace(['\u{c}', '\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// One stage in an evolution line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    /// Human-readable species name
    pub name: String,
    /// How this stage is reached from the previous one; `None` for the
    /// base form
    pub requirement: Option<String>,
}

/// Flatten an evolution chain into ordered stages.
///
/// Branched chains (e.g., Eevee) follow the first branch at every fork,
/// which matches how the bot presents a single evolution line.
pub fn walk_chain(chain: &EvolutionChain) -> Vec<EvolutionStage> {
    let mut stages = Vec::new();
    let mut link: Option<&ChainLink> = Some(&chain.chain);

    while let Some(current) = link {
        stages.push(EvolutionStage {
            name: display_name(&current.species.name),
            requirement: requirement_text(&current.evolution_details),
        });
        link = current.evolves_to.first();
    }

    stages
}

/// Render evolution details as a short requirement like "Level 16" or
/// "Use Thunder Stone"
fn requirement_text(details: &[EvolutionDetail]) -> Option<String> {
    let detail = details.first()?;
    let mut parts = Vec::new();

    match detail.trigger.name.as_str() {
        "level-up" => {
            if let Some(level) = detail.min_level {
                parts.push(format!("Level {level}"));
            }
            if detail.min_happiness.is_some() {
                parts.push("High friendship".to_string());
            }
            if !detail.time_of_day.is_empty() {
                parts.push(format!("Time of day: {}", detail.time_of_day));
            }
            if parts.is_empty() {
                parts.push("Level up".to_string());
            }
        }
        "use-item" => {
            if let Some(item) = &detail.item {
                parts.push(format!("Use {}", display_name(&item.name)));
            } else {
                parts.push("Use item".to_string());
            }
        }
        "trade" => parts.push("Trade".to_string()),
        "shed" => parts.push("Shed".to_string()),
        other => parts.push(display_name(other)),
    }

    Some(parts.join(", "))
}

/// A move as shown in moveset listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSummary {
    /// Human-readable name (e.g., "Thunder Shock")
    pub name: String,
    /// Move type, if it parses into the battle model
    pub type_: Option<PokeType>,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
}

impl From<MoveData> for MoveSummary {
    fn from(data: MoveData) -> Self {
        Self {
            name: display_name(&data.name),
            type_: data.type_.name.parse().ok(),
            power: data.power,
            accuracy: data.accuracy,
            pp: data.pp,
        }
    }
}

impl MoveSummary {
    /// A one-line description like "Electric | Power: 90 | Acc: 100 | PP: 15"
    pub fn detail_line(&self) -> String {
        let type_name = self.type_.map(|t| t.display_name()).unwrap_or("Unknown");
        format!(
            "{} | Power: {} | Acc: {} | PP: {}",
            type_name,
            opt_num(self.power),
            opt_num(self.accuracy),
            opt_num(self.pp),
        )
    }
}

fn opt_num(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// An ability with its effect description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityInfo {
    /// Human-readable name (e.g., "Lightning Rod")
    pub name: String,
    pub hidden: bool,
    /// English short effect, when PokeAPI has one
    pub effect: Option<String>,
}

impl AbilityInfo {
    /// Combine raw ability data with the hidden flag from the Pokémon entry
    pub fn from_data(data: AbilityData, hidden: bool) -> Self {
        let effect = data
            .effect_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.short_effect.clone());

        Self {
            name: display_name(&data.name),
            hidden,
            effect,
        }
    }
}
