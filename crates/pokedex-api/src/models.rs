//! Serde models for PokeAPI responses
//!
//! Only the fields the bot actually reads are modeled; PokeAPI payloads
//! carry far more, and serde skips the rest.

use serde::Deserialize;

/// A name plus the URL of the full resource, PokeAPI's standard reference
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// An unnamed resource reference (URL only)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

// ============================================================================
// /pokemon/{name}
// ============================================================================

/// Response model for the pokemon endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// National Dex number
    pub id: u32,
    /// Lowercase slug (e.g., "mr-mime")
    pub name: String,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonTypeSlot>,
    pub abilities: Vec<PokemonAbilitySlot>,
    #[serde(default)]
    pub moves: Vec<PokemonMoveSlot>,
    pub sprites: Sprites,
}

/// One base stat entry
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u16,
    pub stat: NamedResource,
}

/// One type entry with its slot order
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// One ability entry
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

/// One learnable move entry
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonMoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

/// Sprite URLs; most are null for newer forms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

// ============================================================================
// /pokemon-species/{name}
// ============================================================================

/// Response model for the pokemon-species endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    pub generation: Option<NamedResource>,
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub evolution_chain: Option<ApiResource>,
}

/// One Pokédex flavor text entry in some language
#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Genus text ("Seed Pokémon") in some language
#[derive(Debug, Clone, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

// ============================================================================
// /evolution-chain/{id}
// ============================================================================

/// Response model for the evolution-chain endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One node in the evolution tree
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// How a species evolves into this link
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedResource,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    /// Empty string when the time of day does not matter
    #[serde(default)]
    pub time_of_day: String,
    pub item: Option<NamedResource>,
}

// ============================================================================
// /move/{name}
// ============================================================================

/// Response model for the move endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

// ============================================================================
// /ability/{name}
// ============================================================================

/// Response model for the ability endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AbilityData {
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

/// One ability effect description in some language
#[derive(Debug, Clone, Deserialize)]
pub struct EffectEntry {
    pub short_effect: String,
    pub language: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserialization() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "stats": [
                {"base_stat": 35, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 90, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ],
            "abilities": [
                {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false},
                {"ability": {"name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/"}, "is_hidden": true}
            ],
            "moves": [
                {"move": {"name": "thunder-shock", "url": "https://pokeapi.co/api/v2/move/84/"}}
            ],
            "sprites": {
                "front_default": "https://example.com/25.png",
                "front_shiny": "https://example.com/shiny/25.png"
            }
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.stats.len(), 2);
        assert_eq!(pokemon.stats[1].base_stat, 90);
        assert_eq!(pokemon.types[0].type_.name, "electric");
        assert!(pokemon.abilities[1].is_hidden);
        assert_eq!(pokemon.moves[0].move_.name, "thunder-shock");
        assert!(pokemon.sprites.front_shiny.is_some());
    }

    #[test]
    fn test_pokemon_tolerates_null_sprites() {
        let json = r#"{
            "id": 10194,
            "name": "some-form",
            "stats": [],
            "types": [],
            "abilities": [],
            "sprites": {"front_default": null, "front_shiny": null}
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert!(pokemon.sprites.front_default.is_none());
        assert!(pokemon.moves.is_empty());
    }

    #[test]
    fn test_species_deserialization() {
        let json = r#"{
            "name": "pikachu",
            "flavor_text_entries": [
                {"flavor_text": "Wenn es...", "language": {"name": "de", "url": ""}},
                {"flavor_text": "When several of\nthese POKuMON\fgather...", "language": {"name": "en", "url": ""}}
            ],
            "genera": [
                {"genus": "Mouse Pokémon", "language": {"name": "en", "url": ""}}
            ],
            "generation": {"name": "generation-i", "url": ""},
            "habitat": {"name": "forest", "url": ""},
            "is_legendary": false,
            "is_mythical": false,
            "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/10/"}
        }"#;

        let species: Species = serde_json::from_str(json).unwrap();
        assert_eq!(species.flavor_text_entries.len(), 2);
        assert_eq!(species.genera[0].genus, "Mouse Pokémon");
        assert_eq!(species.generation.unwrap().name, "generation-i");
        assert!(species.evolution_chain.unwrap().url.contains("/10/"));
    }

    #[test]
    fn test_evolution_chain_deserialization() {
        let json = r#"{
            "chain": {
                "species": {"name": "charmander", "url": ""},
                "evolution_details": [],
                "evolves_to": [
                    {
                        "species": {"name": "charmeleon", "url": ""},
                        "evolution_details": [
                            {"trigger": {"name": "level-up", "url": ""}, "min_level": 16, "min_happiness": null, "time_of_day": "", "item": null}
                        ],
                        "evolves_to": [
                            {
                                "species": {"name": "charizard", "url": ""},
                                "evolution_details": [
                                    {"trigger": {"name": "level-up", "url": ""}, "min_level": 36, "min_happiness": null, "time_of_day": "", "item": null}
                                ],
                                "evolves_to": []
                            }
                        ]
                    }
                ]
            }
        }"#;

        let chain: EvolutionChain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.chain.species.name, "charmander");
        let second = &chain.chain.evolves_to[0];
        assert_eq!(second.evolution_details[0].min_level, Some(16));
        assert_eq!(second.evolves_to[0].species.name, "charizard");
    }

    #[test]
    fn test_move_deserialization() {
        let json = r#"{
            "name": "thunderbolt",
            "power": 90,
            "accuracy": 100,
            "pp": 15,
            "type": {"name": "electric", "url": ""}
        }"#;

        let move_data: MoveData = serde_json::from_str(json).unwrap();
        assert_eq!(move_data.power, Some(90));
        assert_eq!(move_data.type_.name, "electric");
    }

    #[test]
    fn test_status_move_has_null_power() {
        let json = r#"{
            "name": "thunder-wave",
            "power": null,
            "accuracy": 90,
            "pp": 20,
            "type": {"name": "electric", "url": ""}
        }"#;

        let move_data: MoveData = serde_json::from_str(json).unwrap();
        assert_eq!(move_data.power, None);
        assert_eq!(move_data.accuracy, Some(90));
    }

    #[test]
    fn test_ability_deserialization() {
        let json = r#"{
            "name": "static",
            "effect_entries": [
                {"short_effect": "Paralysiert bei Kontakt.", "language": {"name": "de", "url": ""}},
                {"short_effect": "Has a 30% chance of paralyzing attackers on contact.", "language": {"name": "en", "url": ""}}
            ]
        }"#;

        let ability: AbilityData = serde_json::from_str(json).unwrap();
        assert_eq!(ability.effect_entries.len(), 2);
        assert_eq!(ability.effect_entries[1].language.name, "en");
    }
}
