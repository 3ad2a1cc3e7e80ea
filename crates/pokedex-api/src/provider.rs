//! Cached Pokédex data provider
//!
//! Sits between the command handlers and the HTTP client: normalizes user
//! input into API slugs and keeps hot records in TTL caches so repeated
//! lookups don't hit PokeAPI.

use crate::client::PokeApiClient;
use crate::record::{
    walk_chain, AbilityInfo, EvolutionStage, MoveSummary, PokemonRecord, SpeciesInfo,
};
use moka::future::Cache;
use pokedex_common::{normalize_name, DexError, Result};
use std::{sync::Arc, time::Duration};
use tracing::{debug, instrument};

/// Cached, name-normalizing access to Pokédex data
#[derive(Clone)]
pub struct DexProvider {
    client: PokeApiClient,
    records: Cache<String, Arc<PokemonRecord>>,
    species: Cache<String, Arc<SpeciesInfo>>,
    moves: Cache<String, Arc<MoveSummary>>,
}

impl DexProvider {
    /// Create a provider with the given cache capacity and entry TTL
    pub fn new(client: PokeApiClient, capacity: u64, ttl: Duration) -> Self {
        Self {
            client,
            records: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
            species: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
            // Movesets touch many small entries per command, so give the
            // move cache more room
            moves: Cache::builder()
                .max_capacity(capacity.saturating_mul(8))
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Look up a Pokémon by whatever the user typed
    #[instrument(skip(self))]
    pub async fn pokemon(&self, name: &str) -> Result<Arc<PokemonRecord>> {
        let slug = normalize_name(name);
        if slug.is_empty() {
            return Err(DexError::validation("Pokémon name cannot be empty"));
        }

        if let Some(record) = self.records.get(&slug).await {
            debug!("Cache hit for {}", slug);
            return Ok(record);
        }

        let pokemon = self.client.get_pokemon(&slug).await?;
        let record = Arc::new(PokemonRecord::try_from(pokemon)?);
        self.records.insert(slug, record.clone()).await;
        Ok(record)
    }

    /// Species-level data (dex entry, genus, evolution chain pointer)
    #[instrument(skip(self))]
    pub async fn species(&self, name: &str) -> Result<Arc<SpeciesInfo>> {
        let slug = normalize_name(name);
        if slug.is_empty() {
            return Err(DexError::validation("Pokémon name cannot be empty"));
        }

        if let Some(info) = self.species.get(&slug).await {
            debug!("Cache hit for species {}", slug);
            return Ok(info);
        }

        let species = self.client.get_species(&slug).await?;
        let info = Arc::new(SpeciesInfo::from(species));
        self.species.insert(slug, info.clone()).await;
        Ok(info)
    }

    /// The evolution line for a Pokémon, base form first
    #[instrument(skip(self))]
    pub async fn evolution_line(&self, name: &str) -> Result<Vec<EvolutionStage>> {
        let info = self.species(name).await?;
        let url = info
            .evolution_chain_url
            .as_ref()
            .ok_or_else(|| DexError::not_found(normalize_name(name)))?;

        let chain = self.client.get_evolution_chain(url).await?;
        Ok(walk_chain(&chain))
    }

    /// Details for up to `limit` of a Pokémon's learnable moves
    #[instrument(skip(self, record), fields(pokemon = %record.slug))]
    pub async fn move_summaries(
        &self,
        record: &PokemonRecord,
        limit: usize,
    ) -> Result<Vec<MoveSummary>> {
        let mut summaries = Vec::with_capacity(limit.min(record.moves.len()));
        for slug in record.moves.iter().take(limit) {
            summaries.push(self.move_summary(slug).await?.as_ref().clone());
        }
        Ok(summaries)
    }

    /// Details for a single move by slug
    async fn move_summary(&self, slug: &str) -> Result<Arc<MoveSummary>> {
        if let Some(summary) = self.moves.get(slug).await {
            return Ok(summary);
        }

        let data = self.client.get_move(slug).await?;
        let summary = Arc::new(MoveSummary::from(data));
        self.moves.insert(slug.to_string(), summary.clone()).await;
        Ok(summary)
    }

    /// A Pokémon's abilities with their English effect text
    #[instrument(skip(self, record), fields(pokemon = %record.slug))]
    pub async fn abilities(&self, record: &PokemonRecord) -> Result<Vec<AbilityInfo>> {
        let mut infos = Vec::with_capacity(record.abilities.len());
        for slot in &record.abilities {
            let data = self.client.get_ability(&slot.slug).await?;
            infos.push(AbilityInfo::from_data(data, slot.hidden));
        }
        Ok(infos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DexProvider {
        let client = PokeApiClient::with_defaults().unwrap();
        DexProvider::new(client, 64, Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_before_any_request() {
        let provider = provider();
        let err = provider.pokemon("   ").await.unwrap_err();
        assert!(matches!(err, DexError::Validation { .. }));

        let err = provider.species("").await.unwrap_err();
        assert!(matches!(err, DexError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_cache_serves_inserted_records() {
        let provider = provider();
        let record = Arc::new(PokemonRecord {
            dex_number: 25,
            slug: "pikachu".to_string(),
            name: "Pikachu".to_string(),
            types: vec![pokedex_battle::PokeType::Electric],
            stats: pokedex_battle::StatSpread::default(),
            abilities: vec![],
            moves: vec![],
            sprite: None,
            shiny_sprite: None,
        });
        provider
            .records
            .insert("pikachu".to_string(), record)
            .await;

        // Mixed case and whitespace normalize onto the cached slug, so
        // no network request happens
        let fetched = provider.pokemon(" Pikachu ").await.unwrap();
        assert_eq!(fetched.dex_number, 25);
        assert_eq!(fetched.name, "Pikachu");
    }

    #[tokio::test]
    async fn test_cached_species_without_chain_reports_not_found() {
        let provider = provider();
        provider
            .species
            .insert("tauros".to_string(), Arc::new(SpeciesInfo::default()))
            .await;

        let err = provider.evolution_line("Tauros").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
