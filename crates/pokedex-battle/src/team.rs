//! Team composition analysis for up to six Pokémon.

use crate::matchup::TypeMatchup;
use crate::stats::{BattleRole, StatSpread};
use crate::typing::PokeType;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Maximum party size
pub const MAX_TEAM_SIZE: usize = 6;

/// Minimum number of distinct types before the variety tip fires
const MIN_TYPE_VARIETY: usize = 3;

/// Number of shared weaknesses that triggers the coverage tip
const WEAKNESS_TIP_THRESHOLD: usize = 3;

/// One team member's analysis inputs
#[derive(Debug, Clone)]
pub struct TeamSlot {
    /// Display name
    pub name: String,
    /// The member's one or two types
    pub types: Vec<PokeType>,
    /// Base stats
    pub stats: StatSpread,
}

impl TeamSlot {
    /// The role this member gravitates toward
    pub fn role(&self) -> BattleRole {
        BattleRole::for_spread(&self.stats)
    }
}

/// Aggregated team analysis
#[derive(Debug, Clone)]
pub struct TeamReport {
    /// (name, types, role) per member, in input order
    pub members: Vec<(String, Vec<PokeType>, BattleRole)>,
    /// Distinct types present on the team
    pub coverage: BTreeSet<PokeType>,
    /// Combined defensive matchup over every member's types
    pub matchup: TypeMatchup,
    /// How many members gravitate toward each role
    pub role_distribution: BTreeMap<&'static str, usize>,
    /// Team-building tips derived from the composition
    pub tips: Vec<String>,
}

impl TeamReport {
    /// Analyze a team of 1–6 members.
    ///
    /// Returns `None` for an empty or oversized team; the caller decides
    /// how to phrase the usage error.
    pub fn analyze(slots: &[TeamSlot]) -> Option<Self> {
        if slots.is_empty() || slots.len() > MAX_TEAM_SIZE {
            return None;
        }

        let mut coverage = BTreeSet::new();
        let mut all_types = Vec::new();
        let mut role_distribution: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut members = Vec::with_capacity(slots.len());

        for slot in slots {
            coverage.extend(slot.types.iter().copied());
            all_types.extend(slot.types.iter().copied());
            let role = slot.role();
            *role_distribution.entry(role.display_name()).or_insert(0) += 1;
            members.push((slot.name.clone(), slot.types.clone(), role));
        }

        let matchup = TypeMatchup::for_types(&all_types);
        let tips = Self::build_tips(&coverage, &matchup, &members);

        Some(Self {
            members,
            coverage,
            matchup,
            role_distribution,
            tips,
        })
    }

    fn build_tips(
        coverage: &BTreeSet<PokeType>,
        matchup: &TypeMatchup,
        members: &[(String, Vec<PokeType>, BattleRole)],
    ) -> Vec<String> {
        let mut tips = Vec::new();

        if coverage.len() < MIN_TYPE_VARIETY {
            tips.push("Consider adding more type variety to your team".to_string());
        }
        if matchup.weaknesses.len() > WEAKNESS_TIP_THRESHOLD {
            tips.push(
                "Your team has several common weaknesses, consider adding Pokémon to cover these"
                    .to_string(),
            );
        }

        let defensive = members.iter().filter(|(_, _, r)| r.is_defensive()).count();
        let offensive = members.iter().filter(|(_, _, r)| r.is_offensive()).count();
        let fast = members
            .iter()
            .filter(|(_, _, r)| *r == BattleRole::FastSweeper)
            .count();

        if defensive == 0 {
            tips.push("Your team lacks defensive Pokémon".to_string());
        }
        if offensive == 0 {
            tips.push("Your team lacks offensive Pokémon".to_string());
        }
        if fast == 0 {
            tips.push("Consider adding a fast Pokémon to your team".to_string());
        }

        tips
    }
}
