//! Combined defensive type matchups for single- and dual-typed Pokémon.

use crate::typing::PokeType;
use std::collections::BTreeSet;

/// The combined defensive matchup of a type combination.
///
/// Sets are kept disjoint: anything resisted or ignored is removed from
/// the weaknesses, and anything ignored is removed from the resistances.
/// `BTreeSet` keeps iteration order stable for deterministic replies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeMatchup {
    /// Types dealing double damage (2x)
    pub weaknesses: BTreeSet<PokeType>,
    /// Types dealt half damage (½x)
    pub resistances: BTreeSet<PokeType>,
    /// Types dealing no damage (0x)
    pub immunities: BTreeSet<PokeType>,
}

impl TypeMatchup {
    /// Compute the combined matchup for one or two types.
    pub fn for_types(types: &[PokeType]) -> Self {
        let mut weaknesses = BTreeSet::new();
        let mut resistances = BTreeSet::new();
        let mut immunities = BTreeSet::new();

        for ty in types {
            weaknesses.extend(ty.weak_to().iter().copied());
            resistances.extend(ty.resists().iter().copied());
            immunities.extend(ty.immune_to().iter().copied());
        }

        // Resolve conflicts between the component types
        let weaknesses: BTreeSet<_> = weaknesses
            .difference(&resistances)
            .copied()
            .collect::<BTreeSet<_>>()
            .difference(&immunities)
            .copied()
            .collect();
        let resistances: BTreeSet<_> = resistances.difference(&immunities).copied().collect();

        Self {
            weaknesses,
            resistances,
            immunities,
        }
    }

    /// Display names of a set, alphabetically ordered, comma separated
    pub fn format_set(set: &BTreeSet<PokeType>) -> String {
        let mut names: Vec<&str> = set.iter().map(|t| t.display_name()).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::PokeType::*;

    #[test]
    fn test_single_type_matchup() {
        let m = TypeMatchup::for_types(&[Fire]);
        assert!(m.weaknesses.contains(&Water));
        assert!(m.weaknesses.contains(&Ground));
        assert!(m.weaknesses.contains(&Rock));
        assert!(m.resistances.contains(&Grass));
        assert!(m.immunities.is_empty());
    }

    #[test]
    fn test_dual_type_conflict_subtraction() {
        // Fire/Flying (Charizard): grass hits fire for 2x on neither side
        // once flying's resistance is applied, and ground cannot touch it.
        let m = TypeMatchup::for_types(&[Fire, Flying]);
        assert!(!m.weaknesses.contains(&Grass));
        assert!(!m.weaknesses.contains(&Ground));
        assert!(m.immunities.contains(&Ground));
        assert!(m.weaknesses.contains(&Rock));
        assert!(m.weaknesses.contains(&Water));
        assert!(m.weaknesses.contains(&Electric));
    }

    #[test]
    fn test_sets_are_disjoint() {
        for a in crate::typing::ALL_TYPES {
            for b in crate::typing::ALL_TYPES {
                let m = TypeMatchup::for_types(&[a, b]);
                assert!(m.weaknesses.is_disjoint(&m.resistances));
                assert!(m.weaknesses.is_disjoint(&m.immunities));
                assert!(m.resistances.is_disjoint(&m.immunities));
            }
        }
    }

    #[test]
    fn test_format_set_is_alphabetical() {
        let m = TypeMatchup::for_types(&[Grass]);
        let formatted = TypeMatchup::format_set(&m.weaknesses);
        assert_eq!(formatted, "Bug, Fire, Flying, Ice, Poison");
    }

    #[test]
    fn test_empty_types_give_empty_matchup() {
        let m = TypeMatchup::for_types(&[]);
        assert!(m.weaknesses.is_empty());
        assert!(m.resistances.is_empty());
        assert!(m.immunities.is_empty());
    }
}
