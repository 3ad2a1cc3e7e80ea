//! Integration tests exercising the battle crate end to end.

use pokedex_battle::{
    stat_bar, BattleRole, PokeType, StatSpread, TeamReport, TeamSlot, TypeMatchup, ALL_TYPES,
};

fn charizard() -> TeamSlot {
    TeamSlot {
        name: "Charizard".to_string(),
        types: vec![PokeType::Fire, PokeType::Flying],
        stats: StatSpread {
            hp: 78,
            attack: 84,
            defense: 78,
            special_attack: 109,
            special_defense: 85,
            speed: 100,
        },
    }
}

#[test]
fn charizard_matchup_matches_the_games() {
    let m = TypeMatchup::for_types(&[PokeType::Fire, PokeType::Flying]);

    // 2x
    assert!(m.weaknesses.contains(&PokeType::Rock));
    assert!(m.weaknesses.contains(&PokeType::Water));
    assert!(m.weaknesses.contains(&PokeType::Electric));
    // Grass is resisted by both component types, never a weakness
    assert!(!m.weaknesses.contains(&PokeType::Grass));
    assert!(m.resistances.contains(&PokeType::Grass));
    // 0x
    assert!(m.immunities.contains(&PokeType::Ground));
}

#[test]
fn typechart_is_total_and_deterministic() {
    // Every type produces a matchup, and producing it twice gives the
    // same formatted output.
    for ty in ALL_TYPES {
        let first = TypeMatchup::for_types(&[ty]);
        let second = TypeMatchup::for_types(&[ty]);
        assert_eq!(first, second);
        assert_eq!(
            TypeMatchup::format_set(&first.weaknesses),
            TypeMatchup::format_set(&second.weaknesses)
        );
    }
}

#[test]
fn full_team_analysis() {
    let team = vec![
        charizard(),
        TeamSlot {
            name: "Snorlax".to_string(),
            types: vec![PokeType::Normal],
            stats: StatSpread {
                hp: 160,
                attack: 110,
                defense: 65,
                special_attack: 65,
                special_defense: 110,
                speed: 30,
            },
        },
    ];

    let report = TeamReport::analyze(&team).expect("valid team size");
    assert_eq!(report.members.len(), 2);
    assert_eq!(report.members[0].2, BattleRole::SpecialAttacker);
    assert_eq!(report.members[1].2, BattleRole::Tank);
    assert!(report.coverage.contains(&PokeType::Normal));
    // Snorlax's ghost immunity carries into the combined matchup
    assert!(report.matchup.immunities.contains(&PokeType::Ghost));
}

#[test]
fn stat_bars_render_for_all_spreads() {
    let spread = charizard().stats;
    for (_, value) in spread.iter() {
        let bar = stat_bar(value, 15);
        assert_eq!(bar.chars().count(), 15);
        assert!(bar.contains('█'));
    }
}
