use pokecalc::encounters::{
    group_encounters, EncounterDetail, LocationArea, PokemonEncounter, VersionDetail,
};
use pokecalc::game::Game;

fn encounter(pokemon: &str, version: &str, details: Vec<EncounterDetail>) -> PokemonEncounter {
    PokemonEncounter {
        pokemon: pokemon.to_string(),
        versions: vec![VersionDetail { version: version.to_string(), details }],
    }
}

fn route_201() -> Vec<LocationArea> {
    vec![LocationArea {
        name: "sinnoh-route-201-area".to_string(),
        encounters: vec![
            encounter(
                "starly",
                "diamond",
                vec![
                    EncounterDetail::new("walk", 20, &["time-morning"]),
                    EncounterDetail::new("walk", 30, &["time-morning"]),
                    EncounterDetail::new("walk", 25, &["time-day"]),
                ],
            ),
            encounter(
                "bidoof",
                "diamond",
                vec![
                    EncounterDetail::new("walk", 40, &["time-morning"]),
                    EncounterDetail::new("walk", 10, &["swarm-yes"]),
                ],
            ),
            encounter(
                "kricketot",
                "diamond",
                vec![EncounterDetail::new("walk", 15, &["time-night", "radar-on"])],
            ),
            encounter("nidoran-f", "pearl", vec![EncounterDetail::new("walk", 50, &[])]),
            encounter("magikarp", "diamond", vec![EncounterDetail::new("old-rod", 70, &[])]),
        ],
    }]
}

#[test]
fn chances_add_up_and_sort_descending() {
    let table = group_encounters(Game::Diamond, "sinnoh-route-201", &route_201());
    let area = table.area("Area").expect("area present");
    let morning = &area["Walk - Morning"];
    let names: Vec<&str> = morning.iter().map(|e| e.name.as_str()).collect();
    // starly 20 + 30 = 50 beats bidoof 40
    assert_eq!(names, ["starly", "bidoof"]);
    assert_eq!(morning[0].rate, 50);
    assert_eq!(morning[0].display_name, "Starly");
    assert_eq!(area["Walk - Day"][0].rate, 25);
    assert_eq!(area["Old Rod"][0].display_name, "Magikarp");
}

#[test]
fn special_slots_and_other_versions_are_left_out() {
    let table = group_encounters(Game::Diamond, "sinnoh-route-201", &route_201());
    let area = table.area("Area").expect("area present");
    assert!(!area.contains_key("Walk - Night"));
    assert!(!area.values().flatten().any(|e| e.name == "nidoran-f"));
    assert_eq!(table.entry_count(), 4);
}

#[test]
fn unknown_version_yields_empty_table() {
    let table = group_encounters(Game::Red, "sinnoh-route-201", &route_201());
    assert!(table.is_empty());
    assert!(table.area("Area").is_none());
}

#[test]
fn ties_break_by_name() {
    let areas = vec![LocationArea {
        name: "lake-verity".to_string(),
        encounters: vec![
            encounter("psyduck", "platinum", vec![EncounterDetail::new("surf", 30, &[])]),
            encounter("golduck", "platinum", vec![EncounterDetail::new("surf", 30, &[])]),
        ],
    }];
    let table = group_encounters(Game::Platinum, "lake-verity", &areas);
    let surf = &table.area("Lake Verity").expect("whole-location area")["Surf"];
    assert_eq!(surf[0].name, "golduck");
    assert_eq!(surf[1].name, "psyduck");
}
