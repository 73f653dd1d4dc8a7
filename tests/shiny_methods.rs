use pokecalc::game::Game;
use pokecalc::generation::Generation;
use pokecalc::shiny::{
    available_methods, compute_shiny_odds, Outbreak, ShinyExtras, ShinyMethod, ShinyOddsParameters,
    METHODS,
};

fn odds(params: ShinyOddsParameters) -> String {
    compute_shiny_odds(&params).to_string()
}

fn extras(game: Game) -> ShinyExtras {
    ShinyExtras { game: Some(game), ..ShinyExtras::default() }
}

#[test]
fn method_rules_by_game() {
    let fishing = |chain| ShinyExtras { chain, ..extras(Game::X) };
    let radar = |chain| ShinyExtras { chain, ..extras(Game::Y) };
    let outbreak = |outbreak| ShinyExtras { outbreak, ..extras(Game::LegendsArceus) };
    let research = ShinyExtras { research_level: 1, ..extras(Game::LegendsArceus) };
    let space = |sparkling| ShinyExtras { sparkling, ..extras(Game::LegendsZa) };
    let sv = ShinyExtras { sparkling: 3, ..extras(Game::Scarlet) };
    let cases = [
        (Game::X, ShinyMethod::ChainFishing, false, fishing(0), 1, 4096, "1/4096"),
        (Game::X, ShinyMethod::ChainFishing, false, fishing(5), 11, 4096, "~1/372 (11/4096)"),
        (Game::X, ShinyMethod::ChainFishing, false, fishing(20), 41, 4096, "~1/100 (41/4096)"),
        (Game::X, ShinyMethod::ChainFishing, false, fishing(50), 41, 4096, "~1/100 (41/4096)"),
        (Game::Y, ShinyMethod::PokeRadarGen6, false, radar(10), 1, 5958, "1/5958"),
        (Game::Y, ShinyMethod::PokeRadarGen6, false, radar(39), 1, 400, "1/400"),
        (Game::Y, ShinyMethod::PokeRadarGen6, false, radar(40), 1, 200, "1/200"),
        (Game::Y, ShinyMethod::PokeRadarGen6, true, radar(99), 1, 200, "1/200"),
        (Game::Sword, ShinyMethod::DynamaxAdventure, false, extras(Game::Sword), 1, 300, "1/300"),
        (Game::Sword, ShinyMethod::DynamaxAdventure, true, extras(Game::Sword), 1, 100, "1/100"),
        (Game::X, ShinyMethod::FriendSafari, false, extras(Game::X), 5, 4096, "~1/819 (5/4096)"),
        (Game::X, ShinyMethod::FriendSafari, true, extras(Game::X), 7, 4096, "~1/585 (7/4096)"),
        (
            Game::BrilliantDiamond,
            ShinyMethod::DiglettBonus,
            false,
            extras(Game::BrilliantDiamond),
            2,
            4096,
            "1/2048",
        ),
        (
            Game::LegendsArceus,
            ShinyMethod::PlaOutbreak,
            false,
            outbreak(Outbreak::None),
            1,
            4096,
            "1/4096",
        ),
        (
            Game::LegendsArceus,
            ShinyMethod::PlaOutbreak,
            false,
            outbreak(Outbreak::Mass),
            26,
            4096,
            "~1/158 (26/4096)",
        ),
        (
            Game::LegendsArceus,
            ShinyMethod::PlaOutbreak,
            false,
            outbreak(Outbreak::Massive),
            13,
            4096,
            "~1/315 (13/4096)",
        ),
        (Game::LegendsArceus, ShinyMethod::Random, false, research, 2, 4096, "1/2048"),
        (Game::LegendsArceus, ShinyMethod::Random, true, research, 5, 4096, "~1/819 (5/4096)"),
        (Game::Scarlet, ShinyMethod::FossilRestore, true, sv, 1, 4096, "1/4096"),
        (Game::Crystal, ShinyMethod::OddEgg, false, extras(Game::Crystal), 1, 10, "1/10"),
        (Game::LegendsZa, ShinyMethod::Hyperspace, false, space(0), 1, 4096, "1/4096"),
        (Game::LegendsZa, ShinyMethod::Hyperspace, false, space(1), 2, 4096, "1/2048"),
        (Game::LegendsZa, ShinyMethod::Hyperspace, false, space(3), 4, 4096, "1/1024"),
        (Game::LegendsZa, ShinyMethod::Hyperspace, true, space(3), 6, 4096, "~1/683 (6/4096)"),
    ];
    for (game, method, charm, extra, rolls, base, shown) in cases {
        let params =
            ShinyOddsParameters::for_game(game, method).with_charm(charm).with_extra(extra);
        let o = compute_shiny_odds(&params);
        assert_eq!((o.rolls, o.base), (rolls, base), "{method:?} in {game}, charm {charm}");
        assert_eq!(o.to_string(), shown, "{method:?} in {game}, charm {charm}");
    }
}

#[test]
fn masuda_with_charm_in_gen6() {
    let o = compute_shiny_odds(
        &ShinyOddsParameters::new(Generation::Gen6, ShinyMethod::Masuda).with_charm(true),
    );
    assert_eq!(o.rolls, 8);
    assert_eq!(o.base, 4096);
    assert_eq!(o.percentage, 0.1953);
    assert_eq!(o.to_string(), "1/512");
}

#[test]
fn gen4_radar_full_chain() {
    let extra = ShinyExtras { chain: 40, ..ShinyExtras::default() };
    let params = ShinyOddsParameters::for_game(Game::Platinum, ShinyMethod::PokeRadarGen4);
    let full = ShinyExtras { game: Some(Game::Platinum), ..extra };
    assert_eq!(odds(params.with_extra(full)), "1/200");
    // Chains past 40 do not improve further.
    let longer = ShinyExtras { chain: 90, game: Some(Game::Platinum), ..extra };
    assert_eq!(odds(params.with_extra(longer)), "1/200");
}

#[test]
fn tera_raid_ignores_modifiers() {
    for charm in [false, true] {
        for sparkling in 0..=3 {
            let extra =
                ShinyExtras { game: Some(Game::Violet), sparkling, ..ShinyExtras::default() };
            let params = ShinyOddsParameters::for_game(Game::Violet, ShinyMethod::TeraRaid)
                .with_charm(charm)
                .with_extra(extra);
            assert_eq!(odds(params), "1/4103");
        }
    }
}

#[test]
fn legacy_and_modern_base_odds() {
    let gen5 = compute_shiny_odds(&ShinyOddsParameters::new(Generation::Gen5, ShinyMethod::Random));
    assert_eq!(gen5.to_string(), "1/8192");
    let gen7 = compute_shiny_odds(&ShinyOddsParameters::new(Generation::Gen7, ShinyMethod::Random));
    assert_eq!(gen7.to_string(), "1/4096");
    let charmed = ShinyOddsParameters::new(Generation::Gen7, ShinyMethod::Random).with_charm(true);
    assert_eq!(compute_shiny_odds(&charmed).to_string(), "~1/1365 (3/4096)");
}

#[test]
fn charm_is_ignored_before_gen5() {
    let plain = ShinyOddsParameters::new(Generation::Gen4, ShinyMethod::Masuda);
    assert_eq!(compute_shiny_odds(&plain), compute_shiny_odds(&plain.with_charm(true)));
    assert_eq!(compute_shiny_odds(&plain).rolls, 5);
}

#[test]
fn sv_outbreak_stacks_kills_and_sparkling() {
    let game = Game::Scarlet;
    let none = ShinyOddsParameters::for_game(game, ShinyMethod::SvOutbreak);
    let boosted = none.with_charm(true).with_extra(ShinyExtras {
        game: Some(game),
        kills: 60,
        sparkling: 3,
        ..ShinyExtras::default()
    });
    assert!(compute_shiny_odds(&boosted).rolls > compute_shiny_odds(&none).rolls);
    assert!(compute_shiny_odds(&boosted).percentage > compute_shiny_odds(&none).percentage);
}

#[test]
fn gating_respects_generation_windows() {
    for game in Game::ALL {
        for info in available_methods(game) {
            let gen = game.generation();
            assert!(info.min_gen.map_or(true, |min| gen >= min), "{} in {game}", info.name);
            assert!(info.max_gen.map_or(true, |max| gen <= max), "{} in {game}", info.name);
            assert!(!info.excluded.contains(&game));
        }
    }
}

#[test]
fn game_specific_methods() {
    let names = |game| available_methods(game).map(|m| m.method).collect::<Vec<_>>();
    assert!(names(Game::X).contains(&ShinyMethod::FriendSafari));
    assert!(!names(Game::OmegaRuby).contains(&ShinyMethod::FriendSafari));
    assert!(names(Game::Crystal).contains(&ShinyMethod::OddEgg));
    assert!(!names(Game::Gold).contains(&ShinyMethod::OddEgg));
    assert!(names(Game::Red).is_empty());
    assert!(!names(Game::LegendsArceus).contains(&ShinyMethod::Masuda));
}

#[test]
fn table_covers_every_method_once() {
    for method in ShinyMethod::ALL {
        assert_eq!(METHODS.iter().filter(|m| m.method == method).count(), 1, "{method:?}");
    }
}
