//! Which shiny methods each game offers, and what inputs they take.

use super::ShinyMethod;
use crate::game::Game;
use crate::generation::Generation;

/// A per-method input the caller should collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodInput {
    Chain { max: u16 },
    Combo { max: u16 },
    Lure,
    ShinyParent,
    Outbreak,
    Kills { max: u16 },
    Sparkling,
}

impl MethodInput {
    pub const fn label(self) -> &'static str {
        match self {
            MethodInput::Chain { max: 20 } => "Chain Length (0-20)",
            MethodInput::Chain { max: 40 } => "Chain Length (0-40)",
            MethodInput::Chain { .. } => "Chain Length",
            MethodInput::Combo { .. } => "Combo Length",
            MethodInput::Lure => "Lure active?",
            MethodInput::ShinyParent => "Shiny Parent?",
            MethodInput::Outbreak => "Outbreak Type",
            MethodInput::Kills { .. } => "Outbreak Kills (0-60+)",
            MethodInput::Sparkling => "Sparkling Power Level",
        }
    }
}

/// Gating and display data for one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    pub method: ShinyMethod,
    pub name: &'static str,
    pub description: &'static str,
    pub min_gen: Option<Generation>,
    pub max_gen: Option<Generation>,
    /// Empty means every game in the generation window.
    pub allowed: &'static [Game],
    pub excluded: &'static [Game],
    pub inputs: &'static [MethodInput],
}

impl MethodInfo {
    const fn new(method: ShinyMethod, name: &'static str, description: &'static str) -> Self {
        Self {
            method,
            name,
            description,
            min_gen: None,
            max_gen: None,
            allowed: &[],
            excluded: &[],
            inputs: &[],
        }
    }

    const fn gens(mut self, min: Generation, max: Option<Generation>) -> Self {
        self.min_gen = Some(min);
        self.max_gen = max;
        self
    }

    const fn only(mut self, gen: Generation) -> Self {
        self.min_gen = Some(gen);
        self.max_gen = Some(gen);
        self
    }

    const fn allowed(mut self, games: &'static [Game]) -> Self {
        self.allowed = games;
        self
    }

    const fn excluded(mut self, games: &'static [Game]) -> Self {
        self.excluded = games;
        self
    }

    const fn inputs(mut self, inputs: &'static [MethodInput]) -> Self {
        self.inputs = inputs;
        self
    }

    /// Whether the method is offered in `game`.
    pub fn offered_in(&self, game: Game) -> bool {
        let gen = game.generation();
        // Shiny Pokémon first appear in Gen II.
        if gen < Generation::Gen2 {
            return false;
        }
        self.min_gen.map_or(true, |min| gen >= min)
            && self.max_gen.map_or(true, |max| gen <= max)
            && (self.allowed.is_empty() || self.allowed.contains(&game))
            && !self.excluded.contains(&game)
    }
}

/// Every method, in display order.
pub static METHODS: [MethodInfo; 20] = [
    MethodInfo::new(
        ShinyMethod::Random,
        "Random Encounter",
        "Standard wild Pokémon encounters in grass, caves or water.",
    ),
    MethodInfo::new(
        ShinyMethod::Static,
        "Static Encounter",
        "Overworld sprites, gifts and interactable Pokémon such as legendaries. \
         Some static encounters are shiny locked.",
    )
    .excluded(&[Game::Sword, Game::Shield, Game::LegendsArceus, Game::LegendsZa]),
    MethodInfo::new(
        ShinyMethod::Breeding,
        "Breeding",
        "Day Care breeding. A shiny parent boosts the odds sharply in Gen II.",
    )
    .only(Generation::Gen2)
    .inputs(&[MethodInput::ShinyParent]),
    MethodInfo::new(
        ShinyMethod::OddEgg,
        "Odd Egg",
        "The Day-Care gift egg in Crystal, hatching a baby Pokémon with a 1/10 shiny chance.",
    )
    .allowed(&[Game::Crystal]),
    MethodInfo::new(
        ShinyMethod::Masuda,
        "Breeding (Masuda Method)",
        "Breeding two Pokémon from games of different languages.",
    )
    .gens(Generation::Gen4, None)
    .excluded(&[Game::LetsGoPikachu, Game::LetsGoEevee, Game::LegendsArceus, Game::LegendsZa]),
    MethodInfo::new(
        ShinyMethod::PokeRadarGen4,
        "Poké Radar (Gen 4)",
        "Chaining with the Poké Radar. Odds max out at a chain of 40.",
    )
    .only(Generation::Gen4)
    .allowed(&[Game::Diamond, Game::Pearl, Game::Platinum])
    .inputs(&[MethodInput::Chain { max: 40 }]),
    MethodInfo::new(
        ShinyMethod::FriendSafari,
        "Friend Safari",
        "Friend Safari encounters have a flat boosted shiny rate.",
    )
    .only(Generation::Gen6)
    .allowed(&[Game::X, Game::Y]),
    MethodInfo::new(
        ShinyMethod::ChainFishing,
        "Chain Fishing",
        "Consecutive successful hooks raise the odds. Maxes at a chain of 20.",
    )
    .only(Generation::Gen6)
    .inputs(&[MethodInput::Chain { max: 20 }]),
    MethodInfo::new(
        ShinyMethod::PokeRadarGen6,
        "Poké Radar (Gen 6)",
        "Chaining with the Poké Radar in Kalos. Odds max out at a chain of 40.",
    )
    .only(Generation::Gen6)
    .allowed(&[Game::X, Game::Y])
    .inputs(&[MethodInput::Chain { max: 40 }]),
    MethodInfo::new(
        ShinyMethod::Sos,
        "SOS Method",
        "Wild Pokémon calling for help. Odds rise at chains of 11, 21 and 31.",
    )
    .only(Generation::Gen7)
    .allowed(&[Game::Sun, Game::Moon, Game::UltraSun, Game::UltraMoon])
    .inputs(&[MethodInput::Chain { max: 255 }]),
    MethodInfo::new(
        ShinyMethod::CatchCombo,
        "Catch Combo",
        "Catching the same species in a row. Odds rise at 11, 21 and 31.",
    )
    .only(Generation::Gen7)
    .allowed(&[Game::LetsGoPikachu, Game::LetsGoEevee])
    .inputs(&[MethodInput::Combo { max: 999 }, MethodInput::Lure]),
    MethodInfo::new(
        ShinyMethod::DynamaxAdventure,
        "Dynamax Adventure",
        "The Max Lair has a fixed, very high shiny rate.",
    )
    .only(Generation::Gen8)
    .allowed(&[Game::Sword, Game::Shield]),
    MethodInfo::new(
        ShinyMethod::CurrySpawn,
        "Curry Spawn",
        "Pokémon attracted to the camp after cooking curry.",
    )
    .only(Generation::Gen8)
    .allowed(&[Game::Sword, Game::Shield]),
    MethodInfo::new(
        ShinyMethod::DiglettBonus,
        "Diglett Bonus",
        "Finding 40 Diglett in the Grand Underground doubles the odds.",
    )
    .only(Generation::Gen8)
    .allowed(&[Game::BrilliantDiamond, Game::ShiningPearl]),
    MethodInfo::new(
        ShinyMethod::PlaOutbreak,
        "Outbreaks",
        "Legends: Arceus odds by outbreak type.",
    )
    .only(Generation::Gen8)
    .allowed(&[Game::LegendsArceus])
    .inputs(&[MethodInput::Outbreak]),
    MethodInfo::new(
        ShinyMethod::SvOutbreak,
        "Outbreaks",
        "Scarlet/Violet odds by outbreak Pokémon defeated.",
    )
    .only(Generation::Gen9)
    .allowed(&[Game::Scarlet, Game::Violet])
    .inputs(&[MethodInput::Kills { max: 60 }]),
    MethodInfo::new(
        ShinyMethod::TeraRaid,
        "Tera Raid",
        "Fixed odds, unaffected by the Shiny Charm or Sparkling Power.",
    )
    .only(Generation::Gen9)
    .allowed(&[Game::Scarlet, Game::Violet]),
    MethodInfo::new(
        ShinyMethod::FossilRestore,
        "Fossil Restoration",
        "Restoring fossils in Legends: Z-A. Odds are fixed at 1/4096.",
    )
    .only(Generation::Gen9)
    .allowed(&[Game::LegendsZa]),
    MethodInfo::new(
        ShinyMethod::Hyperspace,
        "Hyperspace Random Encounter",
        "Hyperspace encounters in Legends: Z-A. Sparkling Power 1-3 applies.",
    )
    .only(Generation::Gen9)
    .allowed(&[Game::LegendsZa])
    .inputs(&[MethodInput::Sparkling]),
    MethodInfo::new(
        ShinyMethod::HyperspaceStatic,
        "Hyperspace Static Encounter",
        "Static legendaries in Hyperspace. Sparkling Power and the Shiny Charm apply. \
         Some static encounters are shiny locked.",
    )
    .only(Generation::Gen9)
    .allowed(&[Game::LegendsZa])
    .inputs(&[MethodInput::Sparkling]),
];

/// Gating entry for `method`.
pub fn method_info(method: ShinyMethod) -> &'static MethodInfo {
    match METHODS.iter().find(|info| info.method == method) {
        Some(info) => info,
        None => &METHODS[0],
    }
}

/// Methods offered in `game`, in display order.
///
/// ```
/// use pokecalc::game::Game;
/// use pokecalc::shiny::{available_methods, ShinyMethod};
///
/// let methods: Vec<ShinyMethod> = available_methods(Game::X).map(|m| m.method).collect();
/// assert!(methods.contains(&ShinyMethod::FriendSafari));
/// assert!(!methods.contains(&ShinyMethod::Sos));
/// ```
pub fn available_methods(game: Game) -> impl Iterator<Item = &'static MethodInfo> {
    METHODS.iter().filter(move |info| info.offered_in(game))
}
