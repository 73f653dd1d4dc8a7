//! Shiny odds engine.
//!
//! Odds are modelled as independent rolls against a base denominator: 8192
//! through Gen V, 4096 from Gen VI. Every bonus adds rolls. A handful of
//! methods bypass the model with fixed odds, which are reported as one roll
//! against the fixed denominator.

mod guide;
mod methods;
mod odds;

pub use guide::{guide_section, GuideSection, GUIDE};
pub use methods::{available_methods, method_info, MethodInfo, MethodInput, METHODS};
pub use odds::{OddsFraction, ShinyOdds};

use crate::game::Game;
use crate::generation::Generation;
use std::fmt;
use std::str::FromStr;

pub const BASE_ODDS_LEGACY: u32 = 8192;
pub const BASE_ODDS_MODERN: u32 = 4096;

/// Shiny hunting methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShinyMethod {
    Random,
    Static,
    Breeding,
    OddEgg,
    Masuda,
    PokeRadarGen4,
    FriendSafari,
    ChainFishing,
    PokeRadarGen6,
    Sos,
    CatchCombo,
    DynamaxAdventure,
    CurrySpawn,
    DiglettBonus,
    PlaOutbreak,
    SvOutbreak,
    TeraRaid,
    FossilRestore,
    Hyperspace,
    HyperspaceStatic,
}

impl ShinyMethod {
    pub const ALL: [ShinyMethod; 20] = [
        ShinyMethod::Random,
        ShinyMethod::Static,
        ShinyMethod::Breeding,
        ShinyMethod::OddEgg,
        ShinyMethod::Masuda,
        ShinyMethod::PokeRadarGen4,
        ShinyMethod::FriendSafari,
        ShinyMethod::ChainFishing,
        ShinyMethod::PokeRadarGen6,
        ShinyMethod::Sos,
        ShinyMethod::CatchCombo,
        ShinyMethod::DynamaxAdventure,
        ShinyMethod::CurrySpawn,
        ShinyMethod::DiglettBonus,
        ShinyMethod::PlaOutbreak,
        ShinyMethod::SvOutbreak,
        ShinyMethod::TeraRaid,
        ShinyMethod::FossilRestore,
        ShinyMethod::Hyperspace,
        ShinyMethod::HyperspaceStatic,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            ShinyMethod::Random => "random",
            ShinyMethod::Static => "static",
            ShinyMethod::Breeding => "breeding",
            ShinyMethod::OddEgg => "odd-egg",
            ShinyMethod::Masuda => "masuda",
            ShinyMethod::PokeRadarGen4 => "pokeradar-gen4",
            ShinyMethod::FriendSafari => "friendsafari",
            ShinyMethod::ChainFishing => "chainfishing",
            ShinyMethod::PokeRadarGen6 => "pokeradar-gen6",
            ShinyMethod::Sos => "sos",
            ShinyMethod::CatchCombo => "catchcombo",
            ShinyMethod::DynamaxAdventure => "dynamax-adventure",
            ShinyMethod::CurrySpawn => "curry-spawn",
            ShinyMethod::DiglettBonus => "diglett-bonus",
            ShinyMethod::PlaOutbreak => "pla-research",
            ShinyMethod::SvOutbreak => "sv-outbreak",
            ShinyMethod::TeraRaid => "tera-raid",
            ShinyMethod::FossilRestore => "fossil-restore",
            ShinyMethod::Hyperspace => "hyperspace",
            ShinyMethod::HyperspaceStatic => "hyperspace-static",
        }
    }

    /// Sparkling Power does not stack on these in Scarlet/Violet.
    const fn ignores_sparkling(self) -> bool {
        matches!(self, ShinyMethod::Masuda | ShinyMethod::Static | ShinyMethod::FossilRestore)
    }
}

impl fmt::Display for ShinyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(method_info(*self).name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShinyMethodParseError {
    #[error("unknown shiny method: '{0}'")]
    Unknown(String),
}

impl FromStr for ShinyMethod {
    type Err = ShinyMethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        ShinyMethod::ALL
            .iter()
            .copied()
            .find(|m| m.slug() == key)
            .ok_or_else(|| ShinyMethodParseError::Unknown(s.to_string()))
    }
}

/// Legends: Arceus outbreak kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outbreak {
    #[default]
    None,
    Mass,
    Massive,
}

impl Outbreak {
    pub const fn label(self) -> &'static str {
        match self {
            Outbreak::None => "None",
            Outbreak::Mass => "Mass Outbreak",
            Outbreak::Massive => "Massive Mass Outbreak",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Outbreak::None => Outbreak::Mass,
            Outbreak::Mass => Outbreak::Massive,
            Outbreak::Massive => Outbreak::None,
        }
    }
}

/// Method- and game-specific inputs. Fields a method does not use are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShinyExtras {
    pub game: Option<Game>,
    /// Radar, fishing or SOS chain length.
    pub chain: u16,
    /// Catch combo (Let's Go).
    pub combo: u16,
    pub lure: bool,
    /// Sparkling Power tier (Scarlet/Violet, Legends: Z-A hyperspace), 0..=3.
    pub sparkling: u8,
    /// Pokédex research level (Legends: Arceus): 0 none, 1 level 10, 2 perfect.
    pub research_level: u8,
    pub outbreak: Outbreak,
    /// Outbreak Pokémon defeated (Scarlet/Violet).
    pub kills: u16,
    /// Gen II breeding with a shiny parent.
    pub shiny_parent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShinyOddsParameters {
    pub generation: Generation,
    pub method: ShinyMethod,
    pub has_shiny_charm: bool,
    pub extra: ShinyExtras,
}

impl ShinyOddsParameters {
    pub fn new(generation: Generation, method: ShinyMethod) -> Self {
        Self { generation, method, has_shiny_charm: false, extra: ShinyExtras::default() }
    }

    /// Parameters for `game`, taking the generation from it.
    pub fn for_game(game: Game, method: ShinyMethod) -> Self {
        let extra = ShinyExtras { game: Some(game), ..ShinyExtras::default() };
        Self { extra, ..Self::new(game.generation(), method) }
    }

    pub fn with_charm(mut self, has_shiny_charm: bool) -> Self {
        self.has_shiny_charm = has_shiny_charm;
        self
    }

    pub fn with_extra(mut self, extra: ShinyExtras) -> Self {
        self.extra = extra;
        self
    }

    fn game_is(&self, pred: fn(Game) -> bool) -> bool {
        self.extra.game.is_some_and(pred)
    }
}

/// Base denominator for `generation`.
pub const fn base_odds(generation: Generation) -> u32 {
    if generation.number() >= 6 {
        BASE_ODDS_MODERN
    } else {
        BASE_ODDS_LEGACY
    }
}

/// Poké Radar "1 in X" for a chain, clamped to 0..=40:
/// `n = ceil(65535 / (8200 - 200 * chain))`, `X = round(65536 / n)`.
pub fn radar_one_in(chain: u16) -> u32 {
    let chain = f64::from(chain.min(40));
    let n = (65535.0 / (8200.0 - chain * 200.0)).ceil();
    (65536.0 / n).round() as u32
}

/// Compute the shiny odds for `params`.
///
/// The engine never refuses a method; gating by game is the caller's job
/// (see [`available_methods`]).
///
/// ```
/// use pokecalc::generation::Generation;
/// use pokecalc::shiny::{compute_shiny_odds, ShinyMethod, ShinyOddsParameters};
///
/// let params = ShinyOddsParameters::new(Generation::Gen6, ShinyMethod::Masuda).with_charm(true);
/// let odds = compute_shiny_odds(&params);
/// assert_eq!((odds.rolls, odds.base), (8, 4096));
/// assert_eq!(odds.percentage, 0.1953);
/// assert_eq!(odds.to_string(), "1/512");
/// ```
pub fn compute_shiny_odds(params: &ShinyOddsParameters) -> ShinyOdds {
    if let Some(one_in) = fixed_odds(params) {
        return ShinyOdds::fixed(one_in);
    }
    let mut rolls = starting_rolls(params.method) + charm_rolls(params) + method_rolls(params);
    if params.method == ShinyMethod::Masuda
        && params.has_shiny_charm
        && params.generation >= Generation::Gen5
    {
        rolls = 8;
    }
    rolls += sparkling_rolls(params) + research_rolls(params);
    ShinyOdds::new(rolls, base_odds(params.generation))
}

fn fixed_odds(params: &ShinyOddsParameters) -> Option<u32> {
    let extra = &params.extra;
    match params.method {
        ShinyMethod::PokeRadarGen4 => Some(radar_one_in(extra.chain)),
        ShinyMethod::PokeRadarGen6 if extra.chain >= 40 => Some(200),
        ShinyMethod::PokeRadarGen6 => Some(radar_one_in(extra.chain)),
        ShinyMethod::DynamaxAdventure => Some(if params.has_shiny_charm { 100 } else { 300 }),
        ShinyMethod::TeraRaid => Some(4103),
        ShinyMethod::FossilRestore => Some(4096),
        ShinyMethod::OddEgg => Some(10),
        ShinyMethod::Breeding if params.generation == Generation::Gen2 && extra.shiny_parent => {
            Some(64)
        }
        _ => None,
    }
}

fn starting_rolls(method: ShinyMethod) -> u32 {
    match method {
        ShinyMethod::FriendSafari => 5,
        ShinyMethod::DiglettBonus => 2,
        _ => 1,
    }
}

fn charm_rolls(params: &ShinyOddsParameters) -> u32 {
    if !params.has_shiny_charm || params.generation < Generation::Gen5 {
        return 0;
    }
    if params.game_is(Game::is_bdsp) {
        return if params.method == ShinyMethod::Masuda { 2 } else { 0 };
    }
    if params.game_is(Game::is_legends_arceus) {
        return if params.extra.research_level >= 1 { 3 } else { 0 };
    }
    match params.method {
        ShinyMethod::HyperspaceStatic => 2 + 3,
        _ => 2,
    }
}

fn method_rolls(params: &ShinyOddsParameters) -> u32 {
    let extra = &params.extra;
    match params.method {
        ShinyMethod::Masuda => match params.generation {
            Generation::Gen4 => 4,
            g if g >= Generation::Gen5 => 5,
            _ => 0,
        },
        ShinyMethod::ChainFishing => 2 * u32::from(extra.chain.min(20)),
        ShinyMethod::Sos => match extra.chain {
            31.. => 12,
            21.. => 8,
            11.. => 4,
            _ => 0,
        },
        ShinyMethod::CatchCombo => {
            let lure = u32::from(extra.lure);
            let combo = match extra.combo {
                31.. => 11,
                21.. => 7,
                11.. => 3,
                _ => 0,
            };
            lure + combo
        }
        ShinyMethod::PlaOutbreak => match extra.outbreak {
            Outbreak::None => 0,
            Outbreak::Mass => 25,
            Outbreak::Massive => 12,
        },
        ShinyMethod::SvOutbreak => match extra.kills {
            60.. => 2,
            30.. => 1,
            _ => 0,
        },
        ShinyMethod::Hyperspace | ShinyMethod::HyperspaceStatic => {
            u32::from(extra.sparkling.min(3))
        }
        ShinyMethod::Random
        | ShinyMethod::Static
        | ShinyMethod::Breeding
        | ShinyMethod::OddEgg
        | ShinyMethod::PokeRadarGen4
        | ShinyMethod::FriendSafari
        | ShinyMethod::PokeRadarGen6
        | ShinyMethod::DynamaxAdventure
        | ShinyMethod::CurrySpawn
        | ShinyMethod::DiglettBonus
        | ShinyMethod::TeraRaid
        | ShinyMethod::FossilRestore => 0,
    }
}

/// Scarlet/Violet Sparkling Power. Tier 2 adds nothing.
fn sparkling_rolls(params: &ShinyOddsParameters) -> u32 {
    if params.generation != Generation::Gen9
        || !params.game_is(Game::is_scarlet_violet)
        || params.method.ignores_sparkling()
    {
        return 0;
    }
    match params.extra.sparkling {
        1 => 1,
        3 => 3,
        _ => 0,
    }
}

fn research_rolls(params: &ShinyOddsParameters) -> u32 {
    if !params.game_is(Game::is_legends_arceus) {
        return 0;
    }
    match params.extra.research_level {
        1 => 1,
        2.. => 3,
        _ => 0,
    }
}
