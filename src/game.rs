use crate::generation::Generation;
use std::fmt;
use std::str::FromStr;

/// Main-series game versions, identified by their PokéAPI slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Game {
    Red,
    Blue,
    Yellow,
    Gold,
    Silver,
    Crystal,
    Ruby,
    Sapphire,
    Emerald,
    FireRed,
    LeafGreen,
    Diamond,
    Pearl,
    Platinum,
    HeartGold,
    SoulSilver,
    Black,
    White,
    Black2,
    White2,
    X,
    Y,
    OmegaRuby,
    AlphaSapphire,
    Sun,
    Moon,
    UltraSun,
    UltraMoon,
    LetsGoPikachu,
    LetsGoEevee,
    Sword,
    Shield,
    BrilliantDiamond,
    ShiningPearl,
    LegendsArceus,
    Scarlet,
    Violet,
    LegendsZa,
}

impl Game {
    pub const ALL: [Game; 38] = [
        Game::Red,
        Game::Blue,
        Game::Yellow,
        Game::Gold,
        Game::Silver,
        Game::Crystal,
        Game::Ruby,
        Game::Sapphire,
        Game::Emerald,
        Game::FireRed,
        Game::LeafGreen,
        Game::Diamond,
        Game::Pearl,
        Game::Platinum,
        Game::HeartGold,
        Game::SoulSilver,
        Game::Black,
        Game::White,
        Game::Black2,
        Game::White2,
        Game::X,
        Game::Y,
        Game::OmegaRuby,
        Game::AlphaSapphire,
        Game::Sun,
        Game::Moon,
        Game::UltraSun,
        Game::UltraMoon,
        Game::LetsGoPikachu,
        Game::LetsGoEevee,
        Game::Sword,
        Game::Shield,
        Game::BrilliantDiamond,
        Game::ShiningPearl,
        Game::LegendsArceus,
        Game::Scarlet,
        Game::Violet,
        Game::LegendsZa,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Game::Red => "red",
            Game::Blue => "blue",
            Game::Yellow => "yellow",
            Game::Gold => "gold",
            Game::Silver => "silver",
            Game::Crystal => "crystal",
            Game::Ruby => "ruby",
            Game::Sapphire => "sapphire",
            Game::Emerald => "emerald",
            Game::FireRed => "firered",
            Game::LeafGreen => "leafgreen",
            Game::Diamond => "diamond",
            Game::Pearl => "pearl",
            Game::Platinum => "platinum",
            Game::HeartGold => "heartgold",
            Game::SoulSilver => "soulsilver",
            Game::Black => "black",
            Game::White => "white",
            Game::Black2 => "black-2",
            Game::White2 => "white-2",
            Game::X => "x",
            Game::Y => "y",
            Game::OmegaRuby => "omega-ruby",
            Game::AlphaSapphire => "alpha-sapphire",
            Game::Sun => "sun",
            Game::Moon => "moon",
            Game::UltraSun => "ultra-sun",
            Game::UltraMoon => "ultra-moon",
            Game::LetsGoPikachu => "lets-go-pikachu",
            Game::LetsGoEevee => "lets-go-eevee",
            Game::Sword => "sword",
            Game::Shield => "shield",
            Game::BrilliantDiamond => "brilliant-diamond",
            Game::ShiningPearl => "shining-pearl",
            Game::LegendsArceus => "legends-arceus",
            Game::Scarlet => "scarlet",
            Game::Violet => "violet",
            Game::LegendsZa => "legends-za",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Game::Red => "Red",
            Game::Blue => "Blue",
            Game::Yellow => "Yellow",
            Game::Gold => "Gold",
            Game::Silver => "Silver",
            Game::Crystal => "Crystal",
            Game::Ruby => "Ruby",
            Game::Sapphire => "Sapphire",
            Game::Emerald => "Emerald",
            Game::FireRed => "FireRed",
            Game::LeafGreen => "LeafGreen",
            Game::Diamond => "Diamond",
            Game::Pearl => "Pearl",
            Game::Platinum => "Platinum",
            Game::HeartGold => "HeartGold",
            Game::SoulSilver => "SoulSilver",
            Game::Black => "Black",
            Game::White => "White",
            Game::Black2 => "Black 2",
            Game::White2 => "White 2",
            Game::X => "X",
            Game::Y => "Y",
            Game::OmegaRuby => "Omega Ruby",
            Game::AlphaSapphire => "Alpha Sapphire",
            Game::Sun => "Sun",
            Game::Moon => "Moon",
            Game::UltraSun => "Ultra Sun",
            Game::UltraMoon => "Ultra Moon",
            Game::LetsGoPikachu => "Let's Go Pikachu",
            Game::LetsGoEevee => "Let's Go Eevee",
            Game::Sword => "Sword",
            Game::Shield => "Shield",
            Game::BrilliantDiamond => "Brilliant Diamond",
            Game::ShiningPearl => "Shining Pearl",
            Game::LegendsArceus => "Legends: Arceus",
            Game::Scarlet => "Scarlet",
            Game::Violet => "Violet",
            Game::LegendsZa => "Legends: Z-A",
        }
    }

    pub const fn generation(self) -> Generation {
        match self {
            Game::Red | Game::Blue | Game::Yellow => Generation::Gen1,
            Game::Gold | Game::Silver | Game::Crystal => Generation::Gen2,
            Game::Ruby | Game::Sapphire | Game::Emerald | Game::FireRed | Game::LeafGreen => {
                Generation::Gen3
            }
            Game::Diamond
            | Game::Pearl
            | Game::Platinum
            | Game::HeartGold
            | Game::SoulSilver => Generation::Gen4,
            Game::Black | Game::White | Game::Black2 | Game::White2 => Generation::Gen5,
            Game::X | Game::Y | Game::OmegaRuby | Game::AlphaSapphire => Generation::Gen6,
            Game::Sun
            | Game::Moon
            | Game::UltraSun
            | Game::UltraMoon
            | Game::LetsGoPikachu
            | Game::LetsGoEevee => Generation::Gen7,
            Game::Sword
            | Game::Shield
            | Game::BrilliantDiamond
            | Game::ShiningPearl
            | Game::LegendsArceus => Generation::Gen8,
            Game::Scarlet | Game::Violet | Game::LegendsZa => Generation::Gen9,
        }
    }

    /// Whether the Shiny Charm can be obtained in this version.
    pub const fn has_shiny_charm(self) -> bool {
        match self {
            Game::Black2 | Game::White2 | Game::LetsGoPikachu | Game::LetsGoEevee => true,
            _ => self.generation().number() >= 6,
        }
    }

    pub const fn is_bdsp(self) -> bool {
        matches!(self, Game::BrilliantDiamond | Game::ShiningPearl)
    }

    pub const fn is_legends_arceus(self) -> bool {
        matches!(self, Game::LegendsArceus)
    }

    pub const fn is_scarlet_violet(self) -> bool {
        matches!(self, Game::Scarlet | Game::Violet)
    }

    pub const fn is_legends_za(self) -> bool {
        matches!(self, Game::LegendsZa)
    }

    pub const fn is_lets_go(self) -> bool {
        matches!(self, Game::LetsGoPikachu | Game::LetsGoEevee)
    }

    /// Versions of a given generation, in release order.
    pub fn in_generation(generation: Generation) -> impl Iterator<Item = Game> {
        Game::ALL.into_iter().filter(move |g| g.generation() == generation)
    }

    /// Next version in release order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&g| g == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous version in release order, wrapping around.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&g| g == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameParseError {
    #[error("unknown game version: '{0}'")]
    Unknown(String),
}

impl FromStr for Game {
    type Err = GameParseError;

    /// Parses the kebab-case slug; spaces and underscores are accepted as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c.to_ascii_lowercase() })
            .filter(|c| *c != '\'' && *c != ':')
            .collect();
        Game::ALL
            .iter()
            .copied()
            .find(|g| g.slug() == slug)
            .ok_or_else(|| GameParseError::Unknown(s.to_string()))
    }
}
