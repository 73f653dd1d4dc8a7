use crate::game::Game;
use crate::shiny::{
    available_methods, compute_shiny_odds, MethodInfo, MethodInput, ShinyExtras, ShinyOdds,
    ShinyOddsParameters,
};

/// Inputs of the shiny calculator. One set of extras is shared by every
/// method row; each method reads only its own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShinyForm {
    pub game: Game,
    pub charm: bool,
    pub extra: ShinyExtras,
}

impl Default for ShinyForm {
    fn default() -> Self {
        Self { game: Game::Scarlet, charm: false, extra: ShinyExtras::default() }
    }
}

impl ShinyForm {
    pub fn methods(&self) -> Vec<&'static MethodInfo> {
        available_methods(self.game).collect()
    }

    pub fn parameters(&self, info: &MethodInfo) -> ShinyOddsParameters {
        let extra = ShinyExtras { game: Some(self.game), ..self.extra };
        ShinyOddsParameters::for_game(self.game, info.method)
            .with_charm(self.charm && self.game.has_shiny_charm())
            .with_extra(extra)
    }

    pub fn rows(&self) -> Vec<(&'static MethodInfo, ShinyOdds)> {
        self.methods()
            .into_iter()
            .map(|info| (info, compute_shiny_odds(&self.parameters(info))))
            .collect()
    }

    pub fn sparkling_applies(&self) -> bool {
        self.game.is_scarlet_violet() || self.game.is_legends_za()
    }

    pub fn research_applies(&self) -> bool {
        self.game.is_legends_arceus()
    }

    /// Switch game, resetting the global modifiers it does not have.
    pub fn set_game(&mut self, game: Game) {
        self.game = game;
        if !game.has_shiny_charm() {
            self.charm = false;
        }
        if !self.sparkling_applies() {
            self.extra.sparkling = 0;
        }
        if self.game.is_scarlet_violet() && self.extra.sparkling == 2 {
            self.extra.sparkling = 1;
        }
        if !self.research_applies() {
            self.extra.research_level = 0;
        }
    }

    /// Returns false when the game has no Shiny Charm.
    pub fn toggle_charm(&mut self) -> bool {
        if !self.game.has_shiny_charm() {
            return false;
        }
        self.charm = !self.charm;
        true
    }

    /// Scarlet/Violet offers levels 1 and 3; Legends: Z-A 1 through 3.
    pub fn cycle_sparkling(&mut self) {
        self.extra.sparkling = if self.game.is_scarlet_violet() {
            match self.extra.sparkling {
                0 => 1,
                1 => 3,
                _ => 0,
            }
        } else if self.game.is_legends_za() {
            (self.extra.sparkling + 1) % 4
        } else {
            0
        };
    }

    pub fn cycle_research(&mut self) {
        self.extra.research_level =
            if self.research_applies() { (self.extra.research_level + 1) % 3 } else { 0 };
    }

    /// Move the numeric input of `info` by `delta`, clamped to its range.
    /// Returns false when the method has no numeric input.
    pub fn adjust_input(&mut self, info: &MethodInfo, delta: i32) -> bool {
        let step = |v: u16, max: u16| (i32::from(v) + delta).clamp(0, i32::from(max)) as u16;
        for input in info.inputs {
            match *input {
                MethodInput::Chain { max } => {
                    self.extra.chain = step(self.extra.chain.min(max), max);
                    return true;
                }
                MethodInput::Combo { max } => {
                    self.extra.combo = step(self.extra.combo, max);
                    return true;
                }
                MethodInput::Kills { max } => {
                    self.extra.kills = step(self.extra.kills, max);
                    return true;
                }
                MethodInput::Lure
                | MethodInput::ShinyParent
                | MethodInput::Outbreak
                | MethodInput::Sparkling => {}
            }
        }
        false
    }

    /// Current value of one method input, for display.
    pub fn input_value(&self, input: MethodInput) -> String {
        match input {
            MethodInput::Chain { max } => self.extra.chain.min(max).to_string(),
            MethodInput::Combo { .. } => self.extra.combo.to_string(),
            MethodInput::Kills { .. } => self.extra.kills.to_string(),
            MethodInput::Lure => yes_no(self.extra.lure),
            MethodInput::ShinyParent => yes_no(self.extra.shiny_parent),
            MethodInput::Outbreak => self.extra.outbreak.label().to_string(),
            MethodInput::Sparkling => match self.extra.sparkling {
                0 => "None".to_string(),
                n => format!("Level {n}"),
            },
        }
    }
}

fn yes_no(v: bool) -> String {
    let label = if v { "Yes" } else { "No" };
    label.to_string()
}
