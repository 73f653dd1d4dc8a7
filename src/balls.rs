//! Poké Ball catalogue and the conditional bonuses of each ball.
//!
//! Most balls multiply the catch rate formula directly
//! ([`BallEffect::Multiplier`]). The Apricorn balls of Gen II instead rewrite
//! the species' base rate before it is clamped, either multiplicatively
//! ([`BallEffect::RateMultiplier`]) or, for the Heavy Ball, additively
//! ([`BallEffect::RateBonus`]). The additive form can push the rate below
//! zero; [`BallEffect::apply`] floors it at 1.

use crate::capture::{CaptureParameters, GUARANTEED_BALL_MULTIPLIER};
use crate::encounters::title_case;
use crate::generation::Generation;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Ball {
    PokeBall,
    GreatBall,
    UltraBall,
    MasterBall,
    SafariBall,
    LevelBall,
    LureBall,
    MoonBall,
    FriendBall,
    LoveBall,
    HeavyBall,
    FastBall,
    SportBall,
    NetBall,
    DiveBall,
    NestBall,
    RepeatBall,
    TimerBall,
    LuxuryBall,
    PremierBall,
    DuskBall,
    HealBall,
    QuickBall,
    CherishBall,
    ParkBall,
    DreamBall,
    BeastBall,
    StrangeBall,
}

/// Battle context some balls look at. Callers fill what they know; defaults
/// describe a first-turn daytime grass encounter between level-50 Pokémon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallContext {
    /// Turns already completed in this battle (0 on the first throw).
    pub turns_elapsed: u16,
    pub wild_level: u8,
    /// Level of the player's active Pokémon.
    pub user_level: u8,
    pub fishing: bool,
    /// Surfing or diving.
    pub underwater: bool,
    /// Night-time or inside a cave.
    pub dark_or_cave: bool,
    pub same_species_opposite_gender: bool,
    pub evolves_with_moon_stone: bool,
    pub weight_kg: f64,
    pub base_speed: u8,
    pub already_caught: bool,
    pub water_or_bug: bool,
    pub ultra_beast: bool,
    pub target_asleep: bool,
}

impl Default for BallContext {
    fn default() -> Self {
        Self {
            turns_elapsed: 0,
            wild_level: 50,
            user_level: 50,
            fishing: false,
            underwater: false,
            dark_or_cave: false,
            same_species_opposite_gender: false,
            evolves_with_moon_stone: false,
            weight_kg: 50.0,
            base_speed: 50,
            already_caught: false,
            water_or_bug: false,
            ultra_beast: false,
            target_asleep: false,
        }
    }
}

/// How a ball changes the capture inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallEffect {
    /// Ball multiplier fed to the catch formula.
    Multiplier(f64),
    /// Scales the species' base rate; the formula sees a 1x ball.
    RateMultiplier(f64),
    /// Adds to the species' base rate; the formula sees a 1x ball.
    RateBonus(i16),
    /// Capture cannot fail.
    Guaranteed,
}

impl BallEffect {
    /// Base rate after the effect, before the engine's clamp. May be negative.
    pub fn raw_rate(self, base_rate: u16) -> i32 {
        let rate = i32::from(base_rate);
        match self {
            BallEffect::RateMultiplier(m) => (f64::from(rate) * m).floor() as i32,
            BallEffect::RateBonus(bonus) => rate + i32::from(bonus),
            BallEffect::Multiplier(_) | BallEffect::Guaranteed => rate,
        }
    }

    /// `(base_rate, ball_multiplier)` ready for [`CaptureParameters`]; the
    /// rate is floored at 1.
    pub fn apply(self, base_rate: u16) -> (u16, f64) {
        let rate = self.raw_rate(base_rate).clamp(1, i32::from(u16::MAX)) as u16;
        let multiplier = match self {
            BallEffect::Multiplier(m) => m,
            BallEffect::Guaranteed => GUARANTEED_BALL_MULTIPLIER,
            BallEffect::RateMultiplier(_) | BallEffect::RateBonus(_) => 1.0,
        };
        (rate, multiplier)
    }

    /// Copy of `params` with this effect folded into rate and ball multiplier.
    pub fn apply_to(self, params: CaptureParameters) -> CaptureParameters {
        let (base_rate, ball_multiplier) = self.apply(params.base_rate);
        CaptureParameters { base_rate, ball_multiplier, ..params }
    }
}

impl Ball {
    pub const ALL: [Ball; 28] = [
        Ball::PokeBall,
        Ball::GreatBall,
        Ball::UltraBall,
        Ball::MasterBall,
        Ball::SafariBall,
        Ball::LevelBall,
        Ball::LureBall,
        Ball::MoonBall,
        Ball::FriendBall,
        Ball::LoveBall,
        Ball::HeavyBall,
        Ball::FastBall,
        Ball::SportBall,
        Ball::NetBall,
        Ball::DiveBall,
        Ball::NestBall,
        Ball::RepeatBall,
        Ball::TimerBall,
        Ball::LuxuryBall,
        Ball::PremierBall,
        Ball::DuskBall,
        Ball::HealBall,
        Ball::QuickBall,
        Ball::CherishBall,
        Ball::ParkBall,
        Ball::DreamBall,
        Ball::BeastBall,
        Ball::StrangeBall,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Ball::PokeBall => "poke-ball",
            Ball::GreatBall => "great-ball",
            Ball::UltraBall => "ultra-ball",
            Ball::MasterBall => "master-ball",
            Ball::SafariBall => "safari-ball",
            Ball::LevelBall => "level-ball",
            Ball::LureBall => "lure-ball",
            Ball::MoonBall => "moon-ball",
            Ball::FriendBall => "friend-ball",
            Ball::LoveBall => "love-ball",
            Ball::HeavyBall => "heavy-ball",
            Ball::FastBall => "fast-ball",
            Ball::SportBall => "sport-ball",
            Ball::NetBall => "net-ball",
            Ball::DiveBall => "dive-ball",
            Ball::NestBall => "nest-ball",
            Ball::RepeatBall => "repeat-ball",
            Ball::TimerBall => "timer-ball",
            Ball::LuxuryBall => "luxury-ball",
            Ball::PremierBall => "premier-ball",
            Ball::DuskBall => "dusk-ball",
            Ball::HealBall => "heal-ball",
            Ball::QuickBall => "quick-ball",
            Ball::CherishBall => "cherish-ball",
            Ball::ParkBall => "park-ball",
            Ball::DreamBall => "dream-ball",
            Ball::BeastBall => "beast-ball",
            Ball::StrangeBall => "strange-ball",
        }
    }

    pub fn display_name(self) -> String {
        title_case(self.slug()).replace("Poke", "Poké")
    }

    /// Generation the ball first appeared in.
    pub const fn introduced_in(self) -> Generation {
        match self {
            Ball::PokeBall
            | Ball::GreatBall
            | Ball::UltraBall
            | Ball::MasterBall
            | Ball::SafariBall => Generation::Gen1,
            Ball::LevelBall
            | Ball::LureBall
            | Ball::MoonBall
            | Ball::FriendBall
            | Ball::LoveBall
            | Ball::HeavyBall
            | Ball::FastBall
            | Ball::SportBall => Generation::Gen2,
            Ball::NetBall
            | Ball::DiveBall
            | Ball::NestBall
            | Ball::RepeatBall
            | Ball::TimerBall
            | Ball::LuxuryBall
            | Ball::PremierBall => Generation::Gen3,
            Ball::DuskBall
            | Ball::HealBall
            | Ball::QuickBall
            | Ball::CherishBall
            | Ball::ParkBall => Generation::Gen4,
            Ball::DreamBall => Generation::Gen5,
            Ball::BeastBall => Generation::Gen7,
            Ball::StrangeBall => Generation::Gen8,
        }
    }

    /// Whether the ball can be thrown in `generation`. Gen V dropped the
    /// Apricorn, Safari, Sport, Park and Dream balls from regular play.
    pub fn available_in(self, generation: Generation) -> bool {
        if self.introduced_in() > generation {
            return false;
        }
        if generation == Generation::Gen5 {
            return !matches!(
                self,
                Ball::LevelBall
                    | Ball::LureBall
                    | Ball::MoonBall
                    | Ball::FriendBall
                    | Ball::LoveBall
                    | Ball::HeavyBall
                    | Ball::FastBall
                    | Ball::SportBall
                    | Ball::SafariBall
                    | Ball::ParkBall
                    | Ball::DreamBall
            );
        }
        true
    }

    /// Balls available in `generation`, sorted by display name.
    pub fn available(generation: Generation) -> Vec<Ball> {
        let mut balls: Vec<Ball> =
            Ball::ALL.iter().copied().filter(|b| b.available_in(generation)).collect();
        balls.sort_by_key(|b| b.display_name());
        balls
    }

    /// The ball's effect in `generation` given the battle context.
    pub fn effect(self, generation: Generation, ctx: &BallContext) -> BallEffect {
        let modern = generation >= Generation::Gen7;
        let flat = |cond: bool, m: f64| BallEffect::Multiplier(if cond { m } else { 1.0 });
        let rate = |cond: bool, m: f64| BallEffect::RateMultiplier(if cond { m } else { 1.0 });
        match self {
            Ball::MasterBall | Ball::ParkBall => BallEffect::Guaranteed,
            Ball::PokeBall
            | Ball::FriendBall
            | Ball::LuxuryBall
            | Ball::PremierBall
            | Ball::HealBall
            | Ball::CherishBall
            | Ball::StrangeBall => BallEffect::Multiplier(1.0),
            Ball::GreatBall | Ball::SafariBall | Ball::SportBall => BallEffect::Multiplier(1.5),
            Ball::UltraBall => BallEffect::Multiplier(2.0),
            Ball::LevelBall => {
                let user = u16::from(ctx.user_level);
                let wild = u16::from(ctx.wild_level);
                let m = if user > 4 * wild {
                    8.0
                } else if user > 2 * wild {
                    4.0
                } else if user > wild {
                    2.0
                } else {
                    1.0
                };
                BallEffect::RateMultiplier(m)
            }
            Ball::LureBall => rate(ctx.fishing, if modern { 5.0 } else { 3.0 }),
            Ball::MoonBall => rate(ctx.evolves_with_moon_stone, 4.0),
            Ball::LoveBall => rate(ctx.same_species_opposite_gender, 8.0),
            Ball::FastBall => rate(ctx.base_speed >= 100, 4.0),
            Ball::HeavyBall => BallEffect::RateBonus(heavy_ball_bonus(generation, ctx.weight_kg)),
            Ball::NetBall => flat(ctx.water_or_bug, if modern { 3.5 } else { 3.0 }),
            Ball::DiveBall => {
                let wet = ctx.underwater || (generation >= Generation::Gen5 && ctx.fishing);
                flat(wet, 3.5)
            }
            Ball::NestBall => {
                let cap = if generation <= Generation::Gen4 { 40.0 } else { 41.0 };
                BallEffect::Multiplier(((cap - f64::from(ctx.wild_level)) / 10.0).max(1.0))
            }
            Ball::RepeatBall => flat(ctx.already_caught, if modern { 3.5 } else { 3.0 }),
            Ball::TimerBall => {
                let t = f64::from(ctx.turns_elapsed);
                let m = if generation <= Generation::Gen4 {
                    (t + 10.0) / 10.0
                } else {
                    1.0 + t * 1229.0 / 4096.0
                };
                BallEffect::Multiplier(m.min(4.0))
            }
            Ball::QuickBall => {
                let first = if generation <= Generation::Gen4 { 4.0 } else { 5.0 };
                flat(ctx.turns_elapsed == 0, first)
            }
            Ball::DuskBall => {
                flat(ctx.dark_or_cave, if generation >= Generation::Gen8 { 3.0 } else { 3.5 })
            }
            Ball::DreamBall => match generation {
                Generation::Gen5 => BallEffect::Guaranteed,
                g if g >= Generation::Gen8 => flat(ctx.target_asleep, 4.0),
                _ => BallEffect::Multiplier(1.0),
            },
            Ball::BeastBall => {
                BallEffect::Multiplier(if ctx.ultra_beast { 5.0 } else { 410.0 / 4096.0 })
            }
        }
    }

    /// Base rate after this ball's rate adjustment, floored at 1.
    pub fn effective_rate(self, generation: Generation, ctx: &BallContext, base_rate: u16) -> u16 {
        self.effect(generation, ctx).apply(base_rate).0
    }
}

/// Heavy Ball rate bonus by weight. Gen VII moved to round 100 kg tiers and
/// dropped the top +40 tier.
pub fn heavy_ball_bonus(generation: Generation, weight_kg: f64) -> i16 {
    if generation >= Generation::Gen7 {
        match weight_kg {
            w if w < 100.0 => -20,
            w if w < 200.0 => 0,
            w if w < 300.0 => 20,
            _ => 30,
        }
    } else {
        match weight_kg {
            w if w < 102.4 => -20,
            w if w < 204.8 => 0,
            w if w < 307.2 => 20,
            w if w < 409.6 => 30,
            _ => 40,
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BallParseError {
    #[error("unknown ball: '{0}'")]
    Unknown(String),
}

impl FromStr for Ball {
    type Err = BallParseError;

    /// Accepts the slug (`"great-ball"`) or the display name (`"Great Ball"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug: String = s
            .trim()
            .to_lowercase()
            .replace('é', "e")
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        Ball::ALL
            .iter()
            .copied()
            .find(|b| b.slug() == slug)
            .ok_or_else(|| BallParseError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_parsing() {
        assert_eq!(Ball::PokeBall.display_name(), "Poké Ball");
        assert_eq!(Ball::UltraBall.to_string(), "Ultra Ball");
        assert_eq!("Poké Ball".parse::<Ball>().unwrap(), Ball::PokeBall);
        assert_eq!("dusk-ball".parse::<Ball>().unwrap(), Ball::DuskBall);
        assert!(matches!("gs-ball".parse::<Ball>(), Err(BallParseError::Unknown(_))));
    }

    #[test]
    fn gen5_drops_apricorns() {
        assert!(Ball::HeavyBall.available_in(Generation::Gen4));
        assert!(!Ball::HeavyBall.available_in(Generation::Gen5));
        assert!(Ball::HeavyBall.available_in(Generation::Gen6));
        assert!(!Ball::DreamBall.available_in(Generation::Gen5));
        assert!(!Ball::BeastBall.available_in(Generation::Gen6));
        assert!(Ball::NetBall.available_in(Generation::Gen5));
    }

    #[test]
    fn available_list_is_sorted_by_name() {
        let balls = Ball::available(Generation::Gen1);
        let names: Vec<String> = balls.iter().map(|b| b.display_name()).collect();
        assert_eq!(
            names,
            vec!["Great Ball", "Master Ball", "Poké Ball", "Safari Ball", "Ultra Ball"]
        );
    }

    #[test]
    fn heavy_ball_can_go_negative_but_apply_floors_at_one() {
        let ctx = BallContext { weight_kg: 6.0, ..BallContext::default() };
        let effect = Ball::HeavyBall.effect(Generation::Gen7, &ctx);
        assert_eq!(effect, BallEffect::RateBonus(-20));
        assert_eq!(effect.raw_rate(3), -17);
        assert_eq!(effect.apply(3), (1, 1.0));
        assert_eq!(effect.apply(45), (25, 1.0));
    }

    #[test]
    fn heavy_ball_tiers_by_generation() {
        assert_eq!(heavy_ball_bonus(Generation::Gen4, 460.0), 40);
        assert_eq!(heavy_ball_bonus(Generation::Gen7, 460.0), 30);
        assert_eq!(heavy_ball_bonus(Generation::Gen7, 150.0), 0);
        assert_eq!(heavy_ball_bonus(Generation::Gen2, 250.0), 20);
    }

    #[test]
    fn apricorns_scale_the_base_rate() {
        let ctx = BallContext { user_level: 60, wild_level: 10, ..BallContext::default() };
        let level = Ball::LevelBall.effect(Generation::Gen4, &ctx);
        assert_eq!(level, BallEffect::RateMultiplier(8.0));
        assert_eq!(level.apply(45), (360, 1.0));

        let fast = BallContext { base_speed: 110, ..BallContext::default() };
        assert_eq!(Ball::FastBall.effect(Generation::Gen7, &fast).apply(45), (180, 1.0));

        let lure = BallContext { fishing: true, ..BallContext::default() };
        assert_eq!(Ball::LureBall.effect(Generation::Gen4, &lure), BallEffect::RateMultiplier(3.0));
        assert_eq!(Ball::LureBall.effect(Generation::Gen8, &lure), BallEffect::RateMultiplier(5.0));
    }

    #[test]
    fn conditional_multipliers() {
        let ctx = BallContext::default();
        assert_eq!(Ball::QuickBall.effect(Generation::Gen4, &ctx), BallEffect::Multiplier(4.0));
        assert_eq!(Ball::QuickBall.effect(Generation::Gen6, &ctx), BallEffect::Multiplier(5.0));
        let later = BallContext { turns_elapsed: 3, ..ctx };
        assert_eq!(Ball::QuickBall.effect(Generation::Gen6, &later), BallEffect::Multiplier(1.0));

        let long = BallContext { turns_elapsed: 40, ..ctx };
        assert_eq!(Ball::TimerBall.effect(Generation::Gen4, &long), BallEffect::Multiplier(4.0));
        assert_eq!(Ball::TimerBall.effect(Generation::Gen4, &ctx), BallEffect::Multiplier(1.0));

        let low = BallContext { wild_level: 5, ..ctx };
        assert_eq!(Ball::NestBall.effect(Generation::Gen4, &low), BallEffect::Multiplier(3.5));
        assert_eq!(Ball::NestBall.effect(Generation::Gen5, &low), BallEffect::Multiplier(3.6));
        assert_eq!(Ball::NestBall.effect(Generation::Gen5, &ctx), BallEffect::Multiplier(1.0));

        assert_eq!(Ball::MasterBall.effect(Generation::Gen1, &ctx), BallEffect::Guaranteed);
        assert_eq!(Ball::MasterBall.effect(Generation::Gen1, &ctx).apply(3), (3, 255.0));
    }
}
