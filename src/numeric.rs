//! Fixed-point rounding and tier tables shared by every capture formula.
//!
//! The games store multipliers as 4096ths, so each intermediate product is
//! snapped to that grid, either to the nearest step ([`rnd`]) or down
//! ([`rnd_down`]). Which one applies at each multiplication is part of every
//! generation's formula.

use crate::generation::Generation;

/// Fixed-point denominator used by the games for multipliers.
pub const FIXED_POINT: f64 = 4096.0;

/// Round `x` to the nearest 1/4096.
///
/// ```
/// use pokecalc::numeric::rnd;
///
/// assert_eq!(rnd(0.1), 410.0 / 4096.0);
/// assert_eq!(rnd(17.0), 17.0);
/// ```
pub fn rnd(x: f64) -> f64 {
    (x * FIXED_POINT).round() / FIXED_POINT
}

/// Round `x` down to the 1/4096 step at or below it.
pub fn rnd_down(x: f64) -> f64 {
    (x * FIXED_POINT).floor() / FIXED_POINT
}

/// Round to `decimals` places for display fields (percentages, chances).
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

/// Pokédex tier index on the 30/150/300/450/600 breakpoints.
fn dex_tier(count: u16) -> usize {
    match count {
        0..=30 => 0,
        31..=150 => 1,
        151..=300 => 2,
        301..=450 => 3,
        451..=600 => 4,
        _ => 5,
    }
}

const DEX_TIER_BONUS: [f64; 6] = [0.3, 0.5, 0.7, 0.8, 0.9, 1.0];
const DEX_TIER_MODIFIER: [f64; 6] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];

/// Dark-grass rate factor keyed on species registered in the Pokédex.
pub fn dex_tier_bonus(count: u16) -> f64 {
    DEX_TIER_BONUS[dex_tier(count)]
}

/// Critical-capture factor keyed on species registered in the Pokédex.
///
/// Shares breakpoints with [`dex_tier_bonus`] but not its values.
pub fn dex_tier_modifier(count: u16) -> f64 {
    DEX_TIER_MODIFIER[dex_tier(count)]
}

/// Entralink / O-Power / Capture Power multiplier for tiers 0..=3.
/// Tiers above 3 saturate.
pub fn power_tier_bonus(tier: u8) -> f64 {
    match tier {
        0 => 1.0,
        1 => 1.1,
        2 => 1.2,
        _ => 1.3,
    }
}

/// Low-level catch bonus introduced in Gen VIII and retuned in Gen IX.
pub fn low_level_bonus(generation: Generation, wild_level: u8) -> f64 {
    let level = f64::from(wild_level);
    match generation {
        Generation::Gen8 if wild_level < 20 => (30.0 - level) / 10.0,
        Generation::Gen9 if wild_level < 13 => (36.0 - 2.0 * level) / 10.0,
        _ => 1.0,
    }
}

/// Over-levelled penalty: 410/4096 when enabled and the wild Pokémon
/// outlevels the trainer's, otherwise 1.
pub fn difficulty_bonus(enabled: bool, trainer_level: u8, wild_level: u8) -> f64 {
    if enabled && wild_level > trainer_level {
        410.0 / FIXED_POINT
    } else {
        1.0
    }
}

/// Badges needed before a wild Pokémon of `wild_level` stops resisting capture.
pub fn required_badges(wild_level: u8) -> u8 {
    match wild_level {
        0..=25 => 0,
        26..=60 => (wild_level - 25).div_ceil(5),
        _ => 8,
    }
}

/// `0.8` per missing badge.
pub fn badge_penalty(wild_level: u8, badge_count: u8) -> f64 {
    let missing = required_badges(wild_level).saturating_sub(badge_count);
    0.8f64.powi(i32::from(missing))
}
