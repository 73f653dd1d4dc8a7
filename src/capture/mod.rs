//! Capture probability engine.
//!
//! One formula family per generation range, selected with an exhaustive
//! `match` on [`Generation`]:
//!
//! | Generations | Family | Shake checks |
//! |-------------|--------|--------------|
//! | I–IV        | `gen34` | 4 |
//! | V           | `gen5`  | 3 |
//! | VI–VII      | `gen67` | 4 |
//! | VIII        | `gen8`  | 4 |
//! | IX          | `gen9`  | 4 |
//!
//! Gen I and II have their own capture mechanics; they are evaluated with the
//! Gen III/IV family, which is the closest integer-arithmetic model.

pub(crate) mod gen34;
pub(crate) mod gen5;
pub(crate) mod gen67;
pub(crate) mod gen8;
pub(crate) mod gen9;

use crate::generation::Generation;
use crate::numeric::{dex_tier_modifier, rnd, round_to};
use std::fmt;
use std::str::FromStr;

/// Largest meaningful modified catch rate; at or above it capture is certain.
pub const MAX_CATCH_RATE: f64 = 255.0;
/// Shake threshold reported for guaranteed captures.
pub const MAX_SHAKE_THRESHOLD: u16 = 65535;
/// Ball multipliers at or above this value mark a guaranteed-capture device.
pub const GUARANTEED_BALL_MULTIPLIER: f64 = 255.0;

/// Non-volatile status of the wild Pokémon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusCondition {
    #[default]
    Healthy,
    Paralysis,
    Poison,
    Burn,
    Sleep,
    Freeze,
}

impl StatusCondition {
    pub const ALL: [StatusCondition; 6] = [
        StatusCondition::Healthy,
        StatusCondition::Paralysis,
        StatusCondition::Poison,
        StatusCondition::Burn,
        StatusCondition::Sleep,
        StatusCondition::Freeze,
    ];

    pub const fn multiplier(self) -> f64 {
        match self {
            StatusCondition::Healthy => 1.0,
            StatusCondition::Paralysis | StatusCondition::Poison | StatusCondition::Burn => 1.5,
            StatusCondition::Sleep | StatusCondition::Freeze => 2.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StatusCondition::Healthy => "None",
            StatusCondition::Paralysis => "Paralysis",
            StatusCondition::Poison => "Poison",
            StatusCondition::Burn => "Burn",
            StatusCondition::Sleep => "Sleep",
            StatusCondition::Freeze => "Freeze",
        }
    }
}

impl fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatusParseError {
    #[error("invalid status condition: '{0}'")]
    Invalid(String),
}

impl FromStr for StatusCondition {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "healthy" => StatusCondition::Healthy,
            "par" | "paralysis" | "paralyzed" => StatusCondition::Paralysis,
            "psn" | "poison" | "poisoned" | "tox" | "badly-poisoned" => StatusCondition::Poison,
            "brn" | "burn" | "burned" => StatusCondition::Burn,
            "slp" | "sleep" | "asleep" => StatusCondition::Sleep,
            "frz" | "freeze" | "frozen" => StatusCondition::Freeze,
            _ => return Err(StatusParseError::Invalid(s.to_string())),
        };
        Ok(status)
    }
}

/// Generation-specific inputs. Every formula reads only the fields it knows;
/// the rest are ignored, so one record can be evaluated under any generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureExtras {
    /// Encounter in dark grass (Gen V+ rate penalty keyed on `dex_count`).
    pub grass: bool,
    /// Species registered as caught in the Pokédex.
    pub dex_count: u16,
    /// Entralink (V), O-Power (VI–VIII) or Capture Power (IX) tier, 0..=3.
    pub power: u8,
    /// Apply the over-levelled penalty (VIII+).
    pub difficulty: bool,
    pub trainer_level: u8,
    pub wild_level: u8,
    /// Catching Charm doubles the critical-capture factor (VIII+).
    pub catch_charm: bool,
    /// Target has not noticed the trainer (IX).
    pub unaware: bool,
    /// Gym badges held (IX).
    pub badge_count: u8,
}

impl Default for CaptureExtras {
    fn default() -> Self {
        Self {
            grass: false,
            dex_count: 0,
            power: 0,
            difficulty: false,
            trainer_level: 100,
            wild_level: 50,
            catch_charm: false,
            unaware: false,
            badge_count: 8,
        }
    }
}

/// Everything a capture calculation needs, assembled by the caller.
///
/// `max_hp` must be positive; the engine does not validate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureParameters {
    pub base_rate: u16,
    pub current_hp: f64,
    pub max_hp: f64,
    pub ball_multiplier: f64,
    pub status: StatusCondition,
    pub extras: CaptureExtras,
}

impl CaptureParameters {
    /// Full-health target, Poké Ball, no status.
    pub fn new(base_rate: u16, current_hp: f64, max_hp: f64) -> Self {
        Self {
            base_rate,
            current_hp,
            max_hp,
            ball_multiplier: 1.0,
            status: StatusCondition::Healthy,
            extras: CaptureExtras::default(),
        }
    }

    pub fn with_ball(mut self, multiplier: f64) -> Self {
        self.ball_multiplier = multiplier;
        self
    }

    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = status;
        self
    }

    pub fn with_extras(mut self, extras: CaptureExtras) -> Self {
        self.extras = extras;
        self
    }

    pub(crate) fn clamped_rate(&self) -> f64 {
        f64::from(self.base_rate.min(MAX_CATCH_RATE as u16))
    }

    /// `(3M - 2H) / 3M`: 1/3 at full health, approaching 1 at 1 HP.
    pub(crate) fn hp_factor(&self) -> f64 {
        (3.0 * self.max_hp - 2.0 * self.current_hp) / (3.0 * self.max_hp)
    }

    pub(crate) fn is_guaranteed_ball(&self) -> bool {
        self.ball_multiplier >= GUARANTEED_BALL_MULTIPLIER
    }
}

/// Outcome of a capture calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct CaptureResult {
    /// Modified catch rate `a`.
    pub modified_rate: f64,
    /// Shake threshold `b`; a uniform draw in `[0, 65536)` below it passes a check.
    pub shake_threshold: u16,
    pub capture_probability: f64,
    /// `capture_probability` as a percentage, 2 decimals.
    pub capture_percentage: f64,
    /// Chance of a critical capture, 4 decimals (Gen V+ only).
    pub critical_capture_chance: Option<f64>,
}

impl CaptureResult {
    pub(crate) fn guaranteed(modified_rate: f64) -> Self {
        Self {
            modified_rate,
            shake_threshold: MAX_SHAKE_THRESHOLD,
            capture_probability: 1.0,
            capture_percentage: 100.0,
            critical_capture_chance: None,
        }
    }

    pub(crate) fn from_threshold(
        modified_rate: f64,
        shake_threshold: u16,
        shake_checks: i32,
        critical_capture_chance: Option<f64>,
    ) -> Self {
        let capture_probability = (f64::from(shake_threshold) / 65536.0).powi(shake_checks);
        Self {
            modified_rate,
            shake_threshold,
            capture_probability,
            capture_percentage: round_to(capture_probability * 100.0, 2),
            critical_capture_chance: critical_capture_chance.map(|c| round_to(c, 4)),
        }
    }

    /// Capture is certain (`a >= 255` or a guaranteed-capture ball).
    pub fn is_guaranteed(&self) -> bool {
        self.capture_percentage >= 100.0 && self.shake_threshold == MAX_SHAKE_THRESHOLD
    }
}

/// Shake checks a regular (non-critical) throw must pass in `generation`.
pub const fn shake_checks(generation: Generation) -> u8 {
    match generation {
        Generation::Gen5 => 3,
        _ => 4,
    }
}

/// Compute the capture result for `params` under `generation`'s formula.
///
/// ```
/// use pokecalc::capture::{compute_capture, CaptureParameters};
/// use pokecalc::generation::Generation;
///
/// // Base rate 45 at full health with a Poké Ball.
/// let result = compute_capture(Generation::Gen4, &CaptureParameters::new(45, 100.0, 100.0));
/// assert_eq!(result.modified_rate, 15.0);
/// assert_eq!(result.capture_percentage, 5.88);
///
/// // Master Ball.
/// let params = CaptureParameters::new(3, 100.0, 100.0).with_ball(255.0);
/// assert_eq!(compute_capture(Generation::Gen9, &params).capture_percentage, 100.0);
/// ```
pub fn compute_capture(generation: Generation, params: &CaptureParameters) -> CaptureResult {
    match generation {
        Generation::Gen1 | Generation::Gen2 | Generation::Gen3 | Generation::Gen4 => {
            gen34::compute(params)
        }
        Generation::Gen5 => gen5::compute(params),
        Generation::Gen6 | Generation::Gen7 => gen67::compute(params),
        Generation::Gen8 => gen8::compute(params),
        Generation::Gen9 => gen9::compute(params),
    }
}

/// Short-circuit shared by every family.
pub(crate) fn guaranteed_capture(params: &CaptureParameters, a: f64) -> Option<CaptureResult> {
    (a >= MAX_CATCH_RATE || params.is_guaranteed_ball()).then(|| CaptureResult::guaranteed(a))
}

/// Clamp a raw threshold into the `u16` range.
pub(crate) fn clamp_threshold(b: f64) -> u16 {
    if b.is_nan() || b <= 0.0 {
        0
    } else {
        b.min(f64::from(MAX_SHAKE_THRESHOLD)) as u16
    }
}

/// `min(1, floor(rnd(rnd(a * dexmod * charm) / 6)) / 256)`.
pub(crate) fn critical_chance(a: f64, dex_count: u16, charm: f64) -> f64 {
    let scaled = rnd(a * dex_tier_modifier(dex_count) * charm);
    let value = rnd(scaled / 6.0).floor();
    (value / 256.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_multipliers() {
        assert_eq!(StatusCondition::Healthy.multiplier(), 1.0);
        assert_eq!(StatusCondition::Burn.multiplier(), 1.5);
        assert_eq!(StatusCondition::Freeze.multiplier(), 2.0);
        assert_eq!("slp".parse::<StatusCondition>().unwrap(), StatusCondition::Sleep);
        assert!("confused".parse::<StatusCondition>().is_err());
    }

    #[test]
    fn hp_factor_spans_one_third_to_one() {
        let full = CaptureParameters::new(45, 90.0, 90.0);
        assert!((full.hp_factor() - 1.0 / 3.0).abs() < 1e-12);
        let one = CaptureParameters::new(45, 1.0, 90.0);
        assert!(one.hp_factor() > 0.99);
    }

    #[test]
    fn base_rate_clamps_to_255() {
        let p = CaptureParameters::new(360, 10.0, 10.0);
        assert_eq!(p.clamped_rate(), 255.0);
    }

    #[test]
    fn critical_chance_needs_registered_species() {
        assert_eq!(critical_chance(200.0, 10, 1.0), 0.0);
        // 200 * 2.5 = 500; 500 / 6 = 83.33 -> 83
        assert_eq!(critical_chance(200.0, 700, 1.0), 83.0 / 256.0);
        // charm doubles: 1000 / 6 = 166.67 -> 166
        assert_eq!(critical_chance(200.0, 700, 2.0), 166.0 / 256.0);
    }

    #[test]
    fn clamp_threshold_bounds() {
        assert_eq!(clamp_threshold(f64::NAN), 0);
        assert_eq!(clamp_threshold(-3.0), 0);
        assert_eq!(clamp_threshold(65536.0), 65535);
        assert_eq!(clamp_threshold(32275.9), 32275);
    }
}
