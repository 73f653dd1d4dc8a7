//! Gen V: 4096ths fixed point, dark-grass and Entralink factors, three shake
//! checks and the first critical captures.

use super::{
    clamp_threshold, critical_chance, guaranteed_capture, CaptureParameters, CaptureResult,
};
use crate::numeric::{dex_tier_bonus, power_tier_bonus, rnd, rnd_down};

/// Grass factor shared with later generations.
pub(crate) fn grass_factor(params: &CaptureParameters) -> f64 {
    if params.extras.grass {
        dex_tier_bonus(params.extras.dex_count)
    } else {
        1.0
    }
}

/// HP, grass, ball, status and power steps, alternating round and floor.
pub(crate) fn modified_rate(params: &CaptureParameters) -> f64 {
    let mut x = rnd(params.hp_factor() * params.clamped_rate());
    x = rnd_down(x * grass_factor(params));
    x = rnd(x * params.ball_multiplier);
    x = rnd_down(x * params.status.multiplier());
    rnd(x * power_tier_bonus(params.extras.power))
}

/// `floor(rnd(65536 / rnd(sqrt(rnd(sqrt(rnd(255 / a)))))))`
pub(crate) fn shake_threshold(a: f64) -> u16 {
    let root = rnd(rnd(rnd(255.0 / a).sqrt()).sqrt());
    clamp_threshold(rnd(65536.0 / root).floor())
}

pub(crate) fn compute(params: &CaptureParameters) -> CaptureResult {
    let a = modified_rate(params);
    if let Some(done) = guaranteed_capture(params, a) {
        return done;
    }
    let critical = critical_chance(a, params.extras.dex_count, 1.0);
    CaptureResult::from_threshold(a, shake_threshold(a), 3, Some(critical))
}
