//! Gen III/IV: integer catch rate, four shake checks, no critical captures.

use super::{clamp_threshold, guaranteed_capture, CaptureParameters, CaptureResult};
use crate::numeric::rnd;

pub(crate) fn modified_rate(params: &CaptureParameters) -> f64 {
    let three_max = 3.0 * params.max_hp;
    let scaled = (three_max - 2.0 * params.current_hp)
        * params.clamped_rate()
        * params.ball_multiplier
        / three_max;
    (scaled.floor() * params.status.multiplier()).floor()
}

/// `floor(65536 / rnd(sqrt(rnd(sqrt(rnd(255 / a))))))`
pub(crate) fn shake_threshold(a: f64) -> u16 {
    let root = rnd(rnd(rnd(255.0 / a).sqrt()).sqrt());
    clamp_threshold((65536.0 / root).floor())
}

pub(crate) fn compute(params: &CaptureParameters) -> CaptureResult {
    let a = modified_rate(params);
    if let Some(done) = guaranteed_capture(params, a) {
        return done;
    }
    CaptureResult::from_threshold(a, shake_threshold(a), 4, None)
}
