//! Gen IX: Capture Power, the unaware bonus and the badge penalty.

use super::{critical_chance, gen67, gen8, guaranteed_capture, CaptureParameters, CaptureResult};
use crate::generation::Generation;
use crate::numeric::{badge_penalty, rnd, rnd_down};

/// Multiplier for a target that has not noticed the trainer.
pub const UNAWARE_BONUS: f64 = 2.0;

pub(crate) fn modified_rate(params: &CaptureParameters) -> f64 {
    let extras = &params.extras;
    let mut x = gen8::leveled_rate(params, Generation::Gen9);
    if extras.unaware {
        x = rnd(x * UNAWARE_BONUS);
    }
    rnd_down(x * badge_penalty(extras.wild_level, extras.badge_count))
}

pub(crate) fn compute(params: &CaptureParameters) -> CaptureResult {
    let a = modified_rate(params);
    if let Some(done) = guaranteed_capture(params, a) {
        return done;
    }
    let critical = critical_chance(a, params.extras.dex_count, gen8::charm_factor(params));
    CaptureResult::from_threshold(a, gen67::shake_threshold(a), 4, Some(critical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{clamp_threshold, CaptureExtras};

    #[test]
    fn missing_badges_cut_the_rate() {
        let e = CaptureExtras { wild_level: 40, badge_count: 0, ..CaptureExtras::default() };
        let p = CaptureParameters::new(45, 100.0, 100.0).with_extras(e);
        // 3 badges missing: 15 * 0.512 = 7.68
        assert_eq!(modified_rate(&p), rnd_down(15.0 * 0.512));
        let full = CaptureExtras { badge_count: 8, ..e };
        assert_eq!(modified_rate(&p.with_extras(full)), 15.0);
    }

    #[test]
    fn unaware_doubles() {
        let e = CaptureExtras { unaware: true, ..CaptureExtras::default() };
        let p = CaptureParameters::new(45, 100.0, 100.0).with_extras(e);
        assert_eq!(modified_rate(&p), 30.0);
    }

    #[test]
    fn gen9_low_level_table() {
        let e = CaptureExtras { wild_level: 5, ..CaptureExtras::default() };
        let p = CaptureParameters::new(45, 100.0, 100.0).with_extras(e);
        // 15 * 2.6 = 39
        assert_eq!(modified_rate(&p), 39.0);
    }

    #[test]
    fn thresholds_stay_in_range() {
        let r = compute(&CaptureParameters::new(254, 1.0, 500.0));
        assert!(r.shake_threshold <= 65535);
        assert!(r.capture_percentage <= 100.0);
        assert_eq!(clamp_threshold(70000.0), 65535);
    }
}
