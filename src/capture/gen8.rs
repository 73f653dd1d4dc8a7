//! Gen VIII: adds the low-level bonus, the over-levelled penalty and the
//! Catching Charm's critical boost.

use super::{critical_chance, gen67, guaranteed_capture, CaptureParameters, CaptureResult};
use crate::generation::Generation;
use crate::numeric::{difficulty_bonus, low_level_bonus, rnd, rnd_down};

/// Critical factor from the Catching Charm.
pub(crate) fn charm_factor(params: &CaptureParameters) -> f64 {
    if params.extras.catch_charm {
        2.0
    } else {
        1.0
    }
}

/// Gen VI/VII steps followed by the level and difficulty steps of `generation`.
pub(crate) fn leveled_rate(params: &CaptureParameters, generation: Generation) -> f64 {
    let extras = &params.extras;
    let mut x = gen67::modified_rate(params);
    x = rnd_down(x * low_level_bonus(generation, extras.wild_level));
    rnd(x * difficulty_bonus(extras.difficulty, extras.trainer_level, extras.wild_level))
}

pub(crate) fn compute(params: &CaptureParameters) -> CaptureResult {
    let a = leveled_rate(params, Generation::Gen8);
    if let Some(done) = guaranteed_capture(params, a) {
        return done;
    }
    let critical = critical_chance(a, params.extras.dex_count, charm_factor(params));
    CaptureResult::from_threshold(a, gen67::shake_threshold(a), 4, Some(critical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureExtras;

    fn extras(wild_level: u8) -> CaptureExtras {
        CaptureExtras { wild_level, ..CaptureExtras::default() }
    }

    #[test]
    fn low_level_targets_are_easier() {
        let low = CaptureParameters::new(45, 100.0, 100.0).with_extras(extras(10));
        // 15 * (30 - 10) / 10 = 30
        assert_eq!(leveled_rate(&low, Generation::Gen8), 30.0);
        let high = CaptureParameters::new(45, 100.0, 100.0).with_extras(extras(40));
        assert_eq!(leveled_rate(&high, Generation::Gen8), 15.0);
    }

    #[test]
    fn outlevelled_target_is_penalised() {
        let e = CaptureExtras { difficulty: true, trainer_level: 30, ..extras(40) };
        let p = CaptureParameters::new(45, 100.0, 100.0).with_extras(e);
        // 15 * 410 / 4096 = 1.5014..., snapped to 4096ths
        assert_eq!(leveled_rate(&p, Generation::Gen8), rnd(15.0 * 410.0 / 4096.0));
    }

    #[test]
    fn catching_charm_doubles_critical() {
        let base = CaptureExtras { dex_count: 700, ..extras(40) };
        let plain = compute(&CaptureParameters::new(255, 100.0, 100.0).with_extras(base));
        let charm = CaptureExtras { catch_charm: true, ..base };
        let charmed = compute(&CaptureParameters::new(255, 100.0, 100.0).with_extras(charm));
        // 85 * 2.5 / 6 -> 35; 85 * 5 / 6 -> 70
        assert_eq!(plain.critical_capture_chance, Some(0.1367));
        assert_eq!(charmed.critical_capture_chance, Some(0.2734));
    }
}
