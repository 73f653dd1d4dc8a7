//! Gen VI/VII: Gen V rate steps with O-Power, four checks, 3/16 power law.

use super::{
    clamp_threshold, critical_chance, guaranteed_capture, CaptureParameters, CaptureResult,
};
use crate::numeric::rnd;

pub(crate) fn modified_rate(params: &CaptureParameters) -> f64 {
    super::gen5::modified_rate(params)
}

/// `floor(rnd(65536 / rnd(rnd(255 / a) ^ (3/16))))`, shared by Gen VI through IX.
pub(crate) fn shake_threshold(a: f64) -> u16 {
    let root = rnd(rnd(255.0 / a).powf(3.0 / 16.0));
    clamp_threshold(rnd(65536.0 / root).floor())
}

pub(crate) fn compute(params: &CaptureParameters) -> CaptureResult {
    let a = modified_rate(params);
    if let Some(done) = guaranteed_capture(params, a) {
        return done;
    }
    let critical = critical_chance(a, params.extras.dex_count, 1.0);
    CaptureResult::from_threshold(a, shake_threshold(a), 4, Some(critical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureExtras;

    #[test]
    fn power_law_threshold() {
        assert_eq!(shake_threshold(15.0), 38529);
        assert_eq!(shake_threshold(100.0), 54984);
        assert_eq!(shake_threshold(254.0), 65488);
    }

    #[test]
    fn o_power_multiplies_last() {
        let extras = CaptureExtras { power: 3, ..CaptureExtras::default() };
        let p = CaptureParameters::new(45, 100.0, 100.0).with_extras(extras);
        // 15 * 1.3 = 19.5
        assert_eq!(modified_rate(&p), 19.5);
        let boosted = compute(&p);
        let plain = compute(&CaptureParameters::new(45, 100.0, 100.0));
        assert!(boosted.capture_percentage > plain.capture_percentage);
    }

    #[test]
    fn no_dex_no_critical() {
        let r = compute(&CaptureParameters::new(45, 100.0, 100.0));
        assert_eq!(r.critical_capture_chance, Some(0.0));
    }
}
