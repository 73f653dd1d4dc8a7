//! Shake simulation: the up-to-four wobble checks behind a thrown ball.
//!
//! Randomness is injected through [`RandomSource`] so runs are reproducible
//! under a fixed seed.

use crate::capture::{shake_checks, CaptureResult};
use crate::generation::Generation;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Checks a regular throw performs before the ball clicks.
pub const MAX_SHAKES: u8 = 4;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapter turning any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Seeded source for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().next_u64())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// One check: `floor(u * 65536) < threshold`.
fn check_passes<S: RandomSource + ?Sized>(threshold: u16, source: &mut S) -> bool {
    let draw = (source.next_unit() * 65536.0).floor();
    draw < f64::from(threshold)
}

/// Run up to `checks` checks against `threshold`, stopping at the first
/// failure. Returns how many passed.
pub fn simulate_checks<S: RandomSource + ?Sized>(threshold: u16, checks: u8, source: &mut S) -> u8 {
    let mut passed = 0;
    while passed < checks && check_passes(threshold, source) {
        passed += 1;
    }
    passed
}

/// Four checks against the shake threshold.
///
/// ```
/// use pokecalc::shake::simulate_shakes;
///
/// let mut zero = || 0.0;
/// assert_eq!(simulate_shakes(65535, &mut zero), 4);
/// assert_eq!(simulate_shakes(0, &mut zero), 0);
/// ```
pub fn simulate_shakes<S: RandomSource + ?Sized>(threshold: u16, source: &mut S) -> u8 {
    simulate_checks(threshold, MAX_SHAKES, source)
}

/// What a simulated throw did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowOutcome {
    pub shakes: u8,
    pub caught: bool,
    /// The throw was a critical capture (single check).
    pub critical: bool,
}

impl ThrowOutcome {
    pub fn describe(&self) -> String {
        let kind = if self.critical { "Critical capture! " } else { "" };
        match (self.caught, self.shakes) {
            (true, _) => format!("{kind}Gotcha! Caught after {} shake(s).", self.shakes),
            (false, 0) => format!("{kind}Oh no! It broke free immediately."),
            (false, n) => format!("{kind}Argh! Broke free after {n} shake(s)."),
        }
    }
}

/// Throw a ball given a computed `result`.
///
/// Guaranteed results catch without drawing. Otherwise a critical capture is
/// drawn first (when the result carries a chance); a critical throw makes one
/// check, a regular throw makes [`shake_checks`] of them.
pub fn simulate_throw<S: RandomSource + ?Sized>(
    generation: Generation,
    result: &CaptureResult,
    source: &mut S,
) -> ThrowOutcome {
    let checks = shake_checks(generation);
    if result.is_guaranteed() {
        return ThrowOutcome { shakes: checks, caught: true, critical: false };
    }
    let critical = match result.critical_capture_chance {
        Some(chance) if chance > 0.0 => source.next_unit() < chance,
        _ => false,
    };
    let needed = if critical { 1 } else { checks };
    let shakes = simulate_checks(result.shake_threshold, needed, source);
    ThrowOutcome { shakes, caught: shakes == needed, critical }
}

/// Probability of stopping at exactly `k` passed checks, for `k` in `0..=checks`.
pub fn shake_distribution(threshold: u16, checks: u8) -> Vec<f64> {
    let p = f64::from(threshold) / 65536.0;
    (0..=checks)
        .map(|k| {
            let reached = p.powi(i32::from(k));
            if k == checks {
                reached
            } else {
                reached * (1.0 - p)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{compute_capture, CaptureParameters};

    #[test]
    fn zero_threshold_never_shakes() {
        let mut src = RngSource::seeded(1);
        for _ in 0..100 {
            assert_eq!(simulate_shakes(0, &mut src), 0);
        }
    }

    #[test]
    fn max_threshold_with_zero_draws_passes_all() {
        let mut zero = || 0.0;
        assert_eq!(simulate_shakes(65535, &mut zero), 4);
    }

    #[test]
    fn stops_at_first_failure() {
        let draws = [0.1, 0.2, 0.9, 0.0];
        let mut i = 0;
        let mut scripted = || {
            let v = draws[i];
            i += 1;
            v
        };
        assert_eq!(simulate_shakes(32768, &mut scripted), 2);
        assert_eq!(i, 3);
    }

    #[test]
    fn seeded_runs_repeat() {
        let run = |seed| {
            let mut src = RngSource::seeded(seed);
            (0..50).map(|_| simulate_shakes(40000, &mut src)).collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn guaranteed_throw_draws_nothing() {
        let params = CaptureParameters::new(3, 10.0, 10.0).with_ball(255.0);
        let r = compute_capture(Generation::Gen8, &params);
        let mut calls = 0;
        let mut counting = || {
            calls += 1;
            0.99
        };
        let out = simulate_throw(Generation::Gen8, &r, &mut counting);
        assert!(out.caught);
        assert_eq!(calls, 0);
    }

    #[test]
    fn gen5_needs_three_checks() {
        let r = compute_capture(Generation::Gen5, &CaptureParameters::new(45, 100.0, 100.0));
        let mut zero = || 0.0;
        let out = simulate_throw(Generation::Gen5, &r, &mut zero);
        assert_eq!(out, ThrowOutcome { shakes: 3, caught: true, critical: false });
    }

    #[test]
    fn distribution_sums_to_one() {
        let d = shake_distribution(50000, 4);
        assert_eq!(d.len(), 5);
        assert!((d.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(shake_distribution(0, 4)[0], 1.0);
    }
}
