use pokecalc::capture::{compute_capture, CaptureParameters, StatusCondition};
use pokecalc::generation::Generation;
use proptest::prelude::*;

fn any_generation() -> impl Strategy<Value = Generation> {
    proptest::sample::select(Generation::ALL.to_vec())
}

fn any_status() -> impl Strategy<Value = StatusCondition> {
    proptest::sample::select(StatusCondition::ALL.to_vec())
}

proptest! {
    #[test]
    fn better_ball_never_hurts(
        gen in any_generation(),
        status in any_status(),
        rate in 1u16..=255,
        hp in 1u16..=300,
        ball in 1u16..=80,
        bump in 1u16..=40,
    ) {
        let max_hp = 300.0;
        let low = f64::from(ball) / 10.0;
        let high = low + f64::from(bump) / 10.0;
        let base = CaptureParameters::new(rate, f64::from(hp), max_hp).with_status(status);
        let a = compute_capture(gen, &base.with_ball(low));
        let b = compute_capture(gen, &base.with_ball(high));
        prop_assert!(b.capture_percentage >= a.capture_percentage);
        prop_assert!(b.shake_threshold >= a.shake_threshold);
    }

    #[test]
    fn lower_hp_never_hurts(
        gen in any_generation(),
        rate in 1u16..=255,
        hp in 2u16..=300,
        drop in 1u16..=299,
    ) {
        let lower = hp.saturating_sub(drop).max(1);
        let full = compute_capture(gen, &CaptureParameters::new(rate, f64::from(hp), 300.0));
        let hurt = compute_capture(gen, &CaptureParameters::new(rate, f64::from(lower), 300.0));
        prop_assert!(hurt.capture_percentage >= full.capture_percentage);
    }

    #[test]
    fn rate_at_cap_is_certain(gen in any_generation(), rate in 0u16..=255, ball in 1u16..=80) {
        let params = CaptureParameters::new(rate, 1.0, 100.0).with_ball(f64::from(ball) / 10.0);
        let r = compute_capture(gen, &params);
        if r.modified_rate >= 255.0 {
            prop_assert_eq!(r.capture_percentage, 100.0);
            prop_assert_eq!(r.shake_threshold, 65535);
        }
        prop_assert!((0.0..=100.0).contains(&r.capture_percentage));
    }
}
