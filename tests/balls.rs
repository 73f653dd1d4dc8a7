use pokecalc::balls::{Ball, BallContext, BallEffect};
use pokecalc::capture::{compute_capture, CaptureParameters};
use pokecalc::generation::Generation;

fn chance(gen: Generation, ball: Ball, ctx: &BallContext, rate: u16) -> f64 {
    let params = ball.effect(gen, ctx).apply_to(CaptureParameters::new(rate, 100.0, 100.0));
    compute_capture(gen, &params).capture_percentage
}

#[test]
fn poke_great_ultra_ladder() {
    let ctx = BallContext::default();
    for gen in Generation::ALL {
        let poke = chance(gen, Ball::PokeBall, &ctx, 45);
        let great = chance(gen, Ball::GreatBall, &ctx, 45);
        let ultra = chance(gen, Ball::UltraBall, &ctx, 45);
        assert!(poke < great && great < ultra, "{gen}: {poke} {great} {ultra}");
    }
}

#[test]
fn every_available_ball_yields_a_valid_result() {
    let ctx = BallContext::default();
    for gen in Generation::ALL {
        for ball in Ball::available(gen) {
            let p = chance(gen, ball, &ctx, 3);
            assert!((0.0..=100.0).contains(&p), "{gen} {ball}: {p}");
        }
    }
}

#[test]
fn balls_arrive_with_their_generation() {
    assert!(!Ball::available(Generation::Gen3).contains(&Ball::QuickBall));
    assert!(Ball::available(Generation::Gen4).contains(&Ball::QuickBall));
    assert!(!Ball::available(Generation::Gen6).contains(&Ball::BeastBall));
    assert!(Ball::available(Generation::Gen7).contains(&Ball::BeastBall));
    assert!(Ball::available(Generation::Gen9).contains(&Ball::MasterBall));
}

#[test]
fn heavy_ball_on_a_light_target_keeps_a_positive_rate() {
    let ctx = BallContext { weight_kg: 5.0, ..BallContext::default() };
    let effect = Ball::HeavyBall.effect(Generation::Gen8, &ctx);
    assert_eq!(effect, BallEffect::RateBonus(-20));
    assert_eq!(Ball::HeavyBall.effective_rate(Generation::Gen8, &ctx, 3), 1);
    assert!(chance(Generation::Gen8, Ball::HeavyBall, &ctx, 3) > 0.0);
}

#[test]
fn timer_ball_caps_at_four() {
    let ctx = BallContext { turns_elapsed: 60, ..BallContext::default() };
    for gen in [Generation::Gen4, Generation::Gen9] {
        assert_eq!(Ball::TimerBall.effect(gen, &ctx), BallEffect::Multiplier(4.0));
    }
}

#[test]
fn park_ball_is_certain() {
    let ctx = BallContext::default();
    assert_eq!(chance(Generation::Gen4, Ball::ParkBall, &ctx, 3), 100.0);
}
