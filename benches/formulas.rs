use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pokecalc::capture::{compute_capture, CaptureParameters, StatusCondition};
use pokecalc::game::Game;
use pokecalc::generation::Generation;
use pokecalc::shake::{simulate_throw, RngSource};
use pokecalc::shiny::{available_methods, compute_shiny_odds};
use pokecalc::tui::app::ShinyForm;

fn bench_compute_capture(c: &mut Criterion) {
    let params =
        CaptureParameters::new(45, 37.0, 120.0).with_ball(1.5).with_status(StatusCondition::Sleep);
    let mut g = c.benchmark_group("compute_capture");
    for gen in [Generation::Gen4, Generation::Gen5, Generation::Gen7, Generation::Gen9] {
        g.bench_with_input(BenchmarkId::from_parameter(gen), &params, |b, input| {
            b.iter(|| compute_capture(black_box(gen), black_box(input)))
        });
    }
    g.finish();
}

fn bench_simulate_throw(c: &mut Criterion) {
    let result = compute_capture(Generation::Gen8, &CaptureParameters::new(45, 20.0, 100.0));
    let mut rng = RngSource::seeded(1);
    c.bench_function("simulate_throw", |b| {
        b.iter(|| simulate_throw(Generation::Gen8, black_box(&result), &mut rng))
    });
}

fn bench_shiny_table(c: &mut Criterion) {
    let form = ShinyForm::default();
    c.bench_function("shiny_rows_scarlet", |b| b.iter(|| black_box(&form).rows()));
    let x = ShinyForm { game: Game::X, ..ShinyForm::default() };
    c.bench_function("shiny_odds_all_methods_x", |b| {
        b.iter(|| {
            available_methods(black_box(Game::X))
                .map(|info| compute_shiny_odds(&x.parameters(info)).percentage)
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_compute_capture, bench_simulate_throw, bench_shiny_table);
criterion_main!(benches);
