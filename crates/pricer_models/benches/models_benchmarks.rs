//! Criterion benchmarks for pricer_models.
//!
//! Measures lattice backward induction across step counts (O(N²) work)
//! against the closed-form price and the implied volatility inversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::black_scholes;
use pricer_models::implied::ImpliedVolatilitySolver;
use pricer_models::instruments::{ExerciseStyle, OptionSpec, OptionType};
use pricer_models::lattice::BinomialTree;

fn atm_put() -> OptionSpec<f64> {
    OptionSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap()
}

/// Benchmark lattice pricing for both exercise styles.
fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_lattice");
    let spec = atm_put();

    for steps in [50, 200, 500, 1000] {
        let american = BinomialTree::american(steps).unwrap();
        group.bench_with_input(BenchmarkId::new("american", steps), &american, |b, tree| {
            b.iter(|| tree.price(black_box(&spec)).unwrap());
        });

        let european = american.with_exercise(ExerciseStyle::European);
        group.bench_with_input(BenchmarkId::new("european", steps), &european, |b, tree| {
            b.iter(|| tree.price(black_box(&spec)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark closed-form pricing.
fn bench_black_scholes(c: &mut Criterion) {
    let spec = atm_put();
    c.bench_function("black_scholes_price", |b| {
        b.iter(|| black_scholes::price(black_box(&spec)).unwrap());
    });
}

/// Benchmark implied volatility inversion.
fn bench_implied_vol(c: &mut Criterion) {
    let solver = ImpliedVolatilitySolver::<f64>::default();
    c.bench_function("implied_volatility", |b| {
        b.iter(|| {
            solver
                .solve(
                    black_box(100.0),
                    black_box(100.0),
                    1.0,
                    0.05,
                    OptionType::Call,
                    black_box(10.450583572185565),
                )
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_lattice, bench_black_scholes, bench_implied_vol);
criterion_main!(benches);
