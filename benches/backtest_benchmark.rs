//! Benchmark for vaultbt backtesting performance.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vaultbt::core::config::{EngineConfig, StrategyConfig};
use vaultbt::data::{PriceSeries, RandomWalkParams, DEFAULT_SEED};
use vaultbt::metrics::{max_drawdown, sharpe_ratio};
use vaultbt::portfolio::BacktestEngine;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// Seeded price series spanning `days` calendar days.
fn sample_series(days: i64) -> PriceSeries {
    let start = start_date();
    let end = start + chrono::Duration::days(days - 1);
    PriceSeries::random_walk(start, end, DEFAULT_SEED, RandomWalkParams::default())
        .unwrap_or_else(|_| PriceSeries::from_closes(start, vec![100.0]))
}

fn engine_for(name: &str, days: i64) -> BacktestEngine {
    let start = start_date();
    let strategy = StrategyConfig::from_name(name).unwrap();
    let config = EngineConfig::new(
        strategy,
        start,
        start + chrono::Duration::days(days - 1),
        10_000.0,
    );
    BacktestEngine::new(config).unwrap()
}

fn bench_single_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_run");

    for days in [365i64, 1825, 3650, 18250].iter() {
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, &days| {
            let series = sample_series(days);
            let engine = engine_for("always_gain_btc", days);

            b.iter(|| {
                let run = engine.run_on_series(black_box(&series));
                black_box(run)
            });
        });
    }

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let days = 3650;
    let series = sample_series(days);

    for name in ["always_gain_btc", "ma_crossover", "rsi_momentum"].iter() {
        group.bench_with_input(BenchmarkId::new("strategy", name), name, |b, name| {
            let engine = engine_for(name, days);

            b.iter(|| {
                let run = engine.run_on_series(black_box(&series));
                black_box(run)
            });
        });
    }

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for days in [1000i64, 10000, 50000].iter() {
        group.bench_with_input(BenchmarkId::new("values", days), days, |b, &days| {
            let values = sample_series(days).closes;

            b.iter(|| {
                let dd = max_drawdown(black_box(&values));
                let sharpe = sharpe_ratio(black_box(&values));
                black_box((dd, sharpe))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_run, bench_strategies, bench_metrics);
criterion_main!(benches);
