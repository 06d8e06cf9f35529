//! Integration tests for vaultbt performance metrics.

use chrono::NaiveDate;
use vaultbt::core::config::{AlwaysGainConfig, EngineConfig, StrategyConfig};
use vaultbt::core::types::TradeAction;
use vaultbt::metrics::{daily_returns, drawdown_curve, max_drawdown, sharpe_ratio, win_rate};
use vaultbt::portfolio::BacktestEngine;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_max_drawdown_known_curve() {
    // Peak 120, trough 85: (120 - 85) / 120 = 29.17%.
    let values = vec![100.0, 120.0, 90.0, 110.0, 85.0, 95.0];
    assert!((max_drawdown(&values) - 29.1667).abs() < 1e-3);

    let curve = drawdown_curve(&values);
    assert_eq!(curve.len(), values.len());
    for dd in &curve {
        assert!((0.0..=100.0).contains(dd));
    }
}

#[test]
fn test_sharpe_sign_tracks_the_trend() {
    let mut rising = vec![100.0];
    let mut falling = vec![100.0];
    for i in 0..30 {
        let bump = if i % 2 == 0 { 1.015 } else { 1.005 };
        rising.push(rising.last().unwrap() * bump);
        falling.push(falling.last().unwrap() / bump);
    }
    assert!(sharpe_ratio(&rising) > 0.0);
    assert!(sharpe_ratio(&falling) < 0.0);
}

#[test]
fn test_daily_returns_skip_division_blowups() {
    let returns = daily_returns(&[0.0, 100.0, 110.0]);
    assert_eq!(returns.len(), 2);
    assert!((returns[0] - 0.0).abs() < 1e-10);
    assert!((returns[1] - 0.1).abs() < 1e-10);
}

#[test]
fn test_summary_consistency_over_a_real_run() {
    let cfg = EngineConfig::new(
        StrategyConfig::AlwaysGain(AlwaysGainConfig::default()),
        date(2024, 1, 1),
        date(2025, 12, 31),
        10_000.0,
    );
    let run = BacktestEngine::new(cfg).unwrap().run_backtest().unwrap();
    let perf = &run.performance;

    assert_eq!(
        perf.total_trades,
        perf.winning_trades + perf.losing_trades
    );
    assert!((0.0..=100.0).contains(&perf.win_rate_pct));
    assert!((0.0..=100.0).contains(&perf.max_drawdown_pct));
    assert!(!perf.sharpe_ratio.is_nan());

    // The summary splits final value into trading and vault balances.
    assert!(
        (perf.final_value - (perf.trading_balance + perf.vault_balance)).abs() < 1e-6
    );
    assert!((perf.initial_value - 10_000.0).abs() < 1e-10);

    // Summary counters agree with the raw trade history.
    let sells = run
        .trades
        .iter()
        .filter(|t| t.action == TradeAction::Sell)
        .count();
    assert_eq!(perf.total_trades, sells);

    let profit_sum: f64 = run
        .trades
        .iter()
        .filter_map(|t| t.profit)
        .sum();
    assert!((perf.total_profit - profit_sum).abs() < 1e-6);
}

#[test]
fn test_win_rate_agrees_with_summary() {
    let cfg = EngineConfig::new(
        StrategyConfig::AlwaysGain(AlwaysGainConfig::default()),
        date(2024, 1, 1),
        date(2025, 12, 31),
        10_000.0,
    );
    let run = BacktestEngine::new(cfg).unwrap().run_backtest().unwrap();

    let wins = win_rate(&run.trades);
    assert_eq!(wins.total_trades, run.performance.total_trades);
    assert_eq!(wins.winning_trades, run.performance.winning_trades);
    assert!((wins.win_rate_pct - run.performance.win_rate_pct).abs() < 1e-10);
}

#[test]
fn test_drawdown_of_a_run_matches_its_values() {
    let cfg = EngineConfig::new(
        StrategyConfig::AlwaysGain(AlwaysGainConfig::default()),
        date(2024, 1, 1),
        date(2024, 12, 31),
        10_000.0,
    );
    let run = BacktestEngine::new(cfg).unwrap().run_backtest().unwrap();

    let recomputed = max_drawdown(&run.portfolio_values());
    assert!((run.performance.max_drawdown_pct - recomputed).abs() < 1e-10);
}
