//! vaultbt - Deterministic single-asset backtesting engine.
//!
//! This crate provides a complete backtesting solution with:
//! - Seeded random-walk price generation for reproducible runs
//! - A daily simulation engine with symmetric taker fees
//! - Four built-in strategies (always-gain, MA crossover, RSI momentum,
//!   ladder-down)
//! - A profit vault that locks away a slice of realized gains
//! - Performance metrics (max drawdown, Sharpe ratio, win rate)

pub mod core;
pub mod data;
pub mod execution;
pub mod indicators;
pub mod metrics;
pub mod portfolio;
pub mod strategies;

pub use crate::core::config::{
    AlwaysGainConfig, EngineConfig, MaCrossoverConfig, RsiMomentumConfig, StrategyConfig,
};
pub use crate::core::error::{Result, VaultbtError};
pub use crate::core::types::{BacktestRun, DayRecord, TradeAction, TradeRecord};
pub use crate::data::{PriceSeries, RandomWalkParams, DEFAULT_SEED};
pub use crate::metrics::PerformanceSummary;
pub use crate::portfolio::{run_strategies, BacktestEngine};
