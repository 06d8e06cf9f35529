//! Parallel comparison of strategies over the same date range.

use rayon::prelude::*;

use crate::core::config::{EngineConfig, StrategyConfig};
use crate::core::error::Result;
use crate::core::types::BacktestRun;
use crate::portfolio::engine::BacktestEngine;

/// Run several strategies against the same dates and capital.
///
/// Each run owns its own state and price series, so the runs execute in
/// parallel; the day loop inside every run stays strictly sequential.
/// The result order matches the input order.
pub fn run_strategies(
    base: &EngineConfig,
    strategies: &[StrategyConfig],
) -> Result<Vec<BacktestRun>> {
    strategies
        .par_iter()
        .map(|strategy| {
            let config = EngineConfig {
                strategy: strategy.clone(),
                ..base.clone()
            };
            BacktestEngine::new(config)?.run_backtest()
        })
        .collect()
}
