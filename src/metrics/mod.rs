//! Performance metrics for vaultbt.

pub mod drawdown;
pub mod ratios;
pub mod summary;
pub mod trade_stats;

pub use drawdown::{drawdown_curve, max_drawdown};
pub use ratios::{daily_returns, sharpe_ratio};
pub use summary::PerformanceSummary;
pub use trade_stats::{win_rate, WinRateSummary};
