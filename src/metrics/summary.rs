//! Aggregate performance summary for a completed run.

use serde::{Deserialize, Serialize};

use crate::core::types::{DayRecord, TradeRecord};
use crate::metrics::drawdown::max_drawdown;
use crate::metrics::ratios::sharpe_ratio;
use crate::metrics::trade_stats::{total_profit, win_rate};

/// Flat performance summary derived once at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Portfolio value on day 0.
    pub initial_value: f64,
    /// Portfolio value on the final day.
    pub final_value: f64,
    /// Total return over the run in percent.
    pub total_return_pct: f64,
    /// Maximum drawdown in percent (0-100 scale).
    pub max_drawdown_pct: f64,
    /// Simplified annualized Sharpe ratio.
    pub sharpe_ratio: f64,
    /// Sum of realized gross profit across all sells.
    pub total_profit: f64,
    /// Winning sells as a percent of all sells.
    pub win_rate_pct: f64,
    /// Sells with positive profit.
    pub winning_trades: usize,
    /// Sells without positive profit.
    pub losing_trades: usize,
    /// Total number of sells.
    pub total_trades: usize,
    /// Final vault balance.
    pub vault_balance: f64,
    /// Final cash plus mark-to-market holdings, vault excluded.
    pub trading_balance: f64,
}

impl PerformanceSummary {
    /// Compute the summary from a run's day ledger and trade history.
    pub fn from_run(days: &[DayRecord], trades: &[TradeRecord]) -> Self {
        let values: Vec<f64> = days.iter().map(|d| d.portfolio_value).collect();

        let initial_value = values.first().copied().unwrap_or(0.0);
        let final_value = values.last().copied().unwrap_or(0.0);
        let total_return_pct = if initial_value > 0.0 {
            (final_value - initial_value) / initial_value * 100.0
        } else {
            0.0
        };

        let wins = win_rate(trades);

        let (vault_balance, trading_balance) = match days.last() {
            Some(last) => (last.vault, last.cash + last.holdings * last.price),
            None => (0.0, 0.0),
        };

        Self {
            initial_value,
            final_value,
            total_return_pct,
            max_drawdown_pct: max_drawdown(&values),
            sharpe_ratio: sharpe_ratio(&values),
            total_profit: total_profit(trades),
            win_rate_pct: wins.win_rate_pct,
            winning_trades: wins.winning_trades,
            losing_trades: wins.losing_trades,
            total_trades: wins.total_trades,
            vault_balance,
            trading_balance,
        }
    }
}
