//! Win/loss statistics over trade histories.

use serde::{Deserialize, Serialize};

use crate::core::types::{TradeAction, TradeRecord};

/// Win-rate breakdown over the sell side of a trade history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WinRateSummary {
    /// Winning sells as a percent of all sells.
    pub win_rate_pct: f64,
    /// Sells with positive recorded profit.
    pub winning_trades: usize,
    /// Sells without positive recorded profit.
    pub losing_trades: usize,
    /// Total number of sells.
    pub total_trades: usize,
}

/// Compute the win rate over a trade history.
///
/// Only SELL records count; a trade wins when its recorded profit is
/// positive. An empty history, or one with no sells, yields the all-zero
/// summary rather than a division by zero.
pub fn win_rate(trades: &[TradeRecord]) -> WinRateSummary {
    let sells: Vec<&TradeRecord> = trades
        .iter()
        .filter(|t| t.action == TradeAction::Sell)
        .collect();

    let total_trades = sells.len();
    if total_trades == 0 {
        return WinRateSummary::default();
    }

    let winning_trades = sells
        .iter()
        .filter(|t| t.profit.map_or(false, |p| p > 0.0))
        .count();

    WinRateSummary {
        win_rate_pct: winning_trades as f64 / total_trades as f64 * 100.0,
        winning_trades,
        losing_trades: total_trades - winning_trades,
        total_trades,
    }
}

/// Sum of realized profit across all sells.
pub fn total_profit(trades: &[TradeRecord]) -> f64 {
    trades
        .iter()
        .filter(|t| t.action == TradeAction::Sell)
        .filter_map(|t| t.profit)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trade(action: TradeAction, profit: Option<f64>) -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            action,
            price: 100.0,
            quantity: 1.0,
            value: 100.0,
            fee: 1.2,
            profit,
            vault_contribution: None,
        }
    }

    #[test]
    fn test_empty_history() {
        let summary = win_rate(&[]);
        assert_eq!(summary, WinRateSummary::default());
        assert_eq!(summary.total_trades, 0);
        assert!((summary.win_rate_pct - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_buys_only_history() {
        let trades = vec![trade(TradeAction::Buy, None), trade(TradeAction::Buy, None)];
        let summary = win_rate(&trades);
        assert_eq!(summary.total_trades, 0);
        assert!((summary.win_rate_pct - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_mixed_history() {
        let trades = vec![
            trade(TradeAction::Buy, None),
            trade(TradeAction::Sell, Some(10.0)),
            trade(TradeAction::Buy, None),
            trade(TradeAction::Sell, Some(-4.0)),
            trade(TradeAction::Buy, None),
            trade(TradeAction::Sell, Some(6.0)),
        ];
        let summary = win_rate(&trades);

        assert_eq!(summary.total_trades, 3);
        assert_eq!(summary.winning_trades, 2);
        assert_eq!(summary.losing_trades, 1);
        assert!((summary.win_rate_pct - 66.67).abs() < 0.1);
    }

    #[test]
    fn test_zero_profit_sell_is_not_winning() {
        let trades = vec![trade(TradeAction::Sell, Some(0.0))];
        let summary = win_rate(&trades);
        assert_eq!(summary.winning_trades, 0);
        assert_eq!(summary.losing_trades, 1);
    }

    #[test]
    fn test_total_profit() {
        let trades = vec![
            trade(TradeAction::Sell, Some(10.0)),
            trade(TradeAction::Sell, Some(-4.0)),
            trade(TradeAction::Buy, None),
        ];
        assert!((total_profit(&trades) - 6.0).abs() < 1e-10);
    }
}
