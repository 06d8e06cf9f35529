//! Core data types for vaultbt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::metrics::summary::PerformanceSummary;

/// Type alias for price values.
pub type Price = f64;

/// Trade direction for a single fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeAction {
    /// Open a position.
    Buy,
    /// Close a position.
    Sell,
}

/// A single executed trade. Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Day the trade executed.
    pub date: NaiveDate,
    /// Buy or sell.
    pub action: TradeAction,
    /// Fill price.
    pub price: Price,
    /// Quantity of the asset traded.
    pub quantity: f64,
    /// Trade notional (`price * quantity`).
    pub value: f64,
    /// Taker fee charged on the notional.
    pub fee: f64,
    /// Realized gross profit. Sells only.
    pub profit: Option<f64>,
    /// Amount of profit diverted into the vault. Sells only.
    pub vault_contribution: Option<f64>,
}

impl TradeRecord {
    /// Check if this is a winning sell.
    #[inline]
    pub fn is_winning(&self) -> bool {
        self.action == TradeAction::Sell && self.profit.map_or(false, |p| p > 0.0)
    }
}

/// Portfolio composition at the end of one simulated day.
///
/// One struct per day instead of parallel balance arrays, so the rows
/// can never fall out of lockstep:
/// `portfolio_value = cash + holdings * price + vault` at every row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar day.
    pub date: NaiveDate,
    /// Closing price of the asset on this day.
    pub price: Price,
    /// Liquid cash balance.
    pub cash: f64,
    /// Quantity of the asset held.
    pub holdings: f64,
    /// Locked-profit vault balance.
    pub vault: f64,
    /// Total net worth: `cash + holdings * price + vault`.
    pub portfolio_value: f64,
}

impl DayRecord {
    /// Build a record, deriving the portfolio value from its parts.
    pub fn new(date: NaiveDate, price: Price, cash: f64, holdings: f64, vault: f64) -> Self {
        Self {
            date,
            price,
            cash,
            holdings,
            vault,
            portfolio_value: cash + holdings * price + vault,
        }
    }
}

/// Complete result of one backtest run.
///
/// This is the entire contract with any presentation layer. The
/// per-day ledger holds one row per simulated day; the accessors below
/// project out per-field arrays for consumers that want columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestRun {
    /// External name of the simulated strategy.
    pub strategy_name: String,
    /// Per-day portfolio ledger, day 0 holding the seed balances.
    pub days: Vec<DayRecord>,
    /// Ordered trade history.
    pub trades: Vec<TradeRecord>,
    /// Configuration the run was produced from.
    pub config: EngineConfig,
    /// Derived performance statistics.
    pub performance: PerformanceSummary,
}

impl BacktestRun {
    /// Number of simulated days.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Check if the run holds no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Simulated calendar days, one per ledger row.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }

    /// Daily closing prices.
    pub fn prices(&self) -> Vec<Price> {
        self.days.iter().map(|d| d.price).collect()
    }

    /// Daily total portfolio values.
    pub fn portfolio_values(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.portfolio_value).collect()
    }

    /// Daily cash balances.
    pub fn cash_balances(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.cash).collect()
    }

    /// Daily asset holdings.
    pub fn holdings(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.holdings).collect()
    }

    /// Daily vault balances.
    pub fn vault_balances(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.vault).collect()
    }
}
