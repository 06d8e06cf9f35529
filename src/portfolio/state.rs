//! Mutable portfolio state for one run.

use crate::core::types::Price;

/// Portfolio composition while a simulation is in flight.
///
/// One instance per run, owned exclusively by the engine. All balances
/// stay non-negative by construction: trades that would overdraw cash
/// are rejected before any field changes.
#[derive(Debug, Clone)]
pub struct PortfolioState {
    /// Liquid cash available to trade.
    pub cash: f64,
    /// Quantity of the asset currently held.
    pub holdings: f64,
    /// Locked-profit vault balance. Credited on qualifying sells,
    /// never debited.
    pub vault: f64,
    /// Whether a position is currently open. Tracked explicitly to keep
    /// the entry/exit rule checks simple.
    pub in_position: bool,
    /// Price the open position was acquired at. Meaningful only while
    /// `in_position` is true.
    pub entry_price: Price,
}

impl PortfolioState {
    /// Fresh state holding only the starting cash.
    pub fn new(initial_capital: f64) -> Self {
        Self {
            cash: initial_capital,
            holdings: 0.0,
            vault: 0.0,
            in_position: false,
            entry_price: 0.0,
        }
    }

    /// Total net worth at the given price.
    #[inline]
    pub fn total_value(&self, price: Price) -> f64 {
        self.cash + self.holdings * price + self.vault
    }
}
