//! Taker-fee calculation.

use serde::{Deserialize, Serialize};

/// Taker fee charged as a percent of trade notional.
///
/// Applied symmetrically: buys pay it on the entry notional, sells on
/// the exit notional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakerFee {
    /// Fee rate in percent (1.2 = 1.2%).
    pub pct: f64,
}

impl Default for TakerFee {
    fn default() -> Self {
        Self { pct: 1.2 }
    }
}

impl TakerFee {
    /// Create a fee model from a percent rate.
    pub fn percent(pct: f64) -> Self {
        Self { pct }
    }

    /// Fee charged on a trade of the given notional value.
    #[inline]
    pub fn fee_on(&self, notional: f64) -> f64 {
        notional.abs() * self.pct / 100.0
    }

    /// Round-trip fee for an entry and exit notional.
    pub fn round_trip(&self, entry_notional: f64, exit_notional: f64) -> f64 {
        self.fee_on(entry_notional) + self.fee_on(exit_notional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let fee = TakerFee::default();
        // 1.2% of 1000 = 12
        assert!((fee.fee_on(1000.0) - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_percent() {
        let fee = TakerFee::percent(0.5);
        assert!((fee.fee_on(200.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_fee() {
        let fee = TakerFee::percent(0.0);
        assert!(fee.fee_on(1_000_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_trip() {
        let fee = TakerFee::percent(1.0);
        // 1% of 100 + 1% of 110 = 2.1
        assert!((fee.round_trip(100.0, 110.0) - 2.1).abs() < 1e-10);
    }
}
