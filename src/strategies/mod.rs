//! Trading strategy rules.
//!
//! The strategies form a closed set: the engine's day loop is written
//! once and asks the active [`Strategy`] for at most one [`Signal`] per
//! day. Entry rules are evaluated only while flat, exit rules only while
//! in a position, so a day can never produce both a buy and a sell.

pub mod always_gain;
pub mod ma_crossover;
pub mod rsi_momentum;

pub use always_gain::AlwaysGainStrategy;
pub use ma_crossover::MaCrossoverStrategy;
pub use rsi_momentum::RsiMomentumStrategy;

use crate::core::config::StrategyConfig;
use crate::core::error::Result;
use crate::core::types::Price;

/// Everything a strategy may consult about the current simulated day.
#[derive(Debug, Clone, Copy)]
pub struct DayContext {
    /// Day index within the series (1-based within the loop).
    pub day: usize,
    /// Closing price of the current day.
    pub price: Price,
    /// Closing price of the previous day.
    pub prev_price: Price,
    /// Whether a position is currently open.
    pub in_position: bool,
    /// Price the open position was acquired at. Meaningful only while
    /// `in_position` is true.
    pub entry_price: Price,
}

impl DayContext {
    /// Single-day price change in percent.
    #[inline]
    pub fn change_pct(&self) -> f64 {
        if self.prev_price > 0.0 {
            (self.price - self.prev_price) / self.prev_price * 100.0
        } else {
            0.0
        }
    }

    /// Unrealized profit of the open position in percent.
    #[inline]
    pub fn unrealized_profit_pct(&self) -> f64 {
        if self.in_position && self.entry_price > 0.0 {
            (self.price - self.entry_price) / self.entry_price * 100.0
        } else {
            0.0
        }
    }
}

/// Position sizing for an entry signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    /// Fraction of available cash to commit.
    pub cash_fraction: f64,
    /// Optional cap on the position notional.
    pub max_value: Option<f64>,
}

/// A strategy's decision for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Open a position with the given sizing.
    Enter(Sizing),
    /// Close the open position.
    Exit,
}

/// Closed set of strategy implementations with per-variant rule state.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Buy-the-dip, sell only at the profit target.
    AlwaysGain(AlwaysGainStrategy),
    /// Moving-average crossover with a fixed stop-loss.
    MaCrossover(MaCrossoverStrategy),
    /// RSI oversold/overbought momentum.
    RsiMomentum(RsiMomentumStrategy),
}

impl Strategy {
    /// Build the runtime strategy for a configuration.
    pub fn from_config(config: &StrategyConfig) -> Result<Self> {
        match config {
            StrategyConfig::AlwaysGain(cfg) => {
                Ok(Self::AlwaysGain(AlwaysGainStrategy::new(cfg.clone())))
            }
            // Ladder-Down has no independent rule set; it runs the
            // Always-Gain rules under its own name.
            StrategyConfig::LadderDown(cfg) => {
                Ok(Self::AlwaysGain(AlwaysGainStrategy::new(cfg.clone())))
            }
            StrategyConfig::MaCrossover(cfg) => {
                Ok(Self::MaCrossover(MaCrossoverStrategy::new(cfg.clone())?))
            }
            StrategyConfig::RsiMomentum(cfg) => {
                Ok(Self::RsiMomentum(RsiMomentumStrategy::new(cfg.clone())?))
            }
        }
    }

    /// Evaluate the rules for one day.
    ///
    /// Must be called exactly once per day in forward order; indicator
    /// windows advance on every call regardless of position state.
    pub fn decide(&mut self, ctx: &DayContext) -> Option<Signal> {
        match self {
            Self::AlwaysGain(s) => s.decide(ctx),
            Self::MaCrossover(s) => s.decide(ctx),
            Self::RsiMomentum(s) => s.decide(ctx),
        }
    }

    /// Percent of realized gross profit diverted into the vault on exit.
    ///
    /// Zero for strategies without a vault mechanism.
    pub fn vault_allocation_pct(&self) -> f64 {
        match self {
            Self::AlwaysGain(s) => s.config().vault_allocation_pct,
            Self::MaCrossover(_) | Self::RsiMomentum(_) => 0.0,
        }
    }
}
