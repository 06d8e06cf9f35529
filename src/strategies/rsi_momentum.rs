//! RSI momentum strategy.

use crate::core::config::RsiMomentumConfig;
use crate::core::error::Result;
use crate::indicators::RsiWindow;
use crate::strategies::{DayContext, Signal, Sizing};

/// Oversold/overbought momentum strategy on a windowed RSI.
///
/// Entry fires when RSI drops below the oversold threshold; exit when
/// RSI rises above the overbought threshold or unrealized profit reaches
/// the target, whichever holds first.
#[derive(Debug, Clone)]
pub struct RsiMomentumStrategy {
    config: RsiMomentumConfig,
    rsi: RsiWindow,
}

impl RsiMomentumStrategy {
    /// Create the strategy from its config.
    pub fn new(config: RsiMomentumConfig) -> Result<Self> {
        let rsi = RsiWindow::new(config.period)?;
        Ok(Self { config, rsi })
    }

    /// The strategy's configuration.
    pub fn config(&self) -> &RsiMomentumConfig {
        &self.config
    }

    /// Evaluate the entry/exit rule for one day.
    ///
    /// The change window advances every day, in or out of a position.
    pub fn decide(&mut self, ctx: &DayContext) -> Option<Signal> {
        self.rsi.push(ctx.price - ctx.prev_price);

        let rsi = self.rsi.value();

        if !ctx.in_position {
            if let Some(rsi) = rsi {
                if rsi < self.config.oversold {
                    return Some(Signal::Enter(Sizing {
                        cash_fraction: self.config.cash_fraction,
                        max_value: None,
                    }));
                }
            }
        } else {
            let overbought = rsi.map_or(false, |r| r > self.config.overbought);
            if overbought || ctx.unrealized_profit_pct() >= self.config.profit_target_pct {
                return Some(Signal::Exit);
            }
        }
        None
    }
}
