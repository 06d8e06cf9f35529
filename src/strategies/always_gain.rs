//! Always-Gain strategy: buy single-day dips, sell only at the target.

use crate::core::config::AlwaysGainConfig;
use crate::strategies::{DayContext, Signal, Sizing};

/// Buy-the-dip strategy that never realizes a loss.
///
/// Entry fires when the single-day price change drops below minus the
/// configured threshold. Exit fires only when unrealized profit reaches
/// the target; a losing position is carried forward day after day until
/// it recovers or the simulation ends.
#[derive(Debug, Clone)]
pub struct AlwaysGainStrategy {
    config: AlwaysGainConfig,
}

impl AlwaysGainStrategy {
    /// Create the strategy from its config.
    pub fn new(config: AlwaysGainConfig) -> Self {
        Self { config }
    }

    /// The strategy's configuration.
    pub fn config(&self) -> &AlwaysGainConfig {
        &self.config
    }

    /// Evaluate the entry/exit rule for one day.
    pub fn decide(&mut self, ctx: &DayContext) -> Option<Signal> {
        if !ctx.in_position {
            if ctx.change_pct() < -self.config.entry_threshold_pct {
                return Some(Signal::Enter(Sizing {
                    cash_fraction: self.config.cash_fraction,
                    max_value: self.config.max_position_value,
                }));
            }
        } else if ctx.unrealized_profit_pct() >= self.config.exit_target_pct {
            return Some(Signal::Exit);
        }
        None
    }
}
