//! Moving-average crossover strategy.

use crate::core::config::MaCrossoverConfig;
use crate::core::error::Result;
use crate::indicators::RollingMean;
use crate::strategies::{DayContext, Signal, Sizing};

/// Dual simple-moving-average crossover with a fixed stop-loss.
///
/// No signal fires until `long_window` days of history exist. Entry on
/// an upward crossover (short MA moves from at-or-below to above the
/// long MA between consecutive days); exit on a downward crossover or,
/// failing that, when price falls to the stop level below entry.
#[derive(Debug, Clone)]
pub struct MaCrossoverStrategy {
    config: MaCrossoverConfig,
    short_ma: RollingMean,
    long_ma: RollingMean,
    prev_short: Option<f64>,
    prev_long: Option<f64>,
}

impl MaCrossoverStrategy {
    /// Create the strategy from its config.
    pub fn new(config: MaCrossoverConfig) -> Result<Self> {
        let short_ma = RollingMean::new(config.short_window)?;
        let long_ma = RollingMean::new(config.long_window)?;
        Ok(Self {
            config,
            short_ma,
            long_ma,
            prev_short: None,
            prev_long: None,
        })
    }

    /// The strategy's configuration.
    pub fn config(&self) -> &MaCrossoverConfig {
        &self.config
    }

    /// Evaluate the entry/exit rule for one day.
    ///
    /// The averages advance every day, in or out of a position.
    pub fn decide(&mut self, ctx: &DayContext) -> Option<Signal> {
        self.short_ma.push(ctx.price);
        self.long_ma.push(ctx.price);

        let short = self.short_ma.mean();
        let long = self.long_ma.mean();

        let signal = match (short, long, self.prev_short, self.prev_long) {
            (Some(short), Some(long), Some(prev_short), Some(prev_long)) => {
                if !ctx.in_position {
                    if prev_short <= prev_long && short > long {
                        Some(Signal::Enter(Sizing {
                            cash_fraction: self.config.cash_fraction,
                            max_value: None,
                        }))
                    } else {
                        None
                    }
                } else if prev_short >= prev_long && short < long {
                    Some(Signal::Exit)
                } else if ctx.price <= ctx.entry_price * (1.0 - self.config.stop_loss_pct / 100.0) {
                    Some(Signal::Exit)
                } else {
                    None
                }
            }
            // Not enough history yet: no signal either way.
            _ => None,
        };

        self.prev_short = short;
        self.prev_long = long;
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(short: usize, long: usize) -> MaCrossoverStrategy {
        MaCrossoverStrategy::new(MaCrossoverConfig {
            short_window: short,
            long_window: long,
            ..MaCrossoverConfig::default()
        })
        .unwrap()
    }

    fn feed(s: &mut MaCrossoverStrategy, prices: &[f64], in_position: bool, entry: f64) -> Vec<Option<Signal>> {
        let mut signals = Vec::new();
        let mut prev = prices[0];
        for (day, &price) in prices.iter().enumerate() {
            let ctx = DayContext {
                day,
                price,
                prev_price: prev,
                in_position,
                entry_price: entry,
            };
            signals.push(s.decide(&ctx));
            prev = price;
        }
        signals
    }

    #[test]
    fn test_no_signal_during_warmup() {
        let mut s = strategy(2, 4);
        // Only 3 days of history: long window never fills past a
        // previous-value comparison.
        let signals = feed(&mut s, &[100.0, 101.0, 102.0], false, 0.0);
        assert!(signals.iter().all(|sig| sig.is_none()));
    }

    #[test]
    fn test_upward_crossover_enters() {
        let mut s = strategy(2, 3);
        // Declining prices keep short below long, then a sharp rally
        // pulls the short average above the long one.
        let prices = [104.0, 102.0, 100.0, 98.0, 110.0, 120.0];
        let signals = feed(&mut s, &prices, false, 0.0);
        assert!(signals.iter().any(|sig| matches!(sig, Some(Signal::Enter(_)))));
    }

    #[test]
    fn test_downward_crossover_exits() {
        let mut s = strategy(2, 3);
        // Rising prices, then a slump drags the short average below.
        let prices = [100.0, 102.0, 104.0, 106.0, 90.0, 80.0];
        let signals = feed(&mut s, &prices, true, 50.0);
        assert!(signals.iter().any(|sig| matches!(sig, Some(Signal::Exit))));
    }

    #[test]
    fn test_stop_loss_exits() {
        let mut s = strategy(2, 3);
        // Flat averages, but price gaps below the 4% stop from entry 100.
        let prices = [100.0, 100.0, 100.0, 100.0, 95.0];
        let signals = feed(&mut s, &prices, true, 100.0);
        assert!(signals.iter().any(|sig| matches!(sig, Some(Signal::Exit))));
    }

    #[test]
    fn test_flat_market_no_trades() {
        let mut s = strategy(2, 3);
        let prices = [100.0; 10];
        let signals = feed(&mut s, &prices, false, 0.0);
        assert!(signals.iter().all(|sig| sig.is_none()));
    }
}
