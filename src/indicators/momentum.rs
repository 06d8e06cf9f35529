//! Momentum indicators: windowed RSI.

use std::collections::VecDeque;

use crate::core::error::{Result, VaultbtError};

/// Relative Strength Index over a sliding window of day-over-day changes.
///
/// Uses the plain mean of gains and losses within the window — not
/// Wilder's smoothing. RSI is 100 when the window holds no losses;
/// otherwise `100 - 100 / (1 + avg_gain / avg_loss)`.
#[derive(Debug, Clone)]
pub struct RsiWindow {
    changes: VecDeque<f64>,
    period: usize,
}

impl RsiWindow {
    /// Create an RSI window with the given lookback period.
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(VaultbtError::invalid_parameter("RSI period must be > 0"));
        }
        Ok(Self {
            changes: VecDeque::with_capacity(period + 1),
            period,
        })
    }

    /// Push the next day-over-day price change.
    pub fn push(&mut self, change: f64) {
        self.changes.push_back(change);
        if self.changes.len() > self.period {
            self.changes.pop_front();
        }
    }

    /// Current RSI on the 0-100 scale, or `None` during warmup.
    pub fn value(&self) -> Option<f64> {
        if self.changes.len() < self.period {
            return None;
        }

        let avg_gain: f64 = self
            .changes
            .iter()
            .map(|&c| if c > 0.0 { c } else { 0.0 })
            .sum::<f64>()
            / self.period as f64;
        let avg_loss: f64 = self
            .changes
            .iter()
            .map(|&c| if c < 0.0 { -c } else { 0.0 })
            .sum::<f64>()
            / self.period as f64;

        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }

    /// Number of changes currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if no changes have been pushed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
