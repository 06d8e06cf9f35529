//! Trend indicators: incremental simple moving average.

use std::collections::VecDeque;

use crate::core::error::{Result, VaultbtError};

/// Incremental simple moving average over a fixed window.
///
/// Maintains a running sum so each update is O(1). Yields no value until
/// the window is full, matching the warmup behavior of a batch SMA.
#[derive(Debug, Clone)]
pub struct RollingMean {
    window: VecDeque<f64>,
    period: usize,
    sum: f64,
}

impl RollingMean {
    /// Create a rolling mean with the given lookback period.
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(VaultbtError::invalid_parameter(
                "rolling mean period must be > 0",
            ));
        }
        Ok(Self {
            window: VecDeque::with_capacity(period + 1),
            period,
            sum: 0.0,
        })
    }

    /// Push the next value, evicting the oldest once the window is full.
    pub fn push(&mut self, value: f64) {
        self.window.push_back(value);
        self.sum += value;
        if self.window.len() > self.period {
            if let Some(evicted) = self.window.pop_front() {
                self.sum -= evicted;
            }
        }
    }

    /// Current mean, or `None` during warmup.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        if self.window.len() == self.period {
            Some(self.sum / self.period as f64)
        } else {
            None
        }
    }

    /// Number of values currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no values have been pushed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Simple moving average over a full slice.
///
/// Returns `NaN` for the warmup prefix.
pub fn sma(data: &[f64], period: usize) -> Result<Vec<f64>> {
    let mut tracker = RollingMean::new(period)?;
    let mut result = Vec::with_capacity(data.len());
    for &value in data {
        tracker.push(value);
        result.push(tracker.mean().unwrap_or(f64::NAN));
    }
    Ok(result)
}
