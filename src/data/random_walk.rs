//! Deterministic random-walk price series generation.
//!
//! The engine never reads prices from disk or network; each run derives
//! its series up front from a fixed seed, so identical configurations
//! produce byte-identical series.

use chrono::NaiveDate;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, VaultbtError};
use crate::core::types::Price;

/// Seed used by the engine for internally generated series.
pub const DEFAULT_SEED: u64 = 42;

/// Parameters for the daily random walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkParams {
    /// Price on the first simulated day.
    pub initial_price: Price,
    /// Mean daily return (fraction, 0.0005 = 0.05%).
    pub drift: f64,
    /// Amplitude of the uniform daily return noise (fraction).
    pub volatility: f64,
}

impl Default for RandomWalkParams {
    fn default() -> Self {
        Self {
            initial_price: 30_000.0,
            drift: 0.0005,
            volatility: 0.02,
        }
    }
}

/// An ordered sequence of daily closing prices.
///
/// Chronological, fixed length, generated once per run and immutable
/// thereafter. The engine borrows it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// One calendar day per entry, ascending.
    pub dates: Vec<NaiveDate>,
    /// Closing price per day, parallel to `dates`.
    pub closes: Vec<Price>,
}

impl PriceSeries {
    /// Build a series from explicit dates and closes.
    pub fn new(dates: Vec<NaiveDate>, closes: Vec<Price>) -> Result<Self> {
        if dates.len() != closes.len() {
            return Err(VaultbtError::invalid_parameter(format!(
                "dates/closes length mismatch: {} vs {}",
                dates.len(),
                closes.len()
            )));
        }
        Ok(Self { dates, closes })
    }

    /// Build a series from closes alone, assigning consecutive calendar
    /// days from `start`. Convenience for tests and ad-hoc runs.
    pub fn from_closes(start: NaiveDate, closes: Vec<Price>) -> Self {
        let dates = (0..closes.len() as i64)
            .map(|offset| start + chrono::Duration::days(offset))
            .collect();
        Self { dates, closes }
    }

    /// Generate a seeded random walk with one close per calendar day in
    /// `[start, end]` inclusive.
    pub fn random_walk(
        start: NaiveDate,
        end: NaiveDate,
        seed: u64,
        params: RandomWalkParams,
    ) -> Result<Self> {
        if end < start {
            return Err(VaultbtError::DateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let n = (end - start).num_days() as usize + 1;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut dates = Vec::with_capacity(n);
        let mut closes = Vec::with_capacity(n);

        let mut price = params.initial_price;
        for offset in 0..n as i64 {
            dates.push(start + chrono::Duration::days(offset));
            closes.push(price);

            let noise: f64 = rng.gen_range(-1.0..1.0);
            let daily_return = params.drift + noise * params.volatility;
            price = (price * (1.0 + daily_return)).max(0.01);
        }

        Ok(Self { dates, closes })
    }

    /// Number of days in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}
