//! Engine and strategy configuration.
//!
//! Each strategy has an explicit config struct with named fields and
//! documented defaults. All values are validated once at engine
//! construction, never defaulted ad hoc inside the simulation loop.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, VaultbtError};

/// External name of the Always-Gain strategy.
pub const STRATEGY_ALWAYS_GAIN: &str = "always_gain_btc";
/// External name of the MA-crossover strategy.
pub const STRATEGY_MA_CROSSOVER: &str = "ma_crossover";
/// External name of the RSI-momentum strategy.
pub const STRATEGY_RSI_MOMENTUM: &str = "rsi_momentum";
/// External name of the ladder-down strategy (delegates to Always-Gain).
pub const STRATEGY_LADDER_DOWN: &str = "ladder_down";

/// Configuration for the Always-Gain strategy.
///
/// Buys single-day dips and sells only at a configured profit target,
/// diverting a slice of realized profit into the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlwaysGainConfig {
    /// Entry fires when the 1-day price change is below minus this percent.
    pub entry_threshold_pct: f64,
    /// Exit fires when unrealized profit reaches this percent. Never below.
    pub exit_target_pct: f64,
    /// Percent of gross profit diverted into the vault on exit,
    /// capped at 50% of gross profit.
    pub vault_allocation_pct: f64,
    /// Fraction of available cash committed per entry.
    pub cash_fraction: f64,
    /// Optional cap on the notional value of a single position.
    pub max_position_value: Option<f64>,
}

impl Default for AlwaysGainConfig {
    fn default() -> Self {
        Self {
            entry_threshold_pct: 2.0,
            exit_target_pct: 5.0,
            vault_allocation_pct: 1.0,
            cash_fraction: 0.95,
            max_position_value: None,
        }
    }
}

/// Configuration for the moving-average crossover strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaCrossoverConfig {
    /// Short moving-average window in days.
    pub short_window: usize,
    /// Long moving-average window in days. No signal fires before this
    /// many days of history exist.
    pub long_window: usize,
    /// Stop-loss as a percent below the entry price.
    pub stop_loss_pct: f64,
    /// Fraction of available cash committed per entry.
    pub cash_fraction: f64,
}

impl Default for MaCrossoverConfig {
    fn default() -> Self {
        Self {
            short_window: 20,
            long_window: 50,
            stop_loss_pct: 4.0,
            cash_fraction: 0.80,
        }
    }
}

/// Configuration for the RSI-momentum strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiMomentumConfig {
    /// RSI lookback window (number of day-over-day changes).
    pub period: usize,
    /// Entry fires when RSI drops below this threshold.
    pub oversold: f64,
    /// Exit fires when RSI rises above this threshold.
    pub overbought: f64,
    /// Exit also fires when unrealized profit reaches this percent.
    pub profit_target_pct: f64,
    /// Fraction of available cash committed per entry.
    pub cash_fraction: f64,
}

impl Default for RsiMomentumConfig {
    fn default() -> Self {
        Self {
            period: 14,
            oversold: 30.0,
            overbought: 70.0,
            profit_target_pct: 6.0,
            cash_fraction: 0.60,
        }
    }
}

/// Closed set of strategy configurations.
///
/// `LadderDown` carries an Always-Gain config: the ladder strategy was
/// never independently implemented and delegates entirely to the
/// Always-Gain rule. The variant keeps that aliasing visible instead of
/// silently falling back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrategyConfig {
    /// Buy-the-dip strategy that never sells at a loss.
    AlwaysGain(AlwaysGainConfig),
    /// Moving-average crossover with a fixed stop-loss.
    MaCrossover(MaCrossoverConfig),
    /// RSI oversold/overbought momentum.
    RsiMomentum(RsiMomentumConfig),
    /// Delegates to the Always-Gain rule.
    LadderDown(AlwaysGainConfig),
}

impl StrategyConfig {
    /// Build a default-valued config from an external strategy name.
    ///
    /// Fails with [`VaultbtError::UnknownStrategy`] for any name outside
    /// the closed set. There is no silent fallback.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            STRATEGY_ALWAYS_GAIN => Ok(Self::AlwaysGain(AlwaysGainConfig::default())),
            STRATEGY_MA_CROSSOVER => Ok(Self::MaCrossover(MaCrossoverConfig::default())),
            STRATEGY_RSI_MOMENTUM => Ok(Self::RsiMomentum(RsiMomentumConfig::default())),
            STRATEGY_LADDER_DOWN => Ok(Self::LadderDown(AlwaysGainConfig::default())),
            other => Err(VaultbtError::unknown_strategy(other)),
        }
    }

    /// External name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AlwaysGain(_) => STRATEGY_ALWAYS_GAIN,
            Self::MaCrossover(_) => STRATEGY_MA_CROSSOVER,
            Self::RsiMomentum(_) => STRATEGY_RSI_MOMENTUM,
            Self::LadderDown(_) => STRATEGY_LADDER_DOWN,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::AlwaysGain(cfg) | Self::LadderDown(cfg) => {
                validate_fraction("cash_fraction", cfg.cash_fraction)?;
                validate_positive("entry_threshold_pct", cfg.entry_threshold_pct)?;
                validate_positive("exit_target_pct", cfg.exit_target_pct)?;
                if cfg.vault_allocation_pct < 0.0 {
                    return Err(VaultbtError::invalid_config(
                        "vault_allocation_pct must be >= 0",
                    ));
                }
                if let Some(cap) = cfg.max_position_value {
                    validate_positive("max_position_value", cap)?;
                }
                Ok(())
            }
            Self::MaCrossover(cfg) => {
                validate_fraction("cash_fraction", cfg.cash_fraction)?;
                validate_positive("stop_loss_pct", cfg.stop_loss_pct)?;
                if cfg.short_window == 0 || cfg.long_window == 0 {
                    return Err(VaultbtError::invalid_config("MA windows must be > 0"));
                }
                if cfg.short_window >= cfg.long_window {
                    return Err(VaultbtError::invalid_config(
                        "short_window must be < long_window",
                    ));
                }
                Ok(())
            }
            Self::RsiMomentum(cfg) => {
                validate_fraction("cash_fraction", cfg.cash_fraction)?;
                validate_positive("profit_target_pct", cfg.profit_target_pct)?;
                if cfg.period == 0 {
                    return Err(VaultbtError::invalid_config("RSI period must be > 0"));
                }
                if !(0.0..=100.0).contains(&cfg.oversold)
                    || !(0.0..=100.0).contains(&cfg.overbought)
                {
                    return Err(VaultbtError::invalid_config(
                        "RSI thresholds must be within 0..=100",
                    ));
                }
                if cfg.oversold >= cfg.overbought {
                    return Err(VaultbtError::invalid_config(
                        "oversold threshold must be < overbought threshold",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Full engine configuration for one backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strategy to simulate.
    pub strategy: StrategyConfig,
    /// Taker fee as a percent of trade notional, charged on both sides.
    pub taker_fee_pct: f64,
    /// First simulated calendar day (inclusive).
    pub start_date: NaiveDate,
    /// Last simulated calendar day (inclusive).
    pub end_date: NaiveDate,
    /// Starting cash balance. Must be > 0.
    pub initial_capital: f64,
}

impl EngineConfig {
    /// Default taker fee in percent.
    pub const DEFAULT_TAKER_FEE_PCT: f64 = 1.2;

    /// Create a config with the default taker fee.
    pub fn new(
        strategy: StrategyConfig,
        start_date: NaiveDate,
        end_date: NaiveDate,
        initial_capital: f64,
    ) -> Self {
        Self {
            strategy,
            taker_fee_pct: Self::DEFAULT_TAKER_FEE_PCT,
            start_date,
            end_date,
            initial_capital,
        }
    }

    /// Override the taker fee percent.
    pub fn with_taker_fee_pct(mut self, pct: f64) -> Self {
        self.taker_fee_pct = pct;
        self
    }

    /// Validate the whole configuration.
    ///
    /// Called once by the engine constructor; the simulation loop assumes
    /// a validated config.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capital <= 0.0 || !self.initial_capital.is_finite() {
            return Err(VaultbtError::invalid_config(
                "initial_capital must be > 0",
            ));
        }
        if self.taker_fee_pct < 0.0 || !self.taker_fee_pct.is_finite() {
            return Err(VaultbtError::invalid_config("taker_fee_pct must be >= 0"));
        }
        if self.end_date < self.start_date {
            return Err(VaultbtError::DateRange {
                start: self.start_date.to_string(),
                end: self.end_date.to_string(),
            });
        }
        self.strategy.validate()
    }

    /// Number of simulated days (one per calendar day, inclusive range).
    pub fn num_days(&self) -> usize {
        (self.end_date - self.start_date).num_days() as usize + 1
    }
}

fn validate_fraction(field: &str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(VaultbtError::invalid_config(format!(
            "{field} must be within (0, 1], got {value}"
        )))
    }
}

fn validate_positive(field: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(VaultbtError::invalid_config(format!(
            "{field} must be > 0, got {value}"
        )))
    }
}
