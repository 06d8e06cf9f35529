//! Day-by-day backtest simulation engine.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::config::EngineConfig;
use crate::core::error::{Result, VaultbtError};
use crate::core::types::{BacktestRun, DayRecord, Price, TradeAction, TradeRecord};
use crate::data::{PriceSeries, RandomWalkParams, DEFAULT_SEED};
use crate::execution::TakerFee;
use crate::metrics::PerformanceSummary;
use crate::portfolio::state::PortfolioState;
use crate::strategies::{DayContext, Signal, Sizing, Strategy};

/// Backtest simulation engine.
///
/// Walks a daily price series forward, asks the configured strategy for
/// at most one signal per day, and mutates a single [`PortfolioState`]
/// while appending to the trade history and the per-day ledger. Single
/// pass, strictly sequential: each day depends only on the previous
/// day's state.
#[derive(Debug)]
pub struct BacktestEngine {
    config: EngineConfig,
    fee: TakerFee,
}

impl BacktestEngine {
    /// Create an engine from a configuration, validating it once.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let fee = TakerFee::percent(config.taker_fee_pct);
        Ok(Self { config, fee })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the backtest over an internally generated price series.
    ///
    /// The series comes from the seeded random-walk generator, so two
    /// runs with identical configuration produce identical results.
    pub fn run_backtest(&self) -> Result<BacktestRun> {
        let series = PriceSeries::random_walk(
            self.config.start_date,
            self.config.end_date,
            DEFAULT_SEED,
            RandomWalkParams::default(),
        )?;
        self.run_on_series(&series)
    }

    /// Run the backtest over a caller-owned price series.
    pub fn run_on_series(&self, series: &PriceSeries) -> Result<BacktestRun> {
        if series.is_empty() {
            return Err(VaultbtError::empty_data("price series"));
        }

        let mut strategy = Strategy::from_config(&self.config.strategy)?;
        let mut state = PortfolioState::new(self.config.initial_capital);
        let mut days: Vec<DayRecord> = Vec::with_capacity(series.len());
        let mut trades: Vec<TradeRecord> = Vec::new();

        debug!(
            strategy = self.config.strategy.name(),
            days = series.len(),
            initial_capital = self.config.initial_capital,
            "starting backtest"
        );

        // Day 0 seeds the ledger before any rule can fire.
        days.push(DayRecord::new(
            series.dates[0],
            series.closes[0],
            state.cash,
            state.holdings,
            state.vault,
        ));

        for i in 1..series.len() {
            let price = series.closes[i];
            let date = series.dates[i];
            let ctx = DayContext {
                day: i,
                price,
                prev_price: series.closes[i - 1],
                in_position: state.in_position,
                entry_price: state.entry_price,
            };

            // At most one action per day; a signal the portfolio cannot
            // fund degrades to a no-op and the state carries forward.
            match strategy.decide(&ctx) {
                Some(Signal::Enter(sizing)) if !state.in_position => {
                    self.execute_buy(&mut state, &mut trades, sizing, date, price);
                }
                Some(Signal::Exit) if state.in_position => {
                    let alloc_pct = strategy.vault_allocation_pct();
                    self.execute_sell(&mut state, &mut trades, alloc_pct, date, price);
                }
                _ => {}
            }

            days.push(DayRecord::new(
                date,
                price,
                state.cash,
                state.holdings,
                state.vault,
            ));
        }

        let performance = PerformanceSummary::from_run(&days, &trades);
        debug!(
            trades = trades.len(),
            final_value = performance.final_value,
            "backtest finished"
        );

        Ok(BacktestRun {
            strategy_name: self.config.strategy.name().to_string(),
            days,
            trades,
            config: self.config.clone(),
            performance,
        })
    }

    /// Open a position: commit a fraction of cash, pay the taker fee.
    fn execute_buy(
        &self,
        state: &mut PortfolioState,
        trades: &mut Vec<TradeRecord>,
        sizing: Sizing,
        date: NaiveDate,
        price: Price,
    ) {
        let mut spend = state.cash * sizing.cash_fraction;
        if let Some(cap) = sizing.max_value {
            spend = spend.min(cap);
        }
        if spend <= 0.0 || price <= 0.0 {
            return;
        }

        let fee = self.fee.fee_on(spend);
        if spend + fee > state.cash {
            // Unfundable signal: no trade happened today.
            return;
        }

        let quantity = spend / price;
        state.cash -= spend + fee;
        state.holdings += quantity;
        state.entry_price = price;
        state.in_position = true;

        debug!(%date, price, quantity, value = spend, fee, "buy");
        trades.push(TradeRecord {
            date,
            action: TradeAction::Buy,
            price,
            quantity,
            value: spend,
            fee,
            profit: None,
            vault_contribution: None,
        });
    }

    /// Close the position: realize profit, divert the vault slice.
    fn execute_sell(
        &self,
        state: &mut PortfolioState,
        trades: &mut Vec<TradeRecord>,
        vault_allocation_pct: f64,
        date: NaiveDate,
        price: Price,
    ) {
        let quantity = state.holdings;
        if quantity <= 0.0 {
            return;
        }

        let revenue = quantity * price;
        let fee = self.fee.fee_on(revenue);
        let gross_profit = revenue - quantity * state.entry_price;

        // Vault slice of gross profit, capped at half the profit.
        let vault_contribution = if gross_profit > 0.0 && vault_allocation_pct > 0.0 {
            (gross_profit * vault_allocation_pct / 100.0).min(0.5 * gross_profit)
        } else {
            0.0
        };

        state.cash += revenue - fee - vault_contribution;
        state.vault += vault_contribution;
        state.holdings = 0.0;
        state.in_position = false;

        debug!(
            %date,
            price,
            quantity,
            profit = gross_profit,
            vault_contribution,
            "sell"
        );
        trades.push(TradeRecord {
            date,
            action: TradeAction::Sell,
            price,
            quantity,
            value: revenue,
            fee,
            profit: Some(gross_profit),
            vault_contribution: (vault_contribution > 0.0).then_some(vault_contribution),
        });
    }
}
