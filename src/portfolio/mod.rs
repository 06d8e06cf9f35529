//! Portfolio simulation: engine, state, and multi-strategy sweeps.

pub mod engine;
pub mod state;
pub mod sweep;

pub use engine::BacktestEngine;
pub use state::PortfolioState;
pub use sweep::run_strategies;
