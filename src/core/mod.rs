//! Core types and utilities for vaultbt.

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    AlwaysGainConfig, EngineConfig, MaCrossoverConfig, RsiMomentumConfig, StrategyConfig,
};
pub use error::{Result, VaultbtError};
pub use types::*;
