//! Trade execution costs for vaultbt.

pub mod fees;

pub use fees::TakerFee;
