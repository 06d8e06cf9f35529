//! Price data generation for vaultbt.

pub mod random_walk;

pub use random_walk::{PriceSeries, RandomWalkParams, DEFAULT_SEED};
