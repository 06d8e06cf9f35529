//! Technical indicators for vaultbt.
//!
//! These are the incremental forms the day-by-day loop needs: each
//! tracker is fed one observation per day and yields `None` until its
//! warmup window fills.

pub mod momentum;
pub mod trend;

pub use momentum::RsiWindow;
pub use trend::RollingMean;
