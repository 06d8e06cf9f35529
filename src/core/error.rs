//! Error types for vaultbt.

use thiserror::Error;

/// Result type alias for vaultbt operations.
pub type Result<T> = std::result::Result<T, VaultbtError>;

/// Error types for the backtesting engine.
#[derive(Error, Debug)]
pub enum VaultbtError {
    /// Strategy name outside the closed set of known strategies.
    #[error("Unknown strategy: {name}")]
    UnknownStrategy { name: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Empty data error.
    #[error("Empty data provided for {context}")]
    EmptyData { context: String },

    /// Backwards or degenerate date range.
    #[error("Invalid date range: {start} to {end}")]
    DateRange { start: String, end: String },
}

impl VaultbtError {
    /// Create an unknown strategy error.
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy { name: name.into() }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an empty data error.
    pub fn empty_data(context: impl Into<String>) -> Self {
        Self::EmptyData {
            context: context.into(),
        }
    }
}
