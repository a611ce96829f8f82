//! Error types for the ewmom crates.
//!
//! Hard failures (bad parameters, empty input, malformed frames or config) are
//! reported through [`MomentumError`]. Soft failures such as too few valid
//! observations or a zero volatility estimate are not errors: they surface as
//! NaN or infinite values following IEEE-754 arithmetic.

use thiserror::Error;

/// The main error type for ewmom operations.
#[derive(Debug, Error)]
pub enum MomentumError {
    /// The observation sequence or a parameter was rejected before computation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No data was available for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A required column is missing from the market data.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A configuration document could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A signal name did not match any registered signal.
    #[error("Signal not found: {0}")]
    SignalNotFound(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error parsing or writing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ewmom operations.
///
/// This is a convenience type that uses [`MomentumError`] as the error type.
pub type Result<T> = std::result::Result<T, MomentumError>;
