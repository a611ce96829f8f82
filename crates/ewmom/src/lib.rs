#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ewmom/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ewmom
//!
//! EWMA crossover momentum signal normalized by EWM volatility.
//!
//! ewmom is an umbrella crate that re-exports the ewmom sub-crates and
//! exposes the single-call entry point [`momentum`]: a caller keeps a rolling
//! window of observations (prices or volumes, oldest first) and asks for the
//! signal at the newest one.
//!
//! ## Quick Start
//!
//! ```
//! use ewmom::{EwmaCrossoverConfig, momentum};
//!
//! # fn main() -> ewmom::Result<()> {
//! let window: Vec<f64> = (1..=10).map(f64::from).collect();
//!
//! // fast=10, slow=5, vol_look_back=5, min_periods=5, adjust=false
//! let signal = momentum(&window, &EwmaCrossoverConfig::default())?;
//! assert_eq!(signal, -0.724_178_2_f32);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core definitions ([`Signal`], [`MarketData`], errors)
//! - [`stats`] - Exponentially weighted mean, variance and standard deviation
//! - [`signals`] - The crossover momentum signal and the signal registry
//!
//! ## Computation
//!
//! For observations `x` (index 0 oldest):
//!
//! ```text
//! crossover[i] = ewma(x, fast)[i] - ewma(x, slow)[i]
//! signal[i]    = crossover[i] / ewm_std(x, vol_look_back)[i]
//! ```
//!
//! The call returns `signal[last]` as `f32`. Too few observations give NaN;
//! a zero volatility gives NaN or an infinity. Neither is an error.

/// Version information for the ewmom crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core trait definitions for ewmom.
///
/// This module re-exports the foundational pieces of the ewmom API:
///
/// - [`Signal`] - Maps an observation series to an index-aligned signal series
/// - [`MarketData`] - Long-format frame scored per symbol
/// - [`MomentumError`] - Error type shared by every crate
pub mod traits {
    pub use ewmom_traits::*;
}

/// Exponentially weighted statistics.
///
/// See [`ewmom_traits::stats`] for the exact recursions.
pub mod stats {
    pub use ewmom_traits::stats::*;
}

// Re-export core traits at top level for convenience
pub use ewmom_traits::Signal;

// Re-export error types
pub use ewmom_traits::{MomentumError, Result};

// Re-export common types
pub use ewmom_traits::types::{Date, MarketData, Symbol};

// ============================================================================
// Signal Implementations
// ============================================================================

/// Signal implementations.
///
/// ## Momentum
///
/// - **EwmaCrossoverMomentum**: EWMA crossover over EWM volatility, on prices
///   or on volume
///
/// ## Registry
///
/// - **available_signals**: Metadata for every configured signal
/// - **get_signal_info**: Lookup by name or alias
///
/// # Example
///
/// ```
/// use ewmom::signals::momentum::{EwmaCrossoverConfig, EwmaCrossoverMomentum};
/// use ewmom::Signal;
///
/// let signal = EwmaCrossoverMomentum::volume(EwmaCrossoverConfig::default());
/// assert_eq!(signal.input_column(), "volume");
/// ```
pub mod signals {
    pub use ewmom_signals::*;
}

pub use ewmom_signals::momentum::{
    EwmaCrossoverConfig, EwmaCrossoverMomentum, MomentumSeries, momentum,
};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use ewmom::prelude::*;
/// ```
///
/// This brings into scope:
/// - Core trait: [`Signal`]
/// - Signal types: [`EwmaCrossoverMomentum`], [`EwmaCrossoverConfig`], [`MomentumSeries`]
/// - Common types: [`MarketData`], [`Symbol`], [`Date`]
/// - Error types: [`Result`], [`MomentumError`]
pub mod prelude {
    pub use crate::{Date, MarketData, Symbol};
    pub use crate::{EwmaCrossoverConfig, EwmaCrossoverMomentum, MomentumSeries, momentum};
    pub use crate::{MomentumError, Result, Signal};
}

// ============================================================================
// Tests
// ============================================================================
