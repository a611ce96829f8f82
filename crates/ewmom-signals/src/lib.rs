//! Signal implementations for the ewmom crates.
//!
//! This crate provides the EWMA crossover momentum signal and a registry
//! describing the configured variants:
//! - Price momentum: crossover of close-price EWMAs over EWM volatility
//! - Volume momentum: the same computation applied to traded volume
//!
//! # Example
//!
//! ```
//! use ewmom_signals::momentum::{EwmaCrossoverConfig, momentum};
//! use ewmom_signals::registry::available_signals;
//!
//! let prices: Vec<f64> = (1..=10).map(f64::from).collect();
//! let value = momentum(&prices, &EwmaCrossoverConfig::default()).unwrap();
//! assert!(value.is_finite());
//!
//! // Discover available signals
//! let signals = available_signals();
//! assert!(!signals.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod momentum;
pub mod registry;

// Re-export key types
pub use registry::{SignalCategory, SignalInfo};
