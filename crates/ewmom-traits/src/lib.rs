#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ewmom/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the ewmom momentum signal.
//!
//! This crate provides the foundational pieces every ewmom signal is built
//! from: the [`Signal`] trait, the [`MarketData`] container, the shared error
//! type and the exponentially weighted statistics in [`stats`].

/// The version of the ewmom-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod signal;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{MomentumError, Result};
pub use signal::Signal;
pub use stats::EwmOptions;
pub use types::{Date, MarketData, Symbol};
