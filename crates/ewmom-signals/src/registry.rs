//! Signal registry for discovering the configured momentum signals.
//!
//! This module provides metadata and lookup by name or alias for every signal
//! in the ewmom-signals library.

use serde::Serialize;

use crate::momentum::{PRICE_SIGNAL_NAME, VOLUME_SIGNAL_NAME};

/// Classification by the series a signal reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignalCategory {
    /// Signals computed on traded prices
    Price,
    /// Signals computed on traded volume
    Volume,
}

impl SignalCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Price => "Trend signals computed on the traded price series",
            Self::Volume => "Activity signals computed on the traded volume series",
        }
    }
}

/// Metadata about a signal.
#[derive(Debug, Clone, Serialize)]
pub struct SignalInfo {
    /// Unique identifier for the signal
    pub name: &'static str,

    /// Alternative names accepted on lookup
    pub aliases: &'static [&'static str],

    /// Category classification
    pub category: SignalCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Market data column the signal reads
    pub input_column: &'static str,

    /// Observations needed with the default configuration
    pub min_periods: usize,
}

impl SignalInfo {
    /// Whether `name` is this signal's name or one of its aliases.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

/// Get information about all available signals.
#[must_use]
pub fn available_signals() -> Vec<SignalInfo> {
    vec![
        SignalInfo {
            name: PRICE_SIGNAL_NAME,
            aliases: &["momentum", "mom"],
            category: SignalCategory::Price,
            description: "EWMA(10) - EWMA(5) of prices over EWM volatility(5)",
            input_column: "close",
            min_periods: 5,
        },
        SignalInfo {
            name: VOLUME_SIGNAL_NAME,
            aliases: &["volume_momentum", "vol_mom"],
            category: SignalCategory::Volume,
            description: "EWMA(10) - EWMA(5) of volume over EWM volatility(5)",
            input_column: "volume",
            min_periods: 5,
        },
    ]
}

/// Get all signals in a specific category.
#[must_use]
pub fn signals_by_category(category: &SignalCategory) -> Vec<SignalInfo> {
    available_signals()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific signal by name or alias.
#[must_use]
pub fn get_signal_info(name: &str) -> Option<SignalInfo> {
    available_signals()
        .into_iter()
        .find(|info| info.matches(name))
}
