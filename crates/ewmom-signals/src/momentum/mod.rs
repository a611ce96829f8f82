//! Momentum signals built from exponentially weighted statistics.
//!
//! The EWMA crossover signal compares two exponentially weighted averages of
//! different spans and scales their difference by an exponentially weighted
//! volatility estimate, giving a risk-adjusted trend strength per observation.

mod crossover;

pub use crossover::{
    EwmaCrossoverConfig, EwmaCrossoverMomentum, MomentumSeries, PRICE_SIGNAL_NAME,
    VOLUME_SIGNAL_NAME, momentum,
};
