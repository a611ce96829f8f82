//! Signal creation utilities for the ewmom CLI.

use ewmom_signals::{
    SignalCategory,
    momentum::{EwmaCrossoverConfig, EwmaCrossoverMomentum},
    registry::get_signal_info,
};
use ewmom_traits::MomentumError;

/// Create a signal by name or alias with the given parameters.
pub(crate) fn create_signal(
    name: &str,
    config: EwmaCrossoverConfig,
) -> Result<EwmaCrossoverMomentum, MomentumError> {
    let info = get_signal_info(name).ok_or_else(|| {
        MomentumError::SignalNotFound(format!(
            "Unknown signal: '{name}'. Use 'ewmom signals' to list available signals."
        ))
    })?;

    config.validate()?;

    let signal = match info.category {
        SignalCategory::Price => EwmaCrossoverMomentum::new(config),
        SignalCategory::Volume => EwmaCrossoverMomentum::volume(config),
    };
    Ok(signal)
}
