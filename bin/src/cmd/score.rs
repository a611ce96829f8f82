//! Score command implementation.

use crate::{InputArgs, OutputFormat, ParamArgs, data, signals};
use anyhow::Result;
use ewmom_traits::Signal;
use serde_json::json;

/// Compute and print the signal at the last observation.
pub(crate) fn show_score(input: &InputArgs, params: &ParamArgs, format: OutputFormat) -> Result<()> {
    let config = params.to_config()?;
    let signal = signals::create_signal(&input.signal, config)?;
    let observations = data::load_observations(input)?;
    let value = signal.compute(&observations)?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "signal": signal.name(),
                "observations": observations.len(),
                "config": signal.config(),
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            let config = signal.config();
            println!("Signal:        {}", signal.name());
            println!("Observations:  {}", observations.len());
            println!(
                "Parameters:    fast={} slow={} vol_look_back={} min_periods={} adjust={}",
                config.fast, config.slow, config.vol_look_back, config.min_periods, config.adjust
            );
            println!("Value:         {value:.6}");

            if value.is_nan() && observations.len() < config.min_periods {
                println!(
                    "\nNote: {} observations given, {} required before the signal is defined.",
                    observations.len(),
                    config.min_periods
                );
            }
        }
    }

    Ok(())
}
