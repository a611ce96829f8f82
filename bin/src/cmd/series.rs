//! Series command implementation.

use crate::{InputArgs, OutputFormat, ParamArgs, data, signals};
use anyhow::Result;
use ewmom_signals::momentum::MomentumSeries;
use ewmom_traits::Signal;
use serde_json::{Value, json};

/// Compute and print every intermediate series.
pub(crate) fn show_series(
    input: &InputArgs,
    params: &ParamArgs,
    format: OutputFormat,
) -> Result<()> {
    let config = params.to_config()?;
    let signal = signals::create_signal(&input.signal, config)?;
    let observations = data::load_observations(input)?;
    let series = signal.series(&observations)?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "signal": signal.name(),
                "config": signal.config(),
                "rows": rows(&observations, &series),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!(
                "{:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
                "index", "value", "fast_ewma", "slow_ewma", "crossover", "volatility", "signal"
            );
            println!("{}", "─".repeat(84));

            for (i, value) in observations.iter().enumerate() {
                println!(
                    "{:>6} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                    i,
                    value,
                    series.fast_ewma[i],
                    series.slow_ewma[i],
                    series.crossover[i],
                    series.volatility[i],
                    series.signal[i]
                );
            }
        }
    }

    Ok(())
}

/// One JSON object per observation. Undefined values serialize as `null`.
fn rows(observations: &[f64], series: &MomentumSeries) -> Vec<Value> {
    observations
        .iter()
        .enumerate()
        .map(|(i, value)| {
            json!({
                "index": i,
                "value": value,
                "fast_ewma": series.fast_ewma[i],
                "slow_ewma": series.slow_ewma[i],
                "crossover": series.crossover[i],
                "volatility": series.volatility[i],
                "signal": series.signal[i],
            })
        })
        .collect()
}
