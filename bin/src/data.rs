//! Observation loading for the ewmom CLI.

use std::io::Read;
use std::path::Path;

use ewmom_traits::MomentumError;
use tracing::debug;

use crate::InputArgs;

/// Load observations from the command line, a JSON file or stdin.
///
/// Values given on the command line win; otherwise `--input` is read, and
/// with neither the JSON array is read from stdin.
pub(crate) fn load_observations(input: &InputArgs) -> Result<Vec<f64>, MomentumError> {
    let observations = if !input.values.is_empty() {
        input.values.clone()
    } else if let Some(path) = &input.input {
        read_observations(path)?
    } else {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        parse_observations(&text)?
    };

    debug!(count = observations.len(), "loaded observations");
    Ok(observations)
}

/// Read a JSON array of observations from a file.
pub(crate) fn read_observations(path: &Path) -> Result<Vec<f64>, MomentumError> {
    let text = std::fs::read_to_string(path)?;
    parse_observations(&text)
}

/// Parse a JSON array of observations. `null` entries are missing values.
pub(crate) fn parse_observations(text: &str) -> Result<Vec<f64>, MomentumError> {
    let values: Vec<Option<f64>> = serde_json::from_str(text)?;
    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}
