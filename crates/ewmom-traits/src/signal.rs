//! Signal trait for single-series trading signals.
//!
//! A [`Signal`] maps an ordered observation sequence (oldest first) to an
//! index-aligned signal series. The value at the last index is what a caller
//! acts on; the full series is available for inspection and testing.
//!
//! Scoring a [`MarketData`] frame is a provided method: each symbol's history
//! is extracted up to a date and evaluated independently.

use crate::{Date, MarketData, MomentumError, Result};
use polars::prelude::*;
use tracing::debug;

/// A trading signal computed from one observation series.
///
/// Implementations must be thread-safe (`Send + Sync`) and stateless: every
/// call sees only the observations it is given.
///
/// # Example
///
/// ```
/// use ewmom_traits::{Result, Signal};
///
/// struct LastValue;
///
/// impl Signal for LastValue {
///     fn name(&self) -> &str {
///         "last_value"
///     }
///
///     fn evaluate_series(&self, observations: &[f64]) -> Result<Vec<f64>> {
///         Ok(observations.to_vec())
///     }
///
///     fn min_periods(&self) -> usize {
///         1
///     }
/// }
///
/// assert_eq!(LastValue.evaluate(&[1.0, 2.0]).unwrap(), 2.0);
/// ```
pub trait Signal: Send + Sync {
    /// Returns the name of this signal.
    ///
    /// The name should be unique and descriptive, as it's used for
    /// identification in logging and result storage.
    fn name(&self) -> &str;

    /// Computes the signal at every index of `observations`.
    ///
    /// The output has the same length as the input. Positions where the
    /// signal is not yet defined hold NaN.
    ///
    /// # Errors
    ///
    /// Returns an error if the observations or the signal parameters are
    /// invalid (for example an empty sequence).
    fn evaluate_series(&self, observations: &[f64]) -> Result<Vec<f64>>;

    /// Minimum number of valid observations before the signal is defined.
    fn min_periods(&self) -> usize;

    /// Computes the signal at the last index of `observations`.
    ///
    /// # Errors
    ///
    /// Returns [`MomentumError::InvalidInput`] for an empty sequence, or any
    /// error raised by [`Signal::evaluate_series`].
    fn evaluate(&self, observations: &[f64]) -> Result<f64> {
        self.evaluate_series(observations)?
            .last()
            .copied()
            .ok_or_else(|| {
                MomentumError::InvalidInput("observation sequence must not be empty".to_string())
            })
    }

    /// Name of the market data column this signal reads.
    fn input_column(&self) -> &str {
        "close"
    }

    /// Columns that must be present in market data for [`Signal::score`].
    fn required_columns(&self) -> [&str; 3] {
        ["symbol", "date", self.input_column()]
    }

    /// Computes the signal for every symbol in `data` as of `date`.
    ///
    /// Each symbol's history of [`Signal::input_column`] up to and including
    /// `date` is evaluated independently. Symbols without any rows up to the
    /// date are skipped; symbols with too few observations score NaN.
    ///
    /// Returns a DataFrame with a `symbol` and a `score` column.
    ///
    /// # Errors
    ///
    /// Returns an error if required columns are missing, if no symbol has
    /// data up to `date`, or if evaluation fails.
    fn score(&self, data: &MarketData, date: Date) -> Result<DataFrame> {
        for col in self.required_columns() {
            if !data.has_column(col) {
                return Err(MomentumError::MissingColumn(col.to_string()));
            }
        }

        if data.is_empty() {
            return Err(MomentumError::InsufficientData(
                "market data has no rows".to_string(),
            ));
        }

        let symbols = data.symbols()?;
        let mut result_symbols = Vec::with_capacity(symbols.len());
        let mut result_scores = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            let history = data.history(&symbol, self.input_column(), date)?;
            if history.is_empty() {
                continue;
            }

            let score = self.evaluate(&history)?;
            debug!(
                signal = self.name(),
                symbol = %symbol,
                observations = history.len(),
                score,
                "scored symbol"
            );

            result_symbols.push(symbol);
            result_scores.push(score);
        }

        if result_symbols.is_empty() {
            return Err(MomentumError::InsufficientData(format!(
                "No data available up to date {date}"
            )));
        }

        let result = df! {
            "symbol" => result_symbols,
            "score" => result_scores,
        }?;

        Ok(result)
    }
}
