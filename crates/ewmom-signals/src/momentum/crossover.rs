//! EWMA crossover momentum normalized by EWM volatility.

use std::path::Path;

use ewmom_traits::{
    EwmOptions, MomentumError, Result, Signal,
    stats::{ewm_mean, ewm_std},
};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Registered name of the momentum signal on prices.
pub const PRICE_SIGNAL_NAME: &str = "ewma_crossover_momentum";

/// Registered name of the momentum signal on traded volume.
pub const VOLUME_SIGNAL_NAME: &str = "ewma_crossover_volume_momentum";

/// Configuration for the EWMA crossover momentum signal.
///
/// The crossover is always `ewma(fast) - ewma(slow)`. With the defaults the
/// span named `fast` is the longer one, so the first leg reacts more slowly
/// than the second. Swapping the two spans flips the sign of every signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EwmaCrossoverConfig {
    /// Span of the first EWMA leg (default: 10).
    pub fast: usize,

    /// Span of the second EWMA leg (default: 5).
    pub slow: usize,

    /// Span of the EWM standard deviation used as volatility (default: 5).
    pub vol_look_back: usize,

    /// Valid observations required before any leg is defined (default: 5).
    pub min_periods: usize,

    /// Use finite-sample adjusted weights instead of the recursion (default: false).
    pub adjust: bool,

    /// Skip missing observations when decaying weights (default: false).
    pub ignore_na: bool,

    /// Market data column read when scoring frames (default: "close").
    pub column: String,
}

impl Default for EwmaCrossoverConfig {
    fn default() -> Self {
        Self {
            fast: 10,
            slow: 5,
            vol_look_back: 5,
            min_periods: 5,
            adjust: false,
            ignore_na: false,
            column: "close".to_string(),
        }
    }
}

impl EwmaCrossoverConfig {
    /// Check that every span and `min_periods` is positive.
    ///
    /// # Errors
    ///
    /// Returns [`MomentumError::InvalidInput`] naming the first zero parameter,
    /// or [`MomentumError::Config`] for an empty column name.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("fast", self.fast),
            ("slow", self.slow),
            ("vol_look_back", self.vol_look_back),
            ("min_periods", self.min_periods),
        ] {
            if value == 0 {
                return Err(MomentumError::InvalidInput(format!(
                    "{name} must be a positive integer"
                )));
            }
        }
        if self.column.is_empty() {
            return Err(MomentumError::Config(
                "column must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a JSON document. Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, unknown fields or invalid values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn ewm_options(&self, span: usize) -> EwmOptions {
        EwmOptions::new(span)
            .with_min_periods(self.min_periods)
            .with_adjust(self.adjust)
            .with_ignore_na(self.ignore_na)
    }
}

/// Index-aligned intermediate and final values of a momentum computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumSeries {
    /// EWMA with span `fast`.
    pub fast_ewma: Array1<f64>,
    /// EWMA with span `slow`.
    pub slow_ewma: Array1<f64>,
    /// `fast_ewma - slow_ewma`.
    pub crossover: Array1<f64>,
    /// EWM standard deviation with span `vol_look_back`.
    pub volatility: Array1<f64>,
    /// `crossover / volatility`.
    pub signal: Array1<f64>,
}

impl MomentumSeries {
    /// Number of positions in the series.
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Signal at the last position, NaN for an empty series.
    pub fn last(&self) -> f64 {
        self.signal.iter().next_back().copied().unwrap_or(f64::NAN)
    }
}

/// Momentum signal: EWMA crossover divided by EWM volatility.
///
/// For every index `i` of the observations (oldest first):
///
/// ```text
/// crossover[i] = ewma(x, fast)[i] - ewma(x, slow)[i]
/// signal[i]    = crossover[i] / ewm_std(x, vol_look_back)[i]
/// ```
///
/// Positions with fewer than `min_periods` valid observations are NaN. A zero
/// volatility is divided through as-is, giving NaN or an infinity.
///
/// # Example
///
/// ```
/// use ewmom_signals::momentum::EwmaCrossoverMomentum;
///
/// let prices: Vec<f64> = (1..=10).map(f64::from).collect();
/// let signal = EwmaCrossoverMomentum::default();
/// let value = signal.compute(&prices).unwrap();
/// assert!(value < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EwmaCrossoverMomentum {
    config: EwmaCrossoverConfig,
    name: &'static str,
}

impl EwmaCrossoverMomentum {
    /// Create a momentum signal with the given configuration.
    #[must_use]
    pub const fn new(config: EwmaCrossoverConfig) -> Self {
        Self {
            config,
            name: PRICE_SIGNAL_NAME,
        }
    }

    /// Create a momentum signal, rejecting invalid parameters up front.
    ///
    /// # Errors
    ///
    /// Returns the error from [`EwmaCrossoverConfig::validate`].
    pub fn try_new(config: EwmaCrossoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a momentum signal that reads the `volume` column.
    #[must_use]
    pub fn volume(config: EwmaCrossoverConfig) -> Self {
        Self {
            config: EwmaCrossoverConfig {
                column: "volume".to_string(),
                ..config
            },
            name: VOLUME_SIGNAL_NAME,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &EwmaCrossoverConfig {
        &self.config
    }

    /// Compute every intermediate series over `observations`.
    ///
    /// # Errors
    ///
    /// Returns [`MomentumError::InvalidInput`] for an empty sequence or a zero
    /// span or `min_periods`.
    pub fn series(&self, observations: &[f64]) -> Result<MomentumSeries> {
        self.config.validate()?;
        if observations.is_empty() {
            return Err(MomentumError::InvalidInput(
                "observation sequence must not be empty".to_string(),
            ));
        }

        let fast_ewma = ewm_mean(observations, &self.config.ewm_options(self.config.fast))?;
        let slow_ewma = ewm_mean(observations, &self.config.ewm_options(self.config.slow))?;
        let crossover = &fast_ewma - &slow_ewma;
        let volatility = ewm_std(
            observations,
            &self.config.ewm_options(self.config.vol_look_back),
            false,
        )?;
        let signal = &crossover / &volatility;

        Ok(MomentumSeries {
            fast_ewma,
            slow_ewma,
            crossover,
            volatility,
            signal,
        })
    }

    /// Compute the signal at the last observation, as `f32`.
    ///
    /// Returns NaN when fewer than `min_periods` valid observations exist.
    ///
    /// # Errors
    ///
    /// See [`Self::series`].
    pub fn compute(&self, observations: &[f64]) -> Result<f32> {
        Ok(self.evaluate(observations)? as f32)
    }
}

impl Default for EwmaCrossoverMomentum {
    fn default() -> Self {
        Self::new(EwmaCrossoverConfig::default())
    }
}

impl Signal for EwmaCrossoverMomentum {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate_series(&self, observations: &[f64]) -> Result<Vec<f64>> {
        Ok(self.series(observations)?.signal.to_vec())
    }

    fn evaluate(&self, observations: &[f64]) -> Result<f64> {
        let series = self.series(observations)?;
        let value = series.last();

        if series.volatility.iter().next_back() == Some(&0.0) {
            warn!(
                signal = self.name,
                observations = observations.len(),
                "volatility estimate is zero, signal is not finite"
            );
        }
        debug!(
            signal = self.name,
            observations = observations.len(),
            value,
            "computed momentum"
        );

        Ok(value)
    }

    fn min_periods(&self) -> usize {
        self.config.min_periods
    }

    fn input_column(&self) -> &str {
        &self.config.column
    }
}

/// Compute the momentum signal for `observations` with the given configuration.
///
/// This is the single-call entry point: one window of observations in, one
/// `f32` signal value out.
///
/// # Errors
///
/// Returns [`MomentumError::InvalidInput`] for an empty sequence or a zero
/// span or `min_periods`.
///
/// # Example
///
/// ```
/// use ewmom_signals::momentum::{EwmaCrossoverConfig, momentum};
///
/// let prices = [1.0, 2.0, 3.0];
/// let value = momentum(&prices, &EwmaCrossoverConfig::default()).unwrap();
/// assert!(value.is_nan());
/// ```
pub fn momentum(observations: &[f64], config: &EwmaCrossoverConfig) -> Result<f32> {
    EwmaCrossoverMomentum::new(config.clone()).compute(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ewmom_traits::{Date, MarketData};
    use polars::prelude::*;

    fn ramp() -> Vec<f64> {
        (1..=10).map(f64::from).collect()
    }

    #[test]
    fn test_default_config() {
        let config = EwmaCrossoverConfig::default();
        assert_eq!(config.fast, 10);
        assert_eq!(config.slow, 5);
        assert_eq!(config.vol_look_back, 5);
        assert_eq!(config.min_periods, 5);
        assert!(!config.adjust);
        assert!(!config.ignore_na);
        assert_eq!(config.column, "close");
    }

    #[test]
    fn test_reference_value() {
        let value = momentum(&ramp(), &EwmaCrossoverConfig::default()).unwrap();
        assert_eq!(value, -0.724_178_204_393_494_6_f64 as f32);

        let series = EwmaCrossoverMomentum::default().series(&ramp()).unwrap();
        assert_relative_eq!(series.last(), -0.724_178_204_393_494_6, max_relative = 1e-12);
        assert_relative_eq!(series.fast_ewma[9], 6.239_368_480_121_215, max_relative = 1e-12);
        assert_relative_eq!(series.slow_ewma[9], 8.052_024_589_747_498, max_relative = 1e-12);
        assert_relative_eq!(series.volatility[9], 2.503_052_561_688_733, max_relative = 1e-12);
    }

    #[test]
    fn test_reference_value_adjusted() {
        let config = EwmaCrossoverConfig {
            adjust: true,
            ..Default::default()
        };
        let series = EwmaCrossoverMomentum::new(config).series(&ramp()).unwrap();
        assert_relative_eq!(series.last(), -0.487_880_157_401_019_03, max_relative = 1e-12);
        assert_relative_eq!(series.signal[4], -0.244_743_714_011_997_24, max_relative = 1e-12);
    }

    #[test]
    fn test_series_is_index_aligned() {
        let series = EwmaCrossoverMomentum::default().series(&ramp()).unwrap();
        assert_eq!(series.len(), 10);
        assert!(series.signal.iter().take(4).all(|s| s.is_nan()));
        assert_relative_eq!(series.signal[4], -0.509_190_664_464_508_4, max_relative = 1e-12);

        for i in 4..series.len() {
            assert_relative_eq!(
                series.crossover[i],
                series.fast_ewma[i] - series.slow_ewma[i],
                max_relative = 1e-15
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let prices = ramp();
        let first = momentum(&prices, &EwmaCrossoverConfig::default()).unwrap();
        for _ in 0..10 {
            let again = momentum(&prices, &EwmaCrossoverConfig::default()).unwrap();
            assert_eq!(first.to_bits(), again.to_bits());
        }
    }

    #[test]
    fn test_swapping_spans_flips_sign() {
        let swapped = EwmaCrossoverConfig {
            fast: 5,
            slow: 10,
            ..Default::default()
        };
        let original = EwmaCrossoverMomentum::default().series(&ramp()).unwrap();
        let flipped = EwmaCrossoverMomentum::new(swapped).series(&ramp()).unwrap();

        for i in 4..original.len() {
            assert_eq!(flipped.crossover[i], -original.crossover[i]);
        }
        assert_relative_eq!(flipped.last(), 0.724_178_204_393_494_6, max_relative = 1e-12);
    }

    #[test]
    fn test_rising_prices_shorter_first_span_positive() {
        let config = EwmaCrossoverConfig {
            fast: 3,
            slow: 8,
            ..Default::default()
        };
        let series = EwmaCrossoverMomentum::new(config).series(&ramp()).unwrap();
        assert!(series.crossover.iter().skip(4).all(|&c| c > 0.0));
        assert!(series.signal.iter().skip(4).all(|&s| s > 0.0));
    }

    #[test]
    fn test_constant_prices_are_nan() {
        let prices = [42.0; 12];
        let series = EwmaCrossoverMomentum::default().series(&prices).unwrap();

        assert!(series.crossover.iter().skip(4).all(|&c| c == 0.0));
        assert!(series.volatility.iter().skip(4).all(|&v| v == 0.0));
        assert!(series.signal.iter().all(|s| s.is_nan()));
        assert!(momentum(&prices, &EwmaCrossoverConfig::default()).unwrap().is_nan());
    }

    #[test]
    fn test_short_input_is_nan() {
        let value = momentum(&[1.0, 2.0, 3.0, 4.0], &EwmaCrossoverConfig::default()).unwrap();
        assert!(value.is_nan());

        let value = momentum(&[7.5], &EwmaCrossoverConfig::default()).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_missing_observations_do_not_count() {
        let mut prices = ramp();
        prices[2] = f64::NAN;
        prices[3] = f64::NAN;
        let series = EwmaCrossoverMomentum::default().series(&prices).unwrap();

        // Row six is the first with five valid observations.
        assert!(series.signal.iter().take(6).all(|s| s.is_nan()));
        assert_relative_eq!(series.fast_ewma[6], 3.593_442_747_258_784, max_relative = 1e-12);
        assert_relative_eq!(series.slow_ewma[6], 5.122_004_357_298_474, max_relative = 1e-12);
        assert_relative_eq!(series.volatility[6], 2.406_127_186_949_833, max_relative = 1e-12);
        assert_relative_eq!(series.signal[6], -0.635_278_807_508_673_7, max_relative = 1e-12);
        assert_relative_eq!(series.signal[9], -0.750_155_159_781_05, max_relative = 1e-12);
    }

    #[test]
    fn test_input_not_mutated() {
        let prices = vec![101.5, 99.25, 102.0, 103.75, 100.5, 104.0, 105.25];
        let before = prices.clone();
        let _ = momentum(&prices, &EwmaCrossoverConfig::default()).unwrap();
        assert_eq!(prices, before);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = momentum(&[], &EwmaCrossoverConfig::default());
        assert!(matches!(result, Err(MomentumError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_parameters_rejected() {
        let config = EwmaCrossoverConfig {
            vol_look_back: 0,
            ..Default::default()
        };
        let err = momentum(&ramp(), &config).unwrap_err();
        assert!(matches!(err, MomentumError::InvalidInput(ref m) if m.contains("vol_look_back")));

        let config = EwmaCrossoverConfig {
            min_periods: 0,
            ..Default::default()
        };
        assert!(EwmaCrossoverMomentum::try_new(config).is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config = EwmaCrossoverConfig::from_json_str(r#"{"fast": 20, "adjust": true}"#).unwrap();
        assert_eq!(config.fast, 20);
        assert!(config.adjust);
        assert_eq!(config.slow, 5);
        assert_eq!(config.column, "close");

        assert!(matches!(
            EwmaCrossoverConfig::from_json_str(r#"{"slow": 0}"#),
            Err(MomentumError::InvalidInput(_))
        ));
        assert!(matches!(
            EwmaCrossoverConfig::from_json_str(r#"{"fsat": 3}"#),
            Err(MomentumError::Json(_))
        ));
        assert!(matches!(
            EwmaCrossoverConfig::from_json_str(r#"{"column": ""}"#),
            Err(MomentumError::Config(_))
        ));
    }

    #[test]
    fn test_config_from_path() {
        let path = std::env::temp_dir().join(format!("ewmom-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"vol_look_back": 8, "min_periods": 3}"#).unwrap();

        let config = EwmaCrossoverConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.vol_look_back, 8);
        assert_eq!(config.min_periods, 3);
        assert!(matches!(
            EwmaCrossoverConfig::from_path(&path),
            Err(MomentumError::Io(_))
        ));
    }

    #[test]
    fn test_config_round_trips_json() {
        let config = EwmaCrossoverConfig {
            column: "volume".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EwmaCrossoverConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_signal_trait() {
        let signal = EwmaCrossoverMomentum::default();
        assert_eq!(signal.name(), PRICE_SIGNAL_NAME);
        assert_eq!(signal.min_periods(), 5);
        assert_eq!(signal.input_column(), "close");

        let value = signal.evaluate(&ramp()).unwrap();
        assert_eq!(value as f32, signal.compute(&ramp()).unwrap());
        assert_eq!(signal.evaluate_series(&ramp()).unwrap().len(), 10);
    }

    #[test]
    fn test_volume_signal() {
        let signal = EwmaCrossoverMomentum::volume(EwmaCrossoverConfig::default());
        assert_eq!(signal.name(), VOLUME_SIGNAL_NAME);
        assert_eq!(signal.input_column(), "volume");
        assert_eq!(signal.config().fast, 10);
    }

    #[test]
    fn test_score_market_data() {
        let epoch = Date::from_ymd_opt(1970, 1, 1).unwrap();
        let start = Date::from_ymd_opt(2024, 3, 1).unwrap();
        let base = start.signed_duration_since(epoch).num_days() as i32;

        let n = 10;
        let mut symbols = Vec::with_capacity(2 * n);
        let mut days = Vec::with_capacity(2 * n);
        let mut closes = Vec::with_capacity(2 * n);
        for i in 0..n {
            symbols.extend(["UP", "DOWN"]);
            days.extend([base + i as i32, base + i as i32]);
            closes.extend([1.0 + i as f64, 10.0 - i as f64]);
        }

        let mut df = df! {
            "symbol" => symbols,
            "close" => closes,
        }
        .unwrap();
        let dates = Series::new("date".into(), days)
            .cast(&DataType::Date)
            .unwrap();
        df.with_column(dates).unwrap();

        let as_of = Date::from_ymd_opt(2024, 3, 31).unwrap();
        let scores = EwmaCrossoverMomentum::default()
            .score(&MarketData::new(df), as_of)
            .unwrap();

        let symbols: Vec<String> = scores
            .column("symbol")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .map(|s| s.unwrap_or_default().to_string())
            .collect();
        let values: Vec<f64> = scores
            .column("score")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();

        assert_eq!(symbols, vec!["DOWN", "UP"]);
        assert_relative_eq!(values[1], -0.724_178_204_393_494_6, max_relative = 1e-12);
        assert!(values[0] > 0.0);
    }
}
