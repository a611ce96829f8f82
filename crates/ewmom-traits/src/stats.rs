//! Exponentially weighted statistics.
//!
//! This module provides the EWM mean, variance and standard deviation kernels
//! that every ewmom signal is built from. The recursions reproduce the
//! conventions of the common dataframe EWM implementation bit for bit:
//!
//! - `alpha = 2 / (span + 1)`
//! - `adjust = true` weights observation `j` at index `i` by `(1 - alpha)^(i - j)`
//!   and normalizes by the sum of weights (finite-sample correction)
//! - `adjust = false` runs the infinite-history recursion
//!   `y[i] = (1 - alpha) * y[i - 1] + alpha * x[i]`
//! - the variance is debiased by `sum_wt^2 / (sum_wt^2 - sum_wt2)` in both
//!   `adjust` modes unless `bias` is requested
//! - NaN inputs are missing observations and never count towards `min_periods`

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{MomentumError, Result};

/// Parameters shared by all exponentially weighted kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EwmOptions {
    /// Decay span, converted to `alpha = 2 / (span + 1)`. Must be at least 1.
    pub span: usize,

    /// Minimum number of non-NaN observations before an output is defined.
    /// Must be at least 1.
    pub min_periods: usize,

    /// Use finite-sample (bias-adjusted) weights instead of the recursion.
    pub adjust: bool,

    /// Skip missing observations when decaying weights.
    ///
    /// With `false`, a NaN still ages the weights of earlier observations
    /// (absolute positions matter). With `true`, weights only decay on
    /// observed values.
    pub ignore_na: bool,
}

impl EwmOptions {
    /// Create options for the given span with `min_periods = 1`,
    /// `adjust = false` and `ignore_na = false`.
    #[must_use]
    pub const fn new(span: usize) -> Self {
        Self {
            span,
            min_periods: 1,
            adjust: false,
            ignore_na: false,
        }
    }

    /// Set the minimum number of observations.
    #[must_use]
    pub const fn with_min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = min_periods;
        self
    }

    /// Set the weighting mode.
    #[must_use]
    pub const fn with_adjust(mut self, adjust: bool) -> Self {
        self.adjust = adjust;
        self
    }

    /// Set the missing-value mode.
    #[must_use]
    pub const fn with_ignore_na(mut self, ignore_na: bool) -> Self {
        self.ignore_na = ignore_na;
        self
    }

    /// Smoothing factor derived from the span.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }

    /// Weight given to each new observation.
    fn new_weight(&self) -> f64 {
        if self.adjust { 1.0 } else { self.alpha() }
    }

    /// Check that span and `min_periods` are positive.
    ///
    /// # Errors
    ///
    /// Returns [`MomentumError::InvalidInput`] if either value is zero.
    pub fn validate(&self) -> Result<()> {
        if self.span == 0 {
            return Err(MomentumError::InvalidInput(
                "span must be a positive integer".to_string(),
            ));
        }
        if self.min_periods == 0 {
            return Err(MomentumError::InvalidInput(
                "min_periods must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_input(values: &[f64], options: &EwmOptions) -> Result<()> {
    options.validate()?;
    if values.is_empty() {
        return Err(MomentumError::InvalidInput(
            "observation sequence must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Exponentially weighted moving average.
///
/// Returns an array aligned with `values`. Positions where fewer than
/// `min_periods` observations have been seen are NaN.
///
/// # Errors
///
/// Returns [`MomentumError::InvalidInput`] for empty input or invalid options.
///
/// # Examples
///
/// ```
/// use ewmom_traits::stats::{EwmOptions, ewm_mean};
///
/// let mean = ewm_mean(&[10.0, 11.5, 9.75], &EwmOptions::new(3)).unwrap();
/// assert_eq!(mean.to_vec(), vec![10.0, 10.75, 10.25]);
/// ```
pub fn ewm_mean(values: &[f64], options: &EwmOptions) -> Result<Array1<f64>> {
    check_input(values, options)?;

    let old_wt_factor = 1.0 - options.alpha();
    let new_wt = options.new_weight();

    let mut out = Array1::from_elem(values.len(), f64::NAN);
    let mut weighted = values[0];
    let mut nobs = usize::from(!weighted.is_nan());
    let mut old_wt = 1.0;

    if nobs >= options.min_periods {
        out[0] = weighted;
    }

    for (i, &cur) in values.iter().enumerate().skip(1) {
        let is_observation = !cur.is_nan();
        nobs += usize::from(is_observation);

        if !weighted.is_nan() {
            if is_observation || !options.ignore_na {
                old_wt *= old_wt_factor;
                if is_observation {
                    // Equal values are skipped so constant series stay exactly constant.
                    if weighted != cur {
                        weighted = (old_wt * weighted + new_wt * cur) / (old_wt + new_wt);
                    }
                    if options.adjust {
                        old_wt += new_wt;
                    } else {
                        old_wt = 1.0;
                    }
                }
            }
        } else if is_observation {
            weighted = cur;
        }

        if nobs >= options.min_periods {
            out[i] = weighted;
        }
    }

    Ok(out)
}

/// Exponentially weighted moving variance.
///
/// With `bias = false` the weighted variance is scaled by
/// `sum_wt^2 / (sum_wt^2 - sum_wt2)`; a non-positive denominator yields NaN.
/// The first position is NaN, or `0.0` with `bias = true` when `min_periods`
/// is already met there.
///
/// # Errors
///
/// Returns [`MomentumError::InvalidInput`] for empty input or invalid options.
pub fn ewm_var(values: &[f64], options: &EwmOptions, bias: bool) -> Result<Array1<f64>> {
    check_input(values, options)?;

    let old_wt_factor = 1.0 - options.alpha();
    let new_wt = options.new_weight();

    let mut out = Array1::from_elem(values.len(), f64::NAN);
    let mut mean = values[0];
    let mut nobs = usize::from(!mean.is_nan());
    let mut cov = 0.0;
    let mut sum_wt = 1.0;
    let mut sum_wt2 = 1.0;
    let mut old_wt = 1.0;

    if bias && nobs >= options.min_periods {
        out[0] = 0.0;
    }

    for (i, &cur) in values.iter().enumerate().skip(1) {
        let is_observation = !cur.is_nan();
        nobs += usize::from(is_observation);

        if !mean.is_nan() {
            if is_observation || !options.ignore_na {
                sum_wt *= old_wt_factor;
                sum_wt2 *= old_wt_factor * old_wt_factor;
                old_wt *= old_wt_factor;

                if is_observation {
                    let old_mean = mean;
                    if mean != cur {
                        mean = (old_wt * old_mean + new_wt * cur) / (old_wt + new_wt);
                    }
                    cov = (old_wt * (cov + (old_mean - mean) * (old_mean - mean))
                        + new_wt * ((cur - mean) * (cur - mean)))
                        / (old_wt + new_wt);
                    sum_wt += new_wt;
                    sum_wt2 += new_wt * new_wt;
                    old_wt += new_wt;

                    if !options.adjust {
                        sum_wt /= old_wt;
                        sum_wt2 /= old_wt * old_wt;
                        old_wt = 1.0;
                    }
                }
            }
        } else if is_observation {
            mean = cur;
        }

        if nobs >= options.min_periods {
            out[i] = if bias {
                cov
            } else {
                let numerator = sum_wt * sum_wt;
                let denominator = numerator - sum_wt2;
                if denominator > 0.0 {
                    (numerator / denominator) * cov
                } else {
                    f64::NAN
                }
            };
        }
    }

    Ok(out)
}

/// Exponentially weighted moving standard deviation.
///
/// Square root of [`ewm_var`]. Negative variances produced by rounding are
/// clamped to zero; NaN stays NaN.
///
/// # Errors
///
/// Returns [`MomentumError::InvalidInput`] for empty input or invalid options.
pub fn ewm_std(values: &[f64], options: &EwmOptions, bias: bool) -> Result<Array1<f64>> {
    Ok(ewm_var(values, options, bias)?.mapv(|v| if v < 0.0 { 0.0 } else { v.sqrt() }))
}
