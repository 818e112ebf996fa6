//! Decomposition stage: splits the variance of a series into an implied signal
//! part (explained by the smoother) and a noise part (the residual).

use crate::noise::smoother::{
    smooth_resolved, AppliedSmoothing, SmoothingConfig, SmoothingMethod, DEFAULT_POLYORDER,
    DEFAULT_WINDOW,
};
use crate::stats::moments::population_variance;
use bon::builder;
use serde::Serialize;
use std::fmt;

/// Result of a noise/signal decomposition.
///
/// Degenerate inputs never fail. They produce the sentinel values
/// `proportion_noise == 0.0` and `snr_db == f64::INFINITY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoiseEstimate {
    /// `variance_noise / variance_total`, or 0.0 when the total variance is zero.
    pub proportion_noise: f64,
    /// `10 log10(variance_signal / variance_noise)`, or +∞ when either variance is zero.
    pub snr_db: f64,
    pub variance_total: f64,
    pub variance_noise: f64,
    /// `max(0, variance_total - variance_noise)`.
    pub variance_signal: f64,
    /// The window, order and method used after adaptation to the input length.
    pub smoothing: AppliedSmoothing,
    pub smooth: Vec<f64>,
    pub resid: Vec<f64>,
}

impl NoiseEstimate {
    /// Smooths `values` and decomposes their variance.
    ///
    /// Non-finite entries do not abort the computation. They are excluded from
    /// the variances, and a series without any finite entry counts as having
    /// zero variance.
    pub fn compute(values: &[f64], config: &SmoothingConfig) -> Self {
        let (smooth, smoothing) = smooth_resolved(values, config.resolve(values.len()));
        let resid: Vec<f64> = values.iter().zip(&smooth).map(|(v, s)| v - s).collect();

        let variance_noise = population_variance(&resid).unwrap_or(0.0);
        let variance_total = population_variance(values).unwrap_or(0.0);
        let variance_signal = (variance_total - variance_noise).max(0.0);

        let proportion_noise = if variance_total > 0.0 {
            variance_noise / variance_total
        } else {
            0.0
        };
        // Both "no noise" and "no signal" report +inf.
        let snr_db = if variance_noise > 0.0 && variance_signal > 0.0 {
            10.0 * (variance_signal / variance_noise).log10()
        } else {
            f64::INFINITY
        };

        Self {
            proportion_noise,
            snr_db,
            variance_total,
            variance_noise,
            variance_signal,
            smoothing,
            smooth,
            resid,
        }
    }

    pub fn len(&self) -> usize {
        self.smooth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.smooth.is_empty()
    }
}

impl fmt::Display for NoiseEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Noise proportion (variance): {:.2}%, SNR = {:.2} dB",
            self.proportion_noise * 100.0,
            self.snr_db
        )
    }
}

/// Estimates the share of noise in `values`.
///
/// Method, window and polynomial order default to local-polynomial smoothing
/// with a window of 11 and order 2. They are adapted to short inputs instead of
/// being rejected.
///
/// # Examples
///
/// ```
/// use station_noise::{estimate_noise, SmoothingMethod};
///
/// let flat = vec![5.0; 21];
/// let estimate = estimate_noise(&flat).call();
/// assert_eq!(estimate.proportion_noise, 0.0);
/// assert!(estimate.snr_db.is_infinite());
///
/// let ramp: Vec<f64> = (1..=10).map(f64::from).collect();
/// let estimate = estimate_noise(&ramp)
///     .method(SmoothingMethod::LocalPolynomial)
///     .window(11)
///     .polyorder(2)
///     .call();
/// assert_eq!(estimate.smoothing.window, 9);
/// ```
#[builder]
pub fn estimate_noise(
    #[builder(start_fn)] values: &[f64],
    #[builder(default)] method: SmoothingMethod,
    #[builder(default = DEFAULT_WINDOW)] window: usize,
    #[builder(default = DEFAULT_POLYORDER)] polyorder: usize,
) -> NoiseEstimate {
    NoiseEstimate::compute(values, &SmoothingConfig::new(method, window, polyorder))
}
