//! Smoothing stage of the noise estimator.
//!
//! The primary smoother is a local polynomial (Savitzky–Golay) filter: a
//! polynomial of degree `polyorder` is least-squares fitted to every window of
//! `window` samples and evaluated at the window centre. The first and last
//! `window / 2` samples are taken from a single polynomial fitted to the first
//! (resp. last) full window. When the window cannot be honoured the smoother
//! falls back to a uniform moving average in "same" convolution mode.
//!
//! Window and order are hints. [`SmoothingConfig::resolve`] adapts them to the
//! length of the input so that smoothing always succeeds:
//!
//! 1. if the input is shorter than the window, the window shrinks to the
//!    largest odd number not above the length, but never below 3;
//! 2. an even window is bumped to the next odd number;
//! 3. the window is clamped to the input length (3 for an empty input);
//! 4. the polynomial order is clamped to `window - 1`.
//!
//! Steps 1 and 3 conflict for inputs shorter than 3. The length clamp wins,
//! and such windows always route to the moving average.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_WINDOW: usize = 11;
pub const DEFAULT_POLYORDER: usize = 2;

const MIN_WINDOW: usize = 3;
const NORM_EPSILON: f64 = 1e-10;

/// Smoothing algorithm requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmoothingMethod {
    #[default]
    LocalPolynomial,
    MovingAverage,
}

impl fmt::Display for SmoothingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmoothingMethod::LocalPolynomial => write!(f, "local-polynomial"),
            SmoothingMethod::MovingAverage => write!(f, "moving-average"),
        }
    }
}

/// Requested smoothing parameters. These are hints, see [`SmoothingConfig::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SmoothingConfig {
    pub method: SmoothingMethod,
    pub window: usize,
    pub polyorder: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            method: SmoothingMethod::LocalPolynomial,
            window: DEFAULT_WINDOW,
            polyorder: DEFAULT_POLYORDER,
        }
    }
}

/// The smoothing actually applied to an input of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppliedSmoothing {
    pub method: SmoothingMethod,
    pub window: usize,
    pub polyorder: usize,
}

/// Adapts a requested window to an input of `len` samples.
///
/// An odd window that already fits the input is returned unchanged.
///
/// # Examples
///
/// ```
/// use station_noise::adapt_window;
///
/// assert_eq!(adapt_window(100, 11), 11);
/// assert_eq!(adapt_window(100, 10), 11);
/// assert_eq!(adapt_window(10, 11), 9);
/// assert_eq!(adapt_window(2, 11), 2);
/// assert_eq!(adapt_window(0, 11), 3);
/// ```
pub fn adapt_window(len: usize, window: usize) -> usize {
    if len == 0 {
        return MIN_WINDOW;
    }
    let mut window = window;
    if len < window {
        let largest_odd = if len % 2 == 1 { len } else { len - 1 };
        window = largest_odd.max(MIN_WINDOW);
    }
    if window % 2 == 0 {
        window += 1;
    }
    window.min(len)
}

impl SmoothingConfig {
    pub fn new(method: SmoothingMethod, window: usize, polyorder: usize) -> Self {
        Self {
            method,
            window,
            polyorder,
        }
    }

    /// Resolves the requested parameters against an input of `len` samples.
    pub fn resolve(&self, len: usize) -> AppliedSmoothing {
        let window = adapt_window(len, self.window);
        let polyorder = self.polyorder.min(window.saturating_sub(1));
        let method = match self.method {
            SmoothingMethod::LocalPolynomial if len > 0 && len >= window && window % 2 == 1 => {
                SmoothingMethod::LocalPolynomial
            }
            _ => SmoothingMethod::MovingAverage,
        };
        if method != self.method {
            debug!(
                "Falling back to a moving average (window {}) for {} samples",
                window, len
            );
        }
        AppliedSmoothing {
            method,
            window,
            polyorder,
        }
    }
}

/// Smooths `values` with the given configuration. The output has the same length as the input.
pub fn smooth(values: &[f64], config: &SmoothingConfig) -> Vec<f64> {
    smooth_resolved(values, config.resolve(values.len())).0
}

/// Applies resolved smoothing and returns it with the smoothing actually used.
/// A local-polynomial filter that cannot be built is reported as a moving average.
pub(crate) fn smooth_resolved(
    values: &[f64],
    applied: AppliedSmoothing,
) -> (Vec<f64>, AppliedSmoothing) {
    if applied.method == SmoothingMethod::LocalPolynomial {
        let filtered = LocalPolynomialFilter::new(applied.window, applied.polyorder)
            .and_then(|filter| filter.apply(values));
        if let Some(smoothed) = filtered {
            return (smoothed, applied);
        }
        debug!(
            "No local polynomial for window {} and order {}, using a moving average",
            applied.window, applied.polyorder
        );
    }
    let applied = AppliedSmoothing {
        method: SmoothingMethod::MovingAverage,
        ..applied
    };
    (moving_average(values, applied.window), applied)
}

/// Uniform moving average of length `window`, "same" convolution mode.
///
/// Samples outside the input count as zero, so the first and last few outputs
/// are biased toward zero.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    if n == 0 || window == 0 {
        return values.to_vec();
    }
    let weight = 1.0 / window as f64;
    let offset = (window - 1) / 2;
    (0..n)
        .map(|i| {
            let centre = i + offset;
            let lo = centre.saturating_sub(window - 1);
            let hi = centre.min(n - 1);
            values[lo..=hi].iter().sum::<f64>() * weight
        })
        .collect()
}

/// Savitzky–Golay filter with precomputed weights for one window/order pair.
#[derive(Debug, Clone)]
pub struct LocalPolynomialFilter {
    window: usize,
    polyorder: usize,
    interior: Vec<f64>,
    leading: Vec<Vec<f64>>,
    trailing: Vec<Vec<f64>>,
}

impl LocalPolynomialFilter {
    /// Builds the filter. Returns `None` unless `window` is odd and `polyorder < window`.
    pub fn new(window: usize, polyorder: usize) -> Option<Self> {
        if window % 2 == 0 || polyorder >= window {
            return None;
        }
        let half = window / 2;
        let scale = (half as f64).max(1.0);
        let positions: Vec<f64> = (0..window)
            .map(|k| (k as f64 - half as f64) / scale)
            .collect();
        let basis = orthonormal_basis(&positions, polyorder + 1)?;

        let interior = fit_weights(&basis, half);
        let leading = (0..half).map(|i| fit_weights(&basis, i)).collect();
        let trailing = (0..half)
            .map(|i| fit_weights(&basis, half + 1 + i))
            .collect();
        Some(Self {
            window,
            polyorder,
            interior,
            leading,
            trailing,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn polyorder(&self) -> usize {
        self.polyorder
    }

    /// Weights applied to the centred window for interior samples.
    pub fn coefficients(&self) -> &[f64] {
        &self.interior
    }

    /// Smooths `data`, or returns `None` when it is shorter than the window.
    pub fn apply(&self, data: &[f64]) -> Option<Vec<f64>> {
        let n = data.len();
        let w = self.window;
        if n < w {
            return None;
        }
        let half = w / 2;
        let dot = |weights: &[f64], samples: &[f64]| -> f64 {
            weights.iter().zip(samples).map(|(c, x)| c * x).sum()
        };

        let mut output = Vec::with_capacity(n);
        for weights in &self.leading {
            output.push(dot(weights, &data[..w]));
        }
        for i in half..n - half {
            output.push(dot(&self.interior, &data[i - half..=i + half]));
        }
        for weights in &self.trailing {
            output.push(dot(weights, &data[n - w..]));
        }
        Some(output)
    }
}

/// Least-squares weights that evaluate the fit of a block at sample `target`.
///
/// The fit is a projection onto polynomials orthonormal over the block, which
/// stays well conditioned at high orders.
fn fit_weights(basis: &[Vec<f64>], target: usize) -> Vec<f64> {
    let window = basis.first().map_or(0, Vec::len);
    (0..window)
        .map(|i| basis.iter().map(|q| q[i] * q[target]).sum())
        .collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Discrete orthonormal polynomials of degree `0..terms` sampled at `positions`.
///
/// Degree `k` is `u * q[k - 1]` orthogonalised twice against every lower
/// degree. `None` if a degree vanishes, i.e. `terms > positions.len()`.
fn orthonormal_basis(positions: &[f64], terms: usize) -> Option<Vec<Vec<f64>>> {
    let mut basis: Vec<Vec<f64>> = Vec::with_capacity(terms);
    for _ in 0..terms {
        let mut next: Vec<f64> = match basis.last() {
            Some(prev) => prev.iter().zip(positions).map(|(q, u)| q * u).collect(),
            None => vec![1.0; positions.len()],
        };
        for _ in 0..2 {
            for q in &basis {
                let projection = dot(&next, q);
                for (v, qi) in next.iter_mut().zip(q) {
                    *v -= projection * qi;
                }
            }
        }
        let norm = dot(&next, &next).sqrt();
        if norm < NORM_EPSILON {
            return None;
        }
        basis.push(next.into_iter().map(|v| v / norm).collect());
    }
    Some(basis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_adapt_window_keeps_valid_odd_window() {
        for len in [11, 12, 50, 1000] {
            assert_eq!(adapt_window(len, 11), 11);
            assert_eq!(adapt_window(len, adapt_window(len, 11)), 11);
        }
        assert_eq!(adapt_window(7, 7), 7);
    }

    #[test]
    fn test_adapt_window_short_inputs() {
        assert_eq!(adapt_window(10, 11), 9);
        assert_eq!(adapt_window(9, 11), 9);
        assert_eq!(adapt_window(4, 11), 3);
        assert_eq!(adapt_window(3, 11), 3);
        assert_eq!(adapt_window(2, 11), 2);
        assert_eq!(adapt_window(1, 11), 1);
        assert_eq!(adapt_window(0, 11), 3);
    }

    #[test]
    fn test_adapt_window_zero_and_even_requests() {
        assert_eq!(adapt_window(20, 0), 1);
        assert_eq!(adapt_window(20, 4), 5);
    }

    #[test]
    fn test_resolve_clamps_polyorder() {
        let config = SmoothingConfig::new(SmoothingMethod::LocalPolynomial, 5, 9);
        let applied = config.resolve(100);
        assert_eq!(applied.window, 5);
        assert_eq!(applied.polyorder, 4);
        assert_eq!(applied.method, SmoothingMethod::LocalPolynomial);
    }

    #[test]
    fn test_resolve_length_two_falls_back_to_moving_average() {
        let applied = SmoothingConfig::default().resolve(2);
        assert_eq!(applied.window, 2);
        assert_eq!(applied.polyorder, 1);
        assert_eq!(applied.method, SmoothingMethod::MovingAverage);
    }

    #[test]
    fn test_resolve_respects_requested_moving_average() {
        let config = SmoothingConfig::new(SmoothingMethod::MovingAverage, 11, 2);
        assert_eq!(config.resolve(500).method, SmoothingMethod::MovingAverage);
    }

    #[test]
    fn test_coefficients_match_classic_table() {
        // 5-point quadratic: (-3, 12, 17, 12, -3) / 35
        let filter = LocalPolynomialFilter::new(5, 2).unwrap();
        let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|c| c / 35.0);
        for (c, e) in filter.coefficients().iter().zip(expected) {
            assert_abs_diff_eq!(*c, e, epsilon = 1e-12);
        }
        let sum: f64 = filter.coefficients().iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_even_window_and_high_order() {
        assert!(LocalPolynomialFilter::new(4, 2).is_none());
        assert!(LocalPolynomialFilter::new(5, 5).is_none());
        assert!(LocalPolynomialFilter::new(5, 2).unwrap().apply(&[1.0; 4]).is_none());
    }

    #[test]
    fn test_quadratic_is_reproduced_including_edges() {
        let data: Vec<f64> = (0..30).map(|i| 0.5 * (i * i) as f64 - 3.0 * i as f64 + 2.0).collect();
        let filter = LocalPolynomialFilter::new(11, 2).unwrap();
        let smoothed = filter.apply(&data).unwrap();
        assert_eq!(smoothed.len(), data.len());
        for (s, d) in smoothed.iter().zip(&data) {
            assert_abs_diff_eq!(*s, *d, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_high_orders_still_use_local_polynomial() {
        let ramp: Vec<f64> = (0..200).map(|i| 0.25 * i as f64 - 7.0).collect();
        for (window, polyorder) in [(31, 20), (41, 30), (51, 30), (101, 50), (101, 100)] {
            let config = SmoothingConfig::new(SmoothingMethod::LocalPolynomial, window, polyorder);
            let (smoothed, applied) = smooth_resolved(&ramp, config.resolve(ramp.len()));
            assert_eq!(applied.method, SmoothingMethod::LocalPolynomial, "window {}", window);
            for (s, r) in smoothed.iter().zip(&ramp) {
                assert_abs_diff_eq!(*s, *r, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_unbuildable_filter_reports_moving_average() {
        let applied = AppliedSmoothing {
            method: SmoothingMethod::LocalPolynomial,
            window: 4,
            polyorder: 2,
        };
        let (smoothed, used) = smooth_resolved(&[1.0, 3.0, 5.0, 7.0, 9.0], applied);
        assert_eq!(used.method, SmoothingMethod::MovingAverage);
        assert_eq!(used.window, 4);
        assert_eq!(smoothed.len(), 5);
    }

    #[test]
    fn test_window_one_is_identity() {
        let data = [3.0, -1.0, 4.0];
        let filter = LocalPolynomialFilter::new(1, 0).unwrap();
        assert_eq!(filter.apply(&data).unwrap(), data.to_vec());
    }

    #[test]
    fn test_moving_average_same_mode_edges() {
        let data = [3.0, 3.0, 3.0, 3.0, 3.0];
        let smoothed = moving_average(&data, 3);
        assert_abs_diff_eq!(smoothed[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(smoothed[2], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(smoothed[4], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moving_average_even_window_uses_numpy_alignment() {
        // np.convolve([1, 3], [0.5, 0.5], 'same') == [0.5, 2.0]
        assert_eq!(moving_average(&[1.0, 3.0], 2), vec![0.5, 2.0]);
    }

    #[test]
    fn test_smooth_empty_input() {
        assert!(smooth(&[], &SmoothingConfig::default()).is_empty());
    }

    #[test]
    fn test_smooth_does_not_panic_on_nan() {
        let mut data = vec![1.0; 20];
        data[7] = f64::NAN;
        let smoothed = smooth(&data, &SmoothingConfig::default());
        assert_eq!(smoothed.len(), 20);
        assert!(smoothed[7].is_nan());
        assert_abs_diff_eq!(smoothed[19], 1.0, epsilon = 1e-9);
    }
}
