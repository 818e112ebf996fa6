//! Moment-based statistics.
//!
//! [`population_variance`] filters non-finite entries itself. The other
//! functions expect an already cleaned slice (see [`finite_values`]).

/// Copies the finite entries of `values`.
pub fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divisor `n`) of the finite entries of `values`.
///
/// NaN and infinite entries are skipped rather than propagated. Returns `None`
/// when no finite entry remains.
///
/// # Examples
///
/// ```
/// use station_noise::stats::population_variance;
///
/// assert_eq!(population_variance(&[1.0, f64::NAN, 3.0]), Some(1.0));
/// assert_eq!(population_variance(&[f64::NAN]), None);
/// ```
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let (count, sum) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0usize, 0.0), |(c, s), v| (c + 1, s + v));
    if count == 0 {
        return None;
    }
    let mean = sum / count as f64;
    let squares: f64 = values
        .iter()
        .filter(|v| v.is_finite())
        .map(|v| (v - mean).powi(2))
        .sum();
    Some(squares / count as f64)
}

/// Sample standard deviation (divisor `n - 1`). `None` for fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

/// Central moments m2, m3, m4 (divisor `n`).
fn central_moments(values: &[f64]) -> Option<(f64, f64, f64)> {
    let m = mean(values)?;
    let n = values.len() as f64;
    let (m2, m3, m4) = values.iter().fold((0.0, 0.0, 0.0), |(a, b, c), v| {
        let d = v - m;
        let d2 = d * d;
        (a + d2, b + d2 * d, c + d2 * d2)
    });
    Some((m2 / n, m3 / n, m4 / n))
}

/// Biased sample skewness `m3 / m2^1.5`. `None` when the variance is zero.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let (m2, m3, _) = central_moments(values)?;
    if m2 <= 0.0 {
        return None;
    }
    Some(m3 / m2.powf(1.5))
}

/// Biased excess (Fisher) kurtosis `m4 / m2^2 - 3`. `None` when the variance is zero.
pub fn kurtosis(values: &[f64]) -> Option<f64> {
    let (m2, _, m4) = central_moments(values)?;
    if m2 <= 0.0 {
        return None;
    }
    Some(m4 / (m2 * m2) - 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_population_variance_ignores_non_finite() {
        let values = [2.0, 4.0, f64::NAN, 4.0, f64::INFINITY, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(population_variance(&values).unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(population_variance(&[]), None);
        assert_eq!(population_variance(&[f64::NAN, f64::NEG_INFINITY]), None);
        assert_eq!(population_variance(&[3.0; 5]), Some(0.0));
    }

    #[test]
    fn test_sample_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // population variance 4.0 over 8 samples -> sample variance 32 / 7
        assert_abs_diff_eq!(sample_std(&values).unwrap(), (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(sample_std(&[1.0]), None);
    }

    #[test]
    fn test_symmetric_data_has_zero_skew() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(skewness(&values).unwrap(), 0.0, epsilon = 1e-12);
        // uniform 1..=5: m2 = 2, m4 = 6.8 -> 6.8 / 4 - 3
        assert_abs_diff_eq!(kurtosis(&values).unwrap(), -1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_right_tail_has_positive_skew() {
        let values = [1.0, 1.0, 1.0, 1.0, 10.0];
        assert!(skewness(&values).unwrap() > 1.0);
    }

    #[test]
    fn test_constant_data_has_undefined_shape() {
        assert_eq!(skewness(&[2.0; 4]), None);
        assert_eq!(kurtosis(&[2.0; 4]), None);
        assert_eq!(mean(&[]), None);
    }
}
