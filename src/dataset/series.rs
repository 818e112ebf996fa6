use crate::noise::estimate::NoiseEstimate;
use crate::noise::smoother::SmoothingConfig;
use crate::types::variable::Variable;
use chrono::NaiveDate;
use serde::Serialize;

/// Default number of points kept when thinning a series for plotting.
pub const DEFAULT_MAX_POINTS: usize = 2000;

/// A dated sequence of finite values of one variable, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub variable: Variable,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn estimate_noise(&self, config: &SmoothingConfig) -> NoiseEstimate {
        NoiseEstimate::compute(&self.values, config)
    }

    /// Evenly thins the series to at most `max_points`, always keeping both ends.
    pub fn decimate(&self, max_points: usize) -> TimeSeries {
        let indices = decimate_indices(self.len(), max_points);
        TimeSeries {
            variable: self.variable,
            dates: indices.iter().map(|&i| self.dates[i]).collect(),
            values: indices.iter().map(|&i| self.values[i]).collect(),
        }
    }
}

/// Indices `floor(i * (n - 1) / (max_points - 1))` for `i in 0..max_points`,
/// or every index when `n <= max_points`.
///
/// # Examples
///
/// ```
/// use station_noise::dataset::decimate_indices;
///
/// assert_eq!(decimate_indices(10, 4), vec![0, 3, 6, 9]);
/// assert_eq!(decimate_indices(3, 10), vec![0, 1, 2]);
/// ```
pub fn decimate_indices(n: usize, max_points: usize) -> Vec<usize> {
    if n <= max_points {
        return (0..n).collect();
    }
    match max_points {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let step = (n - 1) as f64 / (max_points - 1) as f64;
            let mut indices: Vec<usize> = (0..max_points)
                .map(|i| ((i as f64 * step) as usize).min(n - 1))
                .collect();
            indices[max_points - 1] = n - 1;
            indices
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        TimeSeries {
            variable: Variable::Pres,
            dates: (0..n as u64)
                .map(|i| start + chrono::Days::new(i))
                .collect(),
            values: (0..n).map(|i| i as f64).collect(),
        }
    }

    #[test]
    fn test_decimate_long_series() {
        let thinned = series(10_000).decimate(DEFAULT_MAX_POINTS);
        assert_eq!(thinned.len(), DEFAULT_MAX_POINTS);
        assert_eq!(thinned.values[0], 0.0);
        assert_eq!(thinned.values[DEFAULT_MAX_POINTS - 1], 9999.0);
        assert_eq!(thinned.dates.len(), thinned.values.len());
        assert!(thinned.values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_short_series_untouched() {
        let s = series(25);
        assert_eq!(s.decimate(2000), s);
        assert!(series(5).decimate(0).is_empty());
        assert_eq!(series(5).decimate(1).values, vec![0.0]);
    }

    #[test]
    fn test_estimate_noise_on_series() {
        let estimate = series(30).estimate_noise(&SmoothingConfig::default());
        assert_eq!(estimate.len(), 30);
        assert!(estimate.proportion_noise < 1e-12);
    }
}
